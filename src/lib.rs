//! IBus Tweaker command-line application.

pub mod bootstrap;
pub mod cli;
