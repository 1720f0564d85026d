//! IBus Tweaker Application Orchestration Layer
//!
//! This crate contains the use cases that connect the core domain to its ports:
//! clipboard capture and picking, input mode auto-switching, and settings.

pub mod clip_store;
pub mod usecases;

pub use clip_store::SharedClipHistory;
