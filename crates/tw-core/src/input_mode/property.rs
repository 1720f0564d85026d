//! IBus engine properties as plain data.
//!
//! Engines expose their input mode through properties whose key starts with
//! `InputMode`. Each engine family uses a different property type:
//! - ibus-libpinyin: `Normal`, mode is the symbol (or label)
//! - ibus-hangul: `Toggle`, mode is the toggle state
//! - ibus-typing-booster: `Menu` of `Radio` items, mode is the active item's key suffix

use serde::{Deserialize, Serialize};

const INPUT_MODE_PREFIX: &str = "InputMode";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    Normal {
        symbol: Option<String>,
        label: String,
    },
    Toggle {
        state: bool,
    },
    Menu {
        sub_properties: Vec<InputProperty>,
    },
    Radio {
        state: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputProperty {
    pub key: String,
    pub kind: PropertyKind,
}

impl InputProperty {
    pub fn new(key: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }

    fn is_input_mode(&self) -> bool {
        self.key.starts_with(INPUT_MODE_PREFIX)
    }

    fn state(&self) -> bool {
        match &self.kind {
            PropertyKind::Toggle { state } | PropertyKind::Radio { state } => *state,
            _ => false,
        }
    }
}

/// Property activation to send back to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyActivation {
    pub key: String,
    pub state: bool,
}

/// Reads the current input mode from an engine's properties.
///
/// Returns an empty string when no input-mode property is found.
///
/// # Examples
///
/// ```
/// use tw_core::input_mode::{current_mode, InputProperty, PropertyKind};
///
/// let props = vec![InputProperty::new(
///     "InputMode",
///     PropertyKind::Normal { symbol: Some("中".into()), label: "Chinese".into() },
/// )];
/// assert_eq!(current_mode(&props), "中");
/// ```
pub fn current_mode(props: &[InputProperty]) -> String {
    for prop in props.iter().filter(|p| p.is_input_mode()) {
        match &prop.kind {
            PropertyKind::Normal { symbol, label } => {
                return symbol.clone().unwrap_or_else(|| label.clone());
            }
            PropertyKind::Toggle { state } => return state.to_string(),
            PropertyKind::Menu { sub_properties } => return current_mode(sub_properties),
            PropertyKind::Radio { state: true } => {
                return prop.key.rsplit('.').next().unwrap_or_default().to_string();
            }
            PropertyKind::Radio { state: false } => {}
        }
    }
    String::new()
}

/// Finds the activation that switches the engine towards `mode`.
///
/// Normal and toggle properties flip their state; radio items are activated
/// when their key ends with `mode`.
pub fn activation_for(props: &[InputProperty], mode: &str) -> Option<PropertyActivation> {
    for prop in props.iter().filter(|p| p.is_input_mode()) {
        match &prop.kind {
            PropertyKind::Normal { .. } | PropertyKind::Toggle { .. } => {
                return Some(PropertyActivation {
                    key: prop.key.clone(),
                    state: !prop.state(),
                });
            }
            PropertyKind::Menu { sub_properties } => return activation_for(sub_properties, mode),
            PropertyKind::Radio { state } if prop.key.ends_with(mode) => {
                return Some(PropertyActivation {
                    key: prop.key.clone(),
                    state: !state,
                });
            }
            PropertyKind::Radio { .. } => {}
        }
    }
    None
}
