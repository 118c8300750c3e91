//! Default values referenced from `#[serde(default = ...)]` attributes.

pub fn bool_false() -> bool {
    false
}

pub fn bool_true() -> bool {
    true
}

pub fn log_level() -> crate::types::LogLevel {
    crate::types::LogLevel::Info
}
