//! One module per simulated attack. Each exposes `run(&HeaderConfig)` returning its judgment.

pub mod clickjacking;
pub mod cors;
pub mod inline_script;
pub mod isolation;
pub mod mime_sniffing;
pub mod referrer;
