//! Pure policy evaluation (no IO).
//!
//! Input: a header configuration snapshot constructed elsewhere.
//! Output: the simulated-browser verdict, the console lines it logs, plus the header text a
//! server configured this way would send.
//!
//! Both operations are total and deterministic. Neither reads anything but its argument.

#![forbid(unsafe_code)]

pub mod console;
pub mod fingerprint;
pub mod report;
pub mod rules;

mod engine;
mod headers;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
pub use headers::generate_headers;
