//! Pure audit evaluation (no IO).
//!
//! Input: a supplier table loaded elsewhere.
//! Output: exceptions + verdict + summary data.

#![forbid(unsafe_code)]

pub mod checks;
pub mod fingerprint;
pub mod model;
pub mod policy;
pub mod report;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
