//! Geographic gating for submitted records.
//!
//! # Responsibility
//! - Define the bounded service region every submission is checked against.
//! - Keep distance math pure and free of persistence concerns.

pub mod fence;
