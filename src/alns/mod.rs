//! Adaptive operator control.
//!
//! Operators are drawn by roulette wheel over adaptive weights. An accepted
//! child rewards the operator that produced it; every segment the weights
//! are smoothed toward the operators' average reward.
//!
//! # References
//!
//! Ropke & Pisinger (2006), "An Adaptive Large Neighborhood Search Heuristic
//! for the Pickup and Delivery Problem with Time Windows"

mod acceptance;
mod selector;

pub use acceptance::{judge, Acceptance};
pub use selector::{AdaptiveSelector, OperatorStats};
