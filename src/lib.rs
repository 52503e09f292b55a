//! SAW Decision - Simple Additive Weighting for small decisions
//!
//! This crate ranks a fixed set of alternatives against weighted benefit/cost
//! criteria and selects the alternative with the highest normalized weighted
//! score.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
