//! Pass+ eligibility engine.
//!
//! Computes the monthly family quotient of a household, evaluates the five
//! Pass+ benefits for each secondary-school child and derives the supporting
//! documents the household has to provide.

pub mod config;
pub mod error;
pub mod reference;
pub mod simulation;
pub mod telemetry;
