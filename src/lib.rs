//----------------------------------------
// Root lib
//----------------------------------------
//! Demonstration of one-sided A/B testing on two Gaussian distributions.
//! The test statistic is closed-form: the gap between the two means divided
//! by the combined spread `sqrt(sd_1^2 + sd_2^2)`, with the one-sided p-value
//! taken from the standard normal survival function. Random samples are drawn
//! only to illustrate the two distributions as a histogram overlay.

/// Command-line front end
pub mod cli;
/// This module houses the public API: one full run of the demo and the
/// underlying test statistic
pub mod compute;
/// Settings file and command-line override layering
pub mod config;
/// This module contains the crate error type
pub mod error;
pub mod histogram;
pub mod parameters;
pub mod report;
pub mod sampling;
pub mod statistics;
