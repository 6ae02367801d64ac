//! CLI library components for the UCUM fixture generator.

pub mod logging;
pub mod pipeline;
