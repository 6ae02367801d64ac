//! Serialization of test-case fixtures.

pub mod writer;

pub use writer::{OutputMode, render, write_fixtures};
