//! Shared data model for the UCUM fixture generator.

pub mod error;
pub mod test_case;

pub use error::{FixtureError, Result};
pub use test_case::TestCase;
