//! Quote source implementations.

mod fixture;
mod yahoo;

pub use fixture::FixtureSource;
pub use yahoo::{YahooAdapter, YahooCrumb};
