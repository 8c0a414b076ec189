// Service exports
pub mod fixtures;
pub mod sink;

pub use fixtures::{load_fixtures, Fixtures, FixtureError};
pub use sink::{ThreadSink, TracingSink};
