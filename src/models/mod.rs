// Model exports
pub mod domain;
pub mod fixtures;
pub mod notices;

pub use domain::{Profile, PresenceStatus, MatchingDomain, SessionState, MatchEvent, Sender, Message, ConversationThread, ActivityStats};
pub use fixtures::{FixtureFile, DomainFixture, SeedMessage};
pub use notices::{Notice, Rejection};
