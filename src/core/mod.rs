// Core engine exports
pub mod dispatcher;
pub mod engine;
pub mod filters;
pub mod roster;
pub mod session;
pub mod taxonomy;
pub mod threads;

pub use dispatcher::{Action, ActionDispatcher};
pub use engine::MatchEngine;
pub use filters::{apply_filters, matches_filters, FilterSet};
pub use roster::{Roster, RosterError};
pub use session::{Advance, SwipeSession};
pub use taxonomy::{is_known_category, taxonomy};
pub use threads::ThreadStore;
