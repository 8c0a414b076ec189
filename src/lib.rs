//! ProConnect - profile matching and swipe session engine
//!
//! Holds a per-domain candidate roster, narrows it by profession category,
//! walks the result one candidate at a time and turns like / pass / message
//! actions into match events and conversation threads.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{MatchEngine, FilterSet, Roster, SwipeSession, ThreadStore, Action, taxonomy};
pub use crate::models::{Profile, MatchingDomain, SessionState, MatchEvent, Message, ConversationThread, Notice, Rejection};
pub use crate::services::{load_fixtures, Fixtures};
