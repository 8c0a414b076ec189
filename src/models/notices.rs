use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::models::domain::{MatchEvent, MatchingDomain};

/// Caller-visible outcome of an action, rendered by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    Matched(MatchEvent),
    Passed {
        candidate_id: String,
    },
    ConversationOpened {
        candidate_id: String,
        created: bool,
    },
    NoMoreCandidates {
        domain: MatchingDomain,
    },
}

/// Actions the engine declined without touching any state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("stale candidate {requested} (presented: {})", .current.as_deref().unwrap_or("none"))]
    StaleCandidate {
        requested: String,
        current: Option<String>,
    },

    #[error("no more candidates")]
    ExhaustedSession,

    #[error("empty message for {candidate_id}")]
    EmptyMessageText { candidate_id: String },

    #[error("no conversation with {candidate_id}")]
    NoConversation { candidate_id: String },
}

impl Rejection {
    /// Notice to re-surface for this rejection, if any
    pub fn notice(&self, domain: MatchingDomain) -> Option<Notice> {
        match self {
            Rejection::ExhaustedSession => Some(Notice::NoMoreCandidates { domain }),
            _ => None,
        }
    }
}
