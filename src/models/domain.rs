use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// Candidate profile presented in a swipe session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub age: u8,
    #[serde(default)]
    pub location: String,
    pub profession: String,
    #[serde(alias = "company")]
    pub organization: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(rename = "onlineStatus", alias = "online_status", default)]
    pub online_status: PresenceStatus,
    #[validate(range(max = 100))]
    #[serde(rename = "matchScore", alias = "match_score")]
    pub match_score: u8,
}

/// Presence indicator shown on a profile card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresenceStatus {
    #[serde(rename = "online")]
    Online,
    #[serde(rename = "recently")]
    RecentlyActive,
    #[default]
    #[serde(rename = "offline")]
    Offline,
}

/// Matching domain, selecting which profession taxonomy applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchingDomain {
    Developer,
    Doctor,
    Founder,
}

impl MatchingDomain {
    pub const ALL: [MatchingDomain; 3] = [
        MatchingDomain::Developer,
        MatchingDomain::Doctor,
        MatchingDomain::Founder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchingDomain::Developer => "developer",
            MatchingDomain::Doctor => "doctor",
            MatchingDomain::Founder => "founder",
        }
    }
}

impl fmt::Display for MatchingDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchingDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "developer" => Ok(MatchingDomain::Developer),
            "doctor" => Ok(MatchingDomain::Doctor),
            "founder" => Ok(MatchingDomain::Founder),
            other => Err(format!("unknown matching domain: {}", other)),
        }
    }
}

/// Browsing lifecycle of a swipe session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Active,
    Exhausted,
}

/// Emitted once per like.
///
/// A like always counts as mutual: there is no second party to consult yet,
/// so this stands in for a future reciprocal-matching service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    #[serde(rename = "eventId")]
    pub event_id: Uuid,
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl MatchEvent {
    pub fn new(candidate_id: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            candidate_id: candidate_id.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Author of a conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    #[serde(rename = "self")]
    Me,
    Candidate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn is_mine(&self) -> bool {
        self.sender == Sender::Me
    }
}

/// Append-only message log with one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationThread {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    messages: Vec<Message>,
}

impl ConversationThread {
    pub fn new(candidate_id: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            messages,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub(crate) fn push(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }
}

/// Running tallies for the activity sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityStats {
    pub likes_sent: u32,
    pub passes: u32,
    pub matches: u32,
    pub conversations: u32,
    pub messages_sent: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_parse() {
        assert_eq!("Doctor".parse::<MatchingDomain>(), Ok(MatchingDomain::Doctor));
        assert_eq!(" founder ".parse::<MatchingDomain>(), Ok(MatchingDomain::Founder));
        assert!("lawyer".parse::<MatchingDomain>().is_err());
    }

    #[test]
    fn test_presence_serde_names() {
        let json = serde_json::to_string(&PresenceStatus::RecentlyActive).unwrap();
        assert_eq!(json, "\"recently\"");
        let parsed: PresenceStatus = serde_json::from_str("\"online\"").unwrap();
        assert_eq!(parsed, PresenceStatus::Online);
    }

    #[test]
    fn test_score_validation() {
        let mut profile = Profile {
            id: "1".to_string(),
            name: "Sarah Chen".to_string(),
            age: 28,
            location: "San Francisco, CA".to_string(),
            profession: "Full Stack Developer".to_string(),
            organization: "Google".to_string(),
            bio: String::new(),
            interests: vec![],
            photos: vec![],
            online_status: PresenceStatus::Online,
            match_score: 94,
        };
        assert!(profile.validate().is_ok());

        profile.match_score = 101;
        assert!(profile.validate().is_err());
    }
}
