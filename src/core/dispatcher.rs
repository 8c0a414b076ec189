use crate::core::session::{Advance, SwipeSession};
use crate::core::threads::ThreadStore;
use crate::models::{ActivityStats, MatchEvent, MatchingDomain, Notice, Rejection};

/// User action against the presented candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Like(String),
    Pass(String),
    Message(String),
}

impl Action {
    pub fn candidate_id(&self) -> &str {
        match self {
            Action::Like(id) | Action::Pass(id) | Action::Message(id) => id,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Action::Like(_) => "like",
            Action::Pass(_) => "pass",
            Action::Message(_) => "message",
        }
    }
}

/// Interprets like/pass/message against the session's current candidate
///
/// Like and pass are terminal for the presented candidate and advance the
/// session. Message opens a thread and leaves the candidate presented.
#[derive(Debug, Clone)]
pub struct ActionDispatcher {
    domain: MatchingDomain,
    matches: Vec<MatchEvent>,
    stats: ActivityStats,
}

impl ActionDispatcher {
    pub fn new(domain: MatchingDomain) -> Self {
        Self {
            domain,
            matches: Vec::new(),
            stats: ActivityStats::default(),
        }
    }

    pub fn dispatch(
        &mut self,
        action: &Action,
        session: &mut SwipeSession,
        threads: &mut ThreadStore,
    ) -> Result<Vec<Notice>, Rejection> {
        self.ensure_presented(action, session)?;

        let candidate_id = action.candidate_id().to_string();
        let mut notices = Vec::new();

        match action {
            Action::Like(_) => {
                // Every like is a mutual match until a reciprocal-matching service exists
                let event = MatchEvent::new(candidate_id.clone());
                tracing::info!("Matched with {} ({})", candidate_id, event.event_id);

                self.stats.likes_sent += 1;
                self.stats.matches += 1;
                self.matches.push(event.clone());
                notices.push(Notice::Matched(event));

                self.advance(session, &mut notices);
            }
            Action::Pass(_) => {
                tracing::debug!("Passed on {}", candidate_id);

                self.stats.passes += 1;
                notices.push(Notice::Passed { candidate_id });

                self.advance(session, &mut notices);
            }
            Action::Message(_) => {
                let (_, created) = threads.get_or_create(&candidate_id);
                if created {
                    self.stats.conversations += 1;
                }
                tracing::debug!("Conversation with {} opened (new: {})", candidate_id, created);

                notices.push(Notice::ConversationOpened { candidate_id, created });
            }
        }

        Ok(notices)
    }

    /// Reject actions aimed at anything other than the presented candidate
    fn ensure_presented(&self, action: &Action, session: &SwipeSession) -> Result<(), Rejection> {
        let current = match session.current() {
            Some(profile) => profile,
            None => {
                tracing::debug!("Ignoring {} on exhausted {} session", action.name(), self.domain);
                return Err(Rejection::ExhaustedSession);
            }
        };

        if current.id != action.candidate_id() {
            tracing::debug!(
                "Ignoring stale {} for {} (presented: {})",
                action.name(),
                action.candidate_id(),
                current.id
            );
            return Err(Rejection::StaleCandidate {
                requested: action.candidate_id().to_string(),
                current: Some(current.id.clone()),
            });
        }

        Ok(())
    }

    fn advance(&self, session: &mut SwipeSession, notices: &mut Vec<Notice>) {
        if session.advance() == Advance::Exhausted {
            tracing::info!("No more {} candidates", self.domain);
            notices.push(Notice::NoMoreCandidates { domain: self.domain });
        }
    }

    pub(crate) fn record_sent(&mut self) {
        self.stats.messages_sent += 1;
    }

    pub fn matches(&self) -> &[MatchEvent] {
        &self.matches
    }

    pub fn stats(&self) -> ActivityStats {
        self.stats
    }
}
