use crate::core::{
    dispatcher::{Action, ActionDispatcher},
    filters::{apply_filters, FilterSet},
    roster::Roster,
    session::SwipeSession,
    threads::ThreadStore,
};
use crate::models::{
    ActivityStats, ConversationThread, MatchEvent, MatchingDomain, Message, Notice, Profile,
    Rejection, SessionState,
};

/// Matching session for one domain selection
///
/// Owns the roster, the active filter set and the swipe session, and routes
/// actions through the dispatcher. Construct a new engine when the user picks
/// a different matching domain.
///
/// # Flow
/// 1. Roster filtered by profession category
/// 2. Swipe session over the filtered roster
/// 3. Like / pass / message dispatched against the presented candidate
/// 4. Conversation threads opened and appended
#[derive(Debug)]
pub struct MatchEngine {
    roster: Roster,
    filters: FilterSet,
    session: SwipeSession,
    dispatcher: ActionDispatcher,
    threads: ThreadStore,
}

impl MatchEngine {
    pub fn new(roster: Roster, threads: ThreadStore) -> Self {
        let domain = roster.domain();
        let session = SwipeSession::initialize(roster.profiles().to_vec());

        tracing::info!(
            "Match engine for {} started with {} candidates",
            domain,
            roster.len()
        );

        Self {
            roster,
            filters: FilterSet::default(),
            session,
            dispatcher: ActionDispatcher::new(domain),
            threads,
        }
    }

    pub fn domain(&self) -> MatchingDomain {
        self.roster.domain()
    }

    pub fn taxonomy(&self) -> &'static [&'static str] {
        self.roster.taxonomy()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Apply a filter set and restart browsing from the top.
    ///
    /// The pointer resets even when the filter set is unchanged.
    pub fn apply_filters(&mut self, filters: FilterSet) -> SessionState {
        let unknown = filters.unknown_tags(self.taxonomy());
        if !unknown.is_empty() {
            tracing::debug!("Filter tags outside the {} taxonomy: {:?}", self.domain(), unknown);
        }

        let filtered = apply_filters(self.roster.profiles(), &filters);
        tracing::info!(
            "Applied {} filter tags: {} of {} {} candidates",
            filters.len(),
            filtered.len(),
            self.roster.len(),
            self.domain()
        );

        self.filters = filters;
        self.session = SwipeSession::initialize(filtered);
        self.session.state()
    }

    pub fn session(&self) -> &SwipeSession {
        &self.session
    }

    pub fn current(&self) -> Option<&Profile> {
        self.session.current()
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn like(&mut self, candidate_id: &str) -> Result<Vec<Notice>, Rejection> {
        self.dispatch(Action::Like(candidate_id.to_string()))
    }

    pub fn pass(&mut self, candidate_id: &str) -> Result<Vec<Notice>, Rejection> {
        self.dispatch(Action::Pass(candidate_id.to_string()))
    }

    pub fn message(&mut self, candidate_id: &str) -> Result<Vec<Notice>, Rejection> {
        self.dispatch(Action::Message(candidate_id.to_string()))
    }

    pub fn dispatch(&mut self, action: Action) -> Result<Vec<Notice>, Rejection> {
        self.dispatcher
            .dispatch(&action, &mut self.session, &mut self.threads)
    }

    /// Send a message in a thread opened by the message action
    ///
    /// The candidate need not be presented any more, but a thread must exist.
    pub fn send_message(&mut self, candidate_id: &str, text: &str) -> Result<&Message, Rejection> {
        let message = self.threads.append_self_message(candidate_id, text)?;
        self.dispatcher.record_sent();
        Ok(message)
    }

    pub fn thread(&self, candidate_id: &str) -> Option<&ConversationThread> {
        self.threads.get(candidate_id)
    }

    pub fn threads(&self) -> &ThreadStore {
        &self.threads
    }

    pub fn matches(&self) -> &[MatchEvent] {
        self.dispatcher.matches()
    }

    pub fn stats(&self) -> ActivityStats {
        self.dispatcher.stats()
    }

    pub fn next_photo(&mut self) -> Option<&str> {
        self.session.next_photo()
    }

    pub fn prev_photo(&mut self) -> Option<&str> {
        self.session.prev_photo()
    }
}
