use crate::models::Message;

/// Persistence collaborator for conversation threads
///
/// Receives every appended message and may replay a candidate's history when
/// a thread is first opened. Appends arrive in order, one at a time.
pub trait ThreadSink {
    fn record(&mut self, candidate_id: &str, message: &Message);

    fn replay(&self, candidate_id: &str) -> Option<Vec<Message>>;
}

/// Sink that only logs appended messages and never replays
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ThreadSink for TracingSink {
    fn record(&mut self, candidate_id: &str, message: &Message) {
        tracing::trace!(
            "Message {} appended to thread {} ({} chars)",
            message.id,
            candidate_id,
            message.text.chars().count()
        );
    }

    fn replay(&self, _candidate_id: &str) -> Option<Vec<Message>> {
        None
    }
}
