use std::collections::HashMap;
use crate::models::{ConversationThread, Message, Rejection, SeedMessage, Sender};
use crate::services::sink::{ThreadSink, TracingSink};

/// Keyed conversation logs, one per candidate ever messaged
pub struct ThreadStore {
    threads: HashMap<String, ConversationThread>,
    seeds: HashMap<String, Vec<String>>,
    sink: Box<dyn ThreadSink>,
}

impl ThreadStore {
    pub fn new(seeds: Vec<SeedMessage>) -> Self {
        Self::with_sink(seeds, Box::new(TracingSink))
    }

    pub fn with_sink(seeds: Vec<SeedMessage>, sink: Box<dyn ThreadSink>) -> Self {
        let mut by_candidate: HashMap<String, Vec<String>> = HashMap::new();
        for seed in seeds {
            by_candidate.entry(seed.candidate_id).or_default().push(seed.text);
        }

        Self {
            threads: HashMap::new(),
            seeds: by_candidate,
            sink,
        }
    }

    /// Return the thread for a candidate, creating it on first use.
    ///
    /// A new thread replays the sink's history if it has one, otherwise it is
    /// seeded with the candidate's demo messages. The flag reports creation.
    pub fn get_or_create(&mut self, candidate_id: &str) -> (&ConversationThread, bool) {
        let (thread, created) = Self::open(&mut self.threads, &self.seeds, &*self.sink, candidate_id);
        (&*thread, created)
    }

    /// Append a message from the user to an open thread.
    ///
    /// Whitespace-only text is rejected, and so is a candidate with no thread
    /// yet. Threads are only opened through `get_or_create`.
    pub fn append_self_message(
        &mut self,
        candidate_id: &str,
        text: &str,
    ) -> Result<&Message, Rejection> {
        if text.trim().is_empty() {
            return Err(Rejection::EmptyMessageText {
                candidate_id: candidate_id.to_string(),
            });
        }

        let thread = self.threads.get_mut(candidate_id).ok_or_else(|| {
            tracing::debug!("Ignoring send to {} without an open thread", candidate_id);
            Rejection::NoConversation {
                candidate_id: candidate_id.to_string(),
            }
        })?;
        let message = thread.push(Message::new(Sender::Me, text));
        tracing::trace!("Appended message to {}", candidate_id);
        self.sink.record(candidate_id, message);

        Ok(message)
    }

    fn open<'a>(
        threads: &'a mut HashMap<String, ConversationThread>,
        seeds: &HashMap<String, Vec<String>>,
        sink: &dyn ThreadSink,
        candidate_id: &str,
    ) -> (&'a mut ConversationThread, bool) {
        let created = !threads.contains_key(candidate_id);

        let thread = threads.entry(candidate_id.to_string()).or_insert_with(|| {
            let messages: Vec<Message> = match sink.replay(candidate_id) {
                Some(history) => history,
                None => seeds
                    .get(candidate_id)
                    .map(|texts| {
                        texts
                            .iter()
                            .map(|text| Message::new(Sender::Candidate, text.clone()))
                            .collect()
                    })
                    .unwrap_or_default(),
            };

            tracing::debug!(
                "Opened thread for {} with {} messages",
                candidate_id,
                messages.len()
            );

            ConversationThread::new(candidate_id, messages)
        });

        (thread, created)
    }

    pub fn get(&self, candidate_id: &str) -> Option<&ConversationThread> {
        self.threads.get(candidate_id)
    }

    pub fn contains(&self, candidate_id: &str) -> bool {
        self.threads.contains_key(candidate_id)
    }

    pub fn len(&self) -> usize {
        self.threads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConversationThread> {
        self.threads.values()
    }
}

impl Default for ThreadStore {
    fn default() -> Self {
        Self::new(vec![])
    }
}

impl std::fmt::Debug for ThreadStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThreadStore")
            .field("threads", &self.threads.len())
            .field("seeded_candidates", &self.seeds.len())
            .finish()
    }
}
