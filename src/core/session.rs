use crate::models::{Profile, SessionState};

/// Result of moving the pointer past the presented candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Another candidate is now presented
    Next,
    /// This advance moved past the last candidate
    Exhausted,
    /// The session was already exhausted; nothing changed
    AlreadyExhausted,
}

/// Pointer-tracked browsing state over a filtered roster
///
/// The pointer only moves forward. Once it reaches the end of the filtered
/// roster the session stays exhausted until it is re-initialized.
#[derive(Debug, Clone)]
pub struct SwipeSession {
    profiles: Vec<Profile>,
    pointer: usize,
    photo_index: usize,
}

impl SwipeSession {
    pub fn initialize(profiles: Vec<Profile>) -> Self {
        Self {
            profiles,
            pointer: 0,
            photo_index: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.pointer < self.profiles.len() {
            SessionState::Active
        } else {
            SessionState::Exhausted
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.state() == SessionState::Exhausted
    }

    pub fn current(&self) -> Option<&Profile> {
        self.profiles.get(self.pointer)
    }

    pub fn advance(&mut self) -> Advance {
        if self.is_exhausted() {
            return Advance::AlreadyExhausted;
        }

        self.pointer += 1;
        self.photo_index = 0;

        if self.is_exhausted() {
            Advance::Exhausted
        } else {
            Advance::Next
        }
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.profiles.len().saturating_sub(self.pointer)
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn current_photo(&self) -> Option<&str> {
        self.current()
            .and_then(|p| p.photos.get(self.photo_index))
            .map(String::as_str)
    }

    pub fn photo_index(&self) -> usize {
        self.photo_index
    }

    /// Cycle forward through the presented candidate's photos, wrapping at the end
    pub fn next_photo(&mut self) -> Option<&str> {
        let count = self.current().map_or(0, |p| p.photos.len());
        if count == 0 {
            return None;
        }
        self.photo_index = (self.photo_index + 1) % count;
        self.current_photo()
    }

    pub fn prev_photo(&mut self) -> Option<&str> {
        let count = self.current().map_or(0, |p| p.photos.len());
        if count == 0 {
            return None;
        }
        self.photo_index = if self.photo_index == 0 { count - 1 } else { self.photo_index - 1 };
        self.current_photo()
    }
}
