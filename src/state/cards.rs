use crate::constants::*;
use cosmic_copilot_util::CopilotMessage;
use std::collections::VecDeque;
use std::time::SystemTime;

/// One on-screen co-pilot card instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopilotCard {
    pub id: u32,
    pub message: CopilotMessage,
    pub time: SystemTime,
}

impl CopilotCard {
    pub fn new(id: u32, message: CopilotMessage) -> Self {
        Self {
            id,
            message,
            time: SystemTime::now(),
        }
    }

    pub fn estimated_size(&self) -> usize {
        std::mem::size_of::<Self>() + self.message.estimated_size()
    }
}

/// Manages the visible cards and the hidden history
///
/// A card starts visible and leaves the visible queue at most once: a
/// learner dismissal moves it to the hidden history, an owner withdrawal
/// removes it entirely. No method moves a card back to the visible queue;
/// to show a message again the owner creates a new card.
pub struct CardStack {
    /// Currently visible co-pilot cards, oldest first
    cards: Vec<CopilotCard>,
    /// Dismissed cards, newest first
    hidden: VecDeque<CopilotCard>,
}

impl CardStack {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(INITIAL_CARDS_CAPACITY),
            hidden: VecDeque::new(),
        }
    }

    /// Get visible cards
    pub fn visible(&self) -> &[CopilotCard] {
        &self.cards
    }

    /// Get hidden cards
    pub fn hidden(&self) -> &VecDeque<CopilotCard> {
        &self.hidden
    }

    /// Add a card to the visible queue
    pub fn push(&mut self, card: CopilotCard) {
        self.cards.push(card);
    }

    /// Move a visible card to the hidden history
    ///
    /// Returns `true` only when the transition actually happened, so a
    /// second dismissal of the same id (or a dismissal of an unknown id)
    /// reports `false` and callers can keep dismiss side effects to
    /// exactly once per card.
    pub fn dismiss(&mut self, id: u32) -> bool {
        let Some(pos) = self.cards.iter().position(|c| c.id == id) else {
            return false;
        };

        let card = self.cards.remove(pos);
        self.hidden.push_front(card);
        self.apply_memory_budget(MAX_HIDDEN_MEMORY);
        true
    }

    /// Remove a card entirely, from either queue
    ///
    /// Owner-initiated teardown; returns the removed card if found.
    pub fn withdraw(&mut self, id: u32) -> Option<CopilotCard> {
        if let Some(pos) = self.cards.iter().position(|c| c.id == id) {
            Some(self.cards.remove(pos))
        } else {
            self.hidden
                .iter()
                .position(|c| c.id == id)
                .and_then(|pos| self.hidden.remove(pos))
        }
    }

    /// Look up a visible card for an action activation
    ///
    /// Hidden cards are not eligible; the lookup never mutates the stack.
    pub fn action_target(&self, id: u32) -> Option<&CopilotCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Apply memory budget to hidden cards
    ///
    /// Keeps newest cards that fit within the budget
    fn apply_memory_budget(&mut self, max_memory: usize) {
        let mut total_size: usize = 0;
        let mut keep_count: usize = 0;

        for c in &self.hidden {
            let size = c.estimated_size();
            if total_size + size > max_memory {
                break;
            }
            total_size += size;
            keep_count += 1;
        }

        self.hidden.truncate(keep_count);
    }

    /// Get total memory usage of hidden cards
    pub fn hidden_memory_usage(&self) -> usize {
        self.hidden.iter().map(|c| c.estimated_size()).sum()
    }

    /// Check if the visible queue is empty
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get count of visible cards
    pub fn visible_count(&self) -> usize {
        self.cards.len()
    }

    /// Shrink visible card capacity after the queue drains
    pub fn shrink_visible(&mut self) {
        if self.cards.is_empty() {
            self.cards.shrink_to(INITIAL_CARDS_CAPACITY);
        }
    }
}

impl Default for CardStack {
    fn default() -> Self {
        Self::new()
    }
}
