//! Player-facing feedback buffers.

use std::collections::VecDeque;

use tower_core::{FloatingText, FloatingTextSink, Message, MessageKind, MessageSink};

/// Bounded message feed. The oldest message is dropped once full.
///
/// Every message is also mirrored into the structured log.
#[derive(Clone, Debug)]
pub struct MessageLog {
    messages: VecDeque<Message>,
    capacity: usize,
    total: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            messages: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            total: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages ever pushed, including dropped ones.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn count(&self, kind: MessageKind) -> usize {
        self.messages.iter().filter(|m| m.kind == kind).count()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl MessageSink for MessageLog {
    fn push_message(&mut self, kind: MessageKind, text: String) {
        tracing::info!(kind = %kind, "{text}");
        self.total += 1;
        if self.capacity == 0 {
            return;
        }
        if self.messages.len() == self.capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(Message { kind, text });
    }
}

/// Live floating texts, aged once per tick.
#[derive(Clone, Debug, Default)]
pub struct FloatingTextBuffer {
    texts: Vec<FloatingText>,
}

impl FloatingTextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FloatingText> {
        self.texts.iter()
    }

    /// Drifts every text upward by its speed and drops expired ones.
    pub fn age(&mut self) {
        self.texts.retain_mut(|text| {
            text.lifetime = text.lifetime.saturating_sub(1);
            text.origin.y -= text.speed;
            text.lifetime > 0
        });
    }

    pub fn clear(&mut self) {
        self.texts.clear();
    }
}

impl FloatingTextSink for FloatingTextBuffer {
    fn push_text(&mut self, text: FloatingText) {
        if text.lifetime > 0 {
            self.texts.push(text);
        }
    }
}
