//! Character-by-character reveal for the hero heading.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// Per-character delay used for the hero heading.
pub const TYPE_DELAY_MS: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingStatus {
    Running,
    Done,
    Cancelled,
}

/// Reveals `text` one character per tick until done or cancelled.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    status: TypingStatus,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let status = if chars.is_empty() { TypingStatus::Done } else { TypingStatus::Running };
        Self { chars, shown: 0, status }
    }

    pub fn status(&self) -> TypingStatus {
        self.status
    }

    /// Text revealed so far.
    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    /// Reveal the next character and return the new prefix, or `None` once
    /// the text is complete or the run was cancelled.
    pub fn tick(&mut self) -> Option<String> {
        if self.status != TypingStatus::Running {
            return None;
        }
        self.shown += 1;
        if self.shown >= self.chars.len() {
            self.status = TypingStatus::Done;
        }
        Some(self.visible())
    }

    /// Stop revealing. The visible prefix is kept.
    pub fn cancel(&mut self) {
        if self.status == TypingStatus::Running {
            self.status = TypingStatus::Cancelled;
        }
    }
}
