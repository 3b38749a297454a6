// src/animation/typewriter.rs

/// Incremental reveal of a fixed text, one character per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: &'static str,
    total: usize,
    revealed: usize,
    visible: bool,
}

impl Typewriter {
    pub fn new(text: &'static str) -> Self {
        Self {
            text,
            total: text.chars().count(),
            revealed: 0,
            visible: false,
        }
    }

    /// Show from an empty prefix.
    pub fn start(&mut self) {
        self.revealed = 0;
        self.visible = true;
    }

    /// Reveal one more character. Returns false once everything is shown.
    pub fn tick(&mut self) -> bool {
        if self.revealed < self.total {
            self.revealed += 1;
        }
        self.revealed < self.total
    }

    /// Hide and forget progress.
    pub fn stop(&mut self) {
        self.revealed = 0;
        self.visible = false;
    }

    /// The revealed prefix. Never splits a multi-byte character.
    pub fn typed(&self) -> &'static str {
        let end = self
            .text
            .char_indices()
            .nth(self.revealed)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
        &self.text[..end]
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.total
    }

    pub fn show_caret(&self) -> bool {
        self.visible && !self.is_complete()
    }
}
