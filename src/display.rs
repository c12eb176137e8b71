//! Display sink
//!
//! The engine never draws anything itself. After each input that changes
//! what should be shown, the [`Session`](crate::session::Session) hands the
//! new text to a [`DisplaySink`].

/// Receiver for display text
pub trait DisplaySink {
    /// Show `text` verbatim, replacing whatever was shown before
    fn show(&mut self, text: &str);
}

/// Sink that remembers every value it was asked to show
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    pub frames: Vec<String>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        RecordingDisplay { frames: Vec::new() }
    }

    /// The text currently shown (empty before the first render)
    pub fn current(&self) -> &str {
        self.frames.last().map(|s| s.as_str()).unwrap_or("")
    }

    /// Number of renders so far
    pub fn render_count(&self) -> usize {
        self.frames.len()
    }
}

impl DisplaySink for RecordingDisplay {
    fn show(&mut self, text: &str) {
        self.frames.push(text.to_string());
    }
}
