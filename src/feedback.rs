//! Cursor feedback text
//!
//! The controller writes a short status string (extrusion delta, scale
//! factor, rotation angle) and where on screen to show it. It never reads
//! anything back.

pub trait FeedbackSink {
    fn set_text(&mut self, text: &str);
    fn set_screen_anchor(&mut self, x: f32, y: f32);
}

/// Text that follows the cursor, drawn by the viewer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CursorText {
    pub text: String,
    pub anchor: (f32, f32),
}

impl CursorText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl FeedbackSink for CursorText {
    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    fn set_screen_anchor(&mut self, x: f32, y: f32) {
        self.anchor = (x, y);
    }
}
