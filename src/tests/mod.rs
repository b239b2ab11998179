mod component_tests;

use crate::sink::{DisplaySink, FrameHints};

/// Sink double that records everything handed to it.
#[derive(Default)]
pub struct RecordingSink {
    pub framed: Vec<(String, FrameHints)>,
    pub widgets: Vec<String>,
}

impl DisplaySink for RecordingSink {
    fn present(&mut self, markup: String, hints: FrameHints) {
        self.framed.push((markup, hints));
    }

    fn widget(&mut self, markup: String) {
        self.widgets.push(markup);
    }
}
