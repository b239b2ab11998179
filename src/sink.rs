use crate::web;

/// Presentation hints forwarded with rendered markup. Units are whatever the
/// sink paints in (pixels for the HTML page sink).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameHints {
    pub height: Option<u32>,
    pub width: Option<u32>,
    pub scrolling: bool,
}

impl FrameHints {
    pub fn with_height(height: u32) -> Self {
        Self {
            height: Some(height),
            ..Self::default()
        }
    }
}

/// Where rendered output ends up. The renderer core hands markup over and
/// never looks at it again.
pub trait DisplaySink {
    /// Paint a fully rendered component document in its own frame.
    fn present(&mut self, markup: String, hints: FrameHints);

    /// Paint chrome-level widget markup inline on the page.
    fn widget(&mut self, markup: String);
}

/// Assembles presented output into one dashboard page. Component documents
/// are embedded as `srcdoc` iframes so their inline styles and scripts stay
/// isolated from the page chrome; widgets splice in directly.
#[derive(Default)]
pub struct HtmlPage {
    sections: Vec<String>,
}

impl HtmlPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_document(self, title: &str) -> String {
        web::page_shell(title, &self.sections.join("\n"))
    }
}

impl DisplaySink for HtmlPage {
    fn present(&mut self, markup: String, hints: FrameHints) {
        let height = hints
            .height
            .map(|h| format!("height:{h}px;"))
            .unwrap_or_default();
        let width = hints
            .width
            .map(|w| format!("width:{w}px;"))
            .unwrap_or_else(|| "width:100%;".to_string());
        let scrolling = if hints.scrolling { "auto" } else { "no" };
        self.sections.push(format!(
            r#"<iframe class="component-frame" style="{height}{width}border:0" scrolling="{scrolling}" srcdoc="{}"></iframe>"#,
            web::attr_escape(&markup),
        ));
    }

    fn widget(&mut self, markup: String) {
        self.sections.push(markup);
    }
}
