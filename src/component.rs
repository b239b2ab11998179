use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::sink::{DisplaySink, FrameHints};

/// Placeholder key → already-stringified value for one render call.
pub type TemplateData = BTreeMap<String, String>;

#[derive(Debug, Error)]
pub enum ComponentError {
    #[error("component template not found: {name}")]
    TemplateNotFound { name: String },
    #[error("failed to read component resource {path}")]
    ResourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Escape quotes and backslashes so a value can be spliced literally into an
/// HTML/JS template. Does not entity-encode `<`, `>` or `&`; callers that
/// need entity encoding do it themselves before handing the value over.
pub fn escape_literal(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\'' | '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// On-disk component directory: `<root>/<name>.html` templates with optional
/// companions under `<root>/static/`.
pub struct Components {
    root: PathBuf,
}

impl Components {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn template_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.html"))
    }

    fn static_path(&self, file: &str) -> PathBuf {
        self.root.join("static").join(file)
    }

    /// Read a resource, mapping absence to `None`. Only a genuine read
    /// failure (permissions, bad encoding) is an error.
    fn read(path: &Path) -> Result<Option<String>, ComponentError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ComponentError::ResourceRead {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Render a component to final markup: load the template, inline the
    /// companion stylesheet/script when present, then substitute `{{KEY}}`
    /// placeholders with escaped values. Nothing is cached — every call
    /// re-reads all resources.
    pub fn render(&self, name: &str, data: &TemplateData) -> Result<String, ComponentError> {
        let path = self.template_path(name);
        let mut markup = Self::read(&path)?.ok_or_else(|| ComponentError::TemplateNotFound {
            name: name.to_string(),
        })?;

        // Companions are optional: absent file leaves the external-reference
        // tag in place, which browsers simply fail to resolve.
        if let Some(css) = Self::read(&self.static_path(&format!("{name}_css.css")))? {
            markup = markup.replace(
                &format!(r#"<link rel="stylesheet" href="static/{name}_css.css">"#),
                &format!("<style>{css}</style>"),
            );
        }
        if let Some(js) = Self::read(&self.static_path(&format!("{name}_js.js")))? {
            markup = markup.replace(
                &format!(r#"<script src="static/{name}_js.js"></script>"#),
                &format!("<script>{js}</script>"),
            );
        }

        Ok(substitute(&markup, data))
    }

    /// Render and hand the markup to the display sink along with sizing
    /// hints. The sink owns everything from here on.
    pub fn display(
        &self,
        sink: &mut dyn DisplaySink,
        name: &str,
        data: &TemplateData,
        hints: FrameHints,
    ) -> Result<(), ComponentError> {
        let markup = self.render(name, data)?;
        tracing::debug!(component = name, bytes = markup.len(), "component rendered");
        sink.present(markup, hints);
        Ok(())
    }
}

/// Replace every `{{KEY}}` token with the escaped mapped value in a single
/// pass over the original template. Tokens with no mapping stay verbatim and
/// mapping keys with no token are ignored. Substituted values are never
/// re-scanned, so a value containing token syntax cannot be substituted a
/// second time.
fn substitute(template: &str, data: &TemplateData) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let candidate = &rest[start + 2..];
        match candidate.find("}}") {
            Some(end) => match data.get(&candidate[..end]) {
                Some(value) => {
                    out.push_str(&escape_literal(value));
                    rest = &candidate[end + 2..];
                }
                None => {
                    // Not a mapped token: emit the braces and resume right
                    // after them so a later `{{` inside the span is still found.
                    out.push_str("{{");
                    rest = candidate;
                }
            },
            // Unterminated delimiter: the remainder can hold no token.
            None => {
                out.push_str(&rest[start..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}
