use std::fmt::Display;

pub use annotate_snippets::Renderer;
use annotate_snippets::{Level, Snippet};
pub use text_size::TextRange;

/// A fatal problem found in a source file, anchored at a byte range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    message: String,
    label: String,
    range: TextRange,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, range: TextRange) -> Self {
        Self { message: message.into(), label: "here".to_owned(), range }
    }

    /// Replaces the text printed under the highlighted range.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn render<'a>(
        &'a self,
        renderer: &'a Renderer,
        path: &'a str,
        text: &'a str,
    ) -> impl Display + 'a {
        let message = Level::Error.title(&self.message).snippet(
            Snippet::source(text)
                .origin(path)
                .annotation(Level::Error.span(self.clamped_range(text)).label(&self.label))
                .fold(true),
        );
        renderer.render(message)
    }

    /// Writes the rendered report to stderr.
    pub fn emit(&self, path: &str, text: &str) {
        let renderer = Renderer::styled();
        eprintln!("{}", self.render(&renderer, path, text));
    }

    // End-of-file diagnostics point just past the text.
    fn clamped_range(&self, text: &str) -> std::ops::Range<usize> {
        let len = text.len();
        let start = usize::from(self.range.start()).min(len);
        let end = usize::from(self.range.end()).clamp(start, len);
        start..end
    }
}
