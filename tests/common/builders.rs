//! Test builders — ergonomic constructors for transcripts and parsed output.
//!
//! The builder composes transcripts the way the two input styles arrive in
//! production: spoken connector phrases and typed `label: value` segments.
//! The parse helpers go the other way, splitting rendered output back into
//! pairs so assertions can address fields by name.

/// Fluent builder for transcript fixtures.
///
/// # Example
///
/// ```rust
/// let transcript = TranscriptBuilder::new()
///     .spoken("status", "complete")
///     .delimited("project_id", "828")
///     .build();
/// assert_eq!(transcript, "status is complete. project_id: 828");
/// ```
#[derive(Debug, Default)]
pub struct TranscriptBuilder {
    segments: Vec<String>,
}

impl TranscriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a spoken-style segment: `<label> is <value>`.
    pub fn spoken(mut self, label: &str, value: &str) -> Self {
        self.segments.push(format!("{label} is {value}"));
        self
    }

    /// Append a typed-style segment: `<label>: <value>`.
    pub fn delimited(mut self, label: &str, value: &str) -> Self {
        self.segments.push(format!("{label}: {value}"));
        self
    }

    /// Append a verbatim segment.
    pub fn raw(mut self, text: &str) -> Self {
        self.segments.push(text.to_string());
        self
    }

    /// Join segments with `. ` — the same separator the line scan splits on.
    pub fn build(self) -> String {
        self.segments.join(". ")
    }
}

// ---------------------------------------------------------------------------
// Output parse helpers
// ---------------------------------------------------------------------------

/// Split rendered output into `(field, value)` pairs in emission order.
pub fn output_pairs(rendered: &str) -> Vec<(&str, &str)> {
    rendered
        .lines()
        .filter_map(|line| line.split_once('='))
        .collect()
}

/// The field names present in rendered output, in emission order.
pub fn output_fields(rendered: &str) -> Vec<&str> {
    output_pairs(rendered).into_iter().map(|(f, _)| f).collect()
}

/// The value rendered for `field`, if present.
pub fn value_of<'a>(rendered: &'a str, field: &str) -> Option<&'a str> {
    output_pairs(rendered)
        .into_iter()
        .find(|(f, _)| *f == field)
        .map(|(_, v)| v)
}
