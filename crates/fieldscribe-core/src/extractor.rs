//! Extractor — two complementary scans over a transcript, merged
//! first-write-wins per field.
//!
//! Phase A runs a fixed battery of phrase patterns over the whole input
//! lowercased once; each pattern is anchored to a known trigger phrasing
//! (`status is complete`, `started at 9:15`). Phase B splits the
//! original-case input into segments and matches the two generic labeled
//! shapes, `label: value` and `the label is value`. Phase A runs first and
//! Phase B only fills fields it left vacant; a field is never overwritten
//! once set.

use crate::config::ExtractorConfig;
use crate::normalizer::{normalize_key, normalize_value};
use crate::render;
use crate::types::{Extraction, Field};
use regex::Regex;

/// Right boundary for free-text captures: the capture ends before the next
/// recognized trigger word so a title or description does not swallow the
/// field declarations that follow it.
const STOP_WORDS: &str = "category|type|status|time|numbers|technical|different|created|date|project|report|task|action|result|baseline|start|end|cr|id";

/// The category capture must not stop at its own trigger word.
const STOP_WORDS_AFTER_CATEGORY: &str = "type|status|time|numbers|technical|different|created|date|project|report|task|action|result|baseline|start|end|cr|id";

const CLOCK_VALUE: &str = r"\d{1,2}:\d{2}(?::\d{2})?\s*(?:am|pm)?";

#[derive(Debug, Clone, Copy)]
enum RuleValue {
    /// Store the pattern's first capture group.
    Capture,
    /// Store a fixed literal; the pattern only witnesses the phrasing.
    Literal(&'static str),
}

#[derive(Debug)]
struct PhraseRule {
    field: Field,
    pattern: Regex,
    value: RuleValue,
}

fn rule(field: Field, pattern: &str, value: RuleValue) -> PhraseRule {
    PhraseRule {
        field,
        pattern: Regex::new(pattern).expect("phrase battery pattern must compile"),
        value,
    }
}

/// Free-text capture bounded by the stop-word disjunction. With no stop word
/// after the value (say, a title at the very end of the input) the phrase
/// pattern does not match at all; the line scan may still pick the segment up.
fn bounded_text_rule(field: Field, trigger: &str, stops: &str) -> PhraseRule {
    rule(
        field,
        &format!(r"(?:{trigger})\s+(?:is\s+)?([^.]+?)(?:\s+(?:{stops}))"),
        RuleValue::Capture,
    )
}

// ---------------------------------------------------------------------------
// Extractor
// ---------------------------------------------------------------------------

/// Compiled extraction pipeline. Construction compiles the full pattern
/// battery once; the value is immutable afterwards and safe to share across
/// threads.
#[derive(Debug)]
pub struct Extractor {
    phrase_rules: Vec<PhraseRule>,
    kv_line: Regex,
    spoken_line: Regex,
    max_input_bytes: usize,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    pub fn new() -> Self {
        Self::with_config(&ExtractorConfig::default())
    }

    pub fn with_config(config: &ExtractorConfig) -> Self {
        // Battery order matters: it is the Phase A write order, and with
        // first-write-wins the earlier of two rules targeting the same
        // field (`task_type` has two) takes precedence.
        let phrase_rules = vec![
            rule(
                Field::ProjectId,
                r"(?:project\s+id|project)\s+(?:is\s+)?(\d+[-\w]*)",
                RuleValue::Capture,
            ),
            rule(
                Field::Status,
                r"status\s+(?:is\s+)?(complete|pending|in progress|incomplete)",
                RuleValue::Capture,
            ),
            // The bare trigger also fires inside "start time …"/"end time …"
            // phrasings, populating `time` alongside the specific field.
            rule(
                Field::Time,
                &format!(r"time\s+(?:is\s+)?({CLOCK_VALUE})"),
                RuleValue::Capture,
            ),
            rule(
                Field::StartTime,
                &format!(r"(?:start\s+time|begin\s+time|started\s+at)\s+(?:is\s+)?({CLOCK_VALUE})"),
                RuleValue::Capture,
            ),
            rule(
                Field::EndTime,
                &format!(r"(?:end\s+time|finish\s+time|ended\s+at)\s+(?:is\s+)?({CLOCK_VALUE})"),
                RuleValue::Capture,
            ),
            rule(
                Field::CreatedDate,
                r"(?:date|created\s+date)\s+(?:is\s+)?([0-9]{1,2}(?:st|nd|rd|th)?[\s/-]+[a-zA-Z]+[\s/-]+[0-9]{4})",
                RuleValue::Capture,
            ),
            rule(
                Field::ReportType,
                r"(?:report\s+type|type)\s+(?:is\s+)?(daily\s+plan|daily\s+report|action\s+plan|result|timesheet)",
                RuleValue::Capture,
            ),
            rule(
                Field::TaskType,
                r"(?:task\s+type|technical)\s+(?:is\s+)?(technical|operations)",
                RuleValue::Capture,
            ),
            rule(
                Field::ActionNumbers,
                r"(?:numbers|action\s+numbers)\s+(?:is\s+)?(\d+)",
                RuleValue::Capture,
            ),
            rule(
                Field::ResultNumbers,
                r"(?:different\s+numbers|result\s+numbers)\s+(?:is\s+)?(\d+)",
                RuleValue::Capture,
            ),
            bounded_text_rule(Field::ReportTitle, r"report\s+title|title", STOP_WORDS),
            bounded_text_rule(Field::Category, "category", STOP_WORDS_AFTER_CATEGORY),
            rule(
                Field::Type,
                r"type\s+(?:is\s+)?(project|ticket|changerequest)",
                RuleValue::Capture,
            ),
            // "technical 17" spoken without a label still marks the task as
            // technical, discarding the number.
            rule(
                Field::TaskType,
                r"technical\s+(?:is\s+)?\d+",
                RuleValue::Literal("technical"),
            ),
            bounded_text_rule(Field::Description, "description|desc", STOP_WORDS),
            bounded_text_rule(Field::Task, "task", STOP_WORDS),
            bounded_text_rule(Field::Remarks, "remarks|comments", STOP_WORDS),
        ];

        Extractor {
            phrase_rules,
            kv_line: Regex::new(r"^([a-zA-Z0-9 _-]+)[=:] ?(.+)$")
                .expect("labeled-line pattern must compile"),
            spoken_line: Regex::new(r"(?i)^(?:the )?([a-z0-9 _-]+) (?:is|are|was|:) ?(.+)$")
                .expect("spoken-line pattern must compile"),
            max_input_bytes: config.max_input_bytes,
        }
    }

    /// Run both scans and return the raw field mapping.
    pub fn scan(&self, transcript: &str) -> Extraction {
        let input = bound(transcript, self.max_input_bytes);
        let mut out = Extraction::new();

        // Phase A: phrase battery over the whole input, lowercased once.
        // Captures therefore come out lowercased unless a value rule
        // re-cases them.
        let lowered = input.to_lowercase();
        for rule in &self.phrase_rules {
            if out.is_set(rule.field) {
                continue;
            }
            if let Some(caps) = rule.pattern.captures(&lowered) {
                let raw = match rule.value {
                    RuleValue::Capture => caps.get(1).map(|m| m.as_str()).unwrap_or_default(),
                    RuleValue::Literal(lit) => lit,
                };
                out.set_if_vacant(rule.field, normalize_value(rule.field, raw));
            }
        }
        tracing::debug!(fields = out.len(), "phrase scan complete");

        // Phase B: generic labeled shapes over original-case segments. Only
        // fields the phrase scan left vacant can still be filled.
        for segment in input.split(['\n', '.', ';']) {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            if let Some(caps) = self.kv_line.captures(segment) {
                if self.store_labeled(&mut out, &caps[1], &caps[2]) {
                    continue;
                }
            }
            // A segment whose label did not resolve (or whose field is
            // taken) gets a second chance as a spoken-form line.
            if let Some(caps) = self.spoken_line.captures(segment) {
                self.store_labeled(&mut out, &caps[1], &caps[2]);
            }
        }
        tracing::debug!(fields = out.len(), "line scan complete");

        out
    }

    /// Scan and serialize in one step.
    pub fn extract(&self, transcript: &str) -> String {
        render::render(&self.scan(transcript))
    }

    fn store_labeled(&self, out: &mut Extraction, label: &str, value: &str) -> bool {
        match normalize_key(label) {
            Some(field) if !out.is_set(field) => {
                out.set_if_vacant(field, normalize_value(field, value));
                true
            }
            _ => false,
        }
    }
}

/// Truncate oversized input at a char boundary. The scans are linear, but
/// there is no reason to chew through megabytes of a runaway transcript.
fn bound(input: &str, max: usize) -> &str {
    if input.len() <= max {
        return input;
    }
    let mut end = max;
    while end > 0 && !input.is_char_boundary(end) {
        end -= 1;
    }
    &input[..end]
}
