//! Normalizer — resolves transcript labels to canonical fields and applies
//! per-field value rewrite rules.
//!
//! Both halves are total: an unresolvable label yields `None`, and a value
//! that matches no rewrite rule passes through trimmed but otherwise
//! unchanged. Nothing in this module can fail.

use crate::registry::REGISTRY;
use crate::types::Field;
use phf::phf_map;
use regex::Regex;
use std::sync::LazyLock;

// ---------------------------------------------------------------------------
// Key normalization
// ---------------------------------------------------------------------------

/// Resolve a free-form label (as found in `key: value` or `key is value`
/// constructs) to a canonical field.
///
/// Canonical names win over synonyms: a label `description` resolves to
/// `description` even though `report_description` lists the same word as a
/// synonym. Within the synonym and partial-match passes, registry order
/// breaks ties between overlapping synonym lists.
pub fn normalize_key(label: &str) -> Option<Field> {
    let lower = label.to_lowercase();
    let cleaned: String = lower
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == ' ')
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }

    for field in Field::ALL {
        if cleaned == field.name() {
            return Some(field);
        }
    }

    for (field, syns) in REGISTRY {
        if syns.iter().any(|syn| cleaned == *syn) {
            return Some(*field);
        }
    }

    // Partial fallback: the label merely contains a field name or synonym,
    // e.g. "the current status" or a whole clause swallowed as a label.
    for (field, syns) in REGISTRY {
        if cleaned.contains(&field.name().replace('_', " ")) {
            return Some(*field);
        }
        if syns.iter().any(|syn| cleaned.contains(syn)) {
            return Some(*field);
        }
    }

    None
}

// ---------------------------------------------------------------------------
// Value normalization
// ---------------------------------------------------------------------------

static MONTHS: phf::Map<&'static str, &'static str> = phf_map! {
    "january" => "01",
    "february" => "02",
    "march" => "03",
    "april" => "04",
    "may" => "05",
    "june" => "06",
    "july" => "07",
    "august" => "08",
    "september" => "09",
    "october" => "10",
    "november" => "11",
    "december" => "12",
};

static REPORT_TYPES: phf::Map<&'static str, &'static str> = phf_map! {
    "daily plan" => "Dailyplan",
    "daily report" => "Dailyreport",
    "action plan" => "Actionplan",
    "result" => "Result",
    "timesheet" => "Timesheet",
};

static RECORD_TYPES: phf::Map<&'static str, &'static str> = phf_map! {
    "project" => "Project",
    "ticket" => "Ticket",
    "changerequest" => "CR",
};

static TASK_TYPES: phf::Map<&'static str, &'static str> = phf_map! {
    "technical" => "Technical",
    "operations" => "Operations",
};

static BASELINES: phf::Map<&'static str, &'static str> = phf_map! {
    "small" => "Small",
    "medium" => "Medium",
    "large" => "Large",
};

/// `28th june 2025`, `28/june/2025`, `8-June-2025`, …
static DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})(?:st|nd|rd|th)?[\s/-]+([a-zA-Z]+)[\s/-]+([0-9]{4})").unwrap()
});

/// A bare `H:MM`/`HH:MM` clock value. Values with a seconds component or an
/// am/pm suffix deliberately fall outside this and pass through untouched.
static BARE_CLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,2}:\d{2}$").unwrap());

static LEADING_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)").unwrap());

static CR_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^cr(\d+)$").unwrap());

/// Apply `field`'s rewrite rule to a raw captured value.
pub fn normalize_value(field: Field, raw: &str) -> String {
    let value = raw.trim();
    match field {
        Field::CreatedDate => normalize_date(value),
        Field::Status => value.to_lowercase(),
        Field::Time | Field::StartTime | Field::EndTime => {
            if BARE_CLOCK.is_match(value) {
                format!("{value}:00")
            } else {
                value.to_string()
            }
        }
        Field::ProjectId => match LEADING_DIGITS.captures(value) {
            // "828-myblock" keeps only the leading digit run
            Some(caps) => caps[1].to_string(),
            None => value.to_string(),
        },
        Field::ReportType => enum_lookup(&REPORT_TYPES, value),
        Field::Type => enum_lookup(&RECORD_TYPES, value),
        Field::TaskType => enum_lookup(&TASK_TYPES, value),
        Field::TaskBaseline => enum_lookup(&BASELINES, value),
        Field::CrId => match CR_TAG.captures(value) {
            Some(caps) => caps[1].to_string(),
            None => value.to_string(),
        },
        _ => value.to_string(),
    }
}

fn enum_lookup(map: &phf::Map<&'static str, &'static str>, value: &str) -> String {
    match map.get(value.to_lowercase().as_str()) {
        Some(mapped) => (*mapped).to_string(),
        None => value.to_string(),
    }
}

/// Rewrite `<day>[st|nd|rd|th] <month-name> <year>` to `DD/MM/YYYY`.
///
/// The search is unanchored and the rewrite keeps only the matched pieces. A
/// month name missing from the table lands verbatim in the month slot; a
/// value with no date shape at all passes through unchanged.
fn normalize_date(value: &str) -> String {
    let lower = value.to_lowercase();
    match DAY_MONTH_YEAR.captures(&lower) {
        Some(caps) => {
            let day = &caps[1];
            let month_name = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
            let month = MONTHS.get(month_name).copied().unwrap_or(month_name);
            format!("{day:0>2}/{month}/{}", &caps[3])
        }
        None => value.to_string(),
    }
}
