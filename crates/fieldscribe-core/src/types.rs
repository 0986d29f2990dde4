//! Core types for fieldscribe-core.
//!
//! This module defines the fundamental data structures shared across the
//! pipeline: the canonical [`Field`] enumeration and the per-call
//! [`Extraction`] result.

use std::collections::BTreeMap;

/// A canonical report-form field.
///
/// Declaration order is load-bearing twice over: it is the registry
/// iteration order that breaks ties between overlapping label synonyms, and
/// (via the derived `Ord`) the order fields appear in serialized output.
/// Do not reorder variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    ReportTitle,
    ReportDescription,
    Category,
    Tags,
    AdditionalNotes,
    CreatedDate,
    ProjectId,
    Type,
    ReportType,
    Task,
    Description,
    Status,
    Time,
    ActionNumbers,
    ResultNumbers,
    Remarks,
    TaskType,
    TaskBaseline,
    StartTime,
    EndTime,
    CrId,
    TaskId,
}

impl Field {
    /// Every canonical field, in canonical output order.
    pub const ALL: [Field; 22] = [
        Field::ReportTitle,
        Field::ReportDescription,
        Field::Category,
        Field::Tags,
        Field::AdditionalNotes,
        Field::CreatedDate,
        Field::ProjectId,
        Field::Type,
        Field::ReportType,
        Field::Task,
        Field::Description,
        Field::Status,
        Field::Time,
        Field::ActionNumbers,
        Field::ResultNumbers,
        Field::Remarks,
        Field::TaskType,
        Field::TaskBaseline,
        Field::StartTime,
        Field::EndTime,
        Field::CrId,
        Field::TaskId,
    ];

    /// The snake_case name used on the wire (`field=value` lines) and as a
    /// label in transcripts.
    pub fn name(self) -> &'static str {
        match self {
            Field::ReportTitle => "report_title",
            Field::ReportDescription => "report_description",
            Field::Category => "category",
            Field::Tags => "tags",
            Field::AdditionalNotes => "additional_notes",
            Field::CreatedDate => "created_date",
            Field::ProjectId => "project_id",
            Field::Type => "type",
            Field::ReportType => "report_type",
            Field::Task => "task",
            Field::Description => "description",
            Field::Status => "status",
            Field::Time => "time",
            Field::ActionNumbers => "action_numbers",
            Field::ResultNumbers => "result_numbers",
            Field::Remarks => "remarks",
            Field::TaskType => "task_type",
            Field::TaskBaseline => "task_baseline",
            Field::StartTime => "start_time",
            Field::EndTime => "end_time",
            Field::CrId => "cr_id",
            Field::TaskId => "task_id",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is not a canonical field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown canonical field: {0:?}")]
pub struct UnknownFieldError(pub String);

impl std::str::FromStr for Field {
    type Err = UnknownFieldError;

    /// Resolves exactly the canonical snake_case name. Label synonyms are
    /// the key normalizer's job, not this one's.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

/// The result of one extraction pass: canonical field → raw string value.
///
/// Keys are present only for fields actually found. Insertion is
/// first-write-wins: once a field holds a non-empty value it is never
/// overwritten, neither by a later pattern in the same pass nor by a later
/// pass. An empty stored value counts as vacant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    fields: BTreeMap<Field, String>,
}

impl Extraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored value for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Whether `field` already holds a non-empty value.
    pub fn is_set(&self, field: Field) -> bool {
        self.fields.get(&field).is_some_and(|v| !v.is_empty())
    }

    /// Store `value` under `field` unless the field is already set.
    pub(crate) fn set_if_vacant(&mut self, field: Field, value: String) {
        if !self.is_set(field) {
            self.fields.insert(field, value);
        }
    }

    /// Iterate present fields in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields.iter().map(|(f, v)| (*f, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
