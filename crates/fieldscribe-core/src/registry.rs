//! The field registry: canonical fields and their accepted label synonyms.
//!
//! The registry is an explicit ordered slice, not a map. Several synonym
//! lists overlap (`type of report` appears under `category`, `type`, and
//! `report_type`), and slice order is the documented tie-break for the key
//! normalizer's lookups.

use crate::types::Field;

/// One entry per canonical field, in canonical order. Synonyms are
/// lowercase phrases a transcript may use to label that field's value; the
/// canonical name itself is matched separately and need not be listed.
pub static REGISTRY: &[(Field, &[&str])] = &[
    (
        Field::ReportTitle,
        &["report title", "title", "report name", "name of report", "title of report"],
    ),
    (
        Field::ReportDescription,
        &["report description", "description", "desc", "about report", "describe report"],
    ),
    (Field::Category, &["category", "type of report", "report category"]),
    (Field::Tags, &["tags", "keywords", "labels"]),
    (
        Field::AdditionalNotes,
        &["additional notes", "notes", "note", "extra notes", "remarks"],
    ),
    (
        Field::CreatedDate,
        &["created date", "date created", "date", "report date", "created on"],
    ),
    (
        Field::ProjectId,
        &["project id", "projectid", "project", "project code", "project number"],
    ),
    (Field::Type, &["type", "type of report", "report type"]),
    (Field::ReportType, &["report type", "type of report", "kind of report"]),
    (Field::Task, &["task", "task name", "task title"]),
    (
        Field::Description,
        &["description", "desc", "details", "task description"],
    ),
    (Field::Status, &["status", "current status", "report status"]),
    (Field::Time, &["time", "report time", "task time"]),
    (
        Field::ActionNumbers,
        &["action numbers", "actions", "number of actions", "action count"],
    ),
    (
        Field::ResultNumbers,
        &["result numbers", "results", "number of results", "result count"],
    ),
    (Field::Remarks, &["remarks", "comments", "feedback", "additional remarks"]),
    (Field::TaskType, &["task type", "type of task"]),
    (Field::TaskBaseline, &["task baseline", "baseline"]),
    (
        Field::StartTime,
        &["start time", "begin time", "task start time", "started at"],
    ),
    (
        Field::EndTime,
        &["end time", "finish time", "task end time", "ended at"],
    ),
    (Field::CrId, &["cr id", "change request id", "cr number"]),
    (Field::TaskId, &["task id", "task number", "id of task"]),
];

/// The accepted label synonyms for `field`.
pub fn synonyms(field: Field) -> &'static [&'static str] {
    REGISTRY
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, syns)| *syns)
        .unwrap_or(&[])
}
