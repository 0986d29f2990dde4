//! Static transcript corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of representative transcripts.
//! SPOKEN lines imitate speech-to-text output (no punctuation, connector
//! words); DELIMITED lines imitate typed `key: value` entry; MIXED combines
//! both in one transcript; NOISE should extract nothing at all.

/// Speech-to-text-style transcripts: run-on, lowercase, connector words.
pub const CORPUS_SPOKEN: &[&str] = &[
    "created date is 28 june 2025 status is complete",
    "project id is 828-myblock time is 10:00 am",
    "report type is daily plan task type is technical",
    "numbers is 20 different numbers is 19 technical is 17",
    "report title is best report category is general created date is 28 June 2025 type is project report type is daily plan status is complete time 10:00",
    "start time is 09:15 end time is 17:30 status is in progress",
    "baseline is medium. cr id is CR12. status is pending",
];

/// Typed-entry transcripts: one labeled segment per field.
pub const CORPUS_DELIMITED: &[&str] = &[
    "description: This is a test report. status=complete. task_type=technical",
    "report_title: Quarterly infra review\nstatus: complete\nproject_id: 4412",
    "task_id=77; task_baseline=large; start_time=08:30",
    "tags: infra, oncall\nadditional_notes: follow up with SRE",
    "cr_id=CR9021\ntype=changerequest",
];

/// Transcripts mixing spoken phrasing with delimited segments.
pub const CORPUS_MIXED: &[&str] = &[
    "status is complete. description: rollout finished without incident. task_type=operations",
    "the task is rack installation. created date is 2nd march 2025. remarks: cabling pending",
    "report type is timesheet\nstart_time=09:00\nended at 18:45",
];

/// Inputs that must extract nothing.
pub const CORPUS_NOISE: &[&str] = &[
    "hello world",
    "",
    "   ",
    "lorem ipsum dolor sit amet",
    "...;;;\n\n..",
];

/// The transcription the original automation was built around; exercised as
/// an end-to-end snapshot.
pub const TRANSCRIBED_REPORT: &str = "report title is best report category is generally created date is 28 June 2025 type is project report type is daily plan status is complete time 10:00 numbers is 20 different numbers is 19 technical is 17";
