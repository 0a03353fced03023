//! Completion timestamps and per-student completion history.
//!
//! Response sets record completion as `DD/MM/YYYY HH:MM:SS`. Only sets with a
//! completion timestamp take part in reporting, ordered oldest first.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::error::ReportError;
use crate::model::ResponseSet;

/// The fixed textual format of `ResponseSet::completed`.
pub const COMPLETION_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// How a completion timestamp is rendered in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `3rd June 2024 02:15 PM`
    DateTime,
    /// `3rd June 2024`
    DateOnly,
}

/// Parse a completion timestamp, rejecting anything but the exact format.
pub fn parse_completion(value: &str) -> Result<NaiveDateTime, ReportError> {
    let parsed = NaiveDateTime::parse_from_str(value, COMPLETION_FORMAT)
        .map_err(|e| ReportError::malformed_date(value, e))?;

    // chrono tolerates unpadded fields and extra whitespace
    if parsed.format(COMPLETION_FORMAT).to_string() != value {
        return Err(ReportError::malformed_date(
            value,
            "expected zero-padded DD/MM/YYYY HH:MM:SS",
        ));
    }

    // %S accepts 60 as a leap second
    if parsed.nanosecond() >= 1_000_000_000 {
        return Err(ReportError::malformed_date(value, "second out of range"));
    }

    Ok(parsed)
}

/// Render a timestamp with an ordinal day and full English month name.
pub fn format_completion(timestamp: &NaiveDateTime, style: DateStyle) -> String {
    let day = timestamp.day();
    let rest = match style {
        DateStyle::DateTime => timestamp.format("%B %Y %I:%M %p"),
        DateStyle::DateOnly => timestamp.format("%B %Y"),
    };
    format!("{day}{} {rest}", ordinal_suffix(day))
}

/// English ordinal suffix for a day of the month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// A completed response set paired with its parsed completion time.
#[derive(Debug, Clone, Copy)]
pub struct CompletedResponseSet<'a> {
    pub completed_at: NaiveDateTime,
    pub response_set: &'a ResponseSet,
}

/// A student's completed response sets, oldest first.
#[derive(Debug, Clone, Default)]
pub struct CompletionHistory<'a> {
    entries: Vec<CompletedResponseSet<'a>>,
}

impl<'a> CompletionHistory<'a> {
    pub fn earliest(&self) -> Option<&CompletedResponseSet<'a>> {
        self.entries.first()
    }

    pub fn latest(&self) -> Option<&CompletedResponseSet<'a>> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompletedResponseSet<'a>> {
        self.entries.iter()
    }
}

/// Select the completed response sets of `student_id`, sorted by completion.
///
/// The sort is stable: sets completed at the same instant keep their order
/// from `response_sets`. Every selected timestamp is parsed before sorting,
/// so one malformed date fails the whole selection.
pub fn completed_response_sets<'a>(
    student_id: &str,
    response_sets: &'a [ResponseSet],
) -> Result<CompletionHistory<'a>, ReportError> {
    let mut entries = response_sets
        .iter()
        .filter(|rs| rs.belongs_to(student_id))
        .filter_map(|rs| rs.completed.as_deref().map(|completed| (rs, completed)))
        .map(|(response_set, completed)| {
            Ok(CompletedResponseSet {
                completed_at: parse_completion(completed)?,
                response_set,
            })
        })
        .collect::<Result<Vec<_>, ReportError>>()?;

    entries.sort_by_key(|entry| entry.completed_at);

    tracing::debug!(
        student_id,
        completed = entries.len(),
        "selected completed response sets"
    );

    Ok(CompletionHistory { entries })
}
