//! reportgen-report: Narrative student assessment reports.
//!
//! Three text formats are rendered from a [`RecordStore`]: a diagnostic
//! breakdown of the latest attempt, the progress across all attempts, and
//! feedback on the wrong answers of the latest attempt.

use std::fmt;
use std::str::FromStr;

use reportgen_core::{RecordStore, ReportError};

pub mod diagnostic;
pub mod feedback;
pub mod progress;

#[cfg(test)]
mod fixtures;

pub use diagnostic::generate_diagnostic;
pub use feedback::generate_feedback;
pub use progress::generate_progress;

/// The report formats a caller can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Diagnostic,
    Progress,
    Feedback,
}

impl ReportKind {
    /// All kinds, in menu order.
    pub const ALL: [ReportKind; 3] = [
        ReportKind::Diagnostic,
        ReportKind::Progress,
        ReportKind::Feedback,
    ];

    /// Resolve a 1-based menu choice.
    pub fn from_choice(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// 1-based position in the menu.
    pub fn choice(self) -> usize {
        match self {
            ReportKind::Diagnostic => 1,
            ReportKind::Progress => 2,
            ReportKind::Feedback => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReportKind::Diagnostic => "Diagnostic",
            ReportKind::Progress => "Progress",
            ReportKind::Feedback => "Feedback",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportKind::Diagnostic => write!(f, "diagnostic"),
            ReportKind::Progress => write!(f, "progress"),
            ReportKind::Feedback => write!(f, "feedback"),
        }
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "diagnostic" => Ok(ReportKind::Diagnostic),
            "progress" => Ok(ReportKind::Progress),
            "feedback" => Ok(ReportKind::Feedback),
            _ => Err(format!("Invalid report type: {s}")),
        }
    }
}

/// Generate the report of the given kind for one student.
pub fn generate(
    kind: ReportKind,
    student_id: &str,
    store: &RecordStore,
) -> Result<String, ReportError> {
    tracing::debug!(student_id, %kind, "generating report");
    match kind {
        ReportKind::Diagnostic => generate_diagnostic(student_id, store),
        ReportKind::Progress => generate_progress(student_id, store),
        ReportKind::Feedback => generate_feedback(student_id, store),
    }
}

/// The complete report for a student without completed response sets.
fn no_completed_assessments(student_name: &str) -> String {
    format!("{student_name} has no completed assessments.")
}

/// Opening two lines shared by the diagnostic and feedback reports.
fn latest_headline(
    student_name: &str,
    assessment_name: &str,
    completed_on: &str,
    correct: usize,
    total: usize,
    details: &str,
) -> String {
    format!(
        "{student_name} recently completed {assessment_name} assessment on {completed_on}\n\
         He got {correct} questions right out of {total}. {details}\n\n"
    )
}
