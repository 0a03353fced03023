//! Diagnostic report: per-strand results of the latest completed attempt.

use reportgen_core::scoring::strand_breakdown;
use reportgen_core::timeline::{completed_response_sets, format_completion, DateStyle};
use reportgen_core::{RecordStore, ReportError};

use crate::{latest_headline, no_completed_assessments};

/// Generate a diagnostic report for a student.
///
/// ```text
/// Tony Stark recently completed Numeracy assessment on 3rd June 2024 02:15 PM
/// He got 4 questions right out of 5. Details by strand given below:
///
/// Number and Algebra: 2 out of 2 correct
/// ```
pub fn generate_diagnostic(student_id: &str, store: &RecordStore) -> Result<String, ReportError> {
    let student_name = store.student_name(student_id)?;
    let history = completed_response_sets(student_id, store.response_sets())?;

    let Some(latest) = history.latest() else {
        return Ok(no_completed_assessments(&student_name));
    };
    let response_set = latest.response_set;

    let assessment = store.assessment(&response_set.assessment_id)?;
    let breakdown = strand_breakdown(response_set, store.questions())?;

    let mut report = latest_headline(
        &student_name,
        &assessment.name,
        &format_completion(&latest.completed_at, DateStyle::DateTime),
        breakdown.correct(),
        response_set.responses.len(),
        "Details by strand given below:",
    );

    for (strand, tally) in breakdown.iter() {
        report.push_str(&format!(
            "{strand}: {} out of {} correct\n",
            tally.correct, tally.total
        ));
    }

    Ok(report)
}
