//! Progress report: raw scores of every completed attempt, oldest first.

use reportgen_core::scoring::raw_score;
use reportgen_core::timeline::{completed_response_sets, format_completion, DateStyle};
use reportgen_core::{RecordStore, ReportError};

use crate::no_completed_assessments;

/// Generate a progress report for a student.
///
/// The closing line compares the latest raw score with the oldest one; the
/// difference is printed with its sign and may be zero or negative.
pub fn generate_progress(student_id: &str, store: &RecordStore) -> Result<String, ReportError> {
    let student_name = store.student_name(student_id)?;
    let history = completed_response_sets(student_id, store.response_sets())?;

    if history.is_empty() {
        return Ok(no_completed_assessments(&student_name));
    }

    let mut lines = Vec::with_capacity(history.len());
    let mut scores = Vec::with_capacity(history.len());
    for entry in history.iter() {
        let score = raw_score(entry.response_set, store.questions())?;
        lines.push(format!(
            "Date: {}, Raw Score: {score} out of {}",
            format_completion(&entry.completed_at, DateStyle::DateOnly),
            entry.response_set.responses.len()
        ));
        scores.push(score as i64);
    }

    let improvement = match (scores.first(), scores.last()) {
        (Some(oldest), Some(latest)) => latest - oldest,
        _ => 0,
    };

    let mut report = format!(
        "{student_name} has completed {} assessments in total. Date and raw score given below:\n\n",
        history.len()
    );
    report.push_str(&lines.join("\n"));
    report.push_str("\n\n");
    report.push_str(&format!(
        "{student_name} got {improvement} more correct in the recent completed assessment than the oldest"
    ));

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{sample_store, single_response_set, store_with_responses};

    #[test]
    fn progress_lists_attempts_oldest_first() {
        let report = generate_progress("student1", &sample_store()).unwrap();
        assert_eq!(
            report,
            "Tony Stark has completed 3 assessments in total. Date and raw score given below:\n\
             \n\
             Date: 16th December 2019, Raw Score: 2 out of 5\n\
             Date: 14th December 2021, Raw Score: 3 out of 5\n\
             Date: 3rd June 2024, Raw Score: 4 out of 5\n\
             \n\
             Tony Stark got 2 more correct in the recent completed assessment than the oldest"
        );
    }

    #[test]
    fn decline_is_rendered_with_sign() {
        let report = generate_progress("student2", &sample_store()).unwrap();
        assert!(report.starts_with("Peter Parker has completed 2 assessments in total."));
        assert!(report.contains("Date: 1st February 2023, Raw Score: 5 out of 5\n"));
        assert!(report.contains("Date: 15th March 2023, Raw Score: 2 out of 5\n"));
        assert!(report.ends_with(
            "Peter Parker got -3 more correct in the recent completed assessment than the oldest"
        ));
    }

    #[test]
    fn single_attempt_has_zero_improvement() {
        let store = store_with_responses(&single_response_set(
            "22/11/2022 16:45:00",
            &[("numeracy1", "option1"), ("numeracy2", "option2")],
        ));
        let report = generate_progress("student1", &store).unwrap();
        assert!(report.contains("Date: 22nd November 2022, Raw Score: 2 out of 2\n\n"));
        assert!(report.ends_with("Tony Stark got 0 more correct in the recent completed assessment than the oldest"));
    }

    #[test]
    fn no_completed_assessments() {
        let report = generate_progress("student3", &sample_store()).unwrap();
        assert_eq!(report, "Natasha Romanoff has no completed assessments.");
    }

    #[test]
    fn unknown_question_in_any_attempt_fails() {
        let store = store_with_responses(&single_response_set(
            "22/11/2022 16:45:00",
            &[("numeracy6", "option1")],
        ));
        let err = generate_progress("student1", &store).unwrap_err();
        assert!(err.is_not_found());
    }
}
