//! Feedback report: the wrong answers of the latest completed attempt.

use reportgen_core::lookup::find_option;
use reportgen_core::model::Question;
use reportgen_core::scoring::raw_score;
use reportgen_core::timeline::{completed_response_sets, format_completion, DateStyle};
use reportgen_core::{RecordStore, ReportError};

use crate::{latest_headline, no_completed_assessments};

/// Generate a feedback report for a student.
///
/// One block is written per incorrect response, in response order. The
/// chosen and the correct option must both exist on the question.
pub fn generate_feedback(student_id: &str, store: &RecordStore) -> Result<String, ReportError> {
    let student_name = store.student_name(student_id)?;
    let history = completed_response_sets(student_id, store.response_sets())?;

    let Some(latest) = history.latest() else {
        return Ok(no_completed_assessments(&student_name));
    };
    let response_set = latest.response_set;

    let assessment = store.assessment(&response_set.assessment_id)?;
    let correct = raw_score(response_set, store.questions())?;

    let mut report = latest_headline(
        &student_name,
        &assessment.name,
        &format_completion(&latest.completed_at, DateStyle::DateTime),
        correct,
        response_set.responses.len(),
        "Feedback for wrong answers given below",
    );

    for response in &response_set.responses {
        let question = store.question(&response.question_id)?;
        if question.is_correct(&response.response) {
            continue;
        }

        let your_answer = describe_option(question, &response.response)?;
        let right_answer = describe_option(question, &question.config.key)?;

        report.push_str(&format!("Question: {}\n", question.stem));
        report.push_str(&format!("Your answer: {your_answer}\n"));
        report.push_str(&format!("Right answer: {right_answer}\n"));
        report.push_str(&format!("Hint: {}\n\n", question.config.hint));
    }

    Ok(report)
}

fn describe_option(question: &Question, option_id: &str) -> Result<String, ReportError> {
    let option = find_option(question, option_id)?;
    Ok(format!("{} with value {}", option.label, option.value))
}
