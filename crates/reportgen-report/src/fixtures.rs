//! Records from the sample data directory for renderer tests.

use std::path::Path;

use reportgen_core::loader::parse_collection;
use reportgen_core::RecordStore;

const STUDENTS: &str = include_str!("../../../data/students.json");
const ASSESSMENTS: &str = include_str!("../../../data/assessments.json");
const QUESTIONS: &str = include_str!("../../../data/questions.json");
const RESPONSES: &str = include_str!("../../../data/student-responses.json");

/// The sample data set: Tony Stark (student1) has three completed attempts,
/// Peter Parker (student2) two, Natasha Romanoff (student3) none.
pub(crate) fn sample_store() -> RecordStore {
    store_with_responses(RESPONSES)
}

/// Sample students, assessments and questions with custom response sets.
pub(crate) fn store_with_responses(responses: &str) -> RecordStore {
    RecordStore::new(
        parse_collection(STUDENTS, Path::new("students.json")).unwrap(),
        parse_collection(ASSESSMENTS, Path::new("assessments.json")).unwrap(),
        parse_collection(QUESTIONS, Path::new("questions.json")).unwrap(),
        parse_collection(responses, Path::new("student-responses.json")).unwrap(),
    )
}

/// A single response set for `student1` on `assessment1` as JSON.
pub(crate) fn single_response_set(completed: &str, answers: &[(&str, &str)]) -> String {
    let responses = answers
        .iter()
        .map(|(question_id, response)| {
            format!(r#"{{"questionId": "{question_id}", "response": "{response}"}}"#)
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"[{{
            "id": "custom",
            "assessmentId": "assessment1",
            "completed": "{completed}",
            "student": {{"id": "student1"}},
            "responses": [{responses}]
        }}]"#
    )
}

/// Two attempts by `student1` completed at the same instant. The first is a
/// perfect Numeracy attempt, the second a Numeracy Check-in with one wrong
/// answer to '10 - 4'.
pub(crate) const TIED_RESPONSE_SETS: &str = r#"[
    {
        "id": "tied1",
        "assessmentId": "assessment1",
        "completed": "05/09/2024 08:00:00",
        "student": {"id": "student1"},
        "responses": [
            {"questionId": "numeracy1", "response": "option1"},
            {"questionId": "numeracy3", "response": "option3"}
        ]
    },
    {
        "id": "tied2",
        "assessmentId": "assessment2",
        "completed": "05/09/2024 08:00:00",
        "student": {"id": "student1"},
        "responses": [
            {"questionId": "numeracy1", "response": "option1"},
            {"questionId": "numeracy2", "response": "option3"}
        ]
    }
]"#;
