//! First-match lookups joining response sets to their records.
//!
//! Each lookup scans its collection in order and returns the first record
//! with a matching id. A missing record is a [`ReportError::NotFound`].

use crate::error::{RecordKind, ReportError};
use crate::model::{AnswerOption, Assessment, Question, Student};

pub fn find_student<'a>(students: &'a [Student], student_id: &str) -> Result<&'a Student, ReportError> {
    students
        .iter()
        .find(|s| s.id == student_id)
        .ok_or_else(|| ReportError::not_found(RecordKind::Student, student_id))
}

/// Display name of a student: first name, a space, last name.
pub fn student_name(students: &[Student], student_id: &str) -> Result<String, ReportError> {
    find_student(students, student_id).map(Student::full_name)
}

pub fn find_question<'a>(
    questions: &'a [Question],
    question_id: &str,
) -> Result<&'a Question, ReportError> {
    questions
        .iter()
        .find(|q| q.id == question_id)
        .ok_or_else(|| ReportError::not_found(RecordKind::Question, question_id))
}

pub fn find_assessment<'a>(
    assessments: &'a [Assessment],
    assessment_id: &str,
) -> Result<&'a Assessment, ReportError> {
    assessments
        .iter()
        .find(|a| a.id == assessment_id)
        .ok_or_else(|| ReportError::not_found(RecordKind::Assessment, assessment_id))
}

/// Find an option of `question` by id.
pub fn find_option<'a>(question: &'a Question, option_id: &str) -> Result<&'a AnswerOption, ReportError> {
    question
        .config
        .options
        .iter()
        .find(|o| o.id == option_id)
        .ok_or_else(|| ReportError::not_found(RecordKind::Option, option_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OptionValue, QuestionConfig};

    fn student(id: &str, first: &str, last: &str) -> Student {
        Student {
            id: id.into(),
            first_name: first.into(),
            last_name: last.into(),
            year_level: None,
        }
    }

    fn question(id: &str, stem: &str) -> Question {
        Question {
            id: id.into(),
            stem: stem.into(),
            strand: "Number and Algebra".into(),
            config: QuestionConfig {
                options: vec![
                    AnswerOption {
                        id: "option1".into(),
                        label: "A".into(),
                        value: OptionValue::Number(5u64.into()),
                    },
                    AnswerOption {
                        id: "option2".into(),
                        label: "B".into(),
                        value: OptionValue::Number(4u64.into()),
                    },
                ],
                key: "option1".into(),
                hint: String::new(),
            },
        }
    }

    #[test]
    fn student_name_joins_first_and_last() {
        let students = vec![student("student1", "Tony", "Stark")];
        assert_eq!(student_name(&students, "student1").unwrap(), "Tony Stark");
    }

    #[test]
    fn missing_student_is_not_found() {
        let students = vec![student("student1", "Tony", "Stark")];
        let err = student_name(&students, "student9").unwrap_err();
        assert_eq!(err, ReportError::not_found(RecordKind::Student, "student9"));
    }

    #[test]
    fn first_match_wins() {
        let questions = vec![question("q1", "first"), question("q1", "second")];
        assert_eq!(find_question(&questions, "q1").unwrap().stem, "first");
    }

    #[test]
    fn missing_question_and_assessment() {
        assert!(find_question(&[], "q1").unwrap_err().is_not_found());
        let assessments = vec![Assessment {
            id: "assessment1".into(),
            name: "Numeracy".into(),
        }];
        assert_eq!(
            find_assessment(&assessments, "assessment1").unwrap().name,
            "Numeracy"
        );
        assert_eq!(
            find_assessment(&assessments, "assessment2").unwrap_err(),
            ReportError::not_found(RecordKind::Assessment, "assessment2")
        );
    }

    #[test]
    fn option_lookup_within_question() {
        let q = question("q1", "stem");
        assert_eq!(find_option(&q, "option2").unwrap().label, "B");
        assert_eq!(
            find_option(&q, "option7").unwrap_err(),
            ReportError::not_found(RecordKind::Option, "option7")
        );
    }
}
