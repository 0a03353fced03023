//! Read-only in-memory access to the four record collections.

use crate::error::ReportError;
use crate::lookup;
use crate::model::{Assessment, Question, ResponseSet, Student};

/// A snapshot of all records needed to generate reports.
///
/// Built once per invocation and never mutated; report generation only
/// borrows it, so independent calls share nothing else.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    students: Vec<Student>,
    assessments: Vec<Assessment>,
    questions: Vec<Question>,
    response_sets: Vec<ResponseSet>,
}

impl RecordStore {
    pub fn new(
        students: Vec<Student>,
        assessments: Vec<Assessment>,
        questions: Vec<Question>,
        response_sets: Vec<ResponseSet>,
    ) -> Self {
        Self {
            students,
            assessments,
            questions,
            response_sets,
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn assessments(&self) -> &[Assessment] {
        &self.assessments
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn response_sets(&self) -> &[ResponseSet] {
        &self.response_sets
    }

    pub fn contains_student(&self, student_id: &str) -> bool {
        self.students.iter().any(|s| s.id == student_id)
    }

    pub fn student_name(&self, student_id: &str) -> Result<String, ReportError> {
        lookup::student_name(&self.students, student_id)
    }

    pub fn question(&self, question_id: &str) -> Result<&Question, ReportError> {
        lookup::find_question(&self.questions, question_id)
    }

    pub fn assessment(&self, assessment_id: &str) -> Result<&Assessment, ReportError> {
        lookup::find_assessment(&self.assessments, assessment_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_delegates_lookups() {
        let store = RecordStore::new(
            vec![Student {
                id: "student1".into(),
                first_name: "Tony".into(),
                last_name: "Stark".into(),
                year_level: Some(6),
            }],
            vec![Assessment {
                id: "assessment1".into(),
                name: "Numeracy".into(),
            }],
            vec![],
            vec![],
        );

        assert!(store.contains_student("student1"));
        assert!(!store.contains_student("student2"));
        assert_eq!(store.student_name("student1").unwrap(), "Tony Stark");
        assert_eq!(store.assessment("assessment1").unwrap().name, "Numeracy");
        assert!(store.question("numeracy1").unwrap_err().is_not_found());
        assert!(store.response_sets().is_empty());
    }
}
