//! Core data model types for reportgen.
//!
//! These mirror the four JSON record collections: students, assessments,
//! questions and response sets. Wire names are camelCase and unknown fields
//! are ignored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A student who sits assessments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Unique identifier for this student.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// School year level, when recorded.
    #[serde(default)]
    pub year_level: Option<u32>,
}

impl Student {
    /// First and last name separated by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An assessment that response sets are recorded against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: String,
    /// Human-readable name.
    pub name: String,
}

/// A multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    /// The prompt text shown to the student.
    pub stem: String,
    /// Topical category used to group results.
    pub strand: String,
    pub config: QuestionConfig,
}

impl Question {
    /// Returns `true` if `answer` is the id of the correct option.
    pub fn is_correct(&self, answer: &str) -> bool {
        self.config.key == answer
    }
}

/// Options, answer key and remediation hint for a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionConfig {
    #[serde(default)]
    pub options: Vec<AnswerOption>,
    /// Id of the correct option.
    pub key: String,
    #[serde(default)]
    pub hint: String,
}

/// One selectable answer of a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Unique within the owning question.
    pub id: String,
    pub label: String,
    pub value: OptionValue,
}

/// The value behind an option label, either numeric or textual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Number(n) => match n.as_f64() {
                // integral floats print like integers: 5.0 -> 5
                Some(x) if n.is_f64() && x.fract() == 0.0 && x.abs() < 1e15 => {
                    write!(f, "{}", x as i64)
                }
                _ => write!(f, "{n}"),
            },
            OptionValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One student's attempt at one assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSet {
    #[serde(default)]
    pub id: String,
    pub assessment_id: String,
    pub student: StudentRef,
    /// Completion time as `DD/MM/YYYY HH:MM:SS`; `None` while in progress.
    #[serde(default)]
    pub completed: Option<String>,
    #[serde(default)]
    pub responses: Vec<Response>,
}

impl ResponseSet {
    pub fn is_completed(&self) -> bool {
        self.completed.is_some()
    }

    pub fn belongs_to(&self, student_id: &str) -> bool {
        self.student.id == student_id
    }
}

/// Reference from a response set to its student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRef {
    pub id: String,
}

/// The option a student chose for one question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub question_id: String,
    /// Id of the chosen option.
    pub response: String,
}
