//! Raw scores and per-strand correctness for a response set.
//!
//! A response is correct when the chosen option id equals the question's
//! key. Scoring is all-or-nothing: a response naming an unknown question
//! fails the whole response set.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::lookup::find_question;
use crate::model::{Question, ResponseSet};

/// Count the correct responses in a response set.
pub fn raw_score(response_set: &ResponseSet, questions: &[Question]) -> Result<usize, ReportError> {
    response_set
        .responses
        .iter()
        .try_fold(0, |correct, response| -> Result<usize, ReportError> {
            let question = find_question(questions, &response.question_id)?;
            Ok(correct + usize::from(question.is_correct(&response.response)))
        })
}

/// Correct and total responses for one strand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrandTally {
    pub correct: usize,
    pub total: usize,
}

/// Strand tallies in the order strands were first encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrandBreakdown {
    strands: IndexMap<String, StrandTally>,
}

impl StrandBreakdown {
    pub fn get(&self, strand: &str) -> Option<&StrandTally> {
        self.strands.get(strand)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StrandTally)> {
        self.strands.iter().map(|(strand, tally)| (strand.as_str(), tally))
    }

    pub fn len(&self) -> usize {
        self.strands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strands.is_empty()
    }

    /// Sum of correct responses across strands; equals the raw score.
    pub fn correct(&self) -> usize {
        self.strands.values().map(|t| t.correct).sum()
    }

    /// Sum of responses across strands; equals the response count.
    pub fn total(&self) -> usize {
        self.strands.values().map(|t| t.total).sum()
    }

    fn record(&mut self, strand: &str, correct: bool) {
        let tally = self.strands.entry(strand.to_string()).or_default();
        tally.total += 1;
        if correct {
            tally.correct += 1;
        }
    }
}

/// Group the responses of a response set by their question's strand.
pub fn strand_breakdown(
    response_set: &ResponseSet,
    questions: &[Question],
) -> Result<StrandBreakdown, ReportError> {
    let mut breakdown = StrandBreakdown::default();
    for response in &response_set.responses {
        let question = find_question(questions, &response.question_id)?;
        breakdown.record(&question.strand, question.is_correct(&response.response));
    }
    Ok(breakdown)
}
