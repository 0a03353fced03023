//! Interactive prompting for arguments missing from the command line.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use reportgen_core::RecordStore;
use reportgen_report::ReportKind;

/// Asks questions on `output`, reads answers from `input` and reports
/// rejected answers on `errors`.
pub struct Prompter<R, W, E> {
    input: R,
    output: W,
    errors: E,
}

impl<R: BufRead, W: Write, E: Write> Prompter<R, W, E> {
    pub fn new(input: R, output: W, errors: E) -> Self {
        Self {
            input,
            output,
            errors,
        }
    }

    /// Ask a question and return the trimmed answer.
    ///
    /// End of input is an error so a closed stdin can never loop forever.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}:\n> ")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read answer")?;
        if read == 0 {
            anyhow::bail!("no answer given to '{question}'");
        }
        Ok(line.trim().to_string())
    }

    /// Resolve a student id that exists in `store`, asking until one does.
    pub fn student_id(&mut self, store: &RecordStore, given: Option<String>) -> Result<String> {
        let mut candidate = given;
        loop {
            if let Some(id) = candidate.take().filter(|id| !id.is_empty()) {
                if store.contains_student(&id) {
                    return Ok(id);
                }
                writeln!(self.errors, "No student found with ID: {id}. Try again.")?;
            }
            candidate = Some(self.ask("Please enter the Student ID")?);
        }
    }

    /// Offer the report menu; an empty answer picks the first entry.
    pub fn report_kind(&mut self) -> Result<ReportKind> {
        let default = ReportKind::Diagnostic;
        loop {
            writeln!(self.output, "Report to generate [{}]", default.choice())?;
            for kind in ReportKind::ALL {
                writeln!(self.output, "  {}: {}", kind.choice(), kind.title())?;
            }

            let answer = self.ask("Choose a report")?;
            if answer.is_empty() {
                return Ok(default);
            }

            let chosen = answer
                .parse::<usize>()
                .ok()
                .and_then(ReportKind::from_choice)
                .or_else(|| answer.parse().ok());
            match chosen {
                Some(kind) => return Ok(kind),
                None => writeln!(self.errors, "Value \"{answer}\" is invalid")?,
            }
        }
    }
}
