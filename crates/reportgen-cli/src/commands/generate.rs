//! The `reportgen generate` command.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use reportgen_report::ReportKind;

use crate::prompt::Prompter;

pub fn execute(
    student_id: Option<String>,
    report_type: Option<String>,
    data_dir: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let requested_kind = report_type
        .map(|t| t.parse::<ReportKind>())
        .transpose()
        .map_err(|e| anyhow::anyhow!(e))?;

    let store = super::open_store(data_dir, config)?;

    let (student_id, kind) = {
        let mut prompter = Prompter::new(io::stdin().lock(), io::stdout(), io::stderr());
        let student_id = prompter.student_id(&store, student_id)?;
        let kind = match requested_kind {
            Some(kind) => kind,
            None => prompter.report_kind()?,
        };
        (student_id, kind)
    };

    let report = reportgen_report::generate(kind, &student_id, &store)
        .with_context(|| format!("something went wrong generating the {kind} report"))?;

    println!("{report}");

    Ok(())
}
