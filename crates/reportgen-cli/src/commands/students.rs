//! The `reportgen students` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use reportgen_core::timeline::completed_response_sets;

pub fn execute(data_dir: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let store = super::open_store(data_dir, config)?;

    if store.students().is_empty() {
        println!("No students found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Year", "Completed"]);

    for student in store.students() {
        let completed = completed_response_sets(&student.id, store.response_sets())?;
        table.add_row(vec![
            Cell::new(&student.id),
            Cell::new(student.full_name()),
            Cell::new(
                student
                    .year_level
                    .map(|year| year.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(completed.len()),
        ]);
    }

    println!("{table}");
    println!("\n{} student(s)", store.students().len());

    Ok(())
}
