//! The `reportgen init` command.

use std::path::Path;

use anyhow::{Context, Result};

const SAMPLE_FILES: [(&str, &str); 4] = [
    (
        "data/students.json",
        include_str!("../../../../data/students.json"),
    ),
    (
        "data/assessments.json",
        include_str!("../../../../data/assessments.json"),
    ),
    (
        "data/questions.json",
        include_str!("../../../../data/questions.json"),
    ),
    (
        "data/student-responses.json",
        include_str!("../../../../data/student-responses.json"),
    ),
];

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("reportgen.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("data").context("failed to create data directory")?;
    for (path, content) in SAMPLE_FILES {
        write_if_missing(Path::new(path), content)?;
    }

    println!("\nNext steps:");
    println!("  1. Replace the sample records in data/ with your own");
    println!("  2. Run: reportgen students");
    println!("  3. Run: reportgen generate student1 diagnostic");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# reportgen configuration

# Directory holding the record files. REPORTGEN_DATA_DIR overrides it.
data_dir = "data"

[files]
students = "students.json"
assessments = "assessments.json"
questions = "questions.json"
responses = "student-responses.json"
"#;
