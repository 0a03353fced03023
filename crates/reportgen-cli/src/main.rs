//! reportgen CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod prompt;

#[derive(Parser)]
#[command(
    name = "reportgen",
    version,
    about = "Student assessment report generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a student report (prompts for missing arguments)
    Generate {
        /// The student ID
        student_id: Option<String>,

        /// Report type: diagnostic, progress, feedback
        report_type: Option<String>,

        /// Directory containing the record files
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List students and their completed assessments
    Students {
        /// Directory containing the record files
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and sample data
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reportgen=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            student_id,
            report_type,
            data_dir,
            config,
        } => commands::generate::execute(student_id, report_type, data_dir, config),
        Commands::Students { data_dir, config } => commands::students::execute(data_dir, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
