//! Data directory configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding `data_dir`.
pub const DATA_DIR_ENV: &str = "REPORTGEN_DATA_DIR";

/// Top-level reportgen configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportgenConfig {
    /// Directory holding the four record files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// File names within `data_dir`.
    #[serde(default)]
    pub files: DataFiles,
}

/// File names of the record collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataFiles {
    #[serde(default = "default_students")]
    pub students: String,
    #[serde(default = "default_assessments")]
    pub assessments: String,
    #[serde(default = "default_questions")]
    pub questions: String,
    #[serde(default = "default_responses")]
    pub responses: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_students() -> String {
    "students.json".to_string()
}
fn default_assessments() -> String {
    "assessments.json".to_string()
}
fn default_questions() -> String {
    "questions.json".to_string()
}
fn default_responses() -> String {
    "student-responses.json".to_string()
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            students: default_students(),
            assessments: default_assessments(),
            questions: default_questions(),
            responses: default_responses(),
        }
    }
}

impl Default for ReportgenConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            files: DataFiles::default(),
        }
    }
}

impl ReportgenConfig {
    pub fn students_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.students)
    }

    pub fn assessments_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.assessments)
    }

    pub fn questions_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.questions)
    }

    pub fn responses_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.responses)
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `reportgen.toml` in the current directory
/// 2. `~/.config/reportgen/config.toml`
///
/// `REPORTGEN_DATA_DIR` overrides the configured data directory.
pub fn load_config_from(path: Option<&Path>) -> Result<ReportgenConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("reportgen.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            parse_config(&path)?
        }
        None => ReportgenConfig::default(),
    };

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            config.data_dir = PathBuf::from(dir);
        }
    }

    Ok(config)
}

fn parse_config(path: &Path) -> Result<ReportgenConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<ReportgenConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("reportgen"))
}
