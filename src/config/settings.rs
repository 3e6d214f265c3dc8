// User settings.
// JSON file with serde defaults for every field; written atomically.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{FolioError, Result};
use crate::state::store::DEFAULT_PAGE_NAME;
use crate::state::{BoundaryPolicy, Verb, VerbTable};

/// Persistent user settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Boundary behavior for previous/next.
    pub navigation: BoundaryPolicy,
    /// Enabled context-menu verbs, in menu order.
    pub verbs: Vec<Verb>,
    /// Page names at startup.
    pub initial_pages: Vec<String>,
    /// Name of the page created when the last one is deleted.
    pub default_page_name: String,
    /// New pages are named "{prefix} {n}".
    pub new_page_prefix: String,
    /// Default tracing filter when RUST_LOG is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            navigation: BoundaryPolicy::default(),
            verbs: Verb::ALL.to_vec(),
            initial_pages: ["Info", "Details", "Other", "Ending"]
                .into_iter()
                .map(String::from)
                .collect(),
            default_page_name: DEFAULT_PAGE_NAME.to_string(),
            new_page_prefix: "Page".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Read settings from `path`. Returns None if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(Some(settings))
    }

    /// Read settings, falling back to defaults when the file is missing or
    /// unreadable. A bad file is logged, never fatal.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load_from(path) {
            Ok(Some(settings)) => {
                info!(path = %path.display(), "loaded settings");
                settings
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable settings file");
                Self::default()
            }
        }
    }

    /// Write settings to `path` as pretty JSON.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;

        // Write atomically via temp file
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.default_page_name.trim().is_empty() {
            return Err(FolioError::Config(
                "default_page_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn verb_table(&self) -> VerbTable {
        VerbTable::new(self.verbs.iter().copied())
    }
}
