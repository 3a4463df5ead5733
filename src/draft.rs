//! Draft persistence
//!
//! Mirrors the in-progress quote draft to one fixed JSON file so an
//! abandoned form can be resumed later. Everything here is best-effort: a
//! full disk or an unreadable file must never block the user, so failures
//! are logged and swallowed.

use crate::state::QuoteDraft;
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// File name under the platform data directory
const DRAFT_FILE: &str = "draft.json";

/// Saves, restores, and deletes the persisted quote draft
#[derive(Debug, Clone)]
pub struct DraftStore {
    path: Option<PathBuf>,
}

impl DraftStore {
    /// Store backed by the platform data directory.
    ///
    /// When no home directory can be resolved the store is inert: saves and
    /// loads become no-ops rather than errors.
    pub fn new() -> Self {
        let path = ProjectDirs::from("io", "quotedesk", "quotedesk-tui")
            .map(|dirs| dirs.data_dir().join(DRAFT_FILE));
        if path.is_none() {
            tracing::warn!("no data directory available, drafts will not persist");
        }
        Self { path }
    }

    /// Store backed by an explicit file, used in tests
    pub fn at(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Serialize the whole draft, replacing any prior file
    pub fn save(&self, draft: &QuoteDraft) {
        let Some(path) = &self.path else { return };

        let result = (|| -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string(draft).map_err(std::io::Error::other)?;
            fs::write(path, content)
        })();

        if let Err(err) = result {
            tracing::warn!(path = %path.display(), "failed to save draft: {err}");
        }
    }

    /// Read and parse the saved draft, if any.
    ///
    /// A corrupt file is treated the same as a missing one: logged, then
    /// ignored, so the wizard starts fresh instead of surfacing an error.
    pub fn load(&self) -> Option<QuoteDraft> {
        let path = self.path.as_ref()?;
        let content = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&content) {
            Ok(draft) => Some(draft),
            Err(err) => {
                tracing::warn!(path = %path.display(), "ignoring unreadable draft: {err}");
                None
            }
        }
    }

    /// Delete the saved draft. Called on successful submission and on reset.
    pub fn clear(&self) {
        let Some(path) = &self.path else { return };
        match fs::remove_file(path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(path = %path.display(), "failed to clear draft: {err}");
            }
        }
    }

    /// Whether a draft file is currently on disk
    pub fn exists(&self) -> bool {
        self.path.as_ref().is_some_and(|p| p.exists())
    }
}

impl Default for DraftStore {
    fn default() -> Self {
        Self::new()
    }
}
