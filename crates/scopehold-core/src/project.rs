//! Project facade: one named collection over an injected store.

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::domain::Domain;
use crate::error::{Result, ScopeholdError};
use crate::store::ProjectStore;

/// Counters from one bulk load. `total` counts non-empty trimmed lines seen;
/// `added` counts the ones the store had not seen before.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub total: u64,
    pub added: u64,
}

impl ImportSummary {
    pub fn duplicates(&self) -> u64 {
        self.total - self.added
    }

    /// Share of loaded lines that were already present, as a percentage.
    /// Zero for an empty load.
    pub fn duplicate_percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.duplicates() as f64 / self.total as f64 * 100.0
        }
    }
}

/// A named project of scope domains. The store is constructed by the caller
/// and injected here, scoped to the command invocation.
pub struct Project {
    store: Box<dyn ProjectStore>,
    name: String,
}

impl Project {
    pub fn new(store: Box<dyn ProjectStore>, name: impl Into<String>) -> Self {
        Self {
            store,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bulk-load a newline-delimited domain file. Empty and whitespace-only
    /// lines are skipped and do not count toward the total.
    pub async fn import_file(&self, path: &Path) -> Result<ImportSummary> {
        let file = File::open(path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ScopeholdError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => ScopeholdError::Io(e),
        })?;

        let mut lines = BufReader::new(file).lines();
        let mut summary = ImportSummary::default();
        while let Some(line) = lines.next_line().await? {
            let Some(domain) = Domain::parse(&line) else {
                continue;
            };
            summary.total += 1;
            if self.store.add_domain(&self.name, &domain).await? {
                summary.added += 1;
            }
        }
        tracing::debug!(
            project = %self.name,
            total = summary.total,
            added = summary.added,
            "imported domain file"
        );
        Ok(summary)
    }

    /// The project's domains, unordered; callers sort before display.
    pub async fn domains(&self) -> Result<Vec<String>> {
        self.store.domains(&self.name).await
    }

    /// Domains containing `needle` (case-sensitive), sorted ascending. An
    /// empty needle matches every domain.
    pub async fn matching(&self, needle: &str) -> Result<Vec<String>> {
        let mut matched: Vec<String> = self
            .store
            .domains(&self.name)
            .await?
            .into_iter()
            .filter(|d| d.contains(needle))
            .collect();
        matched.sort();
        Ok(matched)
    }

    /// Number of domains, or `None` when the project does not exist. The
    /// store never keeps an empty project, so `Some(0)` cannot occur.
    pub async fn count(&self) -> Result<Option<u64>> {
        if !self.store.project_exists(&self.name).await? {
            return Ok(None);
        }
        Ok(Some(self.store.count_domains(&self.name).await?))
    }

    /// Delete the project and everything in it. True when a key was removed.
    pub async fn delete(&self) -> Result<bool> {
        self.store.delete_project(&self.name).await
    }

    /// Remove a single domain. The argument is trimmed first; an empty
    /// argument is an error rather than a silent no-op.
    pub async fn remove_domain(&self, raw: &str) -> Result<bool> {
        let domain = Domain::parse(raw).ok_or(ScopeholdError::EmptyDomain)?;
        self.store.remove_domain(&self.name, &domain).await
    }
}
