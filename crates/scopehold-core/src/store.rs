//! Store boundary: the set-store primitives a project is built on.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::Domain;
use crate::error::Result;

/// The six primitives of the backing set store, keyed by project name. Each
/// call is one atomic request against the store; implementations do not
/// retry, and a project whose last member is removed ceases to exist.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Add one domain to the project set. True when it was not already a
    /// member; the project is created implicitly on first add.
    async fn add_domain(&self, project: &str, domain: &Domain) -> Result<bool>;

    /// All members of the project set, in no particular order.
    async fn domains(&self, project: &str) -> Result<Vec<String>>;

    /// Cardinality of the project set.
    async fn count_domains(&self, project: &str) -> Result<u64>;

    /// Whether the project key exists at all.
    async fn project_exists(&self, project: &str) -> Result<bool>;

    /// Drop the whole project set. True when a key was actually removed.
    async fn delete_project(&self, project: &str) -> Result<bool>;

    /// Remove one domain from the project set. True when it was a member.
    async fn remove_domain(&self, project: &str, domain: &Domain) -> Result<bool>;
}

/// In-process `ProjectStore` with Redis set semantics, used by unit tests and
/// offline experiments.
#[derive(Default)]
pub struct MemoryStore {
    projects: Mutex<HashMap<String, HashSet<String>>>,
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn add_domain(&self, project: &str, domain: &Domain) -> Result<bool> {
        let mut projects = self.projects.lock().await;
        Ok(projects
            .entry(project.to_string())
            .or_default()
            .insert(domain.as_str().to_string()))
    }

    async fn domains(&self, project: &str) -> Result<Vec<String>> {
        let projects = self.projects.lock().await;
        Ok(projects
            .get(project)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn count_domains(&self, project: &str) -> Result<u64> {
        let projects = self.projects.lock().await;
        Ok(projects.get(project).map_or(0, |set| set.len() as u64))
    }

    async fn project_exists(&self, project: &str) -> Result<bool> {
        let projects = self.projects.lock().await;
        Ok(projects.contains_key(project))
    }

    async fn delete_project(&self, project: &str) -> Result<bool> {
        let mut projects = self.projects.lock().await;
        Ok(projects.remove(project).is_some())
    }

    async fn remove_domain(&self, project: &str, domain: &Domain) -> Result<bool> {
        let mut projects = self.projects.lock().await;
        let Some(set) = projects.get_mut(project) else {
            return Ok(false);
        };
        let removed = set.remove(domain.as_str());
        // A set never outlives its last member, same as Redis.
        if set.is_empty() {
            projects.remove(project);
        }
        Ok(removed)
    }
}
