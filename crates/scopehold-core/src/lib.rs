//! # scopehold-core
//!
//! Bug-bounty recon scope tracking: named projects of domain strings over a
//! pluggable set store.
//!
//! ## Example
//!
//! ```no_run
//! use scopehold_core::{MemoryStore, Project};
//!
//! # async fn demo() -> scopehold_core::Result<()> {
//! let project = Project::new(Box::new(MemoryStore::default()), "acme");
//! let summary = project.import_file("targets.txt".as_ref()).await?;
//! println!(
//!     "{} out of {} domains were duplicates ({:.2}%).",
//!     summary.duplicates(),
//!     summary.total,
//!     summary.duplicate_percentage()
//! );
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod error;
pub mod project;
pub mod store;

pub use domain::Domain;
pub use error::{Result, ScopeholdError};
pub use project::{ImportSummary, Project};
pub use store::{MemoryStore, ProjectStore};
