//! scopehold - manage bug bounty targets in a Redis-backed set store.
//!
//! Every invocation names a project and one operation on it. Human-facing
//! output goes to stdout; diagnostics go to stderr via `tracing`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use scopehold_core::{Project, Result};
use scopehold_storage_redis::RedisStore;

#[derive(Parser, Debug)]
#[command(name = "scopehold")]
#[command(version, about = "Manage bug bounty targets", long_about = None)]
struct Cli {
    /// The project name
    project: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add domains to the project from a newline-delimited file
    Add {
        /// The file containing domains
        file: PathBuf,
    },
    /// Display the current project's domains
    Showall,
    /// Print only domains matching a substring
    Print {
        /// Substring the printed domains must contain
        #[arg(short, long)]
        domain: String,
    },
    /// Count the number of domains in the current project
    Count,
    /// Remove the project and all its domains
    Remove,
    /// Remove a specific domain from the project
    Removedomain {
        /// Domain to be removed
        #[arg(short, long)]
        domain: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    tracing::debug!(project = %cli.project, "dispatching command");
    let store = RedisStore::open(RedisStore::DEFAULT_URL)?;
    let project = Project::new(Box::new(store), &cli.project);

    match cli.command {
        Commands::Add { file } => {
            let summary = project.import_file(&file).await?;
            println!(
                "{} out of {} domains were duplicates ({:.2}%).",
                summary.duplicates(),
                summary.total,
                summary.duplicate_percentage()
            );
        }
        Commands::Showall => {
            let mut domains = project.domains().await?;
            domains.sort();
            for domain in &domains {
                println!("{domain}");
            }
        }
        Commands::Print { domain } => {
            let matched = project.matching(&domain).await?;
            if matched.is_empty() {
                println!("No matching domain found for '{domain}'.");
            } else {
                for hit in &matched {
                    println!("{hit}");
                }
            }
        }
        Commands::Count => match project.count().await? {
            Some(count) => {
                println!(
                    "There are {count} domains in the project '{}'.",
                    project.name()
                );
            }
            None => println!("Error: Project '{}' does not exist.", project.name()),
        },
        Commands::Remove => {
            println!("Attempting to delete project '{}'...", project.name());
            if project.delete().await? {
                println!("Project '{}' deleted successfully.", project.name());
            } else {
                println!("No such project '{}' to delete.", project.name());
            }
        }
        Commands::Removedomain { domain } => {
            println!(
                "Removing specific domain '{domain}' from the project '{}'...",
                project.name()
            );
            if project.remove_domain(&domain).await? {
                println!(
                    "Domain '{domain}' removed successfully from project '{}'.",
                    project.name()
                );
            } else {
                println!("No such domain '{domain}' in project '{}'.", project.name());
            }
        }
    }

    Ok(())
}
