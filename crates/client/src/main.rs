use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ideaflow_client::prompt::{CommentPrompt, StdinPrompt};
use ideaflow_client::{view, HttpIdeaApi, IdeaStore};
use ideaflow_core::{IdeaStatus, Priority};

/// Capture ideas, move them through their lifecycle, and chart progress.
#[derive(Parser)]
#[command(name = "ideaflow", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all ideas.
    List,
    /// Add a new idea.
    Add {
        /// The idea's description.
        text: String,
        /// Priority: Low, Medium or High.
        #[arg(long, default_value = "Medium")]
        priority: Priority,
    },
    /// Move an idea to a new status, recording a history entry.
    Status {
        id: i64,
        /// Target status: New, InProgress or Completed.
        status: IdeaStatus,
        /// Comment to attach; prompted for interactively when omitted.
        #[arg(long)]
        comment: Option<String>,
    },
    /// Delete an idea.
    Delete { id: i64 },
    /// Show an idea's commit history.
    History { id: i64 },
    /// Chart ideas grouped by status.
    Dashboard,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ideaflow=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let base_url =
        std::env::var("IDEAFLOW_API_URL").unwrap_or_else(|_| "http://localhost:3000".into());
    let mut store = IdeaStore::new(HttpIdeaApi::new(base_url));

    // One fetch on load; a failure is logged and the session continues with
    // an empty local list.
    if let Err(e) = store.load().await {
        tracing::error!(error = %e, "Failed to fetch ideas");
    }

    match cli.command {
        Command::List => {
            println!("{}", view::render_ideas(store.ideas(), store.expanded()));
        }

        Command::Add { text, priority } => match store.add_idea(&text, priority).await {
            Ok(idea) => println!("Added idea #{} ({priority})", idea.id),
            Err(e) => {
                tracing::error!(error = %e, "Failed to add idea");
                println!("Failed to add idea");
            }
        },

        Command::Status { id, status, comment } => {
            // Comment acquisition happens before the store call, and only
            // when the idea is known locally.
            let comment = match comment {
                Some(c) => Some(c),
                None if store.get(id).is_some() => StdinPrompt.comment_for(status),
                None => None,
            };
            match store.change_status(id, status, comment.as_deref()).await {
                Ok(true) => println!("Idea #{id} moved to {status}"),
                Ok(false) => println!("No idea with id {id}"),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to update idea status");
                    println!("Failed to update idea status");
                }
            }
        }

        Command::Delete { id } => match store.delete_idea(id).await {
            Ok(()) => println!("Deleted idea #{id}"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to delete idea");
                println!("Failed to delete idea");
            }
        },

        Command::History { id } => {
            store.toggle_history(id);
            match store.get(id) {
                Some(idea) => print!("{}", view::render_history(idea)),
                None => println!("No idea with id {id}"),
            }
        }

        Command::Dashboard => {
            println!("{}", view::render_dashboard(&store.status_counts()));
        }
    }

    Ok(())
}
