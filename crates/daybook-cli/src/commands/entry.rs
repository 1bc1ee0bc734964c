use clap::Subcommand;
use daybook_core::storage::{Config, SqliteBackend};
use daybook_core::{DraftStore, DraftUpdate, EntrySession, PortalClient};

use super::default_entry_id;

#[derive(Subcommand)]
pub enum EntryAction {
    /// Record a Likert-scale answer
    AnswerScale {
        /// Question index
        question: u32,
        /// Scale value
        value: u32,
        /// Entry id (defaults to today)
        #[arg(long)]
        entry: Option<String>,
    },
    /// Record a multi-select answer
    AnswerSelect {
        /// Question index
        question: u32,
        /// Selected option ids, in order
        options: Vec<String>,
        /// Entry id (defaults to today)
        #[arg(long)]
        entry: Option<String>,
    },
    /// Show the current draft
    Show {
        /// Entry id (defaults to today)
        #[arg(long)]
        entry: Option<String>,
    },
    /// Discard the draft
    Discard {
        /// Entry id (defaults to today)
        #[arg(long)]
        entry: Option<String>,
    },
    /// Submit the entry to the portal and clear the draft
    Submit {
        /// Entry id (defaults to today)
        #[arg(long)]
        entry: Option<String>,
    },
}

pub fn run(action: EntryAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = DraftStore::new(SqliteBackend::open()?);

    match action {
        EntryAction::AnswerScale {
            question,
            value,
            entry,
        } => {
            let entry_id = entry.unwrap_or_else(default_entry_id);
            store.save(&entry_id, &DraftUpdate::scale(question, value));
            println!("{}", serde_json::to_string_pretty(&store.load(&entry_id))?);
        }
        EntryAction::AnswerSelect {
            question,
            options,
            entry,
        } => {
            let entry_id = entry.unwrap_or_else(default_entry_id);
            store.save(&entry_id, &DraftUpdate::select(question, options));
            println!("{}", serde_json::to_string_pretty(&store.load(&entry_id))?);
        }
        EntryAction::Show { entry } => {
            let entry_id = entry.unwrap_or_else(default_entry_id);
            println!("{}", serde_json::to_string_pretty(&store.load(&entry_id))?);
        }
        EntryAction::Discard { entry } => {
            let entry_id = entry.unwrap_or_else(default_entry_id);
            store.clear(&entry_id);
            println!("discarded draft for {entry_id}");
        }
        EntryAction::Submit { entry } => {
            let entry_id = entry.unwrap_or_else(default_entry_id);
            let config = Config::load()?;
            let client = PortalClient::new(config.portal.base_url);

            let mut session = EntrySession::begin(store, entry_id.clone());
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(session.submit(&client))?;
            println!("submitted entry {entry_id}");
        }
    }
    Ok(())
}
