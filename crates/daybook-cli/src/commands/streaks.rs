use clap::Subcommand;
use daybook_core::storage::Config;
use daybook_core::{JournalHub, PortalClient};

#[derive(Subcommand)]
pub enum StreaksAction {
    /// Fetch and show streaks for the configured tracks
    Show,
}

pub fn run(action: StreaksAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StreaksAction::Show => {
            let config = Config::load()?;
            let hub = JournalHub::from_config(PortalClient::new(&config.portal.base_url), &config);

            let runtime = tokio::runtime::Runtime::new()?;
            let records = runtime.block_on(hub.mount());
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }
    Ok(())
}
