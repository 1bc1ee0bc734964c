use clap::Subcommand;
use daybook_core::storage::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,
    /// Set the portal base URL
    SetUrl {
        /// Base URL of the hosted portal backend
        url: String,
    },
    /// Set the journal tracks shown on the hub
    SetTracks {
        /// Track names, e.g. emotions self-care
        tracks: Vec<String>,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::SetUrl { url } => {
            let mut config = Config::load()?;
            config.portal.base_url = url;
            config.save()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::SetTracks { tracks } => {
            if tracks.is_empty() {
                return Err("at least one track is required".into());
            }
            let mut config = Config::load()?;
            config.streaks.tracks = tracks;
            config.save()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
