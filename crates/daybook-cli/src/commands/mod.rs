pub mod config;
pub mod entry;
pub mod streaks;

/// Entry id used when the user doesn't pass `--entry`: today's local date.
pub fn default_entry_id() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
