mod command;
mod profile;
mod scan;
mod store;

pub use command::*;
pub use profile::*;
pub use scan::*;
pub use store::*;

/// Splits free-form user input on ASCII or full-width commas, dropping blanks.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split([',', '，'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
