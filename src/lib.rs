pub mod card;
pub mod config;
pub mod observability;
pub mod session;

pub use config::Config;
pub use session::Session;
