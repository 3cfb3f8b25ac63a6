mod catalog;
mod ingredient;
mod synonym;
mod types;

pub use catalog::*;
pub use ingredient::*;
pub use synonym::*;
pub use types::*;
