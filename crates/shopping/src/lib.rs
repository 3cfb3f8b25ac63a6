mod categorization;
mod restock;

pub use categorization::*;
pub use restock::*;
