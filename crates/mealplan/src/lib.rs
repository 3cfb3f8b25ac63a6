mod availability;
mod history;
mod menu;
mod planner;
mod safety;
mod selector;
mod shopping;
mod weight;

pub use availability::*;
pub use history::*;
pub use menu::*;
pub use planner::*;
pub use safety::*;
pub use selector::*;
pub use shopping::*;
pub use weight::*;
