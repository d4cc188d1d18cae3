pub mod group;
pub mod node;
pub mod stats;

pub use group::{GroupClass, TermGroup};
pub use node::{Element, Node};
pub use stats::{GroupStats, MatchStat};
