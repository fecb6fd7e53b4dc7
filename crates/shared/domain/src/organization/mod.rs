//! Organization structure contracts: ranks, the units that own them and the
//! accounts that create and modify them.

mod account;
mod embed;
mod rank;
mod unit;

pub use account::Account;
pub use embed::{EmbedMismatch, Identified, Relation};
pub use rank::{Rank, RankInput};
pub use unit::Unit;
