mod award;
mod player;

pub mod api;

pub use award::{AwardRecord, PlayerRef, PlayerSummary};
pub use player::Player;
pub use api::*;
