pub mod ledger;
pub mod multiplayer_game;
pub mod player_stats;
pub mod stake;
pub mod tier;
pub mod treasury;

pub use ledger::*;
pub use multiplayer_game::*;
pub use player_stats::*;
pub use stake::*;
pub use tier::*;
pub use treasury::*;
