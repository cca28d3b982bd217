pub mod create_multiplayer_game;
pub mod custodied_balance;
pub mod fund_house;
pub mod get_player_stats;
pub mod initialize_ledger;
pub mod join_multiplayer_game;
pub mod place_stake;
pub mod resolve_game;
pub mod resolve_multiplayer_game;
pub mod withdraw_house_funds;

pub use create_multiplayer_game::*;
pub use custodied_balance::*;
pub use fund_house::*;
pub use get_player_stats::*;
pub use initialize_ledger::*;
pub use join_multiplayer_game::*;
pub use place_stake::*;
pub use resolve_game::*;
pub use resolve_multiplayer_game::*;
pub use withdraw_house_funds::*;
