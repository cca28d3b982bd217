//! Playverse Stake: tiered staking and settlement for short-lived games.
//!
//! Players escrow SOL into a program-owned treasury to enter a solo game
//! (against the house bankroll) or a multiplayer game (equal stakes,
//! winner-take-pool). The ledger authority reports outcomes; settlement
//! updates bookkeeping first and moves lamports last.

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod settlement;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

use instructions::*;
use state::{PlayerStatsView, Tier};

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod playverse_stake {
    use super::*;

    /// One-time setup: fixes the authority and tier table, creates the treasury.
    /// Pass an empty `tiers` vector for the default Bronze/Silver table.
    pub fn initialize_ledger(ctx: Context<InitializeLedger>, tiers: Vec<Tier>) -> Result<()> {
        instructions::initialize_ledger::handler(ctx, tiers)
    }

    /// Anyone can add to the house bankroll.
    pub fn fund_house(ctx: Context<FundHouse>, amount: u64) -> Result<()> {
        instructions::fund_house::handler(ctx, amount)
    }

    /// Authority withdraws house funds not backing any unresolved game.
    pub fn withdraw_house_funds(ctx: Context<WithdrawHouseFunds>, amount: u64) -> Result<()> {
        instructions::withdraw_house_funds::handler(ctx, amount)
    }

    /// Player escrows a tier amount against a solo game.
    pub fn place_stake(ctx: Context<PlaceStake>, game_id: [u8; 32], amount: u64) -> Result<()> {
        instructions::place_stake::handler(ctx, game_id, amount)
    }

    /// Authority reports a solo outcome; a win pays `amount * win_multiplier`.
    pub fn resolve_game(ctx: Context<ResolveGame>, game_id: [u8; 32], player_won: bool) -> Result<()> {
        instructions::resolve_game::handler(ctx, game_id, player_won)
    }

    /// Creator opens a multiplayer game with the first stake.
    pub fn create_multiplayer_game(
        ctx: Context<CreateMultiplayerGame>,
        game_id: [u8; 32],
        amount: u64,
    ) -> Result<()> {
        instructions::create_multiplayer_game::handler(ctx, game_id, amount)
    }

    /// Player joins an open game with a matching stake.
    pub fn join_multiplayer_game(
        ctx: Context<JoinMultiplayerGame>,
        game_id: [u8; 32],
        amount: u64,
    ) -> Result<()> {
        instructions::join_multiplayer_game::handler(ctx, game_id, amount)
    }

    /// Authority names the winner, who receives the whole pool.
    /// Every player's stats PDA must be passed as remaining accounts in join order.
    pub fn resolve_multiplayer_game(
        ctx: Context<ResolveMultiplayerGame>,
        game_id: [u8; 32],
        winner: Pubkey,
    ) -> Result<()> {
        instructions::resolve_multiplayer_game::handler(ctx, game_id, winner)
    }

    pub fn get_player_stats(ctx: Context<GetPlayerStats>, player: Pubkey) -> Result<PlayerStatsView> {
        instructions::get_player_stats::handler(ctx, player)
    }

    pub fn custodied_balance(ctx: Context<CustodiedBalance>) -> Result<u64> {
        instructions::custodied_balance::handler(ctx)
    }
}
