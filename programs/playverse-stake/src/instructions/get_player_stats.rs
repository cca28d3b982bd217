use anchor_lang::prelude::*;

use crate::errors::StakeError;
use crate::state::{PlayerStats, PlayerStatsView};
use crate::utils::load_account;

#[derive(Accounts)]
#[instruction(player: Pubkey)]
pub struct GetPlayerStats<'info> {
    /// CHECK: Player stats PDA; may be unallocated for an unseen player.
    #[account(
        seeds = [PlayerStats::SEED, player.as_ref()],
        bump,
    )]
    pub player_stats: UncheckedAccount<'info>,
}

/// Zeroed counters for a player who has never staked.
pub fn handler(ctx: Context<GetPlayerStats>, _player: Pubkey) -> Result<PlayerStatsView> {
    let info = ctx.accounts.player_stats.to_account_info();
    if info.data_is_empty() {
        return Ok(PlayerStatsView::default());
    }
    let stats: PlayerStats = load_account(&info, StakeError::StatsAccountMismatch)?;
    Ok(stats.view())
}
