use anchor_lang::prelude::*;

use crate::events::StakePlaced;
use crate::settlement::open_stake;
use crate::state::{Ledger, PlayerStats, Stake, Treasury};
use crate::utils::transfer_to_treasury;

#[derive(Accounts)]
#[instruction(game_id: [u8; 32])]
pub struct PlaceStake<'info> {
    #[account(
        mut,
        seeds = [Ledger::SEED],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// Existing stakes are rejected in the handler as `DuplicateGame`.
    #[account(
        init_if_needed,
        payer = player,
        space = 8 + Stake::INIT_SPACE,
        seeds = [Stake::SEED, game_id.as_ref()],
        bump,
    )]
    pub stake: Account<'info, Stake>,

    #[account(
        init_if_needed,
        payer = player,
        space = 8 + PlayerStats::INIT_SPACE,
        seeds = [PlayerStats::SEED, player.key().as_ref()],
        bump,
    )]
    pub player_stats: Account<'info, PlayerStats>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<PlaceStake>, game_id: [u8; 32], amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let player_key = ctx.accounts.player.key();

    open_stake(
        &mut ctx.accounts.ledger,
        &mut ctx.accounts.treasury,
        &mut ctx.accounts.stake,
        game_id,
        player_key,
        amount,
        clock.unix_timestamp,
    )?;
    ctx.accounts.stake.bump = ctx.bumps.stake;

    init_player_stats(&mut ctx.accounts.player_stats, player_key, ctx.bumps.player_stats);

    transfer_to_treasury(
        &ctx.accounts.system_program.to_account_info(),
        &ctx.accounts.player.to_account_info(),
        &ctx.accounts.treasury.to_account_info(),
        amount,
    )?;

    emit!(StakePlaced {
        game_id,
        player: player_key,
        amount,
        tier: ctx.accounts.stake.tier,
    });

    Ok(())
}

/// Stats are created zeroed by `init_if_needed`; only the first stake sets the owner.
pub(crate) fn init_player_stats(stats: &mut PlayerStats, player: Pubkey, bump: u8) {
    if stats.player == Pubkey::default() {
        stats.player = player;
        stats.bump = bump;
    }
}
