use anchor_lang::prelude::*;

use crate::errors::StakeError;
use crate::events::GameResolved;
use crate::settlement::settle_solo;
use crate::state::{Ledger, PlayerStats, Stake, Treasury};
use crate::utils::{load_account, store_account, transfer_from_treasury};

#[derive(Accounts)]
#[instruction(game_id: [u8; 32])]
pub struct ResolveGame<'info> {
    #[account(
        seeds = [Ledger::SEED],
        bump = ledger.bump,
        has_one = authority @ StakeError::Unauthorized,
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// CHECK: Stake PDA. Address is verified by seeds; an unallocated address
    /// is reported as `UnknownGame` by the handler.
    #[account(
        mut,
        seeds = [Stake::SEED, game_id.as_ref()],
        bump,
    )]
    pub stake: UncheckedAccount<'info>,

    /// CHECK: Staking player's wallet; must equal `stake.player`. Receives the payout.
    #[account(mut)]
    pub player: UncheckedAccount<'info>,

    /// CHECK: Player stats PDA. Address is verified by seeds, contents by the handler.
    #[account(
        mut,
        seeds = [PlayerStats::SEED, player.key().as_ref()],
        bump,
    )]
    pub player_stats: UncheckedAccount<'info>,

    /// Ledger authority (outcome oracle).
    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<ResolveGame>, game_id: [u8; 32], player_won: bool) -> Result<()> {
    let clock = Clock::get()?;
    let stake_info = ctx.accounts.stake.to_account_info();
    let stats_info = ctx.accounts.player_stats.to_account_info();

    let mut stake: Stake = load_account(&stake_info, StakeError::UnknownGame)?;
    stake.ensure_unresolved()?;
    require_keys_eq!(
        ctx.accounts.player.key(),
        stake.player,
        StakeError::PlayerMismatch
    );
    let mut stats: PlayerStats = load_account(&stats_info, StakeError::StatsAccountMismatch)?;
    let tier = ctx.accounts.ledger.tier(stake.tier)?.clone();

    let payout = settle_solo(
        &mut stake,
        &tier,
        &mut ctx.accounts.treasury,
        &mut stats,
        player_won,
        clock.unix_timestamp,
    )?;

    store_account(&stake_info, &stake)?;
    store_account(&stats_info, &stats)?;

    // All bookkeeping is committed above; the payout moves last.
    transfer_from_treasury(
        &ctx.accounts.treasury.to_account_info(),
        &ctx.accounts.player.to_account_info(),
        payout,
    )?;

    msg!(
        "Solo game resolved: {} | payout {}",
        if player_won { "win" } else { "loss" },
        payout
    );

    emit!(GameResolved {
        game_id,
        player: stake.player,
        player_won,
        payout,
    });

    Ok(())
}
