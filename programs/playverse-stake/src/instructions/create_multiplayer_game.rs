use anchor_lang::prelude::*;

use crate::events::MultiplayerGameCreated;
use crate::instructions::place_stake::init_player_stats;
use crate::settlement::open_multiplayer;
use crate::state::{Ledger, MultiplayerGame, PlayerStats, Treasury};
use crate::utils::transfer_to_treasury;

#[derive(Accounts)]
#[instruction(game_id: [u8; 32])]
pub struct CreateMultiplayerGame<'info> {
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

    /// Existing games are rejected in the handler as `DuplicateGame`.
    #[account(
        init_if_needed,
        payer = creator,
        space = 8 + MultiplayerGame::INIT_SPACE,
        seeds = [MultiplayerGame::SEED, game_id.as_ref()],
        bump,
    )]
    pub game: Account<'info, MultiplayerGame>,

    #[account(
        init_if_needed,
        payer = creator,
        space = 8 + PlayerStats::INIT_SPACE,
        seeds = [PlayerStats::SEED, creator.key().as_ref()],
        bump,
    )]
    pub creator_stats: Account<'info, PlayerStats>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateMultiplayerGame>, game_id: [u8; 32], amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let creator_key = ctx.accounts.creator.key();

    open_multiplayer(
        &mut ctx.accounts.ledger,
        &mut ctx.accounts.treasury,
        &mut ctx.accounts.game,
        game_id,
        creator_key,
        amount,
        clock.unix_timestamp,
    )?;
    ctx.accounts.game.bump = ctx.bumps.game;

    init_player_stats(&mut ctx.accounts.creator_stats, creator_key, ctx.bumps.creator_stats);

    transfer_to_treasury(
        &ctx.accounts.system_program.to_account_info(),
        &ctx.accounts.creator.to_account_info(),
        &ctx.accounts.treasury.to_account_info(),
        amount,
    )?;

    emit!(MultiplayerGameCreated {
        game_id,
        creator: creator_key,
        stake_amount: amount,
        tier: ctx.accounts.game.tier,
    });

    Ok(())
}
