use anchor_lang::prelude::*;

use crate::errors::StakeError;
use crate::events::PlayerJoined;
use crate::instructions::place_stake::init_player_stats;
use crate::settlement::join_multiplayer;
use crate::state::{Ledger, MultiplayerGame, PlayerStats, Treasury};
use crate::utils::{load_account, store_account, transfer_to_treasury};

#[derive(Accounts)]
#[instruction(game_id: [u8; 32])]
pub struct JoinMultiplayerGame<'info> {
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

    /// CHECK: Multiplayer game PDA. Address is verified by seeds; an
    /// unallocated address is reported as `UnknownGame` by the handler.
    #[account(
        mut,
        seeds = [MultiplayerGame::SEED, game_id.as_ref()],
        bump,
    )]
    pub game: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = player,
        space = 8 + PlayerStats::INIT_SPACE,
        seeds = [PlayerStats::SEED, player.key().as_ref()],
        bump,
    )]
    pub player_stats: Account<'info, PlayerStats>,

    /// The joining player.
    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<JoinMultiplayerGame>, game_id: [u8; 32], amount: u64) -> Result<()> {
    let player_key = ctx.accounts.player.key();
    let game_info = ctx.accounts.game.to_account_info();

    let mut game: MultiplayerGame = load_account(&game_info, StakeError::UnknownGame)?;

    join_multiplayer(
        &mut ctx.accounts.ledger,
        &mut ctx.accounts.treasury,
        &mut game,
        player_key,
        amount,
    )?;
    store_account(&game_info, &game)?;

    init_player_stats(&mut ctx.accounts.player_stats, player_key, ctx.bumps.player_stats);

    transfer_to_treasury(
        &ctx.accounts.system_program.to_account_info(),
        &ctx.accounts.player.to_account_info(),
        &ctx.accounts.treasury.to_account_info(),
        amount,
    )?;

    emit!(PlayerJoined {
        game_id,
        player: player_key,
        player_count: game.players.len() as u8,
        total_pool: game.total_pool,
    });

    Ok(())
}
