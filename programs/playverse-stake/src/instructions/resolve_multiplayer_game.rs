use anchor_lang::prelude::*;

use crate::errors::StakeError;
use crate::events::MultiplayerGameResolved;
use crate::settlement::settle_multiplayer;
use crate::state::{Ledger, MultiplayerGame, PlayerStats, Treasury};
use crate::utils::{load_account, store_account, transfer_from_treasury};

#[derive(Accounts)]
#[instruction(game_id: [u8; 32])]
pub struct ResolveMultiplayerGame<'info> {
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

    /// CHECK: Multiplayer game PDA. Address is verified by seeds; an
    /// unallocated address is reported as `UnknownGame` by the handler.
    #[account(
        mut,
        seeds = [MultiplayerGame::SEED, game_id.as_ref()],
        bump,
    )]
    pub game: UncheckedAccount<'info>,

    /// CHECK: Winner wallet; must equal the `winner` argument. Receives the pool.
    #[account(mut)]
    pub winner_wallet: UncheckedAccount<'info>,

    /// Ledger authority (outcome oracle).
    pub authority: Signer<'info>,
    // remaining_accounts: every player's PlayerStats PDA (writable), in `game.players` order
}

pub fn handler(
    ctx: Context<ResolveMultiplayerGame>,
    game_id: [u8; 32],
    winner: Pubkey,
) -> Result<()> {
    let clock = Clock::get()?;
    let game_info = ctx.accounts.game.to_account_info();

    let mut game: MultiplayerGame = load_account(&game_info, StakeError::UnknownGame)?;
    game.ensure_open()?;
    require!(game.has_player(&winner), StakeError::PlayerNotInGame);
    require_keys_eq!(
        ctx.accounts.winner_wallet.key(),
        winner,
        StakeError::PlayerMismatch
    );
    require!(
        ctx.remaining_accounts.len() == game.players.len(),
        StakeError::StatsAccountMismatch
    );

    let mut stats = ctx
        .remaining_accounts
        .iter()
        .map(|info| load_account::<PlayerStats>(info, StakeError::StatsAccountMismatch))
        .collect::<Result<Vec<_>>>()?;

    let payout = settle_multiplayer(
        &mut game,
        &mut ctx.accounts.treasury,
        &mut stats,
        winner,
        clock.unix_timestamp,
    )?;

    store_account(&game_info, &game)?;
    for (info, player_stats) in ctx.remaining_accounts.iter().zip(stats.iter()) {
        store_account(info, player_stats)?;
    }

    // All bookkeeping is committed above; the pool moves last.
    transfer_from_treasury(
        &ctx.accounts.treasury.to_account_info(),
        &ctx.accounts.winner_wallet.to_account_info(),
        payout,
    )?;

    msg!(
        "Multiplayer game resolved: {} players | pool {} to winner",
        game.players.len(),
        payout
    );

    emit!(MultiplayerGameResolved {
        game_id,
        winner,
        payout,
        player_count: game.players.len() as u8,
    });

    Ok(())
}
