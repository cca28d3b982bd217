//! Stake lifecycle and settlement state machine.
//!
//! Every function validates all of its preconditions before writing anything,
//! so a returned error leaves the accounts exactly as they were. Handlers call
//! these with their deserialized accounts, persist the result, and only then
//! move lamports.

use anchor_lang::prelude::*;

use crate::errors::StakeError;
use crate::state::{GameState, Ledger, MultiplayerGame, PlayerStats, Stake, Tier, Treasury};

/// Records a solo stake into a freshly allocated `Stake` account.
pub fn open_stake(
    ledger: &mut Ledger,
    treasury: &mut Treasury,
    stake: &mut Stake,
    game_id: [u8; 32],
    player: Pubkey,
    amount: u64,
    now: i64,
) -> Result<()> {
    require!(!stake.is_recorded(), StakeError::DuplicateGame);
    let (tier, _) = ledger.tier_of(amount)?;
    let total_games = ledger
        .total_solo_games
        .checked_add(1)
        .ok_or(StakeError::MathOverflow)?;

    treasury.accept_stake(amount)?;
    ledger.record_volume(amount)?;
    ledger.total_solo_games = total_games;

    stake.game_id = game_id;
    stake.player = player;
    stake.amount = amount;
    stake.tier = tier;
    stake.resolved = false;
    stake.won = false;
    stake.payout = 0;
    stake.created_at = now;
    stake.resolved_at = 0;

    Ok(())
}

/// Resolves a solo stake. Returns the lamports owed to the player.
pub fn settle_solo(
    stake: &mut Stake,
    tier: &Tier,
    treasury: &mut Treasury,
    stats: &mut PlayerStats,
    player_won: bool,
    now: i64,
) -> Result<u64> {
    stake.ensure_unresolved()?;
    require_keys_eq!(stats.player, stake.player, StakeError::StatsAccountMismatch);

    let payout = if player_won { tier.solo_payout()? } else { 0 };
    treasury.check_payout(payout, stake.amount)?;

    stake.resolved = true;
    stake.won = player_won;
    stake.payout = payout;
    stake.resolved_at = now;

    // A lost stake is never paid out; it stays custodied as house funds.
    treasury.settle(stake.amount, payout)?;

    if player_won {
        stats.record_win(stake.amount, payout)?;
    } else {
        stats.record_loss(stake.amount)?;
    }

    Ok(payout)
}

/// Records a new multiplayer game with the creator as its first player.
pub fn open_multiplayer(
    ledger: &mut Ledger,
    treasury: &mut Treasury,
    game: &mut MultiplayerGame,
    game_id: [u8; 32],
    creator: Pubkey,
    amount: u64,
    now: i64,
) -> Result<()> {
    require!(!game.is_recorded(), StakeError::DuplicateGame);
    let (tier, _) = ledger.tier_of(amount)?;
    let total_games = ledger
        .total_multiplayer_games
        .checked_add(1)
        .ok_or(StakeError::MathOverflow)?;

    treasury.accept_stake(amount)?;
    ledger.record_volume(amount)?;
    ledger.total_multiplayer_games = total_games;

    game.game_id = game_id;
    game.tier = tier;
    game.stake_amount = amount;
    game.players = vec![creator];
    game.total_pool = amount;
    game.state = GameState::Open;
    game.winner = None;
    game.payout = 0;
    game.created_at = now;
    game.resolved_at = 0;

    Ok(())
}

pub fn join_multiplayer(
    ledger: &mut Ledger,
    treasury: &mut Treasury,
    game: &mut MultiplayerGame,
    joiner: Pubkey,
    amount: u64,
) -> Result<()> {
    game.join(joiner, amount)?;
    treasury.accept_stake(amount)?;
    ledger.record_volume(amount)
}

/// Resolves a multiplayer game. `stats` must hold every player's stats in
/// `game.players` order. Returns the pool paid to the winner.
pub fn settle_multiplayer(
    game: &mut MultiplayerGame,
    treasury: &mut Treasury,
    stats: &mut [PlayerStats],
    winner: Pubkey,
    now: i64,
) -> Result<u64> {
    game.ensure_open()?;
    require!(game.has_player(&winner), StakeError::PlayerNotInGame);
    require!(
        stats.len() == game.players.len()
            && stats
                .iter()
                .zip(game.players.iter())
                .all(|(s, player)| s.player == *player),
        StakeError::StatsAccountMismatch
    );

    let payout = game.total_pool;
    treasury.check_payout(payout, payout)?;

    game.state = GameState::Resolved;
    game.winner = Some(winner);
    game.total_pool = 0;
    game.payout = payout;
    game.resolved_at = now;

    treasury.settle(payout, payout)?;

    for player_stats in stats.iter_mut() {
        if player_stats.player == winner {
            player_stats.record_win(game.stake_amount, payout)?;
        } else {
            player_stats.record_loss(game.stake_amount)?;
        }
    }

    Ok(payout)
}
