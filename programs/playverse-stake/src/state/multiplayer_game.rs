use anchor_lang::prelude::*;

use crate::constants::MAX_PLAYERS;
use crate::errors::StakeError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum GameState {
    /// Accepting joins; pool is escrowed.
    Open,
    /// Winner paid; pool drained.
    Resolved,
}

/// Winner-take-pool game built from equal stakes.
#[account]
#[derive(InitSpace)]
pub struct MultiplayerGame {
    /// Caller-supplied game identifier.
    pub game_id: [u8; 32],
    /// Index into the ledger tier table, fixed at creation.
    pub tier: u8,
    /// Lamports every player must contribute.
    pub stake_amount: u64,
    /// Players in join order; the creator is first.
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,
    /// Escrowed lamports; `stake_amount * players.len()` while open, 0 once resolved.
    pub total_pool: u64,
    /// Current lifecycle state.
    pub state: GameState,
    /// Winner (None until resolved).
    pub winner: Option<Pubkey>,
    /// Lamports paid to the winner.
    pub payout: u64,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of resolution (0 if not yet).
    pub resolved_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl MultiplayerGame {
    pub const SEED: &'static [u8] = b"multiplayer";

    /// A freshly allocated account has no creator yet.
    pub fn is_recorded(&self) -> bool {
        !self.players.is_empty()
    }

    pub fn ensure_open(&self) -> Result<()> {
        require!(self.state == GameState::Open, StakeError::GameNotOpen);
        Ok(())
    }

    pub fn has_player(&self, player: &Pubkey) -> bool {
        self.players.contains(player)
    }

    /// Validates and applies a join. Nothing changes on error.
    pub fn join(&mut self, joiner: Pubkey, amount: u64) -> Result<()> {
        self.ensure_open()?;
        require!(amount == self.stake_amount, StakeError::StakeMismatch);
        require!(!self.has_player(&joiner), StakeError::DuplicatePlayer);
        require!(self.players.len() < MAX_PLAYERS, StakeError::GameFull);

        let pool = self
            .total_pool
            .checked_add(amount)
            .ok_or(StakeError::MathOverflow)?;

        self.players.push(joiner);
        self.total_pool = pool;
        Ok(())
    }
}
