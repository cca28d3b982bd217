use anchor_lang::prelude::*;

use crate::errors::StakeError;

/// Solo stake against the house. Kept after resolution as an audit record.
#[account]
#[derive(InitSpace)]
pub struct Stake {
    /// Caller-supplied game identifier.
    pub game_id: [u8; 32],
    /// Wallet that placed the stake.
    pub player: Pubkey,
    /// Escrowed lamports; always a registered tier amount.
    pub amount: u64,
    /// Index into the ledger tier table.
    pub tier: u8,
    /// Set once by `resolve_game`.
    pub resolved: bool,
    /// Outcome reported by the authority (meaningful once resolved).
    pub won: bool,
    /// Lamports paid to the player on a win (0 otherwise).
    pub payout: u64,
    /// Unix timestamp when the stake was placed.
    pub created_at: i64,
    /// Unix timestamp of resolution (0 if not yet).
    pub resolved_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl Stake {
    pub const SEED: &'static [u8] = b"stake";

    /// A freshly allocated account is all zeroes; any recorded stake has a player.
    pub fn is_recorded(&self) -> bool {
        self.player != Pubkey::default()
    }

    pub fn ensure_unresolved(&self) -> Result<()> {
        require!(!self.resolved, StakeError::AlreadyResolved);
        Ok(())
    }
}
