use anchor_lang::prelude::*;

use crate::constants::MAX_TIERS;
use crate::errors::StakeError;
use crate::state::tier::{tier_of, Tier};

#[account]
#[derive(InitSpace)]
pub struct Ledger {
    /// Sole signer allowed to report outcomes and withdraw house funds.
    pub authority: Pubkey,
    /// Allowed stakes, strictly ascending by amount.
    #[max_len(MAX_TIERS)]
    pub tiers: Vec<Tier>,
    /// Running count of solo stakes placed.
    pub total_solo_games: u64,
    /// Running count of multiplayer games created.
    pub total_multiplayer_games: u64,
    /// Cumulative lamports staked across both game shapes.
    pub total_volume: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl Ledger {
    pub const SEED: &'static [u8] = b"ledger";

    pub fn tier_of(&self, amount: u64) -> Result<(u8, &Tier)> {
        tier_of(&self.tiers, amount)
    }

    pub fn tier(&self, index: u8) -> Result<&Tier> {
        self.tiers
            .get(index as usize)
            .ok_or_else(|| error!(StakeError::InvalidTier))
    }

    pub fn record_volume(&mut self, amount: u64) -> Result<()> {
        self.total_volume = self
            .total_volume
            .checked_add(amount)
            .ok_or(StakeError::MathOverflow)?;
        Ok(())
    }
}
