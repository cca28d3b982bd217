use anchor_lang::prelude::*;

use crate::errors::StakeError;

#[account]
#[derive(InitSpace)]
pub struct PlayerStats {
    /// Wallet these counters belong to.
    pub player: Pubkey,
    /// Total resolved wins.
    pub wins: u32,
    /// Total resolved losses.
    pub losses: u32,
    /// Cumulative lamports staked in resolved games.
    pub total_wagered: u64,
    /// Cumulative lamports paid out on wins.
    pub total_won: u64,
    /// PDA bump seed.
    pub bump: u8,
}

/// Read-only snapshot returned by `get_player_stats`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerStatsView {
    pub wins: u32,
    pub losses: u32,
    pub total_wagered: u64,
    pub total_won: u64,
}

impl PlayerStats {
    pub const SEED: &'static [u8] = b"stats";

    pub fn record_win(&mut self, wagered: u64, won: u64) -> Result<()> {
        self.wins = self.wins.checked_add(1).ok_or(StakeError::MathOverflow)?;
        self.total_won = self
            .total_won
            .checked_add(won)
            .ok_or(StakeError::MathOverflow)?;
        self.add_wagered(wagered)
    }

    pub fn record_loss(&mut self, wagered: u64) -> Result<()> {
        self.losses = self.losses.checked_add(1).ok_or(StakeError::MathOverflow)?;
        self.add_wagered(wagered)
    }

    fn add_wagered(&mut self, wagered: u64) -> Result<()> {
        self.total_wagered = self
            .total_wagered
            .checked_add(wagered)
            .ok_or(StakeError::MathOverflow)?;
        Ok(())
    }

    pub fn view(&self) -> PlayerStatsView {
        PlayerStatsView {
            wins: self.wins,
            losses: self.losses,
            total_wagered: self.total_wagered,
            total_won: self.total_won,
        }
    }
}
