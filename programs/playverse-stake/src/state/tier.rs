use anchor_lang::prelude::*;

use crate::constants::{
    BRONZE_STAKE_LAMPORTS, DEFAULT_WIN_MULTIPLIER, MAX_TIERS, MAX_TIER_NAME_LEN,
    SILVER_STAKE_LAMPORTS,
};
use crate::errors::StakeError;

/// A fixed stake amount and the multiplier a solo win pays on it.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct Tier {
    /// Display name in UTF-8.
    #[max_len(MAX_TIER_NAME_LEN)]
    pub name: String,
    /// Exact stake in lamports.
    pub stake_amount: u64,
    /// Solo payout factor applied to `stake_amount`.
    pub win_multiplier: u16,
}

impl Tier {
    pub fn new(name: &str, stake_amount: u64, win_multiplier: u16) -> Self {
        Self {
            name: name.to_string(),
            stake_amount,
            win_multiplier,
        }
    }

    /// Bronze (0.001 SOL) and Silver (0.01 SOL), both paying 2x.
    pub fn default_table() -> Vec<Tier> {
        vec![
            Tier::new("Bronze", BRONZE_STAKE_LAMPORTS, DEFAULT_WIN_MULTIPLIER),
            Tier::new("Silver", SILVER_STAKE_LAMPORTS, DEFAULT_WIN_MULTIPLIER),
        ]
    }

    pub fn solo_payout(&self) -> Result<u64> {
        self.stake_amount
            .checked_mul(self.win_multiplier as u64)
            .ok_or_else(|| error!(StakeError::MathOverflow))
    }
}

pub fn validate_tier_table(tiers: &[Tier]) -> Result<()> {
    require!(
        !tiers.is_empty() && tiers.len() <= MAX_TIERS,
        StakeError::InvalidTierTable
    );

    for tier in tiers {
        require!(
            !tier.name.is_empty() && tier.name.len() <= MAX_TIER_NAME_LEN,
            StakeError::InvalidTierTable
        );
        require!(tier.stake_amount > 0, StakeError::InvalidTierTable);
        require!(tier.win_multiplier > 0, StakeError::InvalidTierTable);
    }

    // Strict ordering also rules out two tiers sharing an amount.
    require!(
        tiers
            .windows(2)
            .all(|pair| pair[0].stake_amount < pair[1].stake_amount),
        StakeError::InvalidTierTable
    );

    Ok(())
}

/// Exact-match lookup. Returns the tier's index alongside it.
pub fn tier_of(tiers: &[Tier], amount: u64) -> Result<(u8, &Tier)> {
    tiers
        .iter()
        .enumerate()
        .find(|(_, tier)| tier.stake_amount == amount)
        .map(|(index, tier)| (index as u8, tier))
        .ok_or_else(|| error!(StakeError::InvalidTier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_stake_error;

    #[test]
    fn default_table_is_valid() {
        let tiers = Tier::default_table();
        assert!(validate_tier_table(&tiers).is_ok());
        assert_eq!(tiers[0].stake_amount, 1_000_000);
        assert_eq!(tiers[1].stake_amount, 10_000_000);
    }

    #[test]
    fn tier_of_matches_exact_amounts_only() {
        let tiers = Tier::default_table();

        let (index, tier) = tier_of(&tiers, SILVER_STAKE_LAMPORTS).unwrap();
        assert_eq!(index, 1);
        assert_eq!(tier.name, "Silver");

        assert_stake_error(tier_of(&tiers, BRONZE_STAKE_LAMPORTS + 1), StakeError::InvalidTier);
        assert_stake_error(tier_of(&tiers, 0), StakeError::InvalidTier);
    }

    #[test]
    fn rejects_unordered_or_duplicate_amounts() {
        let unordered = vec![Tier::new("High", 10, 2), Tier::new("Low", 1, 2)];
        assert_stake_error(validate_tier_table(&unordered), StakeError::InvalidTierTable);

        let duplicate = vec![Tier::new("A", 5, 2), Tier::new("B", 5, 3)];
        assert_stake_error(validate_tier_table(&duplicate), StakeError::InvalidTierTable);
    }

    #[test]
    fn rejects_degenerate_tiers() {
        assert_stake_error(validate_tier_table(&[]), StakeError::InvalidTierTable);
        assert_stake_error(
            validate_tier_table(&[Tier::new("Free", 0, 2)]),
            StakeError::InvalidTierTable,
        );
        assert_stake_error(
            validate_tier_table(&[Tier::new("Void", 100, 0)]),
            StakeError::InvalidTierTable,
        );
        assert_stake_error(
            validate_tier_table(&[Tier::new("", 100, 2)]),
            StakeError::InvalidTierTable,
        );
        assert_stake_error(
            validate_tier_table(&[Tier::new("AVeryLongTierNameIndeed", 100, 2)]),
            StakeError::InvalidTierTable,
        );

        let too_many: Vec<Tier> = (1..=MAX_TIERS as u64 + 1)
            .map(|i| Tier::new("T", i, 2))
            .collect();
        assert_stake_error(validate_tier_table(&too_many), StakeError::InvalidTierTable);
    }

    #[test]
    fn solo_payout_applies_multiplier() {
        assert_eq!(Tier::new("Bronze", 1_000_000, 2).solo_payout().unwrap(), 2_000_000);
        assert_stake_error(
            Tier::new("Huge", u64::MAX, 2).solo_payout(),
            StakeError::MathOverflow,
        );
    }
}
