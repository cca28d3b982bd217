use anchor_lang::prelude::*;

use crate::errors::StakeError;

/// Program-owned PDA that physically holds every custodied lamport.
///
/// `custodied_balance` excludes the account's rent-exempt reserve, so payouts
/// bounded by it can never touch rent. `outstanding_obligations` is the sum of
/// unresolved solo stakes and open multiplayer pools; payouts are only ever
/// drawn from the difference between the two.
#[account]
#[derive(InitSpace)]
pub struct Treasury {
    /// Lamports held on behalf of players and the house.
    pub custodied_balance: u64,
    /// Escrowed stake lamports still owed to unresolved games.
    pub outstanding_obligations: u64,
    /// Total lamports ever received (house funding and stakes).
    pub total_deposited: u64,
    /// Total lamports ever paid out (winnings and house withdrawals).
    pub total_paid_out: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl Treasury {
    pub const SEED: &'static [u8] = b"treasury";

    /// House funding. Not an obligation: it is free to back payouts.
    /// A zero amount changes nothing.
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        self.custodied_balance = self
            .custodied_balance
            .checked_add(amount)
            .ok_or(StakeError::MathOverflow)?;
        self.total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(StakeError::MathOverflow)?;
        Ok(())
    }

    /// Player stake intake: custodied and owed back to the game until it resolves.
    pub fn accept_stake(&mut self, amount: u64) -> Result<()> {
        let obligations = self
            .outstanding_obligations
            .checked_add(amount)
            .ok_or(StakeError::MathOverflow)?;
        self.deposit(amount)?;
        self.outstanding_obligations = obligations;
        Ok(())
    }

    /// Lamports not spoken for by any unresolved game.
    pub fn free_balance(&self) -> u64 {
        self.custodied_balance
            .saturating_sub(self.outstanding_obligations)
    }

    /// Checks that `amount` can be paid once `released` lamports of obligations
    /// are settled, without mutating anything.
    pub fn check_payout(&self, amount: u64, released: u64) -> Result<()> {
        let remaining_obligations = self
            .outstanding_obligations
            .checked_sub(released)
            .ok_or(StakeError::MathOverflow)?;
        let free = self
            .custodied_balance
            .checked_sub(remaining_obligations)
            .ok_or(StakeError::InsufficientFunds)?;
        require!(amount <= free, StakeError::InsufficientFunds);
        Ok(())
    }

    /// Settles `released` lamports of obligations and debits `amount` for payout.
    /// The caller moves the lamports afterwards.
    pub fn settle(&mut self, released: u64, amount: u64) -> Result<()> {
        self.check_payout(amount, released)?;
        self.outstanding_obligations -= released;
        self.custodied_balance -= amount;
        self.total_paid_out = self
            .total_paid_out
            .checked_add(amount)
            .ok_or(StakeError::MathOverflow)?;
        debug_assert!(self.is_solvent());
        Ok(())
    }

    pub fn is_solvent(&self) -> bool {
        self.custodied_balance >= self.outstanding_obligations
    }
}
