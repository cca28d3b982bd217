use anchor_lang::prelude::*;

use crate::errors::StakeError;
use crate::events::HouseWithdrawn;
use crate::state::{Ledger, Treasury};
use crate::utils::transfer_from_treasury;

#[derive(Accounts)]
pub struct WithdrawHouseFunds<'info> {
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

    /// Ledger authority; receives the withdrawn lamports.
    #[account(mut)]
    pub authority: Signer<'info>,
}

/// Withdraws house profit. Escrowed stakes are never withdrawable.
pub fn handler(ctx: Context<WithdrawHouseFunds>, amount: u64) -> Result<()> {
    require!(amount > 0, StakeError::ZeroAmount);

    let treasury = &mut ctx.accounts.treasury;
    if let Err(err) = treasury.settle(0, amount) {
        msg!(
            "Withdrawal of {} refused: free balance is {}",
            amount,
            treasury.free_balance()
        );
        return Err(err);
    }

    transfer_from_treasury(
        &ctx.accounts.treasury.to_account_info(),
        &ctx.accounts.authority.to_account_info(),
        amount,
    )?;

    emit!(HouseWithdrawn {
        authority: ctx.accounts.authority.key(),
        amount,
        custodied_balance: ctx.accounts.treasury.custodied_balance,
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_stake_error, leak_accounts, ledger_and_treasury, wallet};
    use anchor_lang::Accounts;
    use std::collections::BTreeSet;

    fn funded_treasury() -> Treasury {
        Treasury {
            custodied_balance: 5_000,
            outstanding_obligations: 1_000,
            total_deposited: 5_000,
            total_paid_out: 0,
            bump: 0,
        }
    }

    fn validate(signer: Pubkey, authority: Pubkey) -> Result<()> {
        let (ledger, treasury) = ledger_and_treasury(authority, &funded_treasury());
        let before = treasury.try_borrow_data().unwrap().to_vec();
        let mut accounts = leak_accounts(vec![ledger, treasury.clone(), wallet(signer, true)]);

        let result = WithdrawHouseFunds::try_accounts(
            &crate::ID,
            &mut accounts,
            &[],
            &mut WithdrawHouseFundsBumps::default(),
            &mut BTreeSet::new(),
        )
        .map(|_| ());
        assert_eq!(treasury.try_borrow_data().unwrap().to_vec(), before);
        result
    }

    #[test]
    fn stranger_cannot_withdraw() {
        assert_stake_error(
            validate(Pubkey::new_unique(), Pubkey::new_unique()),
            StakeError::Unauthorized,
        );
    }

    #[test]
    fn ledger_authority_passes_validation() {
        let authority = Pubkey::new_unique();
        assert!(validate(authority, authority).is_ok());
    }
}
