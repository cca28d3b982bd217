use anchor_lang::prelude::*;

use crate::events::HouseFunded;
use crate::state::Treasury;
use crate::utils::transfer_to_treasury;

#[derive(Accounts)]
pub struct FundHouse<'info> {
    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// Anyone can fund the bankroll (permissionless).
    #[account(mut)]
    pub funder: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// A zero amount is accepted and does nothing.
pub fn handler(ctx: Context<FundHouse>, amount: u64) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    ctx.accounts.treasury.deposit(amount)?;

    transfer_to_treasury(
        &ctx.accounts.system_program.to_account_info(),
        &ctx.accounts.funder.to_account_info(),
        &ctx.accounts.treasury.to_account_info(),
        amount,
    )?;

    emit!(HouseFunded {
        funder: ctx.accounts.funder.key(),
        amount,
        custodied_balance: ctx.accounts.treasury.custodied_balance,
    });

    Ok(())
}
