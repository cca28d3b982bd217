use anchor_lang::prelude::*;

use crate::state::Treasury;

#[derive(Accounts)]
pub struct CustodiedBalance<'info> {
    #[account(
        seeds = [Treasury::SEED],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,
}

pub fn handler(ctx: Context<CustodiedBalance>) -> Result<u64> {
    Ok(ctx.accounts.treasury.custodied_balance)
}
