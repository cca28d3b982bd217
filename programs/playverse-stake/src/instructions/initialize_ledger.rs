use anchor_lang::prelude::*;

use crate::events::LedgerInitialized;
use crate::state::{validate_tier_table, Ledger, Tier, Treasury};

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Ledger::INIT_SPACE,
        seeds = [Ledger::SEED],
        bump,
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init,
        payer = authority,
        space = 8 + Treasury::INIT_SPACE,
        seeds = [Treasury::SEED],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// Becomes the sole resolution authority.
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// An empty `tiers` vector installs the default Bronze/Silver table.
pub fn handler(ctx: Context<InitializeLedger>, tiers: Vec<Tier>) -> Result<()> {
    let tiers = if tiers.is_empty() {
        Tier::default_table()
    } else {
        tiers
    };
    validate_tier_table(&tiers)?;

    let ledger = &mut ctx.accounts.ledger;
    ledger.authority = ctx.accounts.authority.key();
    ledger.tiers = tiers;
    ledger.total_solo_games = 0;
    ledger.total_multiplayer_games = 0;
    ledger.total_volume = 0;
    ledger.bump = ctx.bumps.ledger;

    let treasury = &mut ctx.accounts.treasury;
    treasury.custodied_balance = 0;
    treasury.outstanding_obligations = 0;
    treasury.total_deposited = 0;
    treasury.total_paid_out = 0;
    treasury.bump = ctx.bumps.treasury;

    emit!(LedgerInitialized {
        authority: ledger.authority,
        tier_count: ledger.tiers.len() as u8,
    });

    Ok(())
}
