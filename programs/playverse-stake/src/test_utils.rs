use anchor_lang::error::{Error, ERROR_CODE_OFFSET};
use anchor_lang::prelude::*;
use anchor_lang::AccountSerialize;

use crate::errors::StakeError;

pub fn assert_error_code<T: std::fmt::Debug>(result: anchor_lang::Result<T>, expected_code: u32) {
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number, expected_code,
            "expected error {}, got {}",
            expected_code, err.error_name
        ),
        other => panic!("expected error {}, got {:?}", expected_code, other),
    }
}

pub fn assert_stake_error<T: std::fmt::Debug>(result: anchor_lang::Result<T>, expected: StakeError) {
    assert_error_code(result, expected as u32 + ERROR_CODE_OFFSET);
}

/// Host-side `AccountInfo` with leaked backing storage, usable as `'info`.
pub fn account_info(
    key: Pubkey,
    is_signer: bool,
    is_writable: bool,
    data: Vec<u8>,
    owner: Pubkey,
) -> AccountInfo<'static> {
    AccountInfo::new(
        Box::leak(Box::new(key)),
        is_signer,
        is_writable,
        Box::leak(Box::new(1_000_000_000u64)),
        Box::leak(data.into_boxed_slice()),
        Box::leak(Box::new(owner)),
        false,
        0,
    )
}

/// Serializes `account` into a buffer of `space` bytes owned by this program.
pub fn program_account<T: AccountSerialize>(
    key: Pubkey,
    account: &T,
    space: usize,
    is_writable: bool,
) -> AccountInfo<'static> {
    let mut data = Vec::with_capacity(space);
    account.try_serialize(&mut data).unwrap();
    assert!(data.len() <= space);
    data.resize(space, 0);
    account_info(key, false, is_writable, data, crate::ID)
}

/// A system-owned wallet with no data.
pub fn wallet(key: Pubkey, is_signer: bool) -> AccountInfo<'static> {
    account_info(key, is_signer, true, Vec::new(), anchor_lang::solana_program::system_program::ID)
}

pub fn pda(seeds: &[&[u8]]) -> (Pubkey, u8) {
    Pubkey::find_program_address(seeds, &crate::ID)
}

/// Ledger and treasury PDAs as the program would hold them after initialization.
pub fn ledger_and_treasury(
    authority: Pubkey,
    treasury: &crate::state::Treasury,
) -> (AccountInfo<'static>, AccountInfo<'static>) {
    use crate::state::{Ledger, Tier, Treasury};

    let (ledger_key, ledger_bump) = pda(&[Ledger::SEED]);
    let (treasury_key, treasury_bump) = pda(&[Treasury::SEED]);
    let ledger = Ledger {
        authority,
        tiers: Tier::default_table(),
        total_solo_games: 0,
        total_multiplayer_games: 0,
        total_volume: 0,
        bump: ledger_bump,
    };
    let treasury = Treasury {
        bump: treasury_bump,
        ..treasury.clone()
    };
    (
        program_account(ledger_key, &ledger, 8 + Ledger::INIT_SPACE, false),
        program_account(treasury_key, &treasury, 8 + Treasury::INIT_SPACE, true),
    )
}

pub fn leak_accounts(infos: Vec<AccountInfo<'static>>) -> &'static [AccountInfo<'static>] {
    Box::leak(infos.into_boxed_slice())
}
