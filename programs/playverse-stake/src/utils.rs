use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_lang::{AccountDeserialize, AccountSerialize, Owner};

use crate::errors::StakeError;

/// Transfer lamports from the treasury PDA (program-owned) to a recipient.
pub fn transfer_from_treasury<'info>(
    treasury: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    **treasury.try_borrow_mut_lamports()? -= amount;
    **to.try_borrow_mut_lamports()? += amount;
    Ok(())
}

/// Transfer lamports from a signer into the treasury PDA.
pub fn transfer_to_treasury<'info>(
    system_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    treasury: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            system_program.clone(),
            system_program::Transfer {
                from: from.clone(),
                to: treasury.clone(),
            },
        ),
        amount,
    )
}

/// Deserializes a program account whose PDA address was already verified by
/// a `seeds` constraint. An unallocated address fails with `missing`.
pub fn load_account<T>(info: &AccountInfo, missing: StakeError) -> Result<T>
where
    T: AccountDeserialize + Owner,
{
    if info.data_is_empty() {
        return Err(missing.into());
    }
    require_keys_eq!(
        *info.owner,
        T::owner(),
        anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram
    );
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..])
}

/// Writes a program account loaded with [`load_account`] back to its data.
pub fn store_account<T: AccountSerialize>(info: &AccountInfo, account: &T) -> Result<()> {
    require!(info.is_writable, anchor_lang::error::ErrorCode::AccountNotMutable);
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    account.try_serialize(&mut writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_PLAYERS;
    use crate::state::{GameState, MultiplayerGame, Stake};
    use crate::test_utils::{account_info, assert_error_code, assert_stake_error, program_account};
    use anchor_lang::error::ErrorCode;

    fn full_game() -> MultiplayerGame {
        let players: Vec<Pubkey> = (0..MAX_PLAYERS).map(|_| Pubkey::new_unique()).collect();
        MultiplayerGame {
            game_id: [9; 32],
            tier: 0,
            stake_amount: 5,
            total_pool: 5 * MAX_PLAYERS as u64,
            winner: Some(players[0]),
            players,
            state: GameState::Open,
            payout: 0,
            created_at: 1,
            resolved_at: 0,
            bump: 254,
        }
    }

    #[test]
    fn unallocated_game_is_unknown() {
        let info = account_info(Pubkey::new_unique(), false, true, Vec::new(), crate::ID);
        assert_stake_error(
            load_account::<MultiplayerGame>(&info, StakeError::UnknownGame).map(|_| ()),
            StakeError::UnknownGame,
        );
        assert_stake_error(
            load_account::<Stake>(&info, StakeError::UnknownGame).map(|_| ()),
            StakeError::UnknownGame,
        );
    }

    #[test]
    fn foreign_owned_account_is_rejected() {
        let mut data = Vec::new();
        full_game().try_serialize(&mut data).unwrap();
        let info = account_info(Pubkey::new_unique(), false, true, data, Pubkey::new_unique());
        assert_error_code(
            load_account::<MultiplayerGame>(&info, StakeError::UnknownGame).map(|_| ()),
            ErrorCode::AccountOwnedByWrongProgram as u32,
        );
    }

    #[test]
    fn read_only_account_cannot_be_stored() {
        let game = full_game();
        let info = program_account(
            Pubkey::new_unique(),
            &game,
            8 + MultiplayerGame::INIT_SPACE,
            false,
        );
        assert_error_code(store_account(&info, &game), ErrorCode::AccountNotMutable as u32);
    }

    #[test]
    fn full_game_survives_store_and_reload() {
        let mut game = full_game();
        game.players.truncate(1);
        game.total_pool = 5;
        let info = program_account(
            Pubkey::new_unique(),
            &game,
            8 + MultiplayerGame::INIT_SPACE,
            true,
        );

        let mut loaded: MultiplayerGame = load_account(&info, StakeError::UnknownGame).unwrap();
        assert_eq!(loaded.players.len(), 1);
        assert_eq!(loaded.total_pool, 5);

        // Grow to capacity in place; the allocation was sized for it.
        let full = full_game();
        loaded.players = full.players.clone();
        loaded.total_pool = full.total_pool;
        loaded.state = GameState::Resolved;
        store_account(&info, &loaded).unwrap();

        let reloaded: MultiplayerGame = load_account(&info, StakeError::UnknownGame).unwrap();
        assert_eq!(reloaded.players, full.players);
        assert_eq!(reloaded.total_pool, 5 * MAX_PLAYERS as u64);
        assert_eq!(reloaded.state, GameState::Resolved);
        assert_eq!(reloaded.winner, full.winner);
    }

    #[test]
    fn treasury_payout_moves_lamports() {
        let treasury = account_info(Pubkey::new_unique(), false, true, vec![0; 8], crate::ID);
        let player = account_info(Pubkey::new_unique(), false, true, Vec::new(), Pubkey::default());

        transfer_from_treasury(&treasury, &player, 250).unwrap();
        assert_eq!(treasury.lamports(), 1_000_000_000 - 250);
        assert_eq!(player.lamports(), 1_000_000_000 + 250);

        transfer_from_treasury(&treasury, &player, 0).unwrap();
        assert_eq!(player.lamports(), 1_000_000_000 + 250);
    }
}
