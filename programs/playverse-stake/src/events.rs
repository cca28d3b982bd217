use anchor_lang::prelude::*;

#[event]
pub struct LedgerInitialized {
    pub authority: Pubkey,
    pub tier_count: u8,
}

#[event]
pub struct HouseFunded {
    pub funder: Pubkey,
    pub amount: u64,
    pub custodied_balance: u64,
}

#[event]
pub struct HouseWithdrawn {
    pub authority: Pubkey,
    pub amount: u64,
    pub custodied_balance: u64,
}

#[event]
pub struct StakePlaced {
    pub game_id: [u8; 32],
    pub player: Pubkey,
    pub amount: u64,
    pub tier: u8,
}

#[event]
pub struct GameResolved {
    pub game_id: [u8; 32],
    pub player: Pubkey,
    pub player_won: bool,
    pub payout: u64,
}

#[event]
pub struct MultiplayerGameCreated {
    pub game_id: [u8; 32],
    pub creator: Pubkey,
    pub stake_amount: u64,
    pub tier: u8,
}

#[event]
pub struct PlayerJoined {
    pub game_id: [u8; 32],
    pub player: Pubkey,
    pub player_count: u8,
    pub total_pool: u64,
}

#[event]
pub struct MultiplayerGameResolved {
    pub game_id: [u8; 32],
    pub winner: Pubkey,
    pub payout: u64,
    pub player_count: u8,
}
