use anchor_lang::prelude::*;

#[error_code]
pub enum StakeError {
    #[msg("Stake amount does not match any registered tier.")]
    InvalidTier,
    #[msg("A game with this id already exists.")]
    DuplicateGame,
    #[msg("No game exists with this id.")]
    UnknownGame,
    #[msg("Game has already been resolved.")]
    AlreadyResolved,
    #[msg("Multiplayer game is not open.")]
    GameNotOpen,
    #[msg("Stake amount does not match the game's tier.")]
    StakeMismatch,
    #[msg("Player has already joined this game.")]
    DuplicatePlayer,
    #[msg("Winner is not a player in this game.")]
    PlayerNotInGame,
    #[msg("Only the ledger authority can perform this action.")]
    Unauthorized,
    #[msg("Treasury free balance cannot cover this payout.")]
    InsufficientFunds,
    #[msg("Tier table must be 1-8 strictly ascending, non-zero tiers with 1-16 byte names.")]
    InvalidTierTable,
    #[msg("Amount must be greater than zero.")]
    ZeroAmount,
    #[msg("Multiplayer game has reached its player capacity.")]
    GameFull,
    #[msg("Player stats accounts must match the game's players in order.")]
    StatsAccountMismatch,
    #[msg("Wallet account does not match the game record.")]
    PlayerMismatch,
    #[msg("Arithmetic overflow.")]
    MathOverflow,
}
