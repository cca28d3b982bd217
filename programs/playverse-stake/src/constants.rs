// ===== TIER TABLE =====
pub const MAX_TIERS: usize = 8;
pub const MAX_TIER_NAME_LEN: usize = 16;

pub const BRONZE_STAKE_LAMPORTS: u64 = 1_000_000; // 0.001 SOL
pub const SILVER_STAKE_LAMPORTS: u64 = 10_000_000; // 0.01 SOL
pub const DEFAULT_WIN_MULTIPLIER: u16 = 2;

// ===== MULTIPLAYER =====
pub const MAX_PLAYERS: usize = 16;
