use anchor_lang::prelude::*;

#[error_code]
pub enum HuntError {
    #[msg("Game has not been initialized")]
    NotInitialized,
    #[msg("Invalid ball tier: must be 0-3")]
    InvalidBallTier,
    #[msg("Invalid catch rate: must be 0-100")]
    InvalidCatchRate,
    #[msg("Ball price must be greater than 0")]
    ZeroBallPrice,
    #[msg("Purchase quantity must be greater than 0")]
    ZeroQuantity,
    #[msg("Purchase exceeds the per-transaction maximum")]
    PurchaseExceedsMax,
    #[msg("Insufficient payment token balance")]
    InsufficientFunds,
    #[msg("Insufficient balls of the requested tier")]
    InsufficientBalls,
    #[msg("Invalid slot index: must be 0-19")]
    InvalidSlotIndex,
    #[msg("Slot is already occupied")]
    SlotAlreadyOccupied,
    #[msg("Slot is not active")]
    SlotNotActive,
    #[msg("Maximum throw attempts reached for this creature")]
    MaxAttemptsReached,
    #[msg("Invalid coordinate: must be 0-999")]
    InvalidCoordinate,
    #[msg("Maximum active creatures reached")]
    MaxActiveCreaturesReached,
    #[msg("Invalid max active creatures: must be 1-20")]
    InvalidMaxActiveCreatures,
    #[msg("Prize vault is full")]
    VaultFull,
    #[msg("Prize vault is empty")]
    VaultEmpty,
    #[msg("Invalid prize index")]
    InvalidPrizeIndex,
    #[msg("Randomness request was already consumed")]
    RequestAlreadyConsumed,
    #[msg("Randomness not yet fulfilled by the oracle")]
    VrfNotFulfilled,
    #[msg("Prize transfer accounts missing or not bound to the awarded mint")]
    PrizeAccountsMissing,
    #[msg("Player profile account missing for a throw request")]
    PlayerProfileMissing,
    #[msg("Insufficient withdrawal amount")]
    InsufficientWithdrawalAmount,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Unauthorized: caller is not the authority")]
    Unauthorized,
}
