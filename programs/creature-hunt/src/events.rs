use anchor_lang::prelude::*;

#[event]
pub struct GameInitialized {
    pub authority: Pubkey,
    pub treasury: Pubkey,
    pub payment_mint: Pubkey,
}

#[event]
pub struct BallsPurchased {
    pub buyer: Pubkey,
    pub tier: u8,
    pub quantity: u32,
    pub total_cost: u64,
}

#[event]
pub struct SpawnRequested {
    pub slot_index: u8,
    pub request_id: u64,
    pub seed: [u8; 32],
}

#[event]
pub struct BallThrown {
    pub thrower: Pubkey,
    pub creature_id: u64,
    pub tier: u8,
    pub slot_index: u8,
    pub request_id: u64,
    pub seed: [u8; 32],
}

#[event]
pub struct CreatureCaught {
    pub catcher: Pubkey,
    pub creature_id: u64,
    pub slot_index: u8,
    /// Awarded prize mint, or the default pubkey when the vault was empty.
    pub prize_mint: Pubkey,
}

#[event]
pub struct CatchMissed {
    pub thrower: Pubkey,
    pub creature_id: u64,
    pub slot_index: u8,
    /// Throws left before the creature escapes; 0 when it just did.
    pub attempts_remaining: u8,
}

#[event]
pub struct CreatureSpawned {
    pub creature_id: u64,
    pub slot_index: u8,
    pub pos_x: u16,
    pub pos_y: u16,
}

#[event]
pub struct CreatureRelocated {
    pub creature_id: u64,
    pub slot_index: u8,
    pub old_x: u16,
    pub old_y: u16,
    pub new_x: u16,
    pub new_y: u16,
}

#[event]
pub struct CreatureDespawned {
    pub creature_id: u64,
    pub slot_index: u8,
}

#[event]
pub struct PrizeAwarded {
    pub winner: Pubkey,
    pub prize_mint: Pubkey,
    pub vault_remaining: u8,
}

#[event]
pub struct PrizeDeposited {
    pub prize_mint: Pubkey,
    pub vault_count: u8,
}

#[event]
pub struct PrizeWithdrawn {
    pub prize_mint: Pubkey,
    pub vault_count: u8,
}

#[event]
pub struct BallPriceUpdated {
    pub tier: u8,
    pub old_price: u64,
    pub new_price: u64,
}

#[event]
pub struct CatchRateUpdated {
    pub tier: u8,
    pub old_rate: u8,
    pub new_rate: u8,
}

#[event]
pub struct MaxActiveUpdated {
    pub old_max: u8,
    pub new_max: u8,
}

#[event]
pub struct RevenueWithdrawn {
    pub recipient: Pubkey,
    pub amount: u64,
}
