use anchor_lang::prelude::*;

use crate::errors::HuntError;

/// Number of slots on the spawn board (hard cap).
pub const MAX_SPAWN_SLOTS: usize = 20;

/// Largest valid x/y coordinate on the board.
pub const MAX_COORDINATE: u16 = 999;

/// Throws a creature survives before it escapes.
pub const MAX_THROW_ATTEMPTS: u8 = 3;

/// Prize vault capacity.
pub const MAX_VAULT_SIZE: u8 = 20;

/// Ball tiers: basic, great, ultra, master.
pub const NUM_BALL_TIERS: usize = 4;

/// Per-transaction purchase cap in payment token atomic units.
pub const MAX_PURCHASE_AMOUNT: u64 = 500_000_000_000;

// ── GameState PDA ── seeds: ["game_state"]
/// Global configuration singleton; only the recorded authority may
/// mutate it through the admin instructions.
#[account]
pub struct GameState {
    pub authority: Pubkey,
    pub treasury: Pubkey,
    /// SPL mint players pay with when buying balls.
    pub payment_mint: Pubkey,
    /// SPL mint of the reward token handled by the off-chain pipeline.
    pub reward_mint: Pubkey,
    /// Ball prices in payment token atomic units, one per tier.
    pub ball_prices: [u64; 4],
    /// Catch chance in percent (0-100), one per tier.
    pub catch_rates: [u8; 4],
    /// Soft cap on concurrently active creatures (1-20).
    pub max_active_creatures: u8,
    /// Monotonic creature id source; ids are never reused.
    pub creature_id_counter: u64,
    /// Lifetime payment tokens taken in from ball purchases.
    pub total_revenue: u64,
    /// Monotonic key source for randomness requests.
    pub request_counter: u64,
    pub is_initialized: bool,
    pub bump: u8,
}

impl GameState {
    pub const SIZE: usize = 8 + 32 + 32 + 32 + 32 + (8 * 4) + 4 + 1 + 8 + 8 + 8 + 1 + 1;
}

// ── SpawnBoard PDA ── seeds: ["spawn_board"]
#[account]
pub struct SpawnBoard {
    pub slots: [SpawnSlot; MAX_SPAWN_SLOTS],
    /// Cached count of slots with `is_active == true`.
    pub active_count: u8,
    pub bump: u8,
}

impl SpawnBoard {
    pub const SIZE: usize = 8 + (SpawnSlot::SIZE * MAX_SPAWN_SLOTS) + 1 + 1;

    /// Places a creature in a vacant slot and bumps the active count.
    pub fn activate(&mut self, index: usize, creature_id: u64, pos_x: u16, pos_y: u16, now: i64) {
        self.slots[index] = SpawnSlot {
            is_active: true,
            creature_id,
            pos_x,
            pos_y,
            attempts: 0,
            spawned_at: now,
        };
        self.active_count = self.active_count.saturating_add(1);
    }

    /// Zeroes a slot (caught, escaped, or despawned) and drops the count.
    pub fn clear(&mut self, index: usize) {
        self.slots[index] = SpawnSlot::default();
        self.active_count = self.active_count.saturating_sub(1);
    }

    /// Records a failed throw against an active slot; once the attempt
    /// limit is hit the creature escapes and the slot is cleared.
    /// Returns the throws left before escape (0 when it just escaped)
    /// and whether it escaped.
    pub fn record_miss(&mut self, index: usize) -> (u8, bool) {
        let attempts = self.slots[index].attempts.saturating_add(1);
        self.slots[index].attempts = attempts;
        let escaped = attempts >= MAX_THROW_ATTEMPTS;
        if escaped {
            self.clear(index);
        }
        (MAX_THROW_ATTEMPTS.saturating_sub(attempts), escaped)
    }

    /// Moves an active creature and resets its throw attempts to zero.
    pub fn relocate(&mut self, index: usize, pos_x: u16, pos_y: u16) {
        let slot = &mut self.slots[index];
        slot.pos_x = pos_x;
        slot.pos_y = pos_y;
        slot.attempts = 0;
    }
}

/// One creature slot. Inactive slots are fully zeroed: creature id 0 is
/// the empty sentinel and attempts are never read while inactive.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct SpawnSlot {
    pub is_active: bool,
    pub creature_id: u64,
    pub pos_x: u16,
    pub pos_y: u16,
    pub attempts: u8,
    pub spawned_at: i64,
}

impl SpawnSlot {
    pub const SIZE: usize = 1 + 8 + 2 + 2 + 1 + 8;
}

// ── PlayerProfile PDA ── seeds: ["player", player pubkey]
/// Per-player ball counts and lifetime stats. Created lazily on the
/// first purchase.
#[account]
pub struct PlayerProfile {
    pub owner: Pubkey,
    /// Held balls per tier.
    pub balls: [u32; 4],
    pub total_purchased: u64,
    pub total_thrown: u64,
    pub total_caught: u64,
    pub bump: u8,
}

impl PlayerProfile {
    pub const SIZE: usize = 8 + 32 + (4 * 4) + 8 + 8 + 8 + 1;
}

// ── PrizeVault PDA ── seeds: ["prize_vault"]
/// Bounded, unordered set of prize NFT mints. The vault PDA is the SPL
/// authority over one token account per held mint. Entries at indices
/// `>= count` are garbage and must never be read.
#[account]
pub struct PrizeVault {
    pub authority: Pubkey,
    pub mints: [Pubkey; MAX_VAULT_SIZE as usize],
    pub count: u8,
    pub max_size: u8,
    pub bump: u8,
}

impl PrizeVault {
    pub const SIZE: usize = 8 + 32 + (32 * MAX_VAULT_SIZE as usize) + 1 + 1 + 1;

    pub fn push(&mut self, mint: Pubkey) -> Result<()> {
        if self.count >= self.max_size {
            return Err(HuntError::VaultFull.into());
        }
        self.mints[self.count as usize] = mint;
        self.count = self.count.saturating_add(1);
        Ok(())
    }

    /// O(1) order-non-preserving removal: the last live entry overwrites
    /// the removed index, then the count shrinks. Callers validate
    /// `index < count` first.
    pub fn swap_remove(&mut self, index: usize) -> Pubkey {
        let removed = self.mints[index];
        let last = (self.count as usize) - 1;
        if index != last {
            self.mints[index] = self.mints[last];
        }
        self.mints[last] = Pubkey::default();
        self.count = self.count.saturating_sub(1);
        removed
    }
}

// ── Treasury PDA ── seeds: ["treasury"]
#[account]
pub struct Treasury {
    pub wallet: Pubkey,
    /// Cumulative payment tokens withdrawn through `withdraw_revenue`.
    pub total_withdrawn: u64,
    pub bump: u8,
}

impl Treasury {
    pub const SIZE: usize = 8 + 32 + 8 + 1;
}

// ── Request kind ──
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RequestKind {
    Spawn,
    Throw,
}

impl RequestKind {
    /// Tag byte mixed into the oracle seed.
    pub fn tag(self) -> u8 {
        match self {
            RequestKind::Spawn => 0,
            RequestKind::Throw => 1,
        }
    }
}

// ── RandomnessRequest PDA ── seeds: ["rng_req", request id (u64 LE)]
/// Pending oracle request, keyed by the game's monotonic request counter
/// so every request has a globally unique address. Consumable at most
/// once; retired by flagging `is_consumed`.
#[account]
pub struct RandomnessRequest {
    pub kind: RequestKind,
    /// The throwing player, or the authority for spawn requests.
    pub requester: Pubkey,
    pub slot_index: u8,
    /// Ball tier for throw requests; 0 for spawns.
    pub ball_tier: u8,
    /// Seed handed to the oracle; also locates the fulfillment account.
    pub seed: [u8; 32],
    pub is_consumed: bool,
    pub bump: u8,
}

impl RandomnessRequest {
    pub const SIZE: usize = 8 + 1 + 32 + 1 + 1 + 32 + 1 + 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mint(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    fn board() -> SpawnBoard {
        SpawnBoard {
            slots: [SpawnSlot::default(); MAX_SPAWN_SLOTS],
            active_count: 0,
            bump: 255,
        }
    }

    fn vault() -> PrizeVault {
        PrizeVault {
            authority: Pubkey::default(),
            mints: [Pubkey::default(); MAX_VAULT_SIZE as usize],
            count: 0,
            max_size: MAX_VAULT_SIZE,
            bump: 255,
        }
    }

    #[test]
    fn activate_and_clear_track_active_count() {
        let mut b = board();
        b.activate(0, 1, 500, 500, 1_700_000_000);
        b.activate(7, 2, 10, 20, 1_700_000_000);
        assert_eq!(b.active_count, 2);
        assert!(b.slots[0].is_active);
        assert_eq!(b.slots[7].creature_id, 2);

        b.clear(0);
        assert_eq!(b.active_count, 1);
        // Cleared slots go back to the zeroed sentinel state.
        assert_eq!(b.slots[0], SpawnSlot::default());
        assert_eq!(b.slots[0].creature_id, 0);
    }

    #[test]
    fn third_miss_lets_the_creature_escape() {
        let mut b = board();
        b.activate(3, 9, 100, 200, 1_700_000_000);

        assert_eq!(b.record_miss(3), (2, false));
        assert_eq!(b.record_miss(3), (1, false));
        assert!(b.slots[3].is_active);
        assert_eq!(b.slots[3].attempts, 2);

        // Third miss: remaining hits 0, the slot empties out.
        assert_eq!(b.record_miss(3), (0, true));
        assert_eq!(b.slots[3], SpawnSlot::default());
        assert_eq!(b.active_count, 0);
    }

    #[test]
    fn relocate_resets_attempts() {
        let mut b = board();
        b.activate(0, 1, 5, 5, 1_700_000_000);
        b.record_miss(0);
        b.record_miss(0);
        assert_eq!(b.slots[0].attempts, 2);

        b.relocate(0, 700, 800);
        assert!(b.slots[0].is_active);
        assert_eq!((b.slots[0].pos_x, b.slots[0].pos_y), (700, 800));
        // A moved creature survives a full set of fresh throws again.
        assert_eq!(b.slots[0].attempts, 0);
        assert_eq!(b.record_miss(0), (2, false));
    }

    #[test]
    fn vault_push_rejects_overflow() {
        let mut v = vault();
        for i in 0..MAX_VAULT_SIZE {
            v.push(mint(i + 1)).unwrap();
        }
        assert_eq!(v.count, MAX_VAULT_SIZE);
        assert!(v.push(mint(99)).is_err());
    }

    #[test]
    fn swap_remove_front_moves_last_into_place() {
        let mut v = vault();
        v.push(mint(1)).unwrap();
        v.push(mint(2)).unwrap();

        let removed = v.swap_remove(0);
        assert_eq!(removed, mint(1));
        assert_eq!(v.count, 1);
        assert_eq!(v.mints[0], mint(2));
        assert_eq!(v.mints[1], Pubkey::default());
    }

    #[test]
    fn swap_remove_preserves_the_remaining_set() {
        let mut v = vault();
        for i in 1..=5u8 {
            v.push(mint(i)).unwrap();
        }
        let removed = v.swap_remove(2);
        assert_eq!(removed, mint(3));

        let live: Vec<Pubkey> = v.mints[..v.count as usize].to_vec();
        assert_eq!(live.len(), 4);
        assert!(!live.contains(&mint(3)));
        for i in [1u8, 2, 4, 5] {
            assert!(live.contains(&mint(i)), "mint {i} lost by swap_remove");
        }
    }

    #[test]
    fn swap_remove_last_element() {
        let mut v = vault();
        v.push(mint(1)).unwrap();
        let removed = v.swap_remove(0);
        assert_eq!(removed, mint(1));
        assert_eq!(v.count, 0);
        assert_eq!(v.mints[0], Pubkey::default());
    }

    #[test]
    fn request_kind_tags_are_stable() {
        // The tag byte is part of the oracle seed contract.
        assert_eq!(RequestKind::Spawn.tag(), 0);
        assert_eq!(RequestKind::Throw.tag(), 1);
    }
}
