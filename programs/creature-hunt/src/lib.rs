//! Creature Hunt — on-chain catch-and-collect game on Solana.
//!
//! Players buy consumable balls with an SPL token and throw them at
//! creatures spawned on a fixed 20-slot board. Catch outcomes and spawn
//! positions are decided by ORAO VRF through a two-phase request/consume
//! protocol; successful catches are rewarded with an NFT drawn at random
//! from a bounded prize vault.

use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("9C7UecsVQThpP8UQQ2mBX9abK1Fyw2xvjh4ftJTdsHBr");

#[program]
pub mod creature_hunt {
    use super::*;

    /// One-time setup: creates the game state, spawn board, prize vault,
    /// treasury record and the program-owned payment token account.
    pub fn initialize(
        ctx: Context<Initialize>,
        treasury: Pubkey,
        payment_mint: Pubkey,
        reward_mint: Pubkey,
        ball_prices: [u64; 4],
        catch_rates: [u8; 4],
    ) -> Result<()> {
        instructions::initialize::handler(ctx, treasury, payment_mint, reward_mint, ball_prices, catch_rates)
    }

    /// Player buys balls of one tier, paying in the payment token.
    /// Creates the player profile on first purchase.
    pub fn purchase_balls(ctx: Context<PurchaseBalls>, tier: u8, quantity: u32) -> Result<()> {
        instructions::purchase_balls::handler(ctx, tier, quantity)
    }

    /// Authority requests a randomly-positioned spawn via the VRF oracle.
    pub fn spawn_creature(ctx: Context<SpawnCreature>, slot_index: u8) -> Result<()> {
        instructions::spawn_creature::handler(ctx, slot_index)
    }

    /// Authority spawns a creature at explicit coordinates, no oracle.
    pub fn force_spawn_creature(
        ctx: Context<ForceSpawnCreature>,
        slot_index: u8,
        pos_x: u16,
        pos_y: u16,
    ) -> Result<()> {
        instructions::force_spawn_creature::handler(ctx, slot_index, pos_x, pos_y)
    }

    /// Authority moves an active creature; throw attempts reset to zero.
    pub fn reposition_creature(
        ctx: Context<RepositionCreature>,
        slot_index: u8,
        new_x: u16,
        new_y: u16,
    ) -> Result<()> {
        instructions::reposition_creature::handler(ctx, slot_index, new_x, new_y)
    }

    /// Authority removes an active creature from the board.
    pub fn despawn_creature(ctx: Context<DespawnCreature>, slot_index: u8) -> Result<()> {
        instructions::despawn_creature::handler(ctx, slot_index)
    }

    /// Player spends one ball on a catch attempt. The outcome is resolved
    /// later by `consume_randomness` once the oracle fulfills.
    pub fn throw_ball(ctx: Context<ThrowBall>, slot_index: u8, tier: u8) -> Result<()> {
        instructions::throw_ball::handler(ctx, slot_index, tier)
    }

    /// Resolves a pending randomness request. Callable by anyone once the
    /// oracle has published the value (crank-friendly).
    pub fn consume_randomness(ctx: Context<ConsumeRandomness>, request_id: u64) -> Result<()> {
        instructions::consume_randomness::handler(ctx, request_id)
    }

    /// Authority stocks the prize vault with an NFT.
    pub fn deposit_prize(ctx: Context<DepositPrize>) -> Result<()> {
        instructions::deposit_prize::handler(ctx)
    }

    /// Authority pulls an NFT back out of the vault (manual recovery).
    pub fn withdraw_prize(ctx: Context<WithdrawPrize>, prize_index: u8) -> Result<()> {
        instructions::withdraw_prize::handler(ctx, prize_index)
    }

    /// Authority updates the price of one ball tier.
    pub fn set_ball_price(ctx: Context<ConfigureGame>, tier: u8, new_price: u64) -> Result<()> {
        instructions::configure::set_ball_price_handler(ctx, tier, new_price)
    }

    /// Authority updates the catch rate of one ball tier.
    pub fn set_catch_rate(ctx: Context<ConfigureGame>, tier: u8, new_rate: u8) -> Result<()> {
        instructions::configure::set_catch_rate_handler(ctx, tier, new_rate)
    }

    /// Authority adjusts the soft cap on concurrently active creatures.
    pub fn set_max_active_creatures(ctx: Context<ConfigureGame>, new_max: u8) -> Result<()> {
        instructions::configure::set_max_active_creatures_handler(ctx, new_max)
    }

    /// Authority withdraws accumulated ball revenue from the game account.
    pub fn withdraw_revenue(ctx: Context<WithdrawRevenue>, amount: u64) -> Result<()> {
        instructions::withdraw_revenue::handler(ctx, amount)
    }
}
