use anchor_lang::prelude::*;
use orao_solana_vrf::program::OraoVrf;
use orao_solana_vrf::CONFIG_ACCOUNT_SEED;

use crate::errors::HuntError;
use crate::events::BallThrown;
use crate::state::*;
use crate::utils::make_request_seed;

#[derive(Accounts)]
pub struct ThrowBall<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [b"game_state"],
        bump = game_state.bump,
        constraint = game_state.is_initialized @ HuntError::NotInitialized,
    )]
    pub game_state: Box<Account<'info, GameState>>,

    #[account(
        seeds = [b"spawn_board"],
        bump = spawn_board.bump,
    )]
    pub spawn_board: Box<Account<'info, SpawnBoard>>,

    #[account(
        mut,
        seeds = [b"player", player.key().as_ref()],
        bump = player_profile.bump,
        constraint = player_profile.owner == player.key(),
    )]
    pub player_profile: Account<'info, PlayerProfile>,

    #[account(
        init,
        payer = player,
        space = RandomnessRequest::SIZE,
        seeds = [b"rng_req", game_state.request_counter.to_le_bytes().as_ref()],
        bump,
    )]
    pub request: Account<'info, RandomnessRequest>,

    /// ORAO network state.
    /// CHECK: validated by the ORAO program during the CPI.
    #[account(
        mut,
        seeds = [CONFIG_ACCOUNT_SEED],
        bump,
        seeds::program = orao_vrf.key(),
    )]
    pub vrf_network_state: AccountInfo<'info>,

    /// ORAO randomness account, created by the CPI at the seed-derived
    /// address.
    /// CHECK: created and validated by the ORAO program.
    #[account(mut)]
    pub vrf_randomness: AccountInfo<'info>,

    /// ORAO fee treasury.
    /// CHECK: validated by the ORAO program during the CPI.
    #[account(mut)]
    pub vrf_treasury: AccountInfo<'info>,

    pub orao_vrf: Program<'info, OraoVrf>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ThrowBall>, slot_index: u8, tier: u8) -> Result<()> {
    let slot_idx = slot_index as usize;
    require!(slot_idx < MAX_SPAWN_SLOTS, HuntError::InvalidSlotIndex);
    require!((tier as usize) < NUM_BALL_TIERS, HuntError::InvalidBallTier);

    let slot = &ctx.accounts.spawn_board.slots[slot_idx];
    require!(slot.is_active, HuntError::SlotNotActive);
    require!(slot.attempts < MAX_THROW_ATTEMPTS, HuntError::MaxAttemptsReached);
    let creature_id = slot.creature_id;

    // The ball is spent now; the catch outcome is decided later when the
    // fulfilled randomness is consumed.
    let profile = &mut ctx.accounts.player_profile;
    require!(profile.balls[tier as usize] >= 1, HuntError::InsufficientBalls);
    profile.balls[tier as usize] -= 1;
    profile.total_thrown = profile
        .total_thrown
        .checked_add(1)
        .ok_or(HuntError::MathOverflow)?;

    let request_id = ctx.accounts.game_state.request_counter;
    let seed = make_request_seed(request_id, RequestKind::Throw);

    orao_solana_vrf::cpi::request_v2(
        CpiContext::new(
            ctx.accounts.orao_vrf.to_account_info(),
            orao_solana_vrf::cpi::accounts::RequestV2 {
                payer: ctx.accounts.player.to_account_info(),
                network_state: ctx.accounts.vrf_network_state.to_account_info(),
                treasury: ctx.accounts.vrf_treasury.to_account_info(),
                request: ctx.accounts.vrf_randomness.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
            },
        ),
        seed,
    )?;

    let request = &mut ctx.accounts.request;
    request.kind = RequestKind::Throw;
    request.requester = ctx.accounts.player.key();
    request.slot_index = slot_index;
    request.ball_tier = tier;
    request.seed = seed;
    request.is_consumed = false;
    request.bump = ctx.bumps.request;

    let game_state = &mut ctx.accounts.game_state;
    game_state.request_counter = game_state
        .request_counter
        .checked_add(1)
        .ok_or(HuntError::MathOverflow)?;

    emit!(BallThrown {
        thrower: ctx.accounts.player.key(),
        creature_id,
        tier,
        slot_index,
        request_id,
        seed,
    });

    Ok(())
}
