use anchor_lang::prelude::*;
use orao_solana_vrf::program::OraoVrf;
use orao_solana_vrf::CONFIG_ACCOUNT_SEED;

use crate::errors::HuntError;
use crate::events::SpawnRequested;
use crate::state::*;
use crate::utils::make_request_seed;

#[derive(Accounts)]
pub struct SpawnCreature<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"game_state"],
        bump = game_state.bump,
        constraint = game_state.is_initialized @ HuntError::NotInitialized,
        constraint = game_state.authority == authority.key() @ HuntError::Unauthorized,
    )]
    pub game_state: Box<Account<'info, GameState>>,

    #[account(
        seeds = [b"spawn_board"],
        bump = spawn_board.bump,
    )]
    pub spawn_board: Box<Account<'info, SpawnBoard>>,

    #[account(
        init,
        payer = authority,
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

pub fn handler(ctx: Context<SpawnCreature>, slot_index: u8) -> Result<()> {
    let slot_idx = slot_index as usize;
    require!(slot_idx < MAX_SPAWN_SLOTS, HuntError::InvalidSlotIndex);

    let spawn_board = &ctx.accounts.spawn_board;
    require!(
        !spawn_board.slots[slot_idx].is_active,
        HuntError::SlotAlreadyOccupied
    );

    let game_state = &ctx.accounts.game_state;
    require!(
        spawn_board.active_count < game_state.max_active_creatures,
        HuntError::MaxActiveCreaturesReached
    );

    let request_id = game_state.request_counter;
    let seed = make_request_seed(request_id, RequestKind::Spawn);

    // Fee-paying fire-and-forget request; the oracle publishes the value
    // at the seed-derived address some time later.
    orao_solana_vrf::cpi::request_v2(
        CpiContext::new(
            ctx.accounts.orao_vrf.to_account_info(),
            orao_solana_vrf::cpi::accounts::RequestV2 {
                payer: ctx.accounts.authority.to_account_info(),
                network_state: ctx.accounts.vrf_network_state.to_account_info(),
                treasury: ctx.accounts.vrf_treasury.to_account_info(),
                request: ctx.accounts.vrf_randomness.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
            },
        ),
        seed,
    )?;

    let request = &mut ctx.accounts.request;
    request.kind = RequestKind::Spawn;
    request.requester = ctx.accounts.authority.key();
    request.slot_index = slot_index;
    request.ball_tier = 0;
    request.seed = seed;
    request.is_consumed = false;
    request.bump = ctx.bumps.request;

    let game_state = &mut ctx.accounts.game_state;
    game_state.request_counter = game_state
        .request_counter
        .checked_add(1)
        .ok_or(HuntError::MathOverflow)?;

    emit!(SpawnRequested {
        slot_index,
        request_id,
        seed,
    });

    Ok(())
}
