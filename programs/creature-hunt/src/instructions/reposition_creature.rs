use anchor_lang::prelude::*;

use crate::errors::HuntError;
use crate::events::CreatureRelocated;
use crate::state::*;

#[derive(Accounts)]
pub struct RepositionCreature<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [b"game_state"],
        bump = game_state.bump,
        constraint = game_state.is_initialized @ HuntError::NotInitialized,
        constraint = game_state.authority == authority.key() @ HuntError::Unauthorized,
    )]
    pub game_state: Box<Account<'info, GameState>>,

    #[account(
        mut,
        seeds = [b"spawn_board"],
        bump = spawn_board.bump,
    )]
    pub spawn_board: Box<Account<'info, SpawnBoard>>,
}

pub fn handler(
    ctx: Context<RepositionCreature>,
    slot_index: u8,
    new_x: u16,
    new_y: u16,
) -> Result<()> {
    let slot_idx = slot_index as usize;
    require!(slot_idx < MAX_SPAWN_SLOTS, HuntError::InvalidSlotIndex);
    require!(new_x <= MAX_COORDINATE, HuntError::InvalidCoordinate);
    require!(new_y <= MAX_COORDINATE, HuntError::InvalidCoordinate);

    let slot = ctx.accounts.spawn_board.slots[slot_idx];
    require!(slot.is_active, HuntError::SlotNotActive);

    let old_x = slot.pos_x;
    let old_y = slot.pos_y;
    let creature_id = slot.creature_id;

    // A moved creature gets a fresh set of throw attempts.
    ctx.accounts.spawn_board.relocate(slot_idx, new_x, new_y);

    emit!(CreatureRelocated {
        creature_id,
        slot_index,
        old_x,
        old_y,
        new_x,
        new_y,
    });

    Ok(())
}
