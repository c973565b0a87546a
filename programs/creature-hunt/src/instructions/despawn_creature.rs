use anchor_lang::prelude::*;

use crate::errors::HuntError;
use crate::events::CreatureDespawned;
use crate::state::*;

#[derive(Accounts)]
pub struct DespawnCreature<'info> {
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

pub fn handler(ctx: Context<DespawnCreature>, slot_index: u8) -> Result<()> {
    let slot_idx = slot_index as usize;
    require!(slot_idx < MAX_SPAWN_SLOTS, HuntError::InvalidSlotIndex);

    let spawn_board = &mut ctx.accounts.spawn_board;
    require!(spawn_board.slots[slot_idx].is_active, HuntError::SlotNotActive);

    let creature_id = spawn_board.slots[slot_idx].creature_id;
    spawn_board.clear(slot_idx);

    emit!(CreatureDespawned {
        creature_id,
        slot_index,
    });

    Ok(())
}
