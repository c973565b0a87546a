use anchor_lang::prelude::*;

use crate::errors::HuntError;
use crate::events::CreatureSpawned;
use crate::state::*;

#[derive(Accounts)]
pub struct ForceSpawnCreature<'info> {
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
        mut,
        seeds = [b"spawn_board"],
        bump = spawn_board.bump,
    )]
    pub spawn_board: Box<Account<'info, SpawnBoard>>,
}

pub fn handler(
    ctx: Context<ForceSpawnCreature>,
    slot_index: u8,
    pos_x: u16,
    pos_y: u16,
) -> Result<()> {
    let slot_idx = slot_index as usize;
    require!(slot_idx < MAX_SPAWN_SLOTS, HuntError::InvalidSlotIndex);
    require!(pos_x <= MAX_COORDINATE, HuntError::InvalidCoordinate);
    require!(pos_y <= MAX_COORDINATE, HuntError::InvalidCoordinate);

    let spawn_board = &ctx.accounts.spawn_board;
    require!(
        !spawn_board.slots[slot_idx].is_active,
        HuntError::SlotAlreadyOccupied
    );
    require!(
        spawn_board.active_count < ctx.accounts.game_state.max_active_creatures,
        HuntError::MaxActiveCreaturesReached
    );

    let game_state = &mut ctx.accounts.game_state;
    game_state.creature_id_counter = game_state
        .creature_id_counter
        .checked_add(1)
        .ok_or(HuntError::MathOverflow)?;
    let creature_id = game_state.creature_id_counter;

    let now = Clock::get()?.unix_timestamp;
    ctx.accounts
        .spawn_board
        .activate(slot_idx, creature_id, pos_x, pos_y, now);

    emit!(CreatureSpawned {
        creature_id,
        slot_index,
        pos_x,
        pos_y,
    });

    Ok(())
}
