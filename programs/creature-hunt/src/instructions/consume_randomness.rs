use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use orao_solana_vrf::state::RandomnessAccountData;
use orao_solana_vrf::RANDOMNESS_ACCOUNT_SEED;

use crate::errors::HuntError;
use crate::events::*;
use crate::state::*;
use crate::utils::{check_award_binding, derive_catch_roll, derive_position, derive_prize_index};

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct ConsumeRandomness<'info> {
    /// Anyone may crank a fulfilled request on the requester's behalf.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [b"game_state"],
        bump = game_state.bump,
        constraint = game_state.is_initialized @ HuntError::NotInitialized,
    )]
    pub game_state: Box<Account<'info, GameState>>,

    #[account(
        mut,
        seeds = [b"spawn_board"],
        bump = spawn_board.bump,
    )]
    pub spawn_board: Box<Account<'info, SpawnBoard>>,

    #[account(
        mut,
        seeds = [b"rng_req", request_id.to_le_bytes().as_ref()],
        bump = request.bump,
        constraint = !request.is_consumed @ HuntError::RequestAlreadyConsumed,
    )]
    pub request: Account<'info, RandomnessRequest>,

    /// ORAO randomness account for this request's seed. Deserialized by
    /// hand because the account holds an enum, not an Anchor struct.
    /// CHECK: seeds pin this to the oracle PDA for `request.seed`.
    #[account(
        seeds = [RANDOMNESS_ACCOUNT_SEED, request.seed.as_ref()],
        bump,
        seeds::program = orao_solana_vrf::ID,
    )]
    pub vrf_randomness: AccountInfo<'info>,

    #[account(
        mut,
        seeds = [b"prize_vault"],
        bump = prize_vault.bump,
    )]
    pub prize_vault: Box<Account<'info, PrizeVault>>,

    /// Required for throw requests; unused for spawns.
    #[account(mut)]
    pub player_profile: Option<Account<'info, PlayerProfile>>,

    /// Vault's token account for the awarded mint (source). Required
    /// when a catch pays out from a non-empty vault; the handler binds
    /// its mint and owner to the awarded vault entry.
    #[account(mut)]
    pub vault_prize_account: Option<Account<'info, TokenAccount>>,

    /// Requester's token account for the awarded mint (destination); the
    /// handler binds its mint to the awarded entry and its owner to the
    /// original requester, so a cranker cannot redirect the payout.
    #[account(mut)]
    pub winner_prize_account: Option<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<ConsumeRandomness>, _request_id: u64) -> Result<()> {
    let data = ctx.accounts.vrf_randomness.try_borrow_data()?;
    let randomness_data = RandomnessAccountData::try_deserialize(&mut data.as_ref())
        .map_err(|_| HuntError::VrfNotFulfilled)?;
    let fulfilled = randomness_data
        .fulfilled_randomness()
        .ok_or(HuntError::VrfNotFulfilled)?;

    // Copy to the stack before touching any game account: later mutations
    // in this transaction must not alias the bytes we branch on.
    let randomness: [u8; 64] = *fulfilled;
    drop(data);

    match ctx.accounts.request.kind {
        RequestKind::Spawn => resolve_spawn(ctx, &randomness),
        RequestKind::Throw => resolve_throw(ctx, &randomness),
    }
}

/// Spawn request: derive the position and place the creature.
fn resolve_spawn(ctx: Context<ConsumeRandomness>, randomness: &[u8; 64]) -> Result<()> {
    let slot_index = ctx.accounts.request.slot_index;
    let slot_idx = slot_index as usize;
    require!(slot_idx < MAX_SPAWN_SLOTS, HuntError::InvalidSlotIndex);

    // The slot may have been force-filled while the request was pending.
    require!(
        !ctx.accounts.spawn_board.slots[slot_idx].is_active,
        HuntError::SlotAlreadyOccupied
    );

    let (pos_x, pos_y) = derive_position(randomness);

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

    ctx.accounts.request.is_consumed = true;

    emit!(CreatureSpawned {
        creature_id,
        slot_index,
        pos_x,
        pos_y,
    });

    Ok(())
}

/// Throw request: roll for the catch, pay out a prize or count the miss.
fn resolve_throw(ctx: Context<ConsumeRandomness>, randomness: &[u8; 64]) -> Result<()> {
    let slot_index = ctx.accounts.request.slot_index;
    let slot_idx = slot_index as usize;
    require!(slot_idx < MAX_SPAWN_SLOTS, HuntError::InvalidSlotIndex);

    let tier = ctx.accounts.request.ball_tier as usize;
    require!(tier < NUM_BALL_TIERS, HuntError::InvalidBallTier);

    // The creature may have been caught or despawned since the throw; the
    // ledger serializes same-slot writers, so the later consume sees it.
    let slot = ctx.accounts.spawn_board.slots[slot_idx];
    require!(slot.is_active, HuntError::SlotNotActive);

    let creature_id = slot.creature_id;
    let thrower = ctx.accounts.request.requester;

    let catch_rate = ctx.accounts.game_state.catch_rates[tier];
    let roll = derive_catch_roll(randomness);

    if roll < catch_rate {
        // ── Caught ──
        let mut awarded_mint = Pubkey::default();

        if ctx.accounts.prize_vault.count > 0 {
            let prize_idx = derive_prize_index(randomness, ctx.accounts.prize_vault.count);
            awarded_mint = ctx.accounts.prize_vault.mints[prize_idx];
            transfer_prize(&ctx, awarded_mint)?;

            let prize_vault = &mut ctx.accounts.prize_vault;
            prize_vault.swap_remove(prize_idx);

            emit!(PrizeAwarded {
                winner: thrower,
                prize_mint: awarded_mint,
                vault_remaining: prize_vault.count,
            });
        }

        let profile = ctx
            .accounts
            .player_profile
            .as_mut()
            .ok_or(HuntError::PlayerProfileMissing)?;
        require!(profile.owner == thrower, HuntError::PlayerProfileMissing);
        profile.total_caught = profile
            .total_caught
            .checked_add(1)
            .ok_or(HuntError::MathOverflow)?;

        ctx.accounts.spawn_board.clear(slot_idx);

        emit!(CreatureCaught {
            catcher: thrower,
            creature_id,
            slot_index,
            prize_mint: awarded_mint,
        });
    } else {
        // ── Missed ──
        let (attempts_remaining, escaped) = ctx.accounts.spawn_board.record_miss(slot_idx);

        if escaped {
            emit!(CreatureDespawned {
                creature_id,
                slot_index,
            });
        }

        emit!(CatchMissed {
            thrower,
            creature_id,
            slot_index,
            attempts_remaining,
        });
    }

    ctx.accounts.request.is_consumed = true;

    Ok(())
}

/// Moves the awarded NFT from the vault's token account to the
/// requester's, signing with the vault PDA. Both token accounts must be
/// present once there is a prize to pay out, and both are bound to the
/// awarded mint before the CPI: the consume path is permissionless, so
/// the accounts the cranker supplies prove nothing by themselves.
fn transfer_prize(ctx: &Context<ConsumeRandomness>, awarded_mint: Pubkey) -> Result<()> {
    let (Some(vault_prize_account), Some(winner_prize_account)) = (
        ctx.accounts.vault_prize_account.as_ref(),
        ctx.accounts.winner_prize_account.as_ref(),
    ) else {
        return Err(HuntError::PrizeAccountsMissing.into());
    };
    check_award_binding(
        awarded_mint,
        ctx.accounts.prize_vault.key(),
        ctx.accounts.request.requester,
        vault_prize_account.mint,
        vault_prize_account.owner,
        winner_prize_account.mint,
        winner_prize_account.owner,
    )?;

    let vault_seeds = &[b"prize_vault".as_ref(), &[ctx.accounts.prize_vault.bump]];
    let signer_seeds = &[&vault_seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: vault_prize_account.to_account_info(),
                to: winner_prize_account.to_account_info(),
                authority: ctx.accounts.prize_vault.to_account_info(),
            },
            signer_seeds,
        ),
        1,
    )
}
