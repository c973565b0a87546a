use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::errors::HuntError;
use crate::events::GameInitialized;
use crate::state::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = GameState::SIZE,
        seeds = [b"game_state"],
        bump,
    )]
    pub game_state: Box<Account<'info, GameState>>,

    #[account(
        init,
        payer = authority,
        space = SpawnBoard::SIZE,
        seeds = [b"spawn_board"],
        bump,
    )]
    pub spawn_board: Box<Account<'info, SpawnBoard>>,

    #[account(
        init,
        payer = authority,
        space = PrizeVault::SIZE,
        seeds = [b"prize_vault"],
        bump,
    )]
    pub prize_vault: Box<Account<'info, PrizeVault>>,

    #[account(
        init,
        payer = authority,
        space = Treasury::SIZE,
        seeds = [b"treasury"],
        bump,
    )]
    pub treasury_record: Account<'info, Treasury>,

    pub payment_mint_account: Account<'info, Mint>,

    /// Program-owned payment token account; receives ball revenue.
    #[account(
        init,
        payer = authority,
        associated_token::mint = payment_mint_account,
        associated_token::authority = game_state,
    )]
    pub game_payment_account: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler(
    ctx: Context<Initialize>,
    treasury: Pubkey,
    payment_mint: Pubkey,
    reward_mint: Pubkey,
    ball_prices: [u64; 4],
    catch_rates: [u8; 4],
) -> Result<()> {
    for price in ball_prices.iter() {
        require!(*price > 0, HuntError::ZeroBallPrice);
    }
    for rate in catch_rates.iter() {
        require!(*rate <= 100, HuntError::InvalidCatchRate);
    }
    require!(
        ctx.accounts.payment_mint_account.key() == payment_mint,
        HuntError::Unauthorized
    );

    let game_state = &mut ctx.accounts.game_state;
    game_state.authority = ctx.accounts.authority.key();
    game_state.treasury = treasury;
    game_state.payment_mint = payment_mint;
    game_state.reward_mint = reward_mint;
    game_state.ball_prices = ball_prices;
    game_state.catch_rates = catch_rates;
    game_state.max_active_creatures = MAX_SPAWN_SLOTS as u8;
    game_state.creature_id_counter = 0;
    game_state.total_revenue = 0;
    game_state.request_counter = 0;
    game_state.is_initialized = true;
    game_state.bump = ctx.bumps.game_state;

    let spawn_board = &mut ctx.accounts.spawn_board;
    spawn_board.slots = [SpawnSlot::default(); MAX_SPAWN_SLOTS];
    spawn_board.active_count = 0;
    spawn_board.bump = ctx.bumps.spawn_board;

    let prize_vault = &mut ctx.accounts.prize_vault;
    prize_vault.authority = ctx.accounts.authority.key();
    prize_vault.mints = [Pubkey::default(); MAX_VAULT_SIZE as usize];
    prize_vault.count = 0;
    prize_vault.max_size = MAX_VAULT_SIZE;
    prize_vault.bump = ctx.bumps.prize_vault;

    let treasury_record = &mut ctx.accounts.treasury_record;
    treasury_record.wallet = treasury;
    treasury_record.total_withdrawn = 0;
    treasury_record.bump = ctx.bumps.treasury_record;

    emit!(GameInitialized {
        authority: ctx.accounts.authority.key(),
        treasury,
        payment_mint,
    });

    Ok(())
}
