use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::HuntError;
use crate::events::BallsPurchased;
use crate::state::*;

#[derive(Accounts)]
pub struct PurchaseBalls<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [b"game_state"],
        bump = game_state.bump,
        constraint = game_state.is_initialized @ HuntError::NotInitialized,
    )]
    pub game_state: Box<Account<'info, GameState>>,

    /// Player's payment token account (source).
    #[account(
        mut,
        constraint = player_payment_account.owner == player.key(),
        constraint = player_payment_account.mint == game_state.payment_mint,
    )]
    pub player_payment_account: Account<'info, TokenAccount>,

    /// Program-owned payment token account (destination).
    #[account(
        mut,
        constraint = game_payment_account.owner == game_state.key(),
        constraint = game_payment_account.mint == game_state.payment_mint,
    )]
    pub game_payment_account: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = player,
        space = PlayerProfile::SIZE,
        seeds = [b"player", player.key().as_ref()],
        bump,
    )]
    pub player_profile: Account<'info, PlayerProfile>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<PurchaseBalls>, tier: u8, quantity: u32) -> Result<()> {
    require!((tier as usize) < NUM_BALL_TIERS, HuntError::InvalidBallTier);
    require!(quantity > 0, HuntError::ZeroQuantity);

    let price = ctx.accounts.game_state.ball_prices[tier as usize];

    let total_cost = (price as u128)
        .checked_mul(quantity as u128)
        .ok_or(HuntError::MathOverflow)?;
    require!(total_cost <= u64::MAX as u128, HuntError::MathOverflow);
    let total_cost = total_cost as u64;

    require!(total_cost <= MAX_PURCHASE_AMOUNT, HuntError::PurchaseExceedsMax);
    require!(
        ctx.accounts.player_payment_account.amount >= total_cost,
        HuntError::InsufficientFunds
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.player_payment_account.to_account_info(),
                to: ctx.accounts.game_payment_account.to_account_info(),
                authority: ctx.accounts.player.to_account_info(),
            },
        ),
        total_cost,
    )?;

    let profile = &mut ctx.accounts.player_profile;
    // Static fields are zeroed when init_if_needed just created the PDA.
    if profile.owner == Pubkey::default() {
        profile.owner = ctx.accounts.player.key();
        profile.bump = ctx.bumps.player_profile;
    }
    profile.balls[tier as usize] = profile.balls[tier as usize]
        .checked_add(quantity)
        .ok_or(HuntError::MathOverflow)?;
    profile.total_purchased = profile
        .total_purchased
        .checked_add(quantity as u64)
        .ok_or(HuntError::MathOverflow)?;

    let game_state = &mut ctx.accounts.game_state;
    game_state.total_revenue = game_state
        .total_revenue
        .checked_add(total_cost)
        .ok_or(HuntError::MathOverflow)?;

    emit!(BallsPurchased {
        buyer: ctx.accounts.player.key(),
        tier,
        quantity,
        total_cost,
    });

    Ok(())
}
