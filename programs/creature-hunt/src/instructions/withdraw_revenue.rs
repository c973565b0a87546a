use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::HuntError;
use crate::events::RevenueWithdrawn;
use crate::state::*;

#[derive(Accounts)]
pub struct WithdrawRevenue<'info> {
    #[account(mut)]
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
        seeds = [b"treasury"],
        bump = treasury_record.bump,
    )]
    pub treasury_record: Account<'info, Treasury>,

    /// Program-owned payment token account (source).
    #[account(
        mut,
        constraint = game_payment_account.owner == game_state.key(),
        constraint = game_payment_account.mint == game_state.payment_mint,
    )]
    pub game_payment_account: Account<'info, TokenAccount>,

    /// Authority's payment token account (destination).
    #[account(
        mut,
        constraint = authority_payment_account.owner == authority.key(),
        constraint = authority_payment_account.mint == game_state.payment_mint,
    )]
    pub authority_payment_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<WithdrawRevenue>, amount: u64) -> Result<()> {
    require!(amount > 0, HuntError::InsufficientWithdrawalAmount);
    require!(
        ctx.accounts.game_payment_account.amount >= amount,
        HuntError::InsufficientWithdrawalAmount
    );

    let state_seeds = &[b"game_state".as_ref(), &[ctx.accounts.game_state.bump]];
    let signer_seeds = &[&state_seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.game_payment_account.to_account_info(),
                to: ctx.accounts.authority_payment_account.to_account_info(),
                authority: ctx.accounts.game_state.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    let treasury_record = &mut ctx.accounts.treasury_record;
    treasury_record.total_withdrawn = treasury_record
        .total_withdrawn
        .checked_add(amount)
        .ok_or(HuntError::MathOverflow)?;

    emit!(RevenueWithdrawn {
        recipient: ctx.accounts.authority.key(),
        amount,
    });

    Ok(())
}
