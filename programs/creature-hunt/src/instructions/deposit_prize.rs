use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::errors::HuntError;
use crate::events::PrizeDeposited;
use crate::state::*;

#[derive(Accounts)]
pub struct DepositPrize<'info> {
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
        seeds = [b"prize_vault"],
        bump = prize_vault.bump,
    )]
    pub prize_vault: Box<Account<'info, PrizeVault>>,

    /// The prize NFT mint (0 decimals, supply 1).
    pub prize_mint: Account<'info, Mint>,

    /// Authority's token account holding the NFT (source).
    #[account(
        mut,
        constraint = source_prize_account.owner == authority.key(),
        constraint = source_prize_account.mint == prize_mint.key(),
        constraint = source_prize_account.amount == 1,
    )]
    pub source_prize_account: Account<'info, TokenAccount>,

    /// Vault's token account for this mint (destination), created on
    /// first deposit of the mint.
    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = prize_mint,
        associated_token::authority = prize_vault,
    )]
    pub vault_prize_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<DepositPrize>) -> Result<()> {
    require!(
        ctx.accounts.prize_vault.count < ctx.accounts.prize_vault.max_size,
        HuntError::VaultFull
    );

    let prize_mint = ctx.accounts.prize_mint.key();

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.source_prize_account.to_account_info(),
                to: ctx.accounts.vault_prize_account.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
        ),
        1,
    )?;

    let prize_vault = &mut ctx.accounts.prize_vault;
    prize_vault.push(prize_mint)?;

    emit!(PrizeDeposited {
        prize_mint,
        vault_count: prize_vault.count,
    });

    Ok(())
}
