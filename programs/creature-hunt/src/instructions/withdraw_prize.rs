use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::errors::HuntError;
use crate::events::PrizeWithdrawn;
use crate::state::*;

#[derive(Accounts)]
pub struct WithdrawPrize<'info> {
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

    /// Vault's token account for the mint being withdrawn (source).
    #[account(
        mut,
        constraint = vault_prize_account.mint == prize_mint.key(),
        constraint = vault_prize_account.amount == 1,
    )]
    pub vault_prize_account: Account<'info, TokenAccount>,

    /// Authority's token account (destination), created if missing.
    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = prize_mint,
        associated_token::authority = authority,
    )]
    pub authority_prize_account: Account<'info, TokenAccount>,

    pub prize_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<WithdrawPrize>, prize_index: u8) -> Result<()> {
    let prize_vault = &ctx.accounts.prize_vault;
    let idx = prize_index as usize;

    require!(prize_vault.count > 0, HuntError::VaultEmpty);
    require!(idx < prize_vault.count as usize, HuntError::InvalidPrizeIndex);
    require!(
        prize_vault.mints[idx] == ctx.accounts.prize_mint.key(),
        HuntError::InvalidPrizeIndex
    );

    let vault_seeds = &[b"prize_vault".as_ref(), &[prize_vault.bump]];
    let signer_seeds = &[&vault_seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault_prize_account.to_account_info(),
                to: ctx.accounts.authority_prize_account.to_account_info(),
                authority: ctx.accounts.prize_vault.to_account_info(),
            },
            signer_seeds,
        ),
        1,
    )?;

    let prize_vault = &mut ctx.accounts.prize_vault;
    let removed = prize_vault.swap_remove(idx);

    emit!(PrizeWithdrawn {
        prize_mint: removed,
        vault_count: prize_vault.count,
    });

    Ok(())
}
