use anchor_lang::prelude::*;

use crate::errors::HuntError;
use crate::events::{BallPriceUpdated, CatchRateUpdated, MaxActiveUpdated};
use crate::state::*;

/// Shared context for the authority-only parameter updates.
#[derive(Accounts)]
pub struct ConfigureGame<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"game_state"],
        bump = game_state.bump,
        constraint = game_state.is_initialized @ HuntError::NotInitialized,
        constraint = game_state.authority == authority.key() @ HuntError::Unauthorized,
    )]
    pub game_state: Box<Account<'info, GameState>>,
}

pub fn set_ball_price_handler(ctx: Context<ConfigureGame>, tier: u8, new_price: u64) -> Result<()> {
    require!((tier as usize) < NUM_BALL_TIERS, HuntError::InvalidBallTier);
    require!(new_price > 0, HuntError::ZeroBallPrice);

    let game_state = &mut ctx.accounts.game_state;
    let old_price = game_state.ball_prices[tier as usize];
    game_state.ball_prices[tier as usize] = new_price;

    emit!(BallPriceUpdated {
        tier,
        old_price,
        new_price,
    });

    Ok(())
}

pub fn set_catch_rate_handler(ctx: Context<ConfigureGame>, tier: u8, new_rate: u8) -> Result<()> {
    require!((tier as usize) < NUM_BALL_TIERS, HuntError::InvalidBallTier);
    require!(new_rate <= 100, HuntError::InvalidCatchRate);

    let game_state = &mut ctx.accounts.game_state;
    let old_rate = game_state.catch_rates[tier as usize];
    game_state.catch_rates[tier as usize] = new_rate;

    emit!(CatchRateUpdated {
        tier,
        old_rate,
        new_rate,
    });

    Ok(())
}

pub fn set_max_active_creatures_handler(ctx: Context<ConfigureGame>, new_max: u8) -> Result<()> {
    require!(
        new_max >= 1 && new_max <= MAX_SPAWN_SLOTS as u8,
        HuntError::InvalidMaxActiveCreatures
    );

    let game_state = &mut ctx.accounts.game_state;
    let old_max = game_state.max_active_creatures;
    game_state.max_active_creatures = new_max;

    emit!(MaxActiveUpdated { old_max, new_max });

    Ok(())
}
