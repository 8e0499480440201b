use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::LendingError;
use crate::events::{TreasuryFunded, TreasuryWithdrawn};
use crate::state::ProgramConfig;

// ─── FUND ───────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct FundTreasury<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        constraint = config.admin == admin.key() @ LendingError::Unauthorized,
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(
        mut,
        seeds = [TREASURY_VAULT_SEED],
        bump = config.treasury_bump,
    )]
    pub treasury_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = admin_token_account.mint == config.principal_mint @ LendingError::MintMismatch,
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn fund_handler(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
    require!(amount > 0, LendingError::InvalidAmount);

    // Inbound liquidity is a plain admin-signed transfer
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin_token_account.to_account_info(),
                to: ctx.accounts.treasury_vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(TreasuryFunded {
        admin: ctx.accounts.admin.key(),
        amount,
    });

    Ok(())
}

// ─── WITHDRAW ───────────────────────────────────────────────────

#[derive(Accounts)]
pub struct WithdrawTreasury<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        constraint = config.admin == admin.key() @ LendingError::Unauthorized,
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(
        mut,
        seeds = [TREASURY_VAULT_SEED],
        bump = config.treasury_bump,
    )]
    pub treasury_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = admin_token_account.mint == config.principal_mint @ LendingError::MintMismatch,
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn withdraw_handler(ctx: Context<WithdrawTreasury>, amount: u64) -> Result<()> {
    require!(amount > 0, LendingError::InvalidAmount);
    require!(
        ctx.accounts.treasury_vault.amount >= amount,
        LendingError::InsufficientLiquidity
    );

    // Outbound vault transfers are signed with the config PDA's seeds
    let config_seeds = &[CONFIG_SEED, &[ctx.accounts.config.bump]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.treasury_vault.to_account_info(),
                to: ctx.accounts.admin_token_account.to_account_info(),
                authority: ctx.accounts.config.to_account_info(),
            },
            &[config_seeds],
        ),
        amount,
    )?;

    emit!(TreasuryWithdrawn {
        admin: ctx.accounts.admin.key(),
        amount,
    });

    Ok(())
}
