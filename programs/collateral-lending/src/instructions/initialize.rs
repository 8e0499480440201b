use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::errors::LendingError;
use crate::events::ConfigInitialized;
use crate::state::ProgramConfig;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init_if_needed,
        seeds = [CONFIG_SEED],
        bump,
        payer = admin,
        space = ProgramConfig::SIZE,
    )]
    pub config: Account<'info, ProgramConfig>,

    pub principal_mint: Account<'info, Mint>,

    pub secondary_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        seeds = [TREASURY_VAULT_SEED],
        bump,
        payer = admin,
        token::mint = principal_mint,
        token::authority = config,
    )]
    pub treasury_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn handle_initialize(
    ctx: Context<Initialize>,
    interest_rate_bps: u16,
    max_borrow_pct_bps: u16,
    min_loan_duration_sec: i64,
    max_loan_duration_sec: i64,
) -> Result<()> {
    let config = &mut ctx.accounts.config;

    // A freshly created config has a zeroed admin; anything else means a prior initialize
    require!(
        config.admin == Pubkey::default(),
        LendingError::ConfigAlreadyExists
    );
    ProgramConfig::validate_params(
        interest_rate_bps,
        max_borrow_pct_bps,
        min_loan_duration_sec,
        max_loan_duration_sec,
    )?;
    require!(
        ctx.accounts.principal_mint.key() != ctx.accounts.secondary_mint.key(),
        LendingError::InvalidParameter
    );

    config.admin = ctx.accounts.admin.key();
    config.principal_mint = ctx.accounts.principal_mint.key();
    config.secondary_mint = ctx.accounts.secondary_mint.key();
    config.treasury_vault = ctx.accounts.treasury_vault.key();
    config.interest_rate_bps = interest_rate_bps;
    config.max_borrow_pct_bps = max_borrow_pct_bps;
    config.min_loan_duration_sec = min_loan_duration_sec;
    config.max_loan_duration_sec = max_loan_duration_sec;
    config.bump = ctx.bumps.config;
    config.treasury_bump = ctx.bumps.treasury_vault;
    config._reserved = [0u8; 64];

    emit!(ConfigInitialized {
        config: config.key(),
        admin: config.admin,
        principal_mint: config.principal_mint,
        secondary_mint: config.secondary_mint,
        interest_rate_bps,
        max_borrow_pct_bps,
        min_loan_duration_sec,
        max_loan_duration_sec,
    });

    Ok(())
}
