use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::LendingError;
use crate::events::LoanLiquidated;
use crate::state::{Loan, ProgramConfig};

#[derive(Accounts)]
pub struct LiquidateLoan<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        constraint = config.admin == admin.key() @ LendingError::Unauthorized,
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(
        mut,
        seeds = [LOAN_SEED, borrower.key().as_ref()],
        bump = loan.bump,
        close = borrower,
        constraint = loan.borrower == borrower.key() @ LendingError::Unauthorized,
    )]
    pub loan: Account<'info, Loan>,

    #[account(
        mut,
        seeds = [COLLATERAL_VAULT_SEED, borrower.key().as_ref()],
        bump,
    )]
    pub collateral_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [TREASURY_VAULT_SEED],
        bump = config.treasury_bump,
        constraint = treasury_vault.mint == collateral_vault.mint @ LendingError::MintMismatch,
    )]
    pub treasury_vault: Account<'info, TokenAccount>,

    /// CHECK: rent refund target only, validated against loan.borrower
    #[account(mut)]
    pub borrower: UncheckedAccount<'info>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handle_liquidate_loan(ctx: Context<LiquidateLoan>) -> Result<()> {
    let loan = &ctx.accounts.loan;
    require!(loan.is_active, LendingError::NoActiveLoan);

    let now = Clock::get()?.unix_timestamp;
    require!(loan.is_expired(now)?, LendingError::LoanNotExpired);

    // Seize the whole vault balance so the vault returns to zero with the loan closed
    let seized = ctx.accounts.collateral_vault.amount;
    let config_seeds = &[CONFIG_SEED, &[ctx.accounts.config.bump]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.collateral_vault.to_account_info(),
                to: ctx.accounts.treasury_vault.to_account_info(),
                authority: ctx.accounts.config.to_account_info(),
            },
            &[config_seeds],
        ),
        seized,
    )?;

    emit!(LoanLiquidated {
        loan: loan.key(),
        borrower: loan.borrower,
        collateral_seized: seized,
    });

    // The loan account is closed by the `close = borrower` constraint

    Ok(())
}
