use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::LendingError;
use crate::events::LoanRepaid;
use crate::state::{Loan, ProgramConfig};

#[derive(Accounts)]
pub struct RepayLoan<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
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
        constraint = treasury_vault.mint == loan.mint @ LendingError::MintMismatch,
    )]
    pub treasury_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = borrower_token_account.owner == borrower.key() @ LendingError::Unauthorized,
        constraint = borrower_token_account.mint == loan.mint @ LendingError::MintMismatch,
    )]
    pub borrower_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub borrower: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handle_repay_loan(ctx: Context<RepayLoan>) -> Result<()> {
    let loan = &ctx.accounts.loan;
    require!(loan.is_active, LendingError::NoActiveLoan);
    require!(
        ctx.accounts.borrower_token_account.amount >= loan.repayment_amount,
        LendingError::InsufficientFunds
    );

    // Repayment (principal + interest): borrower -> treasury vault
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.borrower_token_account.to_account_info(),
                to: ctx.accounts.treasury_vault.to_account_info(),
                authority: ctx.accounts.borrower.to_account_info(),
            },
        ),
        loan.repayment_amount,
    )?;

    // Collateral back: collateral vault -> borrower, signed with the config PDA's seeds
    let config_seeds = &[CONFIG_SEED, &[ctx.accounts.config.bump]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.collateral_vault.to_account_info(),
                to: ctx.accounts.borrower_token_account.to_account_info(),
                authority: ctx.accounts.config.to_account_info(),
            },
            &[config_seeds],
        ),
        loan.collateral_amount,
    )?;

    emit!(LoanRepaid {
        loan: loan.key(),
        borrower: ctx.accounts.borrower.key(),
        amount_repaid: loan.repayment_amount,
        collateral_released: loan.collateral_amount,
    });

    // The loan account is closed by the `close = borrower` constraint, rent refunded

    Ok(())
}
