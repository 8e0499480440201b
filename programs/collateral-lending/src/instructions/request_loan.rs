use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::LendingError;
use crate::events::LoanRequested;
use crate::state::{Loan, ProgramConfig, WhitelistEntry};

#[derive(Accounts)]
pub struct RequestLoan<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(
        seeds = [WHITELIST_SEED, borrower.key().as_ref()],
        bump = whitelist_entry.bump,
    )]
    pub whitelist_entry: Account<'info, WhitelistEntry>,

    #[account(
        init_if_needed,
        seeds = [LOAN_SEED, borrower.key().as_ref()],
        bump,
        payer = borrower,
        space = Loan::SIZE,
    )]
    pub loan: Account<'info, Loan>,

    pub mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        seeds = [COLLATERAL_VAULT_SEED, borrower.key().as_ref()],
        bump,
        payer = borrower,
        token::mint = mint,
        token::authority = config,
    )]
    pub collateral_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [TREASURY_VAULT_SEED],
        bump = config.treasury_bump,
        constraint = treasury_vault.mint == mint.key() @ LendingError::MintMismatch,
    )]
    pub treasury_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = borrower_token_account.owner == borrower.key() @ LendingError::Unauthorized,
        constraint = borrower_token_account.mint == mint.key() @ LendingError::MintMismatch,
    )]
    pub borrower_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub borrower: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn handle_request_loan(
    ctx: Context<RequestLoan>,
    collateral_amount: u64,
    principal_amount: u64,
    duration_sec: i64,
) -> Result<()> {
    let config = &ctx.accounts.config;

    require!(
        ctx.accounts.whitelist_entry.is_whitelisted,
        LendingError::NotWhitelisted
    );
    require!(!ctx.accounts.loan.is_active, LendingError::LoanAlreadyActive);
    require!(
        config.duration_in_bounds(duration_sec),
        LendingError::InvalidDuration
    );
    require!(principal_amount > 0, LendingError::InvalidAmount);
    require!(collateral_amount > 0, LendingError::InvalidAmount);
    require!(
        principal_amount <= config.max_principal(collateral_amount)?,
        LendingError::ExceedsBorrowLimit
    );
    require!(
        ctx.accounts.treasury_vault.amount >= principal_amount,
        LendingError::InsufficientLiquidity
    );
    require!(
        config.accepts_mint(&ctx.accounts.mint.key()),
        LendingError::MintMismatch
    );

    let repayment_amount = config.repayment_due(principal_amount)?;

    // Collateral: borrower -> collateral vault
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.borrower_token_account.to_account_info(),
                to: ctx.accounts.collateral_vault.to_account_info(),
                authority: ctx.accounts.borrower.to_account_info(),
            },
        ),
        collateral_amount,
    )?;

    // Principal: treasury vault -> borrower, signed with the config PDA's seeds
    let config_seeds = &[CONFIG_SEED, &[ctx.accounts.config.bump]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.treasury_vault.to_account_info(),
                to: ctx.accounts.borrower_token_account.to_account_info(),
                authority: ctx.accounts.config.to_account_info(),
            },
            &[config_seeds],
        ),
        principal_amount,
    )?;

    let now = Clock::get()?.unix_timestamp;
    let loan = &mut ctx.accounts.loan;
    loan.borrower = ctx.accounts.borrower.key();
    loan.mint = ctx.accounts.mint.key();
    loan.collateral_amount = collateral_amount;
    loan.principal_amount = principal_amount;
    loan.repayment_amount = repayment_amount;
    loan.start_ts = now;
    loan.duration_sec = duration_sec;
    loan.is_active = true;
    loan.bump = ctx.bumps.loan;

    emit!(LoanRequested {
        loan: loan.key(),
        borrower: loan.borrower,
        mint: loan.mint,
        collateral_amount,
        principal_amount,
        repayment_amount,
        due_ts: loan.due_ts()?,
    });

    Ok(())
}
