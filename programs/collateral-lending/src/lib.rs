use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMhWTcQwRKrpH91UEAGtm5i6H6nC3v");

#[program]
pub mod collateral_lending {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        interest_rate_bps: u16,
        max_borrow_pct_bps: u16,
        min_loan_duration_sec: i64,
        max_loan_duration_sec: i64,
    ) -> Result<()> {
        instructions::initialize::handle_initialize(
            ctx,
            interest_rate_bps,
            max_borrow_pct_bps,
            min_loan_duration_sec,
            max_loan_duration_sec,
        )
    }

    pub fn set_whitelist(
        ctx: Context<SetWhitelist>,
        borrower: Pubkey,
        is_whitelisted: bool,
    ) -> Result<()> {
        instructions::whitelist::handle_set_whitelist(ctx, borrower, is_whitelisted)
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        new_interest_rate_bps: Option<u16>,
        new_max_borrow_pct_bps: Option<u16>,
        new_min_loan_duration_sec: Option<i64>,
        new_max_loan_duration_sec: Option<i64>,
    ) -> Result<()> {
        instructions::update_config::handle_update_config(
            ctx,
            new_interest_rate_bps,
            new_max_borrow_pct_bps,
            new_min_loan_duration_sec,
            new_max_loan_duration_sec,
        )
    }

    pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
        instructions::treasury::fund_handler(ctx, amount)
    }

    pub fn withdraw_treasury(ctx: Context<WithdrawTreasury>, amount: u64) -> Result<()> {
        instructions::treasury::withdraw_handler(ctx, amount)
    }

    pub fn request_loan(
        ctx: Context<RequestLoan>,
        collateral_amount: u64,
        principal_amount: u64,
        duration_sec: i64,
    ) -> Result<()> {
        instructions::request_loan::handle_request_loan(
            ctx,
            collateral_amount,
            principal_amount,
            duration_sec,
        )
    }

    pub fn repay_loan(ctx: Context<RepayLoan>) -> Result<()> {
        instructions::repay_loan::handle_repay_loan(ctx)
    }

    pub fn liquidate_loan(ctx: Context<LiquidateLoan>) -> Result<()> {
        instructions::liquidate::handle_liquidate_loan(ctx)
    }
}
