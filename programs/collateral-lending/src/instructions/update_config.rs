use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LendingError;
use crate::events::ConfigUpdated;
use crate::state::ProgramConfig;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        constraint = config.admin == admin.key() @ LendingError::Unauthorized,
    )]
    pub config: Account<'info, ProgramConfig>,

    pub admin: Signer<'info>,
}

pub fn handle_update_config(
    ctx: Context<UpdateConfig>,
    new_interest_rate_bps: Option<u16>,
    new_max_borrow_pct_bps: Option<u16>,
    new_min_loan_duration_sec: Option<i64>,
    new_max_loan_duration_sec: Option<i64>,
) -> Result<()> {
    let config = &mut ctx.accounts.config;

    let interest_rate_bps = new_interest_rate_bps.unwrap_or(config.interest_rate_bps);
    let max_borrow_pct_bps = new_max_borrow_pct_bps.unwrap_or(config.max_borrow_pct_bps);
    let min_loan_duration_sec = new_min_loan_duration_sec.unwrap_or(config.min_loan_duration_sec);
    let max_loan_duration_sec = new_max_loan_duration_sec.unwrap_or(config.max_loan_duration_sec);

    // The merged result must satisfy the same bounds as initialize.
    // Open loans are unaffected: their repayment amount was fixed at creation.
    ProgramConfig::validate_params(
        interest_rate_bps,
        max_borrow_pct_bps,
        min_loan_duration_sec,
        max_loan_duration_sec,
    )?;

    config.interest_rate_bps = interest_rate_bps;
    config.max_borrow_pct_bps = max_borrow_pct_bps;
    config.min_loan_duration_sec = min_loan_duration_sec;
    config.max_loan_duration_sec = max_loan_duration_sec;

    emit!(ConfigUpdated {
        config: config.key(),
        interest_rate_bps,
        max_borrow_pct_bps,
        min_loan_duration_sec,
        max_loan_duration_sec,
    });

    Ok(())
}
