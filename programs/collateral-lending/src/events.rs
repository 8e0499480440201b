use anchor_lang::prelude::*;

#[event]
pub struct ConfigInitialized {
    pub config: Pubkey,
    pub admin: Pubkey,
    pub principal_mint: Pubkey,
    pub secondary_mint: Pubkey,
    pub interest_rate_bps: u16,
    pub max_borrow_pct_bps: u16,
    pub min_loan_duration_sec: i64,
    pub max_loan_duration_sec: i64,
}

#[event]
pub struct ConfigUpdated {
    pub config: Pubkey,
    pub interest_rate_bps: u16,
    pub max_borrow_pct_bps: u16,
    pub min_loan_duration_sec: i64,
    pub max_loan_duration_sec: i64,
}

#[event]
pub struct WhitelistUpdated {
    pub borrower: Pubkey,
    pub is_whitelisted: bool,
}

#[event]
pub struct TreasuryFunded {
    pub admin: Pubkey,
    pub amount: u64,
}

#[event]
pub struct TreasuryWithdrawn {
    pub admin: Pubkey,
    pub amount: u64,
}

#[event]
pub struct LoanRequested {
    pub loan: Pubkey,
    pub borrower: Pubkey,
    pub mint: Pubkey,
    pub collateral_amount: u64,
    pub principal_amount: u64,
    pub repayment_amount: u64,
    pub due_ts: i64,
}

#[event]
pub struct LoanRepaid {
    pub loan: Pubkey,
    pub borrower: Pubkey,
    pub amount_repaid: u64,
    pub collateral_released: u64,
}

#[event]
pub struct LoanLiquidated {
    pub loan: Pubkey,
    pub borrower: Pubkey,
    pub collateral_seized: u64,
}
