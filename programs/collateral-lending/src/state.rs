use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, MAX_BASIS_POINTS};
use crate::errors::LendingError;

#[account]
#[derive(Debug)]
pub struct ProgramConfig {
    /// Admin authority who initialized the protocol
    pub admin: Pubkey,
    /// Primary stable-asset mint (treasury liquidity is held in this asset)
    pub principal_mint: Pubkey,
    /// Secondary accepted settlement mint
    pub secondary_mint: Pubkey,
    /// The treasury's token vault (PDA-owned)
    pub treasury_vault: Pubkey,
    /// Flat interest charged on principal, in basis points
    pub interest_rate_bps: u16,
    /// Loan-to-collateral cap in basis points (e.g. 5000 = 50%)
    pub max_borrow_pct_bps: u16,
    pub min_loan_duration_sec: i64,
    pub max_loan_duration_sec: i64,
    /// PDA bump seed
    pub bump: u8,
    /// Treasury vault bump seed
    pub treasury_bump: u8,
    /// Reserved for future upgrades
    pub _reserved: [u8; 64],
}

impl ProgramConfig {
    pub const SIZE: usize = 8  // discriminator
        + 32   // admin
        + 32   // principal_mint
        + 32   // secondary_mint
        + 32   // treasury_vault
        + 2    // interest_rate_bps
        + 2    // max_borrow_pct_bps
        + 8    // min_loan_duration_sec
        + 8    // max_loan_duration_sec
        + 1    // bump
        + 1    // treasury_bump
        + 64;  // _reserved

    /// Shared bounds check for initialize and update_config.
    pub fn validate_params(
        interest_rate_bps: u16,
        max_borrow_pct_bps: u16,
        min_loan_duration_sec: i64,
        max_loan_duration_sec: i64,
    ) -> Result<()> {
        require!(
            interest_rate_bps <= MAX_BASIS_POINTS,
            LendingError::InvalidParameter
        );
        require!(
            max_borrow_pct_bps <= MAX_BASIS_POINTS,
            LendingError::InvalidParameter
        );
        require!(min_loan_duration_sec > 0, LendingError::InvalidParameter);
        require!(
            min_loan_duration_sec <= max_loan_duration_sec,
            LendingError::InvalidParameter
        );
        Ok(())
    }

    pub fn accepts_mint(&self, mint: &Pubkey) -> bool {
        *mint == self.principal_mint || *mint == self.secondary_mint
    }

    pub fn duration_in_bounds(&self, duration_sec: i64) -> bool {
        duration_sec >= self.min_loan_duration_sec && duration_sec <= self.max_loan_duration_sec
    }

    /// Maximum principal obtainable for the given collateral: floor(collateral * pct / 10000)
    pub fn max_principal(&self, collateral_amount: u64) -> Result<u64> {
        let limit = (collateral_amount as u128)
            .checked_mul(self.max_borrow_pct_bps as u128)
            .ok_or(LendingError::ArithmeticOverflow)?
            / BPS_DENOMINATOR;
        u64::try_from(limit).map_err(|_| error!(LendingError::ArithmeticOverflow))
    }

    /// Total amount due at repayment: principal plus flat interest on principal.
    /// Interest is fixed at loan creation and does not prorate by elapsed time.
    pub fn repayment_due(&self, principal_amount: u64) -> Result<u64> {
        let interest = (principal_amount as u128)
            .checked_mul(self.interest_rate_bps as u128)
            .ok_or(LendingError::ArithmeticOverflow)?
            / BPS_DENOMINATOR;
        let due = (principal_amount as u128)
            .checked_add(interest)
            .ok_or(LendingError::ArithmeticOverflow)?;
        u64::try_from(due).map_err(|_| error!(LendingError::ArithmeticOverflow))
    }
}

#[account]
#[derive(Debug)]
pub struct WhitelistEntry {
    pub borrower: Pubkey,
    pub is_whitelisted: bool,
    pub bump: u8,
}

impl WhitelistEntry {
    pub const SIZE: usize = 8  // discriminator
        + 32   // borrower
        + 1    // is_whitelisted
        + 1;   // bump
}

#[account]
#[derive(Debug)]
pub struct Loan {
    /// The borrower's wallet
    pub borrower: Pubkey,
    /// Asset the loan was disbursed in
    pub mint: Pubkey,
    /// Collateral locked in the borrower's collateral vault
    pub collateral_amount: u64,
    /// Principal disbursed from the treasury
    pub principal_amount: u64,
    /// Amount due at repayment, fixed at creation
    pub repayment_amount: u64,
    /// Disbursement timestamp
    pub start_ts: i64,
    pub duration_sec: i64,
    pub is_active: bool,
    /// PDA bump seed
    pub bump: u8,
}

impl Loan {
    pub const SIZE: usize = 8  // discriminator
        + 32   // borrower
        + 32   // mint
        + 8    // collateral_amount
        + 8    // principal_amount
        + 8    // repayment_amount
        + 8    // start_ts
        + 8    // duration_sec
        + 1    // is_active
        + 1;   // bump

    pub fn due_ts(&self) -> Result<i64> {
        self.start_ts
            .checked_add(self.duration_sec)
            .ok_or(error!(LendingError::ArithmeticOverflow))
    }

    /// A loan is liquidatable strictly after its due time.
    pub fn is_expired(&self, now: i64) -> Result<bool> {
        Ok(now > self.due_ts()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ProgramConfig {
        ProgramConfig {
            admin: Pubkey::new_unique(),
            principal_mint: Pubkey::new_unique(),
            secondary_mint: Pubkey::new_unique(),
            treasury_vault: Pubkey::new_unique(),
            interest_rate_bps: 100,
            max_borrow_pct_bps: 5_000,
            min_loan_duration_sec: 60,
            max_loan_duration_sec: 3_600,
            bump: 255,
            treasury_bump: 254,
            _reserved: [0u8; 64],
        }
    }

    fn test_loan(start_ts: i64, duration_sec: i64) -> Loan {
        Loan {
            borrower: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            collateral_amount: 100_000_000,
            principal_amount: 50_000_000,
            repayment_amount: 50_500_000,
            start_ts,
            duration_sec,
            is_active: true,
            bump: 255,
        }
    }

    #[test]
    fn borrow_limit_half_collateral() {
        let cfg = test_config();
        assert_eq!(cfg.max_principal(100_000_000).unwrap(), 50_000_000);
    }

    #[test]
    fn borrow_limit_floors() {
        let mut cfg = test_config();
        cfg.max_borrow_pct_bps = 3_333;
        assert_eq!(cfg.max_principal(100).unwrap(), 33);
    }

    #[test]
    fn borrow_limit_full_range() {
        let mut cfg = test_config();
        cfg.max_borrow_pct_bps = 10_000;
        assert_eq!(cfg.max_principal(u64::MAX).unwrap(), u64::MAX);
    }

    #[test]
    fn repayment_flat_interest() {
        let cfg = test_config();
        assert_eq!(cfg.repayment_due(50_000_000).unwrap(), 50_500_000);
    }

    #[test]
    fn repayment_zero_rate() {
        let mut cfg = test_config();
        cfg.interest_rate_bps = 0;
        assert_eq!(cfg.repayment_due(50_000_000).unwrap(), 50_000_000);
    }

    #[test]
    fn repayment_interest_floors() {
        let cfg = test_config();
        // 100 bps of 99 = 0.99, floors to 0
        assert_eq!(cfg.repayment_due(99).unwrap(), 99);
    }

    #[test]
    fn repayment_overflow_rejected() {
        let mut cfg = test_config();
        cfg.interest_rate_bps = 10_000;
        assert!(cfg.repayment_due(u64::MAX).is_err());
    }

    #[test]
    fn duration_bounds_inclusive() {
        let cfg = test_config();
        assert!(!cfg.duration_in_bounds(59));
        assert!(cfg.duration_in_bounds(60));
        assert!(cfg.duration_in_bounds(120));
        assert!(cfg.duration_in_bounds(3_600));
        assert!(!cfg.duration_in_bounds(3_601));
    }

    #[test]
    fn accepted_mints() {
        let cfg = test_config();
        assert!(cfg.accepts_mint(&cfg.principal_mint));
        assert!(cfg.accepts_mint(&cfg.secondary_mint));
        assert!(!cfg.accepts_mint(&Pubkey::new_unique()));
    }

    #[test]
    fn params_rejected_out_of_range() {
        assert!(ProgramConfig::validate_params(10_001, 5_000, 60, 3_600).is_err());
        assert!(ProgramConfig::validate_params(100, 10_001, 60, 3_600).is_err());
        assert!(ProgramConfig::validate_params(100, 5_000, 0, 3_600).is_err());
        assert!(ProgramConfig::validate_params(100, 5_000, -60, 3_600).is_err());
        assert!(ProgramConfig::validate_params(100, 5_000, 3_600, 60).is_err());
        assert!(ProgramConfig::validate_params(100, 5_000, 60, 3_600).is_ok());
    }

    #[test]
    fn params_accept_boundary_values() {
        assert!(ProgramConfig::validate_params(10_000, 10_000, 1, 1).is_ok());
        assert!(ProgramConfig::validate_params(0, 0, 60, 60).is_ok());
    }

    #[test]
    fn due_time_from_start() {
        let loan = test_loan(1_000, 120);
        assert_eq!(loan.due_ts().unwrap(), 1_120);
        assert!(!loan.is_expired(1_120).unwrap());
        assert!(loan.is_expired(1_121).unwrap());
    }

    #[test]
    fn due_time_overflow_rejected() {
        let loan = test_loan(i64::MAX, 1);
        assert!(loan.due_ts().is_err());
    }
}
