use anchor_lang::prelude::*;

#[error_code]
pub enum LendingError {
    #[msg("Config already exists: initialize may only be called once")]
    ConfigAlreadyExists,

    #[msg("Program config has not been initialized")]
    NotInitialized,

    #[msg("Invalid parameter: bps must not exceed 10000, durations must be positive with min <= max")]
    InvalidParameter,

    #[msg("Unauthorized: signer does not match expected authority")]
    Unauthorized,

    #[msg("Borrower is not whitelisted")]
    NotWhitelisted,

    #[msg("Borrower already has an active loan")]
    LoanAlreadyActive,

    #[msg("Loan duration is outside the configured bounds")]
    InvalidDuration,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Requested principal exceeds the collateral borrow limit")]
    ExceedsBorrowLimit,

    #[msg("Insufficient treasury liquidity")]
    InsufficientLiquidity,

    #[msg("No active loan for this borrower")]
    NoActiveLoan,

    #[msg("Insufficient funds to cover the repayment amount")]
    InsufficientFunds,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Token mint does not match an accepted asset")]
    MintMismatch,

    #[msg("Loan is not yet past its due time")]
    LoanNotExpired,
}
