pub mod initialize;
pub mod whitelist;
pub mod update_config;
pub mod treasury;
pub mod request_loan;
pub mod repay_loan;
pub mod liquidate;

pub use initialize::*;
pub use whitelist::*;
pub use update_config::*;
pub use treasury::*;
pub use request_loan::*;
pub use repay_loan::*;
pub use liquidate::*;
