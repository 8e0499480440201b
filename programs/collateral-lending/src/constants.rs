pub const CONFIG_SEED: &[u8] = b"config";
pub const TREASURY_VAULT_SEED: &[u8] = b"treasury_vault";
pub const COLLATERAL_VAULT_SEED: &[u8] = b"collateral_vault";
pub const WHITELIST_SEED: &[u8] = b"whitelist";
pub const LOAN_SEED: &[u8] = b"loan";

/// Maximum allowed value for any basis-point parameter: 100% (10000 basis points)
pub const MAX_BASIS_POINTS: u16 = 10_000;

/// Denominator for basis-point math
pub const BPS_DENOMINATOR: u128 = 10_000;
