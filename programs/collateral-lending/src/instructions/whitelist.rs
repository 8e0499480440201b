use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LendingError;
use crate::events::WhitelistUpdated;
use crate::state::{ProgramConfig, WhitelistEntry};

#[derive(Accounts)]
#[instruction(borrower: Pubkey)]
pub struct SetWhitelist<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        constraint = config.admin == admin.key() @ LendingError::Unauthorized,
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(
        init_if_needed,
        seeds = [WHITELIST_SEED, borrower.as_ref()],
        bump,
        payer = admin,
        space = WhitelistEntry::SIZE,
    )]
    pub whitelist_entry: Account<'info, WhitelistEntry>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_set_whitelist(
    ctx: Context<SetWhitelist>,
    borrower: Pubkey,
    is_whitelisted: bool,
) -> Result<()> {
    let entry = &mut ctx.accounts.whitelist_entry;
    if entry.borrower == Pubkey::default() {
        // First grant for this borrower
        entry.borrower = borrower;
        entry.bump = ctx.bumps.whitelist_entry;
    }
    entry.is_whitelisted = is_whitelisted;

    emit!(WhitelistUpdated {
        borrower,
        is_whitelisted,
    });

    Ok(())
}
