use anchor_lang::prelude::*;

use crate::{
    errors::DonationError,
    events::CapabilityMinted,
    program::Donaledger,
    states::{AdminCap, Capability, DISCRIMINATOR_LEN},
};

pub const ADMIN_CAP_PREFIX: &str = "admin_cap";

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(init, payer = deployer, space = DISCRIMINATOR_LEN + AdminCap::INIT_SPACE,
      seeds = [ADMIN_CAP_PREFIX.as_bytes()],
      bump,
    )]
    pub admin_cap: Account<'info, AdminCap>,
    #[account(
      constraint = program.programdata_address()? == Some(program_data.key()),
    )]
    pub program: Program<'info, Donaledger>,
    /// Only the upgrade authority of the deployed program may bootstrap.
    #[account(
      constraint = program_data.upgrade_authority_address == Some(deployer.key()) @ DonationError::MissingCapability,
    )]
    pub program_data: Account<'info, ProgramData>,
    #[account(mut)]
    pub deployer: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let deployer = ctx.accounts.deployer.key();
    ctx.accounts
        .admin_cap
        .set_inner(AdminCap::new(deployer, ctx.bumps.admin_cap));

    msg!("admin cap issued to {}", deployer);
    emit!(CapabilityMinted {
        capability: ctx.accounts.admin_cap.key(),
        kind: AdminCap::KIND,
        holder: deployer,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
