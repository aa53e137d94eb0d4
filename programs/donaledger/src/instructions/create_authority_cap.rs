use anchor_lang::prelude::*;

use crate::{
    errors::DonationError,
    events::CapabilityMinted,
    states::{AdminCap, AuthorityCap, Capability, DISCRIMINATOR_LEN},
    ADMIN_CAP_PREFIX,
};

pub const AUTHORITY_CAP_PREFIX: &str = "authority_cap";

#[derive(Accounts)]
#[instruction(authority_address: Pubkey)]
pub struct CreateAuthorityCap<'info> {
    #[account(init, payer = admin, space = DISCRIMINATOR_LEN + AuthorityCap::INIT_SPACE,
      seeds = [
        AUTHORITY_CAP_PREFIX.as_bytes(),
        authority_address.as_ref(),
      ],
      bump,
    )]
    pub authority_cap: Account<'info, AuthorityCap>,
    #[account(mut,
      seeds = [ADMIN_CAP_PREFIX.as_bytes()],
      bump = admin_cap.bump,
      constraint = admin_cap.is_held_by(admin.key) @ DonationError::MissingCapability,
    )]
    pub admin_cap: Account<'info, AdminCap>,
    #[account(mut)]
    pub admin: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn create_authority_cap(ctx: Context<CreateAuthorityCap>, authority_address: Pubkey) -> Result<()> {
    let minted = ctx.accounts.admin_cap.record_authority_cap()?;
    let admin_cap = ctx.accounts.admin_cap.key();
    ctx.accounts.authority_cap.set_inner(AuthorityCap {
        holder: authority_address,
        admin_cap,
        bump: ctx.bumps.authority_cap,
    });

    msg!("authority cap #{} issued to {}", minted, authority_address);
    emit!(CapabilityMinted {
        capability: ctx.accounts.authority_cap.key(),
        kind: AuthorityCap::KIND,
        holder: authority_address,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
