use anchor_lang::prelude::*;

use crate::{
    errors::DonationError,
    events::DonationValidated,
    states::{AuthorityCap, Capability, Donation},
};

#[derive(Accounts)]
pub struct ValidateWithAuthority<'info> {
    #[account(mut)]
    pub donation: Account<'info, Donation>,
    #[account(
      constraint = authority_cap.is_held_by(authority.key) @ DonationError::MissingCapability,
    )]
    pub authority_cap: Account<'info, AuthorityCap>,
    pub authority: Signer<'info>,
}

pub fn validate_with_authority(ctx: Context<ValidateWithAuthority>) -> Result<()> {
    let donation = &mut ctx.accounts.donation;
    donation.validate();

    msg!("validated by {}", ctx.accounts.authority.key());
    emit!(DonationValidated {
        donation: donation.key(),
        authority: ctx.accounts.authority.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
