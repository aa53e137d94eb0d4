use anchor_lang::prelude::*;

use crate::{
    errors::DonationError,
    states::{AuthorityCap, Capability, Donation},
};

#[derive(Accounts)]
pub struct InspectDonation<'info> {
    pub donation: Account<'info, Donation>,
}

#[derive(Accounts)]
pub struct InspectAsReader<'info> {
    pub donation: Account<'info, Donation>,
    pub reader: Signer<'info>,
}

#[derive(Accounts)]
pub struct InspectAsAuthority<'info> {
    pub donation: Account<'info, Donation>,
    #[account(
      constraint = authority_cap.is_held_by(authority.key) @ DonationError::MissingCapability,
    )]
    pub authority_cap: Account<'info, AuthorityCap>,
    pub authority: Signer<'info>,
}

pub fn purpose_id(ctx: Context<InspectAsAuthority>) -> Result<u64> {
    Ok(ctx.accounts.donation.purpose_id())
}

pub fn amount(ctx: Context<InspectAsReader>) -> Result<u64> {
    ctx.accounts.donation.amount_for(ctx.accounts.reader.key)
}

pub fn is_received(ctx: Context<InspectDonation>) -> Result<u64> {
    Ok(ctx.accounts.donation.is_received())
}

pub fn authority_has_validated(ctx: Context<InspectDonation>) -> Result<bool> {
    Ok(ctx.accounts.donation.authority_has_validated())
}
