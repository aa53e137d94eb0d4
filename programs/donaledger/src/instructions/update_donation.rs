use anchor_lang::prelude::*;

use crate::{
    errors::DonationError,
    events::{PurposeEdited, RecipientRequested},
    states::{AuthorityCap, Capability, Donation},
};

#[derive(Accounts)]
pub struct UpdateDonation<'info> {
    #[account(mut)]
    pub donation: Account<'info, Donation>,
    pub caller: Signer<'info>,
}

#[derive(Accounts)]
pub struct RequestRecipient<'info> {
    #[account(mut)]
    pub donation: Account<'info, Donation>,
    #[account(
      constraint = authority_cap.is_held_by(authority.key) @ DonationError::MissingCapability,
    )]
    pub authority_cap: Account<'info, AuthorityCap>,
    pub authority: Signer<'info>,
}

pub fn edit_purpose_id(ctx: Context<UpdateDonation>, new_purpose_id: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let donation = &mut ctx.accounts.donation;
    let old_purpose_id = donation.purpose_id();
    donation.edit_purpose_id(&caller, new_purpose_id)?;

    msg!("purpose {} -> {}", old_purpose_id, new_purpose_id);
    emit!(PurposeEdited {
        donation: donation.key(),
        editor: caller,
        old_purpose_id,
        new_purpose_id,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

pub fn request_recipient(ctx: Context<RequestRecipient>) -> Result<()> {
    let caller = ctx.accounts.authority.key();
    let donation = &mut ctx.accounts.donation;
    donation.request_recipient(&caller, &ctx.accounts.authority_cap)?;

    msg!("recipient requested by {}", caller);
    emit!(RecipientRequested {
        donation: donation.key(),
        requester: caller,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
