#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod states;

use instructions::*;

declare_id!("G3MhSuKbamdbetrVzTAQzUENaFzy9VdYBaoymtf9Vsfi");

#[program]
pub mod donaledger {
    use super::*;

    /// One-time bootstrap: issues the AdminCap to the deploying account.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    pub fn create_authority_cap(ctx: Context<CreateAuthorityCap>, authority_address: Pubkey) -> Result<()> {
        instructions::create_authority_cap(ctx, authority_address)
    }

    pub fn make_donation(ctx: Context<MakeDonation>, purpose_id: u64, amount: u64) -> Result<()> {
        instructions::make_donation(ctx, purpose_id, amount)
    }

    pub fn edit_purpose_id(ctx: Context<UpdateDonation>, new_purpose_id: u64) -> Result<()> {
        instructions::edit_purpose_id(ctx, new_purpose_id)
    }

    pub fn request_recipient(ctx: Context<RequestRecipient>) -> Result<()> {
        instructions::request_recipient(ctx)
    }

    pub fn allocate_donation(ctx: Context<AllocateDonation>) -> Result<()> {
        instructions::allocate_donation(ctx)
    }

    pub fn validate_with_authority(ctx: Context<ValidateWithAuthority>) -> Result<()> {
        instructions::validate_with_authority(ctx)
    }

    pub fn receive_by_recipient(ctx: Context<Disburse>, recipient_address: Pubkey) -> Result<()> {
        instructions::receive_by_recipient(ctx, recipient_address)
    }

    pub fn claim_by_authority(ctx: Context<ClaimByAuthority>) -> Result<()> {
        instructions::claim_by_authority(ctx)
    }

    pub fn cancel_donation(ctx: Context<Disburse>) -> Result<()> {
        instructions::cancel_donation(ctx)
    }

    pub fn purpose_id(ctx: Context<InspectAsAuthority>) -> Result<u64> {
        instructions::purpose_id(ctx)
    }

    pub fn amount(ctx: Context<InspectAsReader>) -> Result<u64> {
        instructions::amount(ctx)
    }

    pub fn is_received(ctx: Context<InspectDonation>) -> Result<u64> {
        instructions::is_received(ctx)
    }

    pub fn authority_has_validated(ctx: Context<InspectDonation>) -> Result<bool> {
        instructions::authority_has_validated(ctx)
    }
}
