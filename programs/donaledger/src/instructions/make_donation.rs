use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    events::DonationMade,
    states::{Donation, DISCRIMINATOR_LEN},
};

pub const HOLDING_PREFIX: &str = "holding";
pub const HOLDING_WALLET_PREFIX: &str = "holding_wallet";

#[derive(Accounts)]
pub struct MakeDonation<'info> {
    #[account(init, payer = donor, space = DISCRIMINATOR_LEN + Donation::INIT_SPACE)]
    pub donation: Account<'info, Donation>,
    #[account(
      seeds = [
        HOLDING_PREFIX.as_bytes(),
        donation.key().as_ref(),
      ],
      bump,
    )]
    /// CHECK: pda account ["holding", donation]
    pub holding_wallet_owner: AccountInfo<'info>,
    #[account(init, payer = donor,
      seeds = [
        HOLDING_WALLET_PREFIX.as_bytes(),
        donation.key().as_ref(),
      ],
      bump,
      token::mint = donation_mint,
      token::authority = holding_wallet_owner,
    )]
    pub holding_wallet: Account<'info, TokenAccount>,
    pub donation_mint: Account<'info, Mint>,
    #[account(mut)]
    pub donor: Signer<'info>,
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn make_donation(ctx: Context<MakeDonation>, purpose_id: u64, amount: u64) -> Result<()> {
    let donor = ctx.accounts.donor.key();
    let donation_mint = ctx.accounts.donation_mint.key();
    let donation = Donation::new(
        donor,
        purpose_id,
        amount,
        donation_mint,
        ctx.accounts.holding_wallet.key(),
        ctx.bumps.holding_wallet_owner,
    )?;
    ctx.accounts.donation.set_inner(donation);

    msg!("donation of {} pledged for purpose {}", amount, purpose_id);
    emit!(DonationMade {
        donation: ctx.accounts.donation.key(),
        donor,
        purpose_id,
        amount,
        donation_mint,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
