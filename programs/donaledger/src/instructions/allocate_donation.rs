use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::{events::DonationAllocated, states::Donation};

#[derive(Accounts)]
pub struct AllocateDonation<'info> {
    #[account(mut,
      has_one = holding_wallet,
      has_one = donation_mint,
    )]
    pub donation: Account<'info, Donation>,
    #[account(mut)]
    pub holding_wallet: Account<'info, TokenAccount>,
    #[account(mut,
      constraint = funder_token_wallet.owner == *funder.key,
      constraint = funder_token_wallet.mint == donation_mint.key(),
    )]
    pub funder_token_wallet: Account<'info, TokenAccount>,
    pub donation_mint: Account<'info, Mint>,
    pub funder: Signer<'info>,
    pub token_program: Program<'info, Token>,
}

pub fn allocate_donation(ctx: Context<AllocateDonation>) -> Result<()> {
    let presented = ctx.accounts.funder_token_wallet.amount;
    let units = ctx.accounts.donation.allocate(presented)?;

    // Split exactly the pledge off the funder wallet into the holding wallet
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder_token_wallet.to_account_info(),
                to: ctx.accounts.holding_wallet.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        units,
    )?;

    msg!("allocated {} of {} presented", units, presented);
    emit!(DonationAllocated {
        donation: ctx.accounts.donation.key(),
        funder: ctx.accounts.funder.key(),
        amount: units,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
