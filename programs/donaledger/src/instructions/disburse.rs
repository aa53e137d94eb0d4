use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::{
    errors::DonationError,
    events::{DonationCancelled, DonationClaimed, DonationReceived},
    states::{AuthorityCap, Capability, Donation},
    HOLDING_PREFIX,
};

/// Accounts for every instruction that drains a donation's holding wallet
/// into the caller's token wallet.
#[derive(Accounts)]
pub struct Disburse<'info> {
    #[account(mut,
      has_one = holding_wallet,
      has_one = donation_mint,
    )]
    pub donation: Account<'info, Donation>,
    #[account(mut,
      constraint = holding_wallet.amount >= donation.donation_fund @ DonationError::HoldingBalanceMismatch,
    )]
    pub holding_wallet: Account<'info, TokenAccount>,
    #[account(
      seeds = [
        HOLDING_PREFIX.as_bytes(),
        donation.key().as_ref(),
      ],
      bump = donation.holding_bump,
    )]
    /// CHECK: pda account ["holding", donation]
    pub holding_wallet_owner: AccountInfo<'info>,
    #[account(mut,
      constraint = caller_token_wallet.owner == *caller.key,
      constraint = caller_token_wallet.mint == donation_mint.key(),
    )]
    pub caller_token_wallet: Account<'info, TokenAccount>,
    pub donation_mint: Account<'info, Mint>,
    pub caller: Signer<'info>,
    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct ClaimByAuthority<'info> {
    pub disburse: Disburse<'info>,
    #[account(
      constraint = authority_cap.is_held_by(disburse.caller.key) @ DonationError::MissingCapability,
    )]
    pub authority_cap: Account<'info, AuthorityCap>,
}

impl<'info> Disburse<'info> {
    fn pay_out(&self, units: u64) -> Result<()> {
        if units == 0 {
            return Ok(());
        }

        let donation_key = self.donation.key();
        let bump = [self.donation.holding_bump];
        let seeds = &[HOLDING_PREFIX.as_bytes(), donation_key.as_ref(), &bump];
        let signer = &[&seeds[..]];
        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.holding_wallet.to_account_info(),
                    to: self.caller_token_wallet.to_account_info(),
                    authority: self.holding_wallet_owner.to_account_info(),
                },
                signer,
            ),
            units,
        )
    }
}

pub fn receive_by_recipient(ctx: Context<Disburse>, recipient_address: Pubkey) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let units = ctx
        .accounts
        .donation
        .receive_by_recipient(&caller, recipient_address)?;
    ctx.accounts.pay_out(units)?;

    msg!("received {}, owner is now {}", units, recipient_address);
    emit!(DonationReceived {
        donation: ctx.accounts.donation.key(),
        caller,
        new_donor: recipient_address,
        amount: units,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

pub fn claim_by_authority(ctx: Context<ClaimByAuthority>) -> Result<()> {
    let accounts = ctx.accounts;
    let caller = accounts.disburse.caller.key();
    let units = accounts
        .disburse
        .donation
        .claim_by_authority(&caller, &accounts.authority_cap)?;
    accounts.disburse.pay_out(units)?;

    msg!("claimed {} by {}", units, caller);
    emit!(DonationClaimed {
        donation: accounts.disburse.donation.key(),
        claimer: caller,
        amount: units,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

pub fn cancel_donation(ctx: Context<Disburse>) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let units = ctx.accounts.donation.cancel(&caller)?;
    ctx.accounts.pay_out(units)?;

    msg!("cancelled, {} returned to donor", units);
    emit!(DonationCancelled {
        donation: ctx.accounts.donation.key(),
        donor: caller,
        amount: units,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
