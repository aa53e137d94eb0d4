use anchor_lang::prelude::*;

use crate::errors::DonationError;

use super::{AuthorityCap, Capability};

/// Purpose tag of a donation. On the wire the id `0` is the sentinel for
/// [Purpose::Finalized]; any other id is a declared purpose.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum Purpose {
    /// Undeclared, or finalized for disbursement.
    #[default]
    Finalized,
    Declared(u64),
}

impl From<u64> for Purpose {
    fn from(id: u64) -> Self {
        match id {
            0 => Purpose::Finalized,
            id => Purpose::Declared(id),
        }
    }
}

impl Purpose {
    pub fn id(&self) -> u64 {
        match self {
            Purpose::Finalized => 0,
            Purpose::Declared(id) => *id,
        }
    }

    pub fn is_finalized(&self) -> bool {
        matches!(self, Purpose::Finalized)
    }
}

#[account]
#[derive(Default, Debug, PartialEq, Eq, InitSpace)]
pub struct Donation {
    /// Identity currently holding owner rights over the record.
    pub donor_address: Pubkey,
    pub purpose: Purpose,
    /// Pledged amount, fixed at creation.
    pub amount: u64,
    /// Units currently held by the holding wallet on behalf of this record.
    pub donation_fund: u64,
    pub recipient_is_pending: bool,
    pub authority_validation: bool,
    pub total_allocated: u64,
    pub total_disbursed: u64,
    pub donation_mint: Pubkey,
    pub holding_wallet: Pubkey,
    pub holding_bump: u8,
}

impl Donation {
    pub fn new(
        donor_address: Pubkey,
        purpose_id: u64,
        amount: u64,
        donation_mint: Pubkey,
        holding_wallet: Pubkey,
        holding_bump: u8,
    ) -> Result<Self> {
        require!(amount > 0, DonationError::DonationAmountZero);

        Ok(Self {
            donor_address,
            purpose: Purpose::from(purpose_id),
            amount,
            donation_mint,
            holding_wallet,
            holding_bump,
            ..Default::default()
        })
    }

    pub fn is_donor(&self, key: &Pubkey) -> bool {
        self.donor_address == *key
    }

    fn require_not_donor(&self, caller: &Pubkey) -> Result<()> {
        require!(!self.is_donor(caller), DonationError::NotOwner);
        Ok(())
    }

    fn require_pending(&self) -> Result<()> {
        require!(self.recipient_is_pending, DonationError::RecipientPending);
        Ok(())
    }

    /// Re-declares the purpose. The sentinel `0` is not a declaration and is
    /// rejected; a purpose only finalizes at creation.
    pub fn edit_purpose_id(&mut self, caller: &Pubkey, new_purpose_id: u64) -> Result<()> {
        self.require_not_donor(caller)?;
        self.require_pending()?;
        require!(new_purpose_id != 0, DonationError::UndeclaredPurpose);

        self.purpose = Purpose::from(new_purpose_id);
        Ok(())
    }

    /// Flags the record as awaiting a recipient. This is the only transition
    /// that raises `recipient_is_pending`, and only an authority may do it.
    pub fn request_recipient(&mut self, caller: &Pubkey, authority_cap: &AuthorityCap) -> Result<()> {
        require!(authority_cap.is_held_by(caller), DonationError::MissingCapability);
        self.require_not_donor(caller)?;
        require!(!self.recipient_is_pending, DonationError::RecipientPending);

        self.recipient_is_pending = true;
        Ok(())
    }

    /// Accepts funds from a container holding `presented` units and returns
    /// the exact number of units to move into the holding wallet.
    pub fn allocate(&mut self, presented: u64) -> Result<u64> {
        require!(presented >= self.amount, DonationError::InsufficientFunds);
        require!(self.purpose.is_finalized(), DonationError::UndeclaredPurpose);
        require!(self.donation_fund == 0, DonationError::AlreadyFunded);

        let total_allocated = self
            .total_allocated
            .checked_add(self.amount)
            .ok_or(DonationError::MathOverflow)?;

        self.donation_fund = self.amount;
        self.total_allocated = total_allocated;
        Ok(self.amount)
    }

    pub fn validate(&mut self) {
        self.authority_validation = true;
    }

    /// Pays out the whole fund to a non-donor and hands ownership to
    /// `recipient_address`.
    pub fn receive_by_recipient(&mut self, caller: &Pubkey, recipient_address: Pubkey) -> Result<u64> {
        self.require_not_donor(caller)?;
        require!(self.purpose.is_finalized(), DonationError::UndeclaredPurpose);

        let units = self.drain()?;
        self.donor_address = recipient_address;
        Ok(units)
    }

    pub fn claim_by_authority(&mut self, caller: &Pubkey, authority_cap: &AuthorityCap) -> Result<u64> {
        require!(authority_cap.is_held_by(caller), DonationError::MissingCapability);
        self.require_not_donor(caller)?;
        self.require_pending()?;
        require!(!self.authority_validation, DonationError::NotValidatedByAuthority);

        self.drain()
    }

    pub fn cancel(&mut self, caller: &Pubkey) -> Result<u64> {
        require!(self.is_donor(caller), DonationError::NotOwner);
        self.require_pending()?;

        let units = self.drain()?;
        self.recipient_is_pending = false;
        Ok(units)
    }

    fn drain(&mut self) -> Result<u64> {
        let units = self.donation_fund;
        let total_disbursed = self
            .total_disbursed
            .checked_add(units)
            .ok_or(DonationError::MathOverflow)?;

        self.donation_fund = 0;
        self.total_disbursed = total_disbursed;
        Ok(units)
    }

    /// Pledged amount, readable by non-donors only.
    pub fn amount_for(&self, caller: &Pubkey) -> Result<u64> {
        self.require_not_donor(caller)?;
        Ok(self.amount)
    }

    pub fn purpose_id(&self) -> u64 {
        self.purpose.id()
    }

    pub fn is_received(&self) -> u64 {
        self.donation_fund
    }

    pub fn authority_has_validated(&self) -> bool {
        self.authority_validation
    }

    pub fn is_conserved(&self) -> bool {
        self.total_allocated.checked_sub(self.total_disbursed) == Some(self.donation_fund)
    }
}
