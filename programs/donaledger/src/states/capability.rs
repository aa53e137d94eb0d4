use anchor_lang::prelude::*;

use crate::errors::DonationError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapabilityKind {
    Admin,
    Authority,
}

/// Possession-based authorization. A capability account proves its kind
/// through its Anchor discriminator and its possession through `holder`.
pub trait Capability {
    const KIND: CapabilityKind;

    fn holder(&self) -> Pubkey;

    fn is_held_by(&self, key: &Pubkey) -> bool {
        self.holder() == *key
    }
}

/// Singleton granting the right to mint [AuthorityCap]s.
///
/// ```ignore
/// seeds = [b"admin_cap", &[bump]]
/// ```
#[account]
#[derive(Default, Debug, PartialEq, Eq, InitSpace)]
pub struct AdminCap {
    pub holder: Pubkey,
    pub authority_caps_minted: u64,
    pub bump: u8,
}

impl AdminCap {
    pub fn new(holder: Pubkey, bump: u8) -> Self {
        Self {
            holder,
            authority_caps_minted: 0,
            bump,
        }
    }

    pub fn record_authority_cap(&mut self) -> Result<u64> {
        self.authority_caps_minted = self
            .authority_caps_minted
            .checked_add(1)
            .ok_or(DonationError::MathOverflow)?;
        Ok(self.authority_caps_minted)
    }
}

impl Capability for AdminCap {
    const KIND: CapabilityKind = CapabilityKind::Admin;

    fn holder(&self) -> Pubkey {
        self.holder
    }
}

/// Grants a validator the right to read purposes and validate donations.
///
/// ```ignore
/// seeds = [b"authority_cap", holder.as_ref(), &[bump]]
/// ```
#[account]
#[derive(Default, Debug, PartialEq, Eq, InitSpace)]
pub struct AuthorityCap {
    pub holder: Pubkey,
    /// The [AdminCap] this capability was minted under.
    pub admin_cap: Pubkey,
    pub bump: u8,
}

impl Capability for AuthorityCap {
    const KIND: CapabilityKind = CapabilityKind::Authority;

    fn holder(&self) -> Pubkey {
        self.holder
    }
}
