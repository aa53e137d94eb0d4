use anchor_lang::prelude::*;

use crate::states::CapabilityKind;

#[event]
pub struct CapabilityMinted {
    pub capability: Pubkey,
    pub kind: CapabilityKind,
    pub holder: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct DonationMade {
    pub donation: Pubkey,
    pub donor: Pubkey,
    pub purpose_id: u64,
    pub amount: u64,
    pub donation_mint: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PurposeEdited {
    pub donation: Pubkey,
    pub editor: Pubkey,
    pub old_purpose_id: u64,
    pub new_purpose_id: u64,
    pub timestamp: i64,
}

#[event]
pub struct RecipientRequested {
    pub donation: Pubkey,
    pub requester: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct DonationAllocated {
    pub donation: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct DonationValidated {
    pub donation: Pubkey,
    pub authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct DonationReceived {
    pub donation: Pubkey,
    pub caller: Pubkey,
    pub new_donor: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct DonationClaimed {
    pub donation: Pubkey,
    pub claimer: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct DonationCancelled {
    pub donation: Pubkey,
    pub donor: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
