use anchor_lang::prelude::*;

#[error_code]
pub enum DonationError {
    #[msg("Presented funds are below the pledged amount")]
    InsufficientFunds,
    #[msg("Recipient pending flag is not in the expected state")]
    RecipientPending,
    #[msg("Donation purpose is not in the expected state")]
    UndeclaredPurpose,
    #[msg("Authority validation is not in the expected state")]
    NotValidatedByAuthority,
    #[msg("Caller fails the donor ownership check")]
    NotOwner,
    #[msg("Signer does not hold the required capability")]
    MissingCapability,
    #[msg("Donation is already funded")]
    AlreadyFunded,
    #[msg("Donation amount can not be zero")]
    DonationAmountZero,
    #[msg("Holding wallet balance is below the donation fund")]
    HoldingBalanceMismatch,
    #[msg("Math overflow")]
    MathOverflow,
}
