pub mod initialize;
pub use initialize::*;

pub mod create_authority_cap;
pub use create_authority_cap::*;

pub mod make_donation;
pub use make_donation::*;

pub mod update_donation;
pub use update_donation::*;

pub mod allocate_donation;
pub use allocate_donation::*;

pub mod validate_with_authority;
pub use validate_with_authority::*;

pub mod disburse;
pub use disburse::*;

pub mod inspect_donation;
pub use inspect_donation::*;
