pub mod common;
pub use common::*;

pub mod capability;
pub use capability::*;

pub mod donation;
pub use donation::*;
