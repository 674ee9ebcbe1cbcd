//! Invitation issuance and redemption.

pub mod service;

pub use service::{InvitationService, InviteInput, RedeemInput};
