//! Approval resolution for operators of an exchange protocol.
//!
//! - [`reader`] reads the approval an owner currently grants an operator for an item.
//! - [`actions`] turns insufficient approvals into unsent approval transactions.
//! - [`signer`] is the signing identity those transactions are sent from.

pub mod actions;
pub mod error;
pub mod reader;
pub mod signer;

pub use actions::{get_approval_actions, ActionKind, ApprovalAction, TransactionRequest};
pub use error::{ClientError, Result};
pub use reader::{
    approved_item_amount, approved_item_amounts, ApprovalReader, ProviderApprovalReader,
};
pub use signer::{ApprovalSigner, ProviderSigner, SignerAccount};
