//! Approval inputs and the calls built to remediate them.

use alloy::primitives::{Address, Bytes, U256};
use alloy::rpc::types::{TransactionInput, TransactionRequest};
use alloy::sol_types::SolCall;
use serde::{Deserialize, Serialize};

use crate::abi::{erc20::ERC20, erc721::ERC721};
use crate::constants::MAX_INT;
use crate::error::{PrimitivesError, Result};
use crate::item::ItemType;

/// An (owner, item, operator) approval already found to be insufficient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsufficientApproval {
    pub token: Address,
    pub operator: Address,
    pub item_type: ItemType,
    pub identifier_or_criteria: U256,
}

pub type InsufficientApprovals = Vec<InsufficientApproval>;

/// State changing call that raises an approval to a sufficient level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApprovalCall {
    /// `setApprovalForAll(operator, approved)` on an ERC721 or ERC1155 contract
    SetApprovalForAll { operator: Address, approved: bool },
    /// `approve(spender, amount)` on an ERC20 contract
    Approve { spender: Address, amount: U256 },
}

impl ApprovalCall {
    /// Operator approval classes always get a blanket approval over every
    /// token, ERC20 always gets the maximum allowance.
    pub fn for_item_type(item_type: ItemType, token: Address, operator: Address) -> Result<Self> {
        match item_type {
            ItemType::Erc721
            | ItemType::Erc1155
            | ItemType::Erc721WithCriteria
            | ItemType::Erc1155WithCriteria => Ok(ApprovalCall::SetApprovalForAll {
                operator,
                approved: true,
            }),
            ItemType::Erc20 => Ok(ApprovalCall::Approve {
                spender: operator,
                amount: MAX_INT,
            }),
            ItemType::Native => Err(PrimitivesError::NativeItemApproval(token)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ApprovalCall::SetApprovalForAll { .. } => "setApprovalForAll",
            ApprovalCall::Approve { .. } => "approve",
        }
    }

    /// ABI encoded calldata, against the ERC721 ABI for operator approvals
    /// and the ERC20 ABI for allowances.
    pub fn encode(&self) -> Bytes {
        match *self {
            ApprovalCall::SetApprovalForAll { operator, approved } => {
                ERC721::setApprovalForAllCall { operator, approved }
                    .abi_encode()
                    .into()
            }
            ApprovalCall::Approve { spender, amount } => {
                ERC20::approveCall { spender, amount }.abi_encode().into()
            }
        }
    }

    /// Inverse of [`ApprovalCall::encode`], used to inspect relayed calldata.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if let Ok(call) = ERC721::setApprovalForAllCall::abi_decode(data, true) {
            return Ok(ApprovalCall::SetApprovalForAll {
                operator: call.operator,
                approved: call.approved,
            });
        }
        ERC20::approveCall::abi_decode(data, true)
            .map(|call| ApprovalCall::Approve {
                spender: call.spender,
                amount: call.amount,
            })
            .map_err(|e| PrimitivesError::EncodingError(e.to_string()))
    }
}

/// Raw call details of an approval transaction, enough to inspect or relay
/// it without going through the signer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDetails {
    pub to: Address,
    pub from: Address,
    pub data: Bytes,
}

impl TransactionDetails {
    pub fn to_transaction_request(&self) -> TransactionRequest {
        TransactionRequest::default()
            .to(self.to)
            .from(self.from)
            .input(TransactionInput::new(self.data.clone()))
    }
}
