//! Core types for Portico token approvals
//!
//! This module re-exports the alloy types the client crates need so that every
//! crate in the workspace builds against the same alloy version.

pub mod alloy {
    pub mod primitives {
        pub use alloy::primitives::{address, b256, bytes, Address, Bytes, B256, U256};
    }

    pub mod network {
        pub use alloy::network::{Ethereum, EthereumWallet, Network};
    }

    pub mod providers {
        pub use alloy::providers::{PendingTransactionBuilder, Provider, ProviderBuilder};
    }

    pub mod transports {
        pub use alloy::transports::{Transport, TransportError};
    }

    pub mod rpc {
        pub use alloy::rpc::types::TransactionRequest;
    }

    pub mod sol_types {
        pub use alloy::sol_types::SolCall;
    }

    pub mod contract {
        pub use alloy::contract::Error;
    }
}

pub mod abi;
pub mod approval;
pub mod constants;
pub mod error;
pub mod item;

pub use approval::{ApprovalCall, InsufficientApproval, InsufficientApprovals, TransactionDetails};
pub use constants::{is_fully_approved, ApprovedAmount, MAX_INT};
pub use error::{PrimitivesError, Result};
pub use item::{Item, ItemType};
