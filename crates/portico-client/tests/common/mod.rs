#![allow(dead_code)]

pub mod mock_transport;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use portico_client::{ApprovalReader, ApprovalSigner, ClientError, Result};
use portico_primitives::alloy::primitives::{address, Address, B256, U256};
use portico_primitives::{ApprovalCall, InsufficientApproval, ItemType};

pub const OWNER: Address = address!("00000000000000000000000000000000000000cc");
pub const TOKEN_A: Address = address!("0000000000000000000000000000000000000aaa");
pub const TOKEN_B: Address = address!("0000000000000000000000000000000000000ddd");
pub const OPERATOR: Address = address!("0000000000000000000000000000000000000bbb");
pub const SIGNER: Address = address!("0000000000000000000000000000000000000ccc");

pub fn insufficient_approval(
    token: Address,
    item_type: ItemType,
    identifier_or_criteria: u64,
) -> InsufficientApproval {
    InsufficientApproval {
        token,
        operator: OPERATOR,
        item_type,
        identifier_or_criteria: U256::from(identifier_or_criteria),
    }
}

/// Signer that records every approval it is asked to send and hands back a
/// fake transaction hash.
pub struct RecordingSigner {
    address: Address,
    address_lookups: AtomicUsize,
    fail_lookup_at: Option<usize>,
    sent: Mutex<Vec<(Address, ApprovalCall)>>,
}

impl RecordingSigner {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            address_lookups: AtomicUsize::new(0),
            fail_lookup_at: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Fails the `n`th (zero based) address lookup.
    pub fn failing_lookup_at(address: Address, n: usize) -> Self {
        Self {
            fail_lookup_at: Some(n),
            ..Self::new(address)
        }
    }

    pub fn sent(&self) -> Vec<(Address, ApprovalCall)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn address_lookups(&self) -> usize {
        self.address_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ApprovalSigner for RecordingSigner {
    type PendingTransaction = B256;

    async fn address(&self) -> Result<Address> {
        let lookup = self.address_lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookup_at == Some(lookup) {
            return Err(ClientError::AddressResolutionError(
                "wallet disconnected".into(),
            ));
        }
        Ok(self.address)
    }

    async fn send_approval(&self, token: Address, call: ApprovalCall) -> Result<B256> {
        let mut sent = self.sent.lock().unwrap();
        sent.push((token, call));
        Ok(B256::with_last_byte(sent.len() as u8))
    }
}

/// Reader answering from fixed values and counting its calls.
#[derive(Default)]
pub struct StaticReader {
    pub allowance: U256,
    pub approved_for_all: bool,
    pub calls: AtomicUsize,
}

impl StaticReader {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ApprovalReader for StaticReader {
    async fn allowance(&self, _token: Address, _owner: Address, _spender: Address) -> Result<U256> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.allowance)
    }

    async fn is_approved_for_all(
        &self,
        _token: Address,
        _owner: Address,
        _operator: Address,
    ) -> Result<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.approved_for_all)
    }
}

/// Reader that fails the test if it is ever queried.
pub struct UnreachableReader;

#[async_trait]
impl ApprovalReader for UnreachableReader {
    async fn allowance(&self, token: Address, _owner: Address, _spender: Address) -> Result<U256> {
        panic!("unexpected allowance read on {token}");
    }

    async fn is_approved_for_all(
        &self,
        token: Address,
        _owner: Address,
        _operator: Address,
    ) -> Result<bool> {
        panic!("unexpected isApprovedForAll read on {token}");
    }
}
