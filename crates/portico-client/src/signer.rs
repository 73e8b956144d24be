//! Signing identity that approval transactions are sent from.

use std::marker::PhantomData;

use async_trait::async_trait;
use portico_primitives::abi::erc20::ERC20::ERC20Instance;
use portico_primitives::abi::erc721::ERC721::ERC721Instance;
use portico_primitives::alloy::network::Network;
use portico_primitives::alloy::primitives::Address;
use portico_primitives::alloy::providers::{PendingTransactionBuilder, Provider};
use portico_primitives::alloy::transports::Transport;
use portico_primitives::ApprovalCall;

use crate::error::{ClientError, Result};

/// An address bearing signing capability.
#[async_trait]
pub trait ApprovalSigner: Send + Sync {
    /// Handle of a submitted transaction.
    type PendingTransaction: Send + 'static;

    /// Resolves the signer's own address, which may take a round trip to the
    /// connected wallet or node.
    async fn address(&self) -> Result<Address>;

    /// Binds the `token` contract to this signer and submits `call` on it.
    async fn send_approval(
        &self,
        token: Address,
        call: ApprovalCall,
    ) -> Result<Self::PendingTransaction>;
}

/// Where a [`ProviderSigner`] gets its address from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignerAccount {
    /// Key held locally, e.g. a private key signer installed as the provider's wallet.
    Local(Address),
    /// Account managed by the connected node, looked up through `eth_accounts`.
    Node(usize),
}

/// [`ApprovalSigner`] sending through an alloy provider.
#[derive(Clone, Debug)]
pub struct ProviderSigner<T, P, N> {
    rpc_provider: P,
    account: SignerAccount,
    phantom_data: PhantomData<(T, N)>,
}

impl<T, P, N> ProviderSigner<T, P, N>
where
    T: Transport + Clone,
    P: Provider<T, N> + Clone,
    N: Network + Clone,
{
    pub fn new(rpc_provider: P, account: SignerAccount) -> Self {
        Self {
            rpc_provider,
            account,
            phantom_data: PhantomData,
        }
    }
}

#[async_trait]
impl<T, P, N> ApprovalSigner for ProviderSigner<T, P, N>
where
    T: Transport + Clone,
    P: Provider<T, N> + Clone,
    N: Network + Clone,
{
    type PendingTransaction = PendingTransactionBuilder<T, N>;

    async fn address(&self) -> Result<Address> {
        match self.account {
            SignerAccount::Local(address) => Ok(address),
            SignerAccount::Node(index) => {
                let accounts = self.rpc_provider.get_accounts().await?;
                accounts
                    .get(index)
                    .copied()
                    .ok_or(ClientError::SignerAccountNotFound(index))
            }
        }
    }

    async fn send_approval(
        &self,
        token: Address,
        call: ApprovalCall,
    ) -> Result<Self::PendingTransaction> {
        let from = self.address().await?;
        tracing::info!(%token, %from, method = call.name(), "sending approval transaction");

        let pending = match call {
            ApprovalCall::SetApprovalForAll { operator, approved } => {
                let erc721 = ERC721Instance::new(token, self.rpc_provider.clone());
                erc721
                    .setApprovalForAll(operator, approved)
                    .from(from)
                    .send()
                    .await?
            }
            ApprovalCall::Approve { spender, amount } => {
                let erc20 = ERC20Instance::new(token, self.rpc_provider.clone());
                erc20.approve(spender, amount).from(from).send().await?
            }
        };

        tracing::info!(tx_hash = %pending.tx_hash(), "approval transaction sent");
        Ok(pending)
    }
}
