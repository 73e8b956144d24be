//! Reads the approval an owner currently grants an operator for an item.

use std::marker::PhantomData;

use async_trait::async_trait;
use futures::future::try_join_all;
use portico_primitives::abi::erc20::ERC20::ERC20Instance;
use portico_primitives::abi::erc721::ERC721::ERC721Instance;
use portico_primitives::alloy::network::Network;
use portico_primitives::alloy::primitives::{Address, U256};
use portico_primitives::alloy::providers::Provider;
use portico_primitives::alloy::transports::Transport;
use portico_primitives::{ApprovedAmount, Item, MAX_INT};

use crate::error::Result;

/// Read connection used for approval queries. Implementations are expected
/// to batch reads issued concurrently into as few round trips as they can.
#[async_trait]
pub trait ApprovalReader: Send + Sync {
    /// ERC20 `allowance(owner, spender)`
    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256>;

    /// ERC721/ERC1155 `isApprovedForAll(owner, operator)`
    async fn is_approved_for_all(
        &self,
        token: Address,
        owner: Address,
        operator: Address,
    ) -> Result<bool>;
}

/// [`ApprovalReader`] backed by an alloy provider.
#[derive(Clone, Debug)]
pub struct ProviderApprovalReader<T, P, N> {
    rpc_provider: P,
    phantom_data: PhantomData<(T, N)>,
}

impl<T, P, N> ProviderApprovalReader<T, P, N>
where
    T: Transport + Clone,
    P: Provider<T, N> + Clone,
    N: Network + Clone,
{
    pub fn new(rpc_provider: P) -> Self {
        Self {
            rpc_provider,
            phantom_data: PhantomData,
        }
    }
}

#[async_trait]
impl<T, P, N> ApprovalReader for ProviderApprovalReader<T, P, N>
where
    T: Transport + Clone,
    P: Provider<T, N> + Clone,
    N: Network + Clone,
{
    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256> {
        let erc20 = ERC20Instance::new(token, self.rpc_provider.clone());
        let allowance = erc20.allowance(owner, spender).call().await?._0;
        Ok(allowance)
    }

    async fn is_approved_for_all(
        &self,
        token: Address,
        owner: Address,
        operator: Address,
    ) -> Result<bool> {
        let erc721 = ERC721Instance::new(token, self.rpc_provider.clone());
        let approved = erc721.isApprovedForAll(owner, operator).call().await?._0;
        Ok(approved)
    }
}

/// Amount of `item` that `operator` may currently move on behalf of `owner`.
///
/// Operator approvals are normalized to [`MAX_INT`] when granted and zero when
/// not. ERC20 allowances are returned as read. Native currency needs no
/// approval and resolves to [`MAX_INT`] without touching the reader. Read
/// failures are returned as is.
pub async fn approved_item_amount<R>(
    owner: Address,
    item: &Item,
    operator: Address,
    reader: &R,
) -> Result<ApprovedAmount>
where
    R: ApprovalReader + ?Sized,
{
    if item.item_type.uses_operator_approval() {
        let approved = reader
            .is_approved_for_all(item.token, owner, operator)
            .await?;
        tracing::debug!(
            token = %item.token,
            item_type = %item.item_type,
            approved,
            "read operator approval"
        );
        return Ok(if approved { MAX_INT } else { U256::ZERO });
    }

    if item.item_type.is_erc20() {
        let allowance = reader.allowance(item.token, owner, operator).await?;
        tracing::debug!(token = %item.token, %allowance, "read erc20 allowance");
        return Ok(allowance);
    }

    Ok(MAX_INT)
}

/// Reads the approved amount of every item concurrently over the same reader,
/// in input order. The first failed read fails the whole query.
pub async fn approved_item_amounts<R>(
    owner: Address,
    items: &[Item],
    operator: Address,
    reader: &R,
) -> Result<Vec<ApprovedAmount>>
where
    R: ApprovalReader + ?Sized,
{
    try_join_all(
        items
            .iter()
            .map(|item| approved_item_amount(owner, item, operator, reader)),
    )
    .await
}
