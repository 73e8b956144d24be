//! Builds the approval actions that raise insufficient approvals.

use std::fmt;
use std::sync::Arc;

use futures::future::{try_join_all, BoxFuture, FutureExt};
use portico_primitives::alloy::primitives::{Address, U256};
use portico_primitives::{ApprovalCall, InsufficientApproval, ItemType, TransactionDetails};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::Result;
use crate::signer::ApprovalSigner;

type SendFn<H> = dyn Fn() -> BoxFuture<'static, Result<H>> + Send + Sync;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Approval,
}

/// Unsent transaction: a deferred send together with the raw call it submits.
/// Nothing is submitted until [`TransactionRequest::send`] is called.
pub struct TransactionRequest<H> {
    send: Arc<SendFn<H>>,
    details: TransactionDetails,
}

impl<H> TransactionRequest<H> {
    pub fn new<F>(details: TransactionDetails, send: F) -> Self
    where
        F: Fn() -> BoxFuture<'static, Result<H>> + Send + Sync + 'static,
    {
        Self {
            send: Arc::new(send),
            details,
        }
    }

    /// Submits the transaction from the signer it was built for.
    pub async fn send(&self) -> Result<H> {
        (self.send)().await
    }

    pub fn details(&self) -> &TransactionDetails {
        &self.details
    }
}

impl<H> Clone for TransactionRequest<H> {
    fn clone(&self) -> Self {
        Self {
            send: Arc::clone(&self.send),
            details: self.details.clone(),
        }
    }
}

/// Only the details are serialized, the deferred send has no data form.
impl<H> Serialize for TransactionRequest<H> {
    fn serialize<Ser: Serializer>(
        &self,
        serializer: Ser,
    ) -> core::result::Result<Ser::Ok, Ser::Error> {
        let mut state = serializer.serialize_struct("TransactionRequest", 1)?;
        state.serialize_field("details", &self.details)?;
        state.end()
    }
}

impl<H> fmt::Debug for TransactionRequest<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionRequest")
            .field("details", &self.details)
            .field("send", &"<deferred send>")
            .finish()
    }
}

/// Approval needed before the operator can move the item.
#[derive(Debug, Serialize)]
#[serde(bound = "")]
pub struct ApprovalAction<H> {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub token: Address,
    pub identifier_or_criteria: U256,
    pub item_type: ItemType,
    pub operator: Address,
    pub transaction_request: TransactionRequest<H>,
}

impl<H> Clone for ApprovalAction<H> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            token: self.token,
            identifier_or_criteria: self.identifier_or_criteria,
            item_type: self.item_type,
            operator: self.operator,
            transaction_request: self.transaction_request.clone(),
        }
    }
}

/// Builds one approval action per insufficient approval, in input order.
///
/// Entries are processed concurrently, each resolving the signer address. If
/// any entry fails the whole batch fails and no action is returned.
pub async fn get_approval_actions<S>(
    insufficient_approvals: &[InsufficientApproval],
    signer: Arc<S>,
) -> Result<Vec<ApprovalAction<S::PendingTransaction>>>
where
    S: ApprovalSigner + 'static,
{
    try_join_all(
        insufficient_approvals
            .iter()
            .map(|approval| approval_action(approval, Arc::clone(&signer))),
    )
    .await
}

async fn approval_action<S>(
    approval: &InsufficientApproval,
    signer: Arc<S>,
) -> Result<ApprovalAction<S::PendingTransaction>>
where
    S: ApprovalSigner + 'static,
{
    let signer_address = signer.address().await?;
    let token = approval.token;
    let call = ApprovalCall::for_item_type(approval.item_type, token, approval.operator)?;

    tracing::debug!(
        %token,
        operator = %approval.operator,
        item_type = %approval.item_type,
        method = call.name(),
        "built approval action"
    );

    let details = TransactionDetails {
        to: token,
        from: signer_address,
        data: call.encode(),
    };
    let transaction_request = TransactionRequest::new(details, move || {
        let signer = Arc::clone(&signer);
        async move { signer.send_approval(token, call).await }.boxed()
    });

    Ok(ApprovalAction {
        kind: ActionKind::Approval,
        token,
        identifier_or_criteria: approval.identifier_or_criteria,
        item_type: approval.item_type,
        operator: approval.operator,
        transaction_request,
    })
}
