use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use alloy::network::Ethereum;
use alloy::primitives::{keccak256, Address, Bytes};
use alloy::providers::RootProvider;
use alloy::rpc::client::RpcClient;
use alloy::rpc::json_rpc::{
    ErrorPayload, RequestPacket, Response, ResponsePacket, ResponsePayload, SerializedRequest,
};
use alloy::sol_types::SolValue;
use alloy::transports::{TransportError, TransportErrorKind, TransportFut};
use serde_json::Value;
use tower::Service;

pub type MockProvider = RootProvider<MockTransport, Ethereum>;

/// A call or transaction as the node received it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceivedCall {
    pub from: Option<Address>,
    pub to: Address,
    pub input: Bytes,
}

#[derive(Debug, Default)]
struct NodeState {
    accounts: Vec<Address>,
    call_output: Option<Bytes>,
    calls: Vec<ReceivedCall>,
    transactions: Vec<ReceivedCall>,
}

/// In memory JSON-RPC node answering `eth_call`, `eth_accounts` and
/// `eth_sendTransaction`. Every `eth_call` reverts unless an output was set
/// with [`MockTransport::returning`]. Sent transactions get `keccak256(input)`
/// as their hash.
#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    state: Arc<Mutex<NodeState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(self, accounts: Vec<Address>) -> Self {
        self.state.lock().unwrap().accounts = accounts;
        self
    }

    /// ABI encodes `value` as the output of every `eth_call`.
    pub fn returning<V: SolValue>(self, value: V) -> Self {
        self.state.lock().unwrap().call_output = Some(value.abi_encode().into());
        self
    }

    pub fn provider(&self) -> MockProvider {
        RootProvider::new(RpcClient::new(self.clone(), true))
    }

    pub fn calls(&self) -> Vec<ReceivedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn transactions(&self) -> Vec<ReceivedCall> {
        self.state.lock().unwrap().transactions.clone()
    }

    fn respond(&self, request: &SerializedRequest) -> Result<Response, TransportError> {
        let params: Vec<Value> = match request.params() {
            Some(params) => {
                serde_json::from_str(params.get()).map_err(TransportErrorKind::custom)?
            }
            None => Vec::new(),
        };
        let mut state = self.state.lock().unwrap();

        let payload = match request.method() {
            "eth_accounts" => success(&state.accounts)?,
            "eth_call" => {
                let call = received_call(&params)?;
                state.calls.push(call);
                match &state.call_output {
                    Some(output) => success(output)?,
                    None => failure(3, "execution reverted"),
                }
            }
            "eth_sendTransaction" => {
                let transaction = received_call(&params)?;
                let tx_hash = keccak256(&transaction.input);
                state.transactions.push(transaction);
                success(&tx_hash)?
            }
            _ => failure(-32601, "method not found"),
        };

        Ok(Response {
            id: request.id().clone(),
            payload,
        })
    }
}

fn success<S: serde::Serialize>(value: &S) -> Result<ResponsePayload, TransportError> {
    let raw = serde_json::value::to_raw_value(value).map_err(TransportErrorKind::custom)?;
    Ok(ResponsePayload::Success(raw))
}

fn failure(code: i64, message: &'static str) -> ResponsePayload {
    ResponsePayload::Failure(ErrorPayload {
        code,
        message: message.into(),
        data: None,
    })
}

fn received_call(params: &[Value]) -> Result<ReceivedCall, TransportError> {
    let tx = params
        .first()
        .ok_or_else(|| TransportErrorKind::custom_str("missing transaction parameter"))?;
    let field = |name: &str| tx.get(name).cloned().unwrap_or(Value::Null);

    let to = serde_json::from_value(field("to")).map_err(TransportErrorKind::custom)?;
    let from = serde_json::from_value(field("from")).map_err(TransportErrorKind::custom)?;
    let input = match tx.get("input") {
        Some(input) => input.clone(),
        None => field("data"),
    };
    let input = serde_json::from_value(input).map_err(TransportErrorKind::custom)?;

    Ok(ReceivedCall { from, to, input })
}

impl Service<RequestPacket> for MockTransport {
    type Response = ResponsePacket;
    type Error = TransportError;
    type Future = TransportFut<'static>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: RequestPacket) -> Self::Future {
        let node = self.clone();
        Box::pin(async move {
            match request {
                RequestPacket::Single(request) => {
                    node.respond(&request).map(ResponsePacket::Single)
                }
                RequestPacket::Batch(requests) => requests
                    .iter()
                    .map(|request| node.respond(request))
                    .collect::<Result<Vec<_>, _>>()
                    .map(ResponsePacket::Batch),
            }
        })
    }
}
