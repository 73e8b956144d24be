use portico_primitives::alloy::{contract, transports::TransportError};
use portico_primitives::PrimitivesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Contract call failed: {0}")]
    ContractError(#[from] contract::Error),
    #[error("Failed rpc request: {0}")]
    RpcRequestError(#[from] TransportError),
    #[error("Failed to resolve signer address: {0}")]
    AddressResolutionError(String),
    #[error("No account at index {0} on the connected node")]
    SignerAccountNotFound(usize),
    #[error("Primitives error: {0}")]
    PrimitivesError(#[from] PrimitivesError),
}

pub type Result<T> = core::result::Result<T, ClientError>;
