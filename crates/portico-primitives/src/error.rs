use alloy::primitives::Address;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrimitivesError {
    #[error("Invalid item type: {0}")]
    InvalidItemType(u8),
    #[error("Native currency needs no approval, token: {0}")]
    NativeItemApproval(Address),
    #[error("Encoding error: {0}")]
    EncodingError(String),
}

pub type Result<T> = core::result::Result<T, PrimitivesError>;
