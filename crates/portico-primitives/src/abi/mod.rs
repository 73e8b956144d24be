//! Minimal token ABIs used for approval reads and writes.
//!
//! ERC1155 exposes the same `isApprovedForAll`/`setApprovalForAll` pair as
//! ERC721, so the ERC721 interface is used for both.

pub mod erc20;
pub mod erc721;
