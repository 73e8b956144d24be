//! Transferable item descriptors and their item type classification.

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::error::PrimitivesError;

/// Asset class of an item, carrying the protocol's numeric item type codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum ItemType {
    Native = 0,
    Erc20 = 1,
    Erc721 = 2,
    Erc1155 = 3,
    Erc721WithCriteria = 4,
    Erc1155WithCriteria = 5,
}

impl ItemType {
    pub fn is_native(&self) -> bool {
        matches!(self, ItemType::Native)
    }

    pub fn is_erc20(&self) -> bool {
        matches!(self, ItemType::Erc20)
    }

    pub fn is_erc721(&self) -> bool {
        matches!(self, ItemType::Erc721 | ItemType::Erc721WithCriteria)
    }

    pub fn is_erc1155(&self) -> bool {
        matches!(self, ItemType::Erc1155 | ItemType::Erc1155WithCriteria)
    }

    pub fn is_criteria_based(&self) -> bool {
        matches!(
            self,
            ItemType::Erc721WithCriteria | ItemType::Erc1155WithCriteria
        )
    }

    /// ERC721 and ERC1155 grant all-or-nothing operator approval instead of an allowance.
    pub fn uses_operator_approval(&self) -> bool {
        self.is_erc721() || self.is_erc1155()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Native => "native",
            ItemType::Erc20 => "erc20",
            ItemType::Erc721 => "erc721",
            ItemType::Erc1155 => "erc1155",
            ItemType::Erc721WithCriteria => "erc721_with_criteria",
            ItemType::Erc1155WithCriteria => "erc1155_with_criteria",
        }
    }
}

impl TryFrom<u8> for ItemType {
    type Error = PrimitivesError;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(ItemType::Native),
            1 => Ok(ItemType::Erc20),
            2 => Ok(ItemType::Erc721),
            3 => Ok(ItemType::Erc1155),
            4 => Ok(ItemType::Erc721WithCriteria),
            5 => Ok(ItemType::Erc1155WithCriteria),
            other => Err(PrimitivesError::InvalidItemType(other)),
        }
    }
}

impl From<ItemType> for u8 {
    fn from(item_type: ItemType) -> Self {
        item_type as u8
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An asset an owner lets an operator transfer. `identifier_or_criteria` holds
/// the token id, or the criteria root for criteria based items, and is unused
/// for ERC20 and native items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub item_type: ItemType,
    pub token: Address,
    pub identifier_or_criteria: U256,
}

impl Item {
    pub fn new(item_type: ItemType, token: Address, identifier_or_criteria: U256) -> Self {
        Self {
            item_type,
            token,
            identifier_or_criteria,
        }
    }

    /// Native currency has no token contract, its token is the zero address.
    pub fn native() -> Self {
        Self::new(ItemType::Native, Address::ZERO, U256::ZERO)
    }
}
