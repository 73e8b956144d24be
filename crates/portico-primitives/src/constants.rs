use alloy::primitives::U256;

/// Approved amount for an (owner, item, operator) triple. Operator approvals
/// (ERC721/ERC1155) are binary and get normalized to `MAX_INT` or zero so that
/// every item class compares on the same numeric type.
pub type ApprovedAmount = U256;

/// Unbounded approval sentinel, also the allowance requested for ERC20 approvals.
pub const MAX_INT: U256 = U256::MAX;

#[must_use]
pub fn is_fully_approved(amount: ApprovedAmount) -> bool {
    amount == MAX_INT
}
