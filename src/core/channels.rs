/// Sales-channel classification for settlement math.
///
/// The operator sells through its own direct channels (the LOFA web
/// storefront and the physical showroom) and through external platforms.
/// Settlement formulas branch on this split: house channels keep the full
/// platform settlement, external platforms retain a commission.

/// The operator's own direct-to-consumer channels.
pub const HOUSE_CHANNELS: &[&str] = &["로파", "로파 쇼룸"];

/// External platforms that bill their commission on the undiscounted list
/// price ("정상판매가") rather than the discounted sale price.
pub const LIST_PRICE_BILLING_CHANNELS: &[&str] = &["29cm", "EQL"];

/// Basis a platform uses to compute its fee under a discount campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformSettlementStandard {
    /// Fee computed off the undiscounted list price ("정상판매가")
    ListPrice,
    /// Fee computed off the discounted sale price ("할인판매가")
    DiscountedPrice,
}

/// Whether a seller name is one of the operator's own channels.
pub fn is_house_channel(seller: &str) -> bool {
    HOUSE_CHANNELS.contains(&seller)
}

/// Resolve the fee basis a platform applies under discount campaigns.
pub fn platform_settlement_standard(seller: &str) -> PlatformSettlementStandard {
    if LIST_PRICE_BILLING_CHANNELS.contains(&seller) {
        PlatformSettlementStandard::ListPrice
    } else {
        PlatformSettlementStandard::DiscountedPrice
    }
}
