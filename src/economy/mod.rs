//! Economy domain — raw-sale pricing and processing-building proceeds.
//!
//! All cross-domain communication goes through `crate::shared::*` types.
//! No other domain module is imported here.

pub mod pricing;
pub mod processing;

/// Truncating percentage multiplier for prices. Integer percentages (140,
/// not 1.4) avoid the precision loss of repeated float multiplication:
/// 690 × 1.4 is exactly 966, but floats say 965.99999....
pub(crate) fn multiply_price_by_percentage(base: u32, percentage: u32) -> u32 {
    base * percentage / 100
}
