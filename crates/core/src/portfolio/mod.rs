//! Portfolio valuation modules - holdings aggregation and the valuators.

pub mod allocation;
pub mod holdings;
pub mod performance;
pub mod summary;

pub use allocation::*;
pub use holdings::*;
pub use performance::*;
pub use summary::*;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::PERCENT_PRECISION;

/// `part` as a percentage of `whole` on a 0-100 scale; 0 when `whole` is 0.
///
/// Every percentage the valuators emit (weights, gain percent, sector
/// percent) goes through this guard so zero denominators never surface as
/// division errors.
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        (part / whole * dec!(100)).round_dp(PERCENT_PRECISION)
    }
}
