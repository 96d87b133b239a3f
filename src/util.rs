/// Numeric conversion and comparison helpers.
///
/// This module provides the integer-to-real promotion used by mixed
/// arithmetic, the checked conversion of integer exponents, and the
/// tolerance-based closeness test used to compare reals.
pub mod num;
