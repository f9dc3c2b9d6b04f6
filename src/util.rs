/// Safe numeric conversion helpers.
///
/// This module provides the checked float-to-integer conversion used by the
/// final result presentation. Keeping the conversion in one place ensures
/// the integer/real decision is made by a single rule.
///
/// # Responsibilities
/// - Convert `f64` to `i64` without silent data loss.
pub mod num;
