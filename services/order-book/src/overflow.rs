//! Overflow guard for cost accumulation

/// Whether `a + b` exceeds `i64::MAX`.
///
/// Both operands are non-negative magnitudes; the check never performs the
/// overflowing addition itself.
pub fn would_add_overflow(a: i64, b: i64) -> bool {
    debug_assert!(a >= 0 && b >= 0, "magnitudes must be non-negative");
    a > i64::MAX - b
}
