//! Compute the midpoint of two values of the same type without intermediate
//! overflow.
//!
//! # Crate Layout
//!
//! The crate exposes one logical operation, [`midpoint`], dispatched over the
//! operand type through the [`Midpoint`] trait:
//!
//! - fixed-width integers, signed and unsigned, including the 128-bit and
//!   pointer-sized types, for any operand pair up to and including the type's
//!   `MIN` and `MAX`;
//! - floating-point numbers, with IEEE special values (infinities, NaN,
//!   signed zeros, subnormals) flowing through the underlying arithmetic;
//! - addresses, as [`span_midpoint`] over two indices into one shared slice,
//!   or [`ptr_midpoint`] over a raw pointer pair into one allocation.
//!
//! Every operation is a total, pure function: no allocation, no shared
//! state, no panic path.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    rust_2018_idioms
)]

mod float;
mod integer;
mod span;

pub use crate::span::ptr_midpoint;
pub use crate::span::span_midpoint;

/// Midpoint of two values of the same type, computed without intermediate
/// overflow.
///
/// Integer implementations round an odd sum toward `a`: up if `a > b`, down
/// if `a < b`. Float implementations return the correctly-rounded mean
/// whenever the operand sum does not overflow, and otherwise halve each
/// operand before adding.
pub trait Midpoint {
    fn midpoint(a: Self, b: Self) -> Self;
}

/// Returns the value halfway between `a` and `b`.
///
/// Calls through [`Midpoint`]; unlike the inherent `midpoint` methods on
/// primitive types, odd integer sums round toward `a`.
///
/// # Example
///
/// ```rust
/// assert_eq!(mitan::midpoint(0_u32, 10), 5);
/// assert_eq!(mitan::midpoint(u32::MAX, u32::MAX - 2), u32::MAX - 1);
/// assert_eq!(mitan::midpoint(1.0_f64, 3.0), 2.0);
/// ```
pub fn midpoint<T: Midpoint>(a: T, b: T) -> T {
    T::midpoint(a, b)
}
