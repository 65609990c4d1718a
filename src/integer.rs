use num_traits::AsPrimitive;
use num_traits::PrimInt;

use crate::Midpoint;

/// Midpoint in a type wide enough to hold `a + b + 1` for any operand pair.
///
/// Odd sums round toward `a`: the `a > b` bias turns the floor of the
/// arithmetic shift into a round-up exactly when the mean must move up.
fn widened<T, W>(a: T, b: T) -> T
where
    T: PartialOrd + AsPrimitive<W>,
    W: PrimInt + AsPrimitive<T>,
{
    let bias = if a > b { W::one() } else { W::zero() };
    ((a.as_() + b.as_() + bias) >> 1).as_()
}

macro_rules! impl_widened {
    ( $($t:ty => $wide:ty,)* ) => { $(
        impl Midpoint for $t {
            fn midpoint(a: Self, b: Self) -> Self {
                widened::<$t, $wide>(a, b)
            }
        }
    )* };
}

impl_widened! {
    i8 => i16,
    i16 => i32,
    i32 => i64,
    i64 => i128,
    u8 => u16,
    u16 => u32,
    u32 => u64,
    u64 => u128,
}

// No wider standard type exists for these, so split the sum into its
// carry-free parts instead: a + b == 2 * (a & b) + (a ^ b), and every
// intermediate below stays within the operand range.
macro_rules! impl_split {
    ( $($t:ty,)* ) => { $(
        impl Midpoint for $t {
            /// Ref: <http://aggregate.org/MAGIC/#Average%20of%20Integers>
            fn midpoint(a: Self, b: Self) -> Self {
                let half = (a & b) + ((a ^ b) >> 1);
                if a > b {
                    // Odd sum, rounding up toward `a`.
                    half + ((a ^ b) & 1)
                } else {
                    half
                }
            }
        }
    )* };
}

impl_split! {
    i128,
    u128,
    isize,
    usize,
}
