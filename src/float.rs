//! Float midpoints are computed as `(a + b) * 0.5` whenever the sum is
//! finite: halving a finite value is exact outside the subnormal range, so
//! the addition is normally the only rounding step. When the sum overflows
//! to infinity the operands are halved first, `a * 0.5 + b * 0.5`,
//! which costs a second rounding but cannot overflow: two finite values
//! whose sum is out of range share a sign, and halving keeps each of them
//! representable. An infinite or NaN operand produces the same infinite or
//! NaN result on either path.

use crate::Midpoint;

macro_rules! impl_float {
    ( $($t:ty,)* ) => { $(
        impl Midpoint for $t {
            fn midpoint(a: Self, b: Self) -> Self {
                let t = a + b;
                if t.is_finite() {
                    t * 0.5
                } else {
                    a * 0.5 + b * 0.5
                }
            }
        }
    )* };
}

impl_float! {
    f32,
    f64,
}
