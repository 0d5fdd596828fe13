//! Conversions between cons tuples and native Rust tuples.
//!
//! `(A, B, C)` converts into `Tuple![A, B, C]` through `From`, and back
//! through `IntoNative`. Arities 0 through 10 are covered.

use crate::{Cons, Nil};

/// Flatten a cons tuple into the equivalent native tuple.
pub trait IntoNative {
    type Native;

    fn into_native(self) -> Self::Native;
}

impl From<()> for Nil {
    fn from(_: ()) -> Self {
        Nil
    }
}

impl IntoNative for Nil {
    type Native = ();

    fn into_native(self) -> Self::Native {}
}

macro_rules! cons_pattern {
    () => { Nil };
    ($head:ident $(, $tail:ident)*) => {
        Cons { head: $head, tail: cons_pattern!($($tail),*) }
    };
}

macro_rules! native_conversions {
    ($(($($name:ident),+)),+ $(,)?) => {
        $(
            impl<$($name),+> From<($($name,)+)> for crate::Tuple![$($name),+] {
                #[allow(non_snake_case)]
                fn from(($($name,)+): ($($name,)+)) -> Self {
                    crate::make_tuple!($($name),+)
                }
            }

            impl<$($name),+> IntoNative for crate::Tuple![$($name),+] {
                type Native = ($($name,)+);

                #[allow(non_snake_case)]
                fn into_native(self) -> Self::Native {
                    let cons_pattern!($($name),+) = self;
                    ($($name,)+)
                }
            }
        )+
    };
}

native_conversions! {
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
    (A, B, C, D, E, F, G, H, I),
    (A, B, C, D, E, F, G, H, I, J),
}
