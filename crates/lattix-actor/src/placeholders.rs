//! Argument placeholders `_1` through `_10`.
//!
//! `_k` stands for the `k`th call argument (one-based), i.e. tuple index
//! `k - 1` of the environment.

use crate::actor::Actor;
use crate::nodes::Placeholder;
use lattix_tuple::{I0, I1, I2, I3, I4, I5, I6, I7, I8, I9};

/// The placeholder for the argument at zero-based index `N`.
pub const fn arg<N>() -> Actor<Placeholder<N>> {
    Actor::new(Placeholder::new())
}

macro_rules! placeholders {
    ($($name:ident: $index:ty),+ $(,)?) => {
        $(
            pub const $name: Actor<Placeholder<$index>> = arg::<$index>();
        )+
    };
}

placeholders! {
    _1: I0,
    _2: I1,
    _3: I2,
    _4: I3,
    _5: I4,
    _6: I5,
    _7: I6,
    _8: I7,
    _9: I8,
    _10: I9,
}
