//! Type-level natural numbers used as tuple indices.
//!
//! `Z` is zero and `S<N>` is the successor of `N`. The aliases `I0`..`I9`
//! cover the arities a tuple is normally built with; larger indices are
//! spelled out with nested `S`.

use std::marker::PhantomData;

/// Zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Z;

/// Successor of `N`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct S<N>(PhantomData<N>);

/// A type-level natural number with its value available as a constant.
pub trait Index {
    const VALUE: usize;
}

impl Index for Z {
    const VALUE: usize = 0;
}

impl<N: Index> Index for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

pub type I0 = Z;
pub type I1 = S<I0>;
pub type I2 = S<I1>;
pub type I3 = S<I2>;
pub type I4 = S<I3>;
pub type I5 = S<I4>;
pub type I6 = S<I5>;
pub type I7 = S<I6>;
pub type I8 = S<I7>;
pub type I9 = S<I8>;
