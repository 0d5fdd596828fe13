//! # Lattix Tuple
//!
//! Fixed-arity heterogeneous tuples built as right-nested cons cells.
//!
//! A tuple of `n` elements is `Cons<T0, Cons<T1, ... Cons<Tn-1, Nil>>>`.
//! Arity and element types are part of the type, so indexing past the end
//! is a trait-resolution error rather than a runtime fault.
//!
//! ## Architecture
//!
//! ```text
//! Nil / Cons<H, T>      ← Storage: empty sentinel and head/tail cell
//!     │
//! index                 ← Type-level naturals Z, S<N> (I0..I9)
//!     │
//! access                ← TupleGet<N> (get / tuple_element), TupleSize
//!     │
//! assign                ← Positional conversion/assignment, pair lifting, swap
//!     │
//! native / refs         ← Native tuple bridges, reference views
//! ```
//!
//! ```
//! use lattix_tuple::{I1, make_tuple, tie};
//!
//! let t = make_tuple!(1u8, "two", 3.0f64);
//! assert_eq!(*t.get::<I1>(), "two");
//!
//! let mut x = 4;
//! let mut y = 'a';
//! let mut env = tie!(x, y);
//! *env.head += 1;
//! **env.get_mut::<I1>() = 'b';
//! assert_eq!((x, y), (5, 'b'));
//! ```

pub mod access;
pub mod assign;
pub mod index;
pub mod native;
pub mod refs;
#[cfg(feature = "serde")]
pub mod ser;

pub use access::{Element, TupleGet, TupleSize, get, get_mut, tuple_size};
pub use assign::{SwapReferents, TupleFrom, TupleSwap, swap};
pub use index::{I0, I1, I2, I3, I4, I5, I6, I7, I8, I9, Index, S, Z};
pub use native::IntoNative;
pub use refs::AsRefs;

/// The zero-arity tuple and the terminator of every cons list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nil;

/// A cons cell: one element followed by the rest of the tuple.
///
/// Fields are public so tuples can be destructured by pattern; the
/// element order is `head` first, then the elements of `tail`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cons<H, T> {
    pub head: H,
    pub tail: T,
}

impl<H, T> Cons<H, T> {
    /// Prepend `head` to the tuple `tail`.
    pub const fn new(head: H, tail: T) -> Self {
        Self { head, tail }
    }

    /// Reference to the `N`th element.
    pub fn get<N>(&self) -> &<Self as TupleGet<N>>::Element
    where
        Self: TupleGet<N>,
    {
        <Self as TupleGet<N>>::get(self)
    }

    /// Mutable reference to the `N`th element.
    pub fn get_mut<N>(&mut self) -> &mut <Self as TupleGet<N>>::Element
    where
        Self: TupleGet<N>,
    {
        <Self as TupleGet<N>>::get_mut(self)
    }

    /// Number of elements.
    pub fn len(&self) -> usize
    where
        Self: TupleSize,
    {
        <Self as TupleSize>::SIZE
    }

    /// Always false: a cons cell holds at least its head.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Exchange every element with the corresponding element of `other`.
    pub fn swap(&mut self, other: &mut Self)
    where
        Self: TupleSwap,
    {
        TupleSwap::swap_elements(self, other);
    }

    /// Convert element-wise into a tuple of the same arity.
    pub fn cast<Dst>(self) -> Dst
    where
        Dst: TupleFrom<Self>,
    {
        Dst::tuple_from(self)
    }

    /// Overwrite every element from a same-arity tuple whose elements
    /// convert into ours.
    pub fn assign_from<Src>(&mut self, src: Src)
    where
        Self: TupleFrom<Src>,
    {
        *self = Self::tuple_from(src);
    }
}

impl Nil {
    pub fn len(&self) -> usize {
        0
    }

    pub fn is_empty(&self) -> bool {
        true
    }
}

/// The tuple type for a list of element types.
///
/// `Tuple![A, B]` is `Cons<A, Cons<B, Nil>>`; `Tuple![]` is `Nil`.
#[macro_export]
macro_rules! Tuple {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::Tuple![$($tail),*]>
    };
}

/// Build a tuple, taking each argument by value.
#[macro_export]
macro_rules! make_tuple {
    () => { $crate::Nil };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::Cons::new($head, $crate::make_tuple!($($tail),*))
    };
}

/// Build a tuple of mutable references to the given places.
///
/// Nothing is copied; writes through the tuple land in the original
/// variables. Each argument must be a distinct place.
#[macro_export]
macro_rules! tie {
    () => { $crate::Nil };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::Cons::new(&mut $head, $crate::tie!($($tail),*))
    };
}
