//! Positional conversion, assignment and swap.
//!
//! All operations here pair elements up by position, so both sides must
//! have the same arity. A mismatch leaves one side at `Nil` while the other
//! is still a `Cons`, for which no impl exists.

use crate::{Cons, Nil};

/// Element-wise conversion from a same-arity tuple.
pub trait TupleFrom<Src>: Sized {
    fn tuple_from(src: Src) -> Self;
}

impl TupleFrom<Nil> for Nil {
    fn tuple_from(_: Nil) -> Self {
        Nil
    }
}

impl<H, T, U, V> TupleFrom<Cons<U, V>> for Cons<H, T>
where
    H: From<U>,
    T: TupleFrom<V>,
{
    fn tuple_from(src: Cons<U, V>) -> Self {
        Cons::new(H::from(src.head), T::tuple_from(src.tail))
    }
}

impl<A, B> Cons<A, Cons<B, Nil>> {
    /// Assign both elements of a pair from a native pair.
    ///
    /// ```
    /// use lattix_tuple::{Tuple, make_tuple};
    ///
    /// let mut t: Tuple![u64, String] = Default::default();
    /// t.assign_pair((5u32, "five"));
    /// assert_eq!(t, make_tuple!(5u64, String::from("five")));
    /// ```
    ///
    /// Only defined on arity-2 tuples:
    ///
    /// ```compile_fail
    /// use lattix_tuple::make_tuple;
    ///
    /// let mut t = make_tuple!(1u8, 2u8, 3u8);
    /// t.assign_pair((4u8, 5u8));
    /// ```
    pub fn assign_pair<U1, U2>(&mut self, (first, second): (U1, U2))
    where
        A: From<U1>,
        B: From<U2>,
    {
        self.head = A::from(first);
        self.tail.head = B::from(second);
    }
}

/// Element-wise exchange between two tuples of the same type.
pub trait TupleSwap {
    fn swap_elements(&mut self, other: &mut Self);
}

impl TupleSwap for Nil {
    fn swap_elements(&mut self, _: &mut Self) {}
}

impl<H, T: TupleSwap> TupleSwap for Cons<H, T> {
    fn swap_elements(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.head, &mut other.head);
        self.tail.swap_elements(&mut other.tail);
    }
}

/// Swap the contents of two tuples.
pub fn swap<T: TupleSwap>(x: &mut T, y: &mut T) {
    x.swap_elements(y);
}

/// Exchange the values two tuples of references point at.
///
/// `TupleSwap` on a tied tuple exchanges the references themselves; this
/// exchanges the referenced storage instead, leaving each tuple bound to
/// the same places.
pub trait SwapReferents {
    fn swap_referents(&mut self, other: &mut Self);
}

impl SwapReferents for Nil {
    fn swap_referents(&mut self, _: &mut Self) {}
}

impl<H, T: SwapReferents> SwapReferents for Cons<&mut H, T> {
    fn swap_referents(&mut self, other: &mut Self) {
        std::mem::swap(&mut *self.head, &mut *other.head);
        self.tail.swap_referents(&mut other.tail);
    }
}
