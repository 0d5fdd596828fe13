//! Indexed element access and arity.
//!
//! `TupleGet<N>` is implemented for a cons cell at index `Z` (its head) and
//! at `S<N>` whenever the tail has an element at `N`. `Nil` has no elements,
//! so the recursion bottoms out at the last index that exists and an
//! out-of-range `N` simply has no impl.

use crate::index::{S, Z};
use crate::{Cons, Nil};

/// Access to the element at type-level index `N`.
///
/// Only implemented for indices below the arity:
///
/// ```compile_fail
/// use lattix_tuple::{I5, make_tuple};
///
/// let t = make_tuple!(1, 2, 3);
/// let _ = t.get::<I5>();
/// ```
pub trait TupleGet<N> {
    /// Type of the element at `N`.
    type Element;

    fn get(&self) -> &Self::Element;

    fn get_mut(&mut self) -> &mut Self::Element;

    /// Consume the tuple, keeping only the element at `N`.
    fn into_element(self) -> Self::Element
    where
        Self: Sized;
}

impl<H, T> TupleGet<Z> for Cons<H, T> {
    type Element = H;

    fn get(&self) -> &H {
        &self.head
    }

    fn get_mut(&mut self) -> &mut H {
        &mut self.head
    }

    fn into_element(self) -> H {
        self.head
    }
}

impl<H, T, N> TupleGet<S<N>> for Cons<H, T>
where
    T: TupleGet<N>,
{
    type Element = T::Element;

    fn get(&self) -> &Self::Element {
        <T as TupleGet<N>>::get(&self.tail)
    }

    fn get_mut(&mut self) -> &mut Self::Element {
        <T as TupleGet<N>>::get_mut(&mut self.tail)
    }

    fn into_element(self) -> Self::Element {
        <T as TupleGet<N>>::into_element(self.tail)
    }
}

/// The type of the `N`th element of tuple type `T`.
pub type Element<N, T> = <T as TupleGet<N>>::Element;

/// Total element count of a tuple type.
pub trait TupleSize {
    const SIZE: usize;
}

impl TupleSize for Nil {
    const SIZE: usize = 0;
}

impl<H, T: TupleSize> TupleSize for Cons<H, T> {
    const SIZE: usize = 1 + T::SIZE;
}

/// Element count of the tuple type `T`.
pub fn tuple_size<T: TupleSize>() -> usize {
    T::SIZE
}

/// Reference to the `N`th element of `tuple`.
///
/// ```
/// use lattix_tuple::{I2, get, make_tuple};
///
/// let t = make_tuple!(1, 'b', "c");
/// assert_eq!(*get::<I2, _>(&t), "c");
/// ```
///
/// ```compile_fail
/// use lattix_tuple::{I3, get, make_tuple};
///
/// let t = make_tuple!(1, 'b', "c");
/// let _ = get::<I3, _>(&t);
/// ```
pub fn get<N, T: TupleGet<N>>(tuple: &T) -> &T::Element {
    tuple.get()
}

/// Mutable reference to the `N`th element of `tuple`.
pub fn get_mut<N, T: TupleGet<N>>(tuple: &mut T) -> &mut T::Element {
    tuple.get_mut()
}
