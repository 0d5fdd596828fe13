//! Tuples of references over an owned tuple.

use crate::{Cons, Nil};

/// Borrow every element of a tuple at once.
///
/// `as_mut_refs` produces the same shape `tie!` does, so an owned tuple can
/// serve as an evaluation environment without being moved.
pub trait AsRefs<'a> {
    type Refs;
    type MutRefs;

    fn as_refs(&'a self) -> Self::Refs;

    fn as_mut_refs(&'a mut self) -> Self::MutRefs;
}

impl<'a> AsRefs<'a> for Nil {
    type Refs = Nil;
    type MutRefs = Nil;

    fn as_refs(&'a self) -> Nil {
        Nil
    }

    fn as_mut_refs(&'a mut self) -> Nil {
        Nil
    }
}

impl<'a, H: 'a, T: AsRefs<'a> + 'a> AsRefs<'a> for Cons<H, T> {
    type Refs = Cons<&'a H, T::Refs>;
    type MutRefs = Cons<&'a mut H, T::MutRefs>;

    fn as_refs(&'a self) -> Self::Refs {
        Cons::new(&self.head, self.tail.as_refs())
    }

    fn as_mut_refs(&'a mut self) -> Self::MutRefs {
        Cons::new(&mut self.head, self.tail.as_mut_refs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::I1;
    use crate::make_tuple;

    #[test]
    fn refs_view_every_element() {
        let t = make_tuple!(1, String::from("two"));
        let refs = t.as_refs();
        assert_eq!(*refs.head, 1);
        assert_eq!(refs.get::<I1>().as_str(), "two");
    }

    #[test]
    fn mut_refs_write_back() {
        let mut t = make_tuple!(1, String::from("two"));
        {
            let refs = t.as_mut_refs();
            *refs.head += 1;
            refs.tail.head.push('!');
        }
        assert_eq!(t, make_tuple!(2, String::from("two!")));
    }
}
