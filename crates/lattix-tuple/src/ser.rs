//! Tuples serialize as flat sequences, the same way native tuples do.

use crate::access::TupleSize;
use crate::{Cons, Nil};
use serde::ser::{Serialize, SerializeTuple, Serializer};

pub trait SerializeElements {
    fn serialize_elements<S: SerializeTuple>(&self, seq: &mut S) -> Result<(), S::Error>;
}

impl SerializeElements for Nil {
    fn serialize_elements<S: SerializeTuple>(&self, _: &mut S) -> Result<(), S::Error> {
        Ok(())
    }
}

impl<H: Serialize, T: SerializeElements> SerializeElements for Cons<H, T> {
    fn serialize_elements<S: SerializeTuple>(&self, seq: &mut S) -> Result<(), S::Error> {
        seq.serialize_element(&self.head)?;
        self.tail.serialize_elements(seq)
    }
}

impl Serialize for Nil {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_tuple(0)?.end()
    }
}

impl<H: Serialize, T: SerializeElements + TupleSize> Serialize for Cons<H, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_tuple(<Self as TupleSize>::SIZE)?;
        self.serialize_elements(&mut seq)?;
        seq.end()
    }
}
