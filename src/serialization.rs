use std::marker::PhantomData;

use serde::de::{DeserializeSeed, SeqAccess, Visitor};
use serde::Deserializer;

use crate::ring::*;

///
/// Trait for rings whose elements can be deserialized.
///
/// Since elements only get their meaning through the ring, deserialization has to go
/// through the ring as well, which can then reject representations that are not valid
/// elements (e.g. values `>= p` in `Z/pZ`). Serialization on the other hand works via
/// [`serde::Serialize`] on the elements directly.
///
pub trait SerializableElementRing: RingBase {

    fn deserialize<'de, D>(&self, deserializer: D) -> Result<Self::Element, D::Error>
        where D: Deserializer<'de>;
}

///
/// A [`DeserializeSeed`] that deserializes an element of the wrapped ring.
///
pub struct DeserializeWithRing<'a, R: SerializableElementRing> {
    ring: &'a R
}

impl<'a, R: SerializableElementRing> DeserializeWithRing<'a, R> {

    pub fn new(ring: &'a R) -> Self {
        DeserializeWithRing { ring }
    }
}

impl<'a, R: SerializableElementRing> Clone for DeserializeWithRing<'a, R> {

    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, R: SerializableElementRing> Copy for DeserializeWithRing<'a, R> {}

impl<'a, 'de, R: SerializableElementRing> DeserializeSeed<'de> for DeserializeWithRing<'a, R> {

    type Value = R::Element;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where D: Deserializer<'de>
    {
        self.ring.deserialize(deserializer)
    }
}

///
/// Deserializes a sequence, using `base_seed` for every entry and passing the results
/// to `collector`.
///
pub fn deserialize_seq_helper<'de, S, D, C>(deserializer: D, collector: C, base_seed: S) -> Result<(), D::Error>
    where D: Deserializer<'de>,
        C: FnMut(S::Value),
        S: Clone + DeserializeSeed<'de>
{
    struct SeqVisitor<'de, S: Clone + DeserializeSeed<'de>, C: FnMut(S::Value)> {
        base_seed: S,
        collector: C,
        deserializer: PhantomData<&'de ()>
    }

    impl<'de, S: Clone + DeserializeSeed<'de>, C: FnMut(S::Value)> Visitor<'de> for SeqVisitor<'de, S, C> {
        type Value = ();

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(formatter, "a sequence")
        }

        fn visit_seq<A>(mut self, mut seq: A) -> Result<Self::Value, A::Error>
            where A: SeqAccess<'de>
        {
            while let Some(el) = seq.next_element_seed(self.base_seed.clone())? {
                (self.collector)(el);
            }
            return Ok(());
        }
    }

    deserializer.deserialize_seq(SeqVisitor {
        deserializer: PhantomData,
        base_seed: base_seed,
        collector: collector
    })
}
