//!
//! Serde support: serializing a [`Secret`] writes the inner value, since
//! outbound gateway requests need the real credential on the wire.
//!

use serde::{de, ser, Deserialize, Serialize};

use crate::{strategy::Strategy, Secret};

impl<S, I> Serialize for Secret<S, I>
where
    S: Serialize,
    I: Strategy<S>,
{
    fn serialize<T>(&self, serializer: T) -> Result<T::Ok, T::Error>
    where
        T: ser::Serializer,
    {
        self.inner_secret.serialize(serializer)
    }
}

impl<'de, S, I> Deserialize<'de> for Secret<S, I>
where
    S: Deserialize<'de>,
    I: Strategy<S>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        S::deserialize(deserializer).map(Self::new)
    }
}
