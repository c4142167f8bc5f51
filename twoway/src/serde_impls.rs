use std::{fmt, hash::Hash, marker::PhantomData};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, Visitor},
};

use crate::{base::Side, two_way_map::TwoWayMap};

/// Serialized as a map of the left-to-right index, in insertion order.
impl<L, R> Serialize for TwoWayMap<L, R>
where
    L: Serialize,
    R: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Deserialization is strict: a map repeating a right value is rejected rather than
/// silently dropping pairs.
impl<'de, L, R> Deserialize<'de> for TwoWayMap<L, R>
where
    L: Clone + Eq + Hash + Deserialize<'de>,
    R: Clone + Eq + Hash + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TwoWayMapVisitor(PhantomData))
    }
}

struct TwoWayMapVisitor<L, R>(PhantomData<fn() -> TwoWayMap<L, R>>);

impl<'de, L, R> Visitor<'de> for TwoWayMapVisitor<L, R>
where
    L: Clone + Eq + Hash + Deserialize<'de>,
    R: Clone + Eq + Hash + Deserialize<'de>,
{
    type Value = TwoWayMap<L, R>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a map with unique keys and unique values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        // Untrusted length hint, cap the preallocation
        let mut map = TwoWayMap::with_capacity(access.size_hint().unwrap_or(0).min(4096));

        while let Some((left, right)) = access.next_entry::<L, R>()? {
            map.push_strict(left, right, Side::Left)
                .map_err(<A::Error as de::Error>::custom)?;
        }

        Ok(map)
    }
}
