//! Named coordinate triples
//!
//! A colour space reports a colour in its own coordinates, keyed by the
//! space's component names (`R`/`G`/`B`, `x`/`y`/`Y`, `L`/`a`/`b`, ...).

use std::collections::BTreeMap;
use std::ops::Index;

use crate::space::lab::LAB_KEYS;
use crate::space::rgb::RGB_KEYS;
use crate::space::xyy::XYY_KEYS;
use crate::space::xyz::XYZ_KEYS;

/// Key sets of the built-in spaces, tried in order when reading a keyed map
const KNOWN_KEYS: [[&str; 3]; 4] = [XYZ_KEYS, XYY_KEYS, RGB_KEYS, LAB_KEYS];

/// Keyed float map used at the use-case boundary
pub type Components = BTreeMap<String, f64>;

/// An ordered triple of named values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    keys: [&'static str; 3],
    values: [f64; 3],
}

impl Coordinates {
    /// Pair component names with values
    #[inline]
    pub const fn new(keys: [&'static str; 3], values: [f64; 3]) -> Self {
        Self { keys, values }
    }

    /// Component names, in order
    #[inline]
    pub const fn keys(&self) -> [&'static str; 3] {
        self.keys
    }

    /// Component values, in order
    #[inline]
    pub const fn values(&self) -> [f64; 3] {
        self.values
    }

    /// Look up a component by name (case-sensitive: `Y` and `y` differ in xyY)
    pub fn get(&self, key: &str) -> Option<f64> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Iterate over `(name, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.keys.iter().copied().zip(self.values.iter().copied())
    }

    /// Multiply every value by a factor
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.keys, self.values.map(|v| v * factor))
    }

    /// Owned keyed map
    pub fn to_components(&self) -> Components {
        self.iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    /// Rebuild coordinates from a keyed map
    ///
    /// The map must hold exactly the keys of one built-in space; values are
    /// put back in that space's order. Returns `None` for any other key set.
    pub fn from_components(components: &Components) -> Option<Self> {
        if components.len() != 3 {
            return None;
        }
        KNOWN_KEYS.into_iter().find_map(|keys| {
            let [a, b, c] = keys.map(|key| components.get(key).copied());
            Some(Self::new(keys, [a?, b?, c?]))
        })
    }

    /// Check values against an expected triple
    pub fn approx_eq(&self, expected: [f64; 3], epsilon: f64) -> bool {
        self.values
            .iter()
            .zip(expected)
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Index<usize> for Coordinates {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Coordinates {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(3))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, &value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Coordinates {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let components = <Components as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_components(&components).ok_or_else(|| {
            let keys: Vec<_> = components.keys().collect();
            serde::de::Error::custom(format!("unrecognised coordinate keys {keys:?}"))
        })
    }
}
