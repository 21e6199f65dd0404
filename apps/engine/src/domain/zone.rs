//! Zone categories and the total per-zone mapping.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// One of the three fixed prompt categories, used both as the correct
/// classification label and as a physical drop target.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Green,
    Yellow,
    Red,
}

impl Zone {
    /// All zones in display order.
    pub const ALL: [Zone; 3] = [Zone::Green, Zone::Yellow, Zone::Red];

    pub const fn slug(self) -> &'static str {
        match self {
            Zone::Green => "green",
            Zone::Yellow => "yellow",
            Zone::Red => "red",
        }
    }

    /// Face emoji shown on cards that belong to this zone.
    pub const fn emoji(self) -> &'static str {
        match self {
            Zone::Green => "🟢",
            Zone::Yellow => "🟡",
            Zone::Red => "🔴",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Total mapping `Zone -> T`.
///
/// Serializes as `{ "green": .., "yellow": .., "red": .. }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneMap<T> {
    pub green: T,
    pub yellow: T,
    pub red: T,
}

impl<T> ZoneMap<T> {
    pub fn new(green: T, yellow: T, red: T) -> Self {
        Self { green, yellow, red }
    }

    pub fn from_fn(mut f: impl FnMut(Zone) -> T) -> Self {
        Self {
            green: f(Zone::Green),
            yellow: f(Zone::Yellow),
            red: f(Zone::Red),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Zone, &T)> {
        Zone::ALL.into_iter().map(move |zone| (zone, &self[zone]))
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> ZoneMap<U> {
        ZoneMap::from_fn(|zone| f(&self[zone]))
    }
}

impl ZoneMap<usize> {
    /// Sum over all zones.
    pub fn total(&self) -> usize {
        self.green + self.yellow + self.red
    }
}

impl<T> Index<Zone> for ZoneMap<T> {
    type Output = T;

    fn index(&self, zone: Zone) -> &T {
        match zone {
            Zone::Green => &self.green,
            Zone::Yellow => &self.yellow,
            Zone::Red => &self.red,
        }
    }
}

impl<T> IndexMut<Zone> for ZoneMap<T> {
    fn index_mut(&mut self, zone: Zone) -> &mut T {
        match zone {
            Zone::Green => &mut self.green,
            Zone::Yellow => &mut self.yellow,
            Zone::Red => &mut self.red,
        }
    }
}
