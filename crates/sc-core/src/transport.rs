//! Transport modes and the emission buckets they report into.

use std::str::FromStr;

use crate::CoreError;

/// How goods move along a route.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TransportMode {
    /// Road haulage by truck.
    Road,
    /// Freight rail.
    Rail,
    /// Air freight.
    Air,
    /// Combined legs; the long-haul leg is truck-hauled.
    Multimodal,
}

impl TransportMode {
    /// The emission bucket a shipment on this mode is credited to.
    #[inline]
    pub fn emission_bucket(self) -> EmissionBucket {
        match self {
            TransportMode::Road | TransportMode::Multimodal => EmissionBucket::Truck,
            TransportMode::Rail => EmissionBucket::Rail,
            TransportMode::Air => EmissionBucket::Air,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Road       => "road",
            TransportMode::Rail       => "rail",
            TransportMode::Air        => "air",
            TransportMode::Multimodal => "multimodal",
        }
    }
}

impl FromStr for TransportMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "road" | "truck" => Ok(TransportMode::Road),
            "rail" | "train" => Ok(TransportMode::Rail),
            "air" | "plane"  => Ok(TransportMode::Air),
            "multimodal"     => Ok(TransportMode::Multimodal),
            other            => Err(CoreError::UnknownMode(other.to_owned())),
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emission reporting category.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EmissionBucket {
    Truck,
    Rail,
    Air,
}

impl EmissionBucket {
    pub fn as_str(self) -> &'static str {
        match self {
            EmissionBucket::Truck => "truck",
            EmissionBucket::Rail  => "rail",
            EmissionBucket::Air   => "air",
        }
    }
}

impl std::fmt::Display for EmissionBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
