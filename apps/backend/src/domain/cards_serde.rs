//! Serialization and deserialization for card types
//!
//! Clients address cards by their integer id (0..52) and suits by index
//! (0..4), so both serialize as plain numbers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Suit};

// Suit serde
impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.index())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let index = u8::deserialize(deserializer)?;
        Suit::from_index(index)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid suit: {index}")))
    }
}

// Card serde (integer id, suit * 13 + rank)
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.id())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u8::deserialize(deserializer)?;
        Card::try_from(id).map_err(|e| serde::de::Error::custom(e.detail().to_string()))
    }
}
