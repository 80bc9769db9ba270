//! Wire-format models for creature records.
//!
//! These mirror the service's JSON shape directly; unknown fields are
//! ignored and nothing beyond what serde needs is validated.

use serde::{Deserialize, Serialize};

use crate::catalog::filter::KNOWN_TYPES;

/// A named sub-resource as the service returns it (`{"name": "..."}`
/// plus a URL we never follow).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// One entry of the record's ordered type list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

/// One named numeric attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One named ability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

/// One creature's full record. Immutable once fetched; owned by the
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub id: u32,
    pub name: String,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatSlot>,
    pub abilities: Vec<AbilitySlot>,
    /// Externally scaled: true height in meters is this value / 10.
    pub height: u32,
    /// Externally scaled: true weight in kilograms is this value / 10.
    pub weight: u32,
    /// Null in the wire format for some late entries.
    pub base_experience: Option<u32>,
}

impl Creature {
    /// Type tags in record order, with the slot wrappers flattened away.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|slot| slot.type_ref.name.as_str())
    }

    /// The representative type for card coloring: first entry of the fixed
    /// known-type priority list that this record carries. `None` when no
    /// tag is known.
    pub fn primary_type(&self) -> Option<&'static str> {
        KNOWN_TYPES
            .iter()
            .copied()
            .find(|known| self.type_names().any(|tag| tag == *known))
    }

    /// Display name with the first letter capitalized.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    /// Zero-padded 3-digit identifier ("001", "025", ...).
    pub fn padded_id(&self) -> String {
        format!("{:03}", self.id)
    }

    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Trimmed-down copy of a real service response.
    const BULBASAUR_JSON: &str = r#"{
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "weight": 69,
        "base_experience": 64,
        "types": [
            {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}},
            {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}}
        ],
        "stats": [
            {"base_stat": 45, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
            {"base_stat": 49, "effort": 0, "stat": {"name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/"}}
        ],
        "abilities": [
            {"ability": {"name": "overgrow", "url": "https://pokeapi.co/api/v2/ability/65/"}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "chlorophyll", "url": "https://pokeapi.co/api/v2/ability/34/"}, "is_hidden": true, "slot": 3}
        ]
    }"#;

    #[test]
    fn parses_a_service_record() {
        let creature: Creature = serde_json::from_str(BULBASAUR_JSON).unwrap();

        assert_eq!(creature.id, 1);
        assert_eq!(creature.name, "bulbasaur");
        assert_eq!(
            creature.type_names().collect::<Vec<_>>(),
            vec!["grass", "poison"]
        );
        assert_eq!(creature.stats[0].stat.name, "hp");
        assert_eq!(creature.stats[0].base_stat, 45);
        assert_eq!(creature.abilities[1].ability.name, "chlorophyll");
        assert_eq!(creature.base_experience, Some(64));
    }

    #[test]
    fn parses_a_null_base_experience() {
        let json = r#"{
            "id": 894,
            "name": "regieleki",
            "height": 12,
            "weight": 1450,
            "base_experience": null,
            "types": [{"type": {"name": "electric"}}],
            "stats": [],
            "abilities": []
        }"#;

        let creature: Creature = serde_json::from_str(json).unwrap();
        assert_eq!(creature.base_experience, None);
    }

    #[test]
    fn display_helpers() {
        let creature: Creature = serde_json::from_str(BULBASAUR_JSON).unwrap();

        assert_eq!(creature.display_name(), "Bulbasaur");
        assert_eq!(creature.padded_id(), "001");
        assert_eq!(creature.height_m(), 0.7);
        assert_eq!(creature.weight_kg(), 6.9);
    }

    #[test]
    fn primary_type_follows_priority_order() {
        // "grass" outranks "poison" in the fixed priority list even though
        // either would match.
        let creature: Creature = serde_json::from_str(BULBASAUR_JSON).unwrap();
        assert_eq!(creature.primary_type(), Some("grass"));
    }

    #[test]
    fn primary_type_is_none_for_unknown_tags() {
        let json = r#"{
            "id": 999,
            "name": "glitch",
            "height": 1,
            "weight": 1,
            "base_experience": 1,
            "types": [{"type": {"name": "shadow"}}],
            "stats": [],
            "abilities": []
        }"#;

        let creature: Creature = serde_json::from_str(json).unwrap();
        assert_eq!(creature.primary_type(), None);
    }
}
