//! Constant name derivation
//!
//! Event names become SCREAMING_SNAKE_CASE constants: upper-case the name,
//! then squash every run of characters outside `[A-Z0-9]` into a single
//! underscore. `player-died`, `player died` and `player_died` all become
//! `PLAYER_DIED`, so the table below refuses to build when two events land
//! on the same constant, or on [`PAYLOAD_CONSTANT`].

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use super::schema::EventSchema;
use crate::error::{ContentError, Result};

/// Identifier the generated script uses for its payload table
pub const PAYLOAD_CONSTANT: &str = "PAYLOAD";

fn separator_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Z0-9]+").expect("static regex"))
}

/// Derive the constant identifier for an event name
pub fn to_constant_name(event_name: &str) -> String {
    let upper = event_name.to_uppercase();
    separator_run().replace_all(&upper, "_").into_owned()
}

/// A resolved constant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventConstant {
    pub constant: String,
    pub event: String,
}

/// Constants for every event, in schema order, guaranteed collision-free
#[derive(Debug, Clone, Default)]
pub struct ConstantTable {
    entries: Vec<EventConstant>,
}

impl ConstantTable {
    pub fn build(schema: &EventSchema) -> Result<Self> {
        let mut owners: HashMap<String, &str> = HashMap::with_capacity(schema.len());
        let mut entries = Vec::with_capacity(schema.len());

        for event in &schema.events {
            let constant = to_constant_name(&event.name);
            if constant == PAYLOAD_CONSTANT {
                return Err(ContentError::ReservedConstant {
                    constant,
                    event: event.name.clone(),
                });
            }
            if let Some(first) = owners.insert(constant.clone(), &event.name) {
                return Err(ContentError::ConstantCollision {
                    constant,
                    first: first.to_string(),
                    second: event.name.clone(),
                });
            }
            entries.push(EventConstant {
                constant,
                event: event.name.clone(),
            });
        }

        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventConstant> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::schema::EventDefinition;

    #[test]
    fn test_snake_case() {
        assert_eq!(to_constant_name("player_died"), "PLAYER_DIED");
        assert_eq!(to_constant_name("room2_cleared"), "ROOM2_CLEARED");
    }

    #[test]
    fn test_runs_collapse_to_one_underscore() {
        assert_eq!(to_constant_name("player--died"), "PLAYER_DIED");
        assert_eq!(to_constant_name("ui.menu opened"), "UI_MENU_OPENED");
        assert_eq!(to_constant_name("  boss  "), "_BOSS_");
        assert_eq!(to_constant_name("enemy__hit"), "ENEMY_HIT");
    }

    #[test]
    fn test_camel_case_is_only_upper_cased() {
        assert_eq!(to_constant_name("doorOpened"), "DOOROPENED");
    }

    #[test]
    fn test_non_ascii_becomes_separator() {
        assert_eq!(to_constant_name("café_opened"), "CAF_OPENED");
    }

    #[test]
    fn test_deterministic_and_idempotent() {
        for name in ["player_died", "a-b c", "x__y", "Ünïcode!"] {
            let once = to_constant_name(name);
            assert_eq!(once, to_constant_name(name));
            assert_eq!(to_constant_name(&once), once);
        }
    }

    #[test]
    fn test_collision_is_an_error() {
        let schema = EventSchema {
            events: vec![EventDefinition::new("player-died"), EventDefinition::new("player_died")],
        };
        match ConstantTable::build(&schema) {
            Err(ContentError::ConstantCollision { constant, first, second }) => {
                assert_eq!(constant, "PLAYER_DIED");
                assert_eq!(first, "player-died");
                assert_eq!(second, "player_died");
            }
            other => panic!("Expected ConstantCollision, got {:?}", other),
        }
    }

    #[test]
    fn test_payload_constant_is_reserved() {
        for name in ["payload", "PAYLOAD", "pay-load"] {
            let schema = EventSchema {
                events: vec![EventDefinition::new("player_died"), EventDefinition::new(name)],
            };
            match ConstantTable::build(&schema) {
                Err(ContentError::ReservedConstant { constant, event }) => {
                    assert_eq!(constant, "PAYLOAD");
                    assert_eq!(event, name);
                }
                other => panic!("Expected ReservedConstant, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_table_keeps_schema_order() {
        let schema = EventSchema {
            events: vec![EventDefinition::new("zeta"), EventDefinition::new("alpha")],
        };
        let table = ConstantTable::build(&schema).unwrap();
        let constants: Vec<_> = table.iter().map(|c| c.constant.as_str()).collect();
        assert_eq!(constants, vec!["ZETA", "ALPHA"]);
    }
}
