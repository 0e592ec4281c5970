//! GDScript emitter for the events autoload
//!
//! Output is a pure function of the schema and the options: no timestamps,
//! events in schema order, payload fields in schema order.

use std::fmt::Write;

use serde_json::{Map, Value};

use super::names::{ConstantTable, PAYLOAD_CONSTANT};
use super::schema::{EventDefinition, EventSchema};
use crate::error::Result;

/// Rendering knobs that are not part of the schema itself
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// `class_name` of the generated script
    pub class_name: String,
    /// Where the schema came from, quoted in the header comment
    pub source_label: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            class_name: "Events".to_string(),
            source_label: "tools/events.json".to_string(),
        }
    }
}

/// Render the artifact. Fails only on constant-name collisions.
pub fn render(schema: &EventSchema, options: &RenderOptions) -> Result<String> {
    let constants = ConstantTable::build(schema)?;
    Ok(render_with(schema, &constants, options))
}

fn render_with(schema: &EventSchema, constants: &ConstantTable, options: &RenderOptions) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "# Auto-generated from {}. Do not edit.", options.source_label);
    out.push('\n');
    let _ = writeln!(out, "class_name {}", options.class_name);
    out.push('\n');

    if !constants.is_empty() {
        for entry in constants.iter() {
            let _ = writeln!(out, "const {} = {}", entry.constant, quote(&entry.event));
        }
        out.push('\n');
    }

    if schema.is_empty() {
        let _ = writeln!(out, "const {} = {{}}", PAYLOAD_CONSTANT);
    } else {
        let _ = writeln!(out, "const {} = {{", PAYLOAD_CONSTANT);
        for event in &schema.events {
            let _ = writeln!(out, "\t{}: {},", quote(&event.name), payload_literal(event));
        }
        out.push_str("}\n");
    }

    out
}

/// JSON string literal; GDScript accepts the same escapes
fn quote(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

fn payload_literal(event: &EventDefinition) -> String {
    let fields: Map<String, Value> = event
        .payload
        .iter()
        .map(|f| (f.name.clone(), Value::String(f.type_tag.clone())))
        .collect();
    Value::Object(fields).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentError;

    fn schema() -> EventSchema {
        EventSchema {
            events: vec![
                EventDefinition::new("player_died").with_field("x", "float").with_field("y", "float"),
                EventDefinition::new("door_opened"),
            ],
        }
    }

    #[test]
    fn test_render_full_shape() {
        let text = render(&schema(), &RenderOptions::default()).unwrap();
        let expected = "# Auto-generated from tools/events.json. Do not edit.\n\
                        \n\
                        class_name Events\n\
                        \n\
                        const PLAYER_DIED = \"player_died\"\n\
                        const DOOR_OPENED = \"door_opened\"\n\
                        \n\
                        const PAYLOAD = {\n\
                        \t\"player_died\": {\"x\":\"float\",\"y\":\"float\"},\n\
                        \t\"door_opened\": {},\n\
                        }\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_is_deterministic() {
        let options = RenderOptions::default();
        assert_eq!(render(&schema(), &options).unwrap(), render(&schema(), &options).unwrap());
    }

    #[test]
    fn test_render_empty_schema() {
        let text = render(&EventSchema::default(), &RenderOptions::default()).unwrap();
        assert!(text.ends_with("class_name Events\n\nconst PAYLOAD = {}\n"));
    }

    #[test]
    fn test_quotes_are_escaped() {
        let schema = EventSchema {
            events: vec![EventDefinition::new("say \"hi\"")],
        };
        let text = render(&schema, &RenderOptions::default()).unwrap();
        assert!(text.contains("const SAY_HI_ = \"say \\\"hi\\\"\""));
    }

    #[test]
    fn test_collision_propagates() {
        let schema = EventSchema {
            events: vec![EventDefinition::new("a-b"), EventDefinition::new("a b")],
        };
        assert!(matches!(
            render(&schema, &RenderOptions::default()),
            Err(ContentError::ConstantCollision { .. })
        ));
    }

    #[test]
    fn test_custom_class_name_and_label() {
        let options = RenderOptions {
            class_name: "GameEvents".to_string(),
            source_label: "schemas/events.json".to_string(),
        };
        let text = render(&schema(), &options).unwrap();
        assert!(text.starts_with("# Auto-generated from schemas/events.json. Do not edit.\n"));
        assert!(text.contains("class_name GameEvents\n"));
    }
}
