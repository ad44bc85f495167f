use serde_json::{json, Map, Value};

use crate::quiz_engine::models::{AnswerValue, Item, Visual};

/// Options are shown as plain strings: `7.5`, `2/6`, `(2.5, 4)`.
fn option_label(value: &AnswerValue) -> Value {
    Value::String(value.to_string())
}

/// Split a visual into its renderer tag and the remaining payload fields.
fn visual_parts(visual: Option<&Visual>) -> (Value, Value) {
    let Some(visual) = visual else {
        return (Value::Null, Value::Null);
    };
    let payload = match serde_json::to_value(visual) {
        Ok(Value::Object(mut fields)) => {
            fields.remove("kind");
            Value::Object(fields)
        }
        _ => Value::Object(Map::new()),
    };
    (Value::String(visual.kind().to_string()), payload)
}

/// Map an `Item` to the JSON object the quiz client renders.
///
/// ```json
/// { "itemId": "NU-1A2B3C4D", "topic": "Number", "prompt": "...",
///   "options": ["12", "9", "11", "10"], "correctIndex": 3,
///   "explanation": "...", "visualKind": "rect", "visualPayload": {"w": 4, "h": 3} }
/// ```
///
/// Items without a diagram carry `null` for both visual fields.
pub fn to_view_json(item: &Item) -> Value {
    let (visual_kind, visual_payload) = visual_parts(item.visual.as_ref());
    json!({
        "itemId": item.item_id,
        "topic": item.topic.to_string(),
        "variant": item.variant,
        "grade": item.grade.value(),
        "difficulty": item.difficulty.level(),
        "prompt": item.prompt,
        "options": item.options.iter().map(option_label).collect::<Vec<_>>(),
        "correctIndex": item.correct_index,
        "explanation": item.explanation,
        "visualKind": visual_kind,
        "visualPayload": visual_payload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::generator::generate_item;
    use crate::quiz_engine::models::{Choice, Difficulty, Grade, ItemDraft, ItemRequest, Side, Topic};

    fn item_with(visual: Option<Visual>, options: Vec<AnswerValue>) -> Item {
        Item::from_draft(
            "GE-00000001".into(),
            Topic::Geometry,
            Grade::new(4).unwrap(),
            Difficulty::new(7),
            ItemDraft {
                variant: "Geometry:MissingSide".into(),
                prompt: "The perimeter is 20. What is the missing side length?".into(),
                choice: Choice { options, correct_index: 0 },
                explanation: "20 ÷ 2 = 10. 10 - 6 = 4.".into(),
                visual,
            },
        )
    }

    #[test]
    fn payload_drops_the_tag_and_keeps_every_field() {
        let item = item_with(
            Some(Visual::Rect { w: 6, h: 4, missing: Some(Side::Height), show_area: false }),
            vec![AnswerValue::Int(4), AnswerValue::Int(6), AnswerValue::Int(8), AnswerValue::Int(14)],
        );
        let view = to_view_json(&item);
        assert_eq!(view["visualKind"], "rect");
        assert_eq!(view["visualPayload"], json!({"w": 6, "h": 4, "missing": "h", "showArea": false}));
        assert_eq!(view["options"], json!(["4", "6", "8", "14"]));
        assert_eq!(view["correctIndex"], 0);
    }

    #[test]
    fn no_visual_gives_nulls() {
        let item = item_with(None, vec![AnswerValue::Decimal(75), AnswerValue::fraction(2, 6)]);
        let view = to_view_json(&item);
        assert!(view["visualKind"].is_null());
        assert!(view["visualPayload"].is_null());
        assert_eq!(view["options"], json!(["7.5", "2/6"]));
    }

    #[test]
    fn tag_only_visuals_have_an_empty_payload() {
        let item = item_with(Some(Visual::Cube), vec![AnswerValue::Int(6), AnswerValue::Int(8)]);
        let view = to_view_json(&item);
        assert_eq!(view["visualKind"], "cube");
        assert_eq!(view["visualPayload"], json!({}));
    }

    #[test]
    fn generated_items_render() {
        let request = ItemRequest::new(Topic::Data, Grade::new(5).unwrap()).with_seed(3);
        let item = generate_item(request).unwrap();
        let view = to_view_json(&item);
        assert_eq!(view["visualKind"], "bar_graph");
        assert_eq!(view["visualPayload"]["labels"].as_array().unwrap().len(), 4);
        assert_eq!(view["options"].as_array().unwrap().len(), item.options.len());
    }
}
