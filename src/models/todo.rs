use serde::{Deserialize, Serialize};

/// Wire shape of a todo, used for create payloads and every response.
///
/// `id` and `done` may be omitted on input and default to `0` / `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoView {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub done: bool,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::TodoView;

    #[test]
    fn create_payload_may_omit_id_done_and_description() {
        let view: TodoView =
            serde_json::from_value(json!({ "title": "New Todo", "category": "Work" }))
                .expect("payload should parse");

        assert_eq!(view.id, 0);
        assert!(!view.done);
        assert_eq!(view.description, None);
    }

    #[test]
    fn serializes_missing_description_as_null() {
        let view = TodoView {
            id: 3,
            title: "Todo 3".to_string(),
            category: "Home".to_string(),
            description: None,
            done: true,
        };

        assert_eq!(
            serde_json::to_value(&view).expect("view should serialize"),
            json!({
                "id": 3,
                "title": "Todo 3",
                "category": "Home",
                "description": null,
                "done": true
            })
        );
    }
}
