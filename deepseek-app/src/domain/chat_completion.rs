use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response body of a successful chat completion, kept as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatCompletion {
    body: Value,
}

impl ChatCompletion {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }

    /// Text of `choices[0].message.content`, if the body has one.
    pub fn first_content(&self) -> Option<&str> {
        self.body
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_content() {
        let completion = ChatCompletion::new(json!({
            "choices": [{"message": {"role": "assistant", "content": "42"}}]
        }));
        assert_eq!(completion.first_content(), Some("42"));
    }

    #[test]
    fn test_first_content_missing() {
        assert_eq!(ChatCompletion::new(json!({"choices": []})).first_content(), None);
        assert_eq!(ChatCompletion::new(json!({"error": "x"})).first_content(), None);
    }

    #[test]
    fn test_serializes_as_raw_body() {
        let body = json!({"id": "gen-1", "choices": []});
        let completion = ChatCompletion::new(body.clone());
        assert_eq!(serde_json::to_value(&completion).unwrap(), body);
        assert_eq!(completion.into_body(), body);
    }
}
