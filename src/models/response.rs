use serde::Serialize;
use serde_json::Value;

/// Decoded vendor response body. The gateway does not interpret business
/// fields; callers read what they need from `body()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RpcResponse {
    body: Value,
}

impl RpcResponse {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.body.get(field)
    }

    /// Quote number assigned by `requestQuote`, when present.
    pub fn quote_no(&self) -> Option<&str> {
        self.body
            .get("quoteno")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

impl From<RpcResponse> for Value {
    fn from(response: RpcResponse) -> Self {
        response.body
    }
}

/// True when the body carries the vendor's `error` field with a truthy value.
/// `null`, `false`, `0`, and `""` all count as "no error".
pub fn has_error_indicator(body: &Value) -> bool {
    match body.get("error") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(n)) => n.as_f64().map(|v| v != 0.0).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_indicator_truthiness() {
        assert!(!has_error_indicator(&json!({"places": []})));
        assert!(!has_error_indicator(&json!({"error": null})));
        assert!(!has_error_indicator(&json!({"error": false})));
        assert!(!has_error_indicator(&json!({"error": 0})));
        assert!(!has_error_indicator(&json!({"error": ""})));
        assert!(!has_error_indicator(&json!([1, 2, 3])));

        assert!(has_error_indicator(&json!({"error": true})));
        assert!(has_error_indicator(&json!({"error": 1})));
        assert!(has_error_indicator(&json!({"error": "Invalid token"})));
        assert!(has_error_indicator(&json!({"error": {"code": 17}})));
        assert!(has_error_indicator(&json!({"error": []})));
    }

    #[test]
    fn test_quote_no_accessor() {
        let response = RpcResponse::new(json!({"quoteno": "QTE02382646"}));
        assert_eq!(response.quote_no(), Some("QTE02382646"));

        assert_eq!(RpcResponse::new(json!({"quoteno": ""})).quote_no(), None);
        assert_eq!(RpcResponse::new(json!({"quoteno": 12})).quote_no(), None);
        assert_eq!(RpcResponse::new(json!({})).quote_no(), None);
    }

    #[test]
    fn test_body_is_untouched() {
        let body = json!({"places": [{"id": 2159, "name": "Johannesburg"}]});
        let response = RpcResponse::new(body.clone());
        assert_eq!(response.body(), &body);
        assert_eq!(serde_json::to_value(&response).unwrap(), body);
        assert_eq!(Value::from(response), body);
    }
}
