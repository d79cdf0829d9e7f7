//! Request-body field validation.
//!
//! Pure functions, no I/O: a body is checked against a list of required
//! field names and any problems come back as human-readable messages.

use serde_json::Value;

/// Checks `body` for the presence of every field in `required`.
///
/// Returns one message per missing field, in the order the fields were
/// requested; an empty vector means the body passed. A field fails when it
/// is absent, JSON null, or a string that trims to empty. Present
/// non-string values (booleans, numbers) always pass; type checking is
/// the store's job.
#[must_use]
pub fn require_fields(body: &Value, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|field| is_blank(body.get(**field)))
        .map(|field| format!("No {field} specified."))
        .collect()
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn complete_body_passes() {
        let body = json!({"first_name": "Ada", "last_name": "Lovelace", "email": "a@l.io"});
        let errors = require_fields(&body, &["first_name", "last_name", "email"]);
        assert!(errors.is_empty());
    }

    #[test]
    fn each_missing_field_gets_a_message() {
        let body = json!({"first_name": "Ada"});
        let errors = require_fields(&body, &["first_name", "last_name", "email"]);
        assert_eq!(
            errors,
            vec![
                "No last_name specified.".to_string(),
                "No email specified.".to_string(),
            ]
        );
    }

    #[test]
    fn whitespace_only_string_is_blank() {
        let body = json!({"email": "   "});
        let errors = require_fields(&body, &["email"]);
        assert_eq!(errors, vec!["No email specified.".to_string()]);
    }

    #[test]
    fn null_field_is_blank() {
        let body = json!({"party_id": null});
        let errors = require_fields(&body, &["party_id"]);
        assert_eq!(errors, vec!["No party_id specified.".to_string()]);
    }

    #[test]
    fn non_string_values_pass() {
        let body = json!({"industry_connected": false, "party_id": 0});
        let errors = require_fields(&body, &["industry_connected", "party_id"]);
        assert!(errors.is_empty());
    }

    #[test]
    fn non_object_body_fails_everything() {
        let body = json!([1, 2, 3]);
        let errors = require_fields(&body, &["first_name"]);
        assert_eq!(errors, vec!["No first_name specified.".to_string()]);
    }
}
