// ABOUTME: Canonical deep equality for save payloads.
// ABOUTME: Serializes both sides to serde_json::Value and compares structurally.

use serde::Serialize;

/// Compare two payloads by canonical JSON structure.
///
/// Both values are serialized to `serde_json::Value` and compared. Object
/// equality is key-based, so field order never makes two equal payloads look
/// changed. Non-finite floats normalize to `null` under `to_value`, so a
/// payload containing `NaN` compares equal to itself.
///
/// If either side fails to serialize, the payloads are treated as unequal so
/// that a save proceeds rather than being skipped on bad data.
pub fn json_equal<P: Serialize>(a: &P, b: &P) -> bool {
    match (serde_json::to_value(a), serde_json::to_value(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::json_equal;

    #[derive(Serialize)]
    struct Draft {
        title: String,
        subhead: String,
    }

    #[derive(Serialize)]
    struct DraftReordered {
        subhead: String,
        title: String,
    }

    #[test]
    fn test_equal_values() {
        let a = json!({"id": 1, "title": "A"});
        let b = json!({"id": 1, "title": "A"});
        assert!(json_equal(&a, &b));
    }

    #[test]
    fn test_unequal_values() {
        let a = json!({"id": 1, "title": "A"});
        let b = json!({"id": 1, "title": "B"});
        assert!(!json_equal(&a, &b));
    }

    #[test]
    fn test_field_order_is_irrelevant() {
        // Same fields declared in a different order serialize to equal objects.
        let a = serde_json::to_value(Draft {
            title: "A".into(),
            subhead: "B".into(),
        })
        .unwrap();
        let b = serde_json::to_value(DraftReordered {
            subhead: "B".into(),
            title: "A".into(),
        })
        .unwrap();
        assert!(json_equal(&a, &b));
    }

    #[test]
    fn test_nan_compares_equal_to_itself() {
        // Non-finite floats normalize to null in to_value.
        let a = vec![f64::NAN];
        let b = vec![f64::NAN];
        assert!(json_equal(&a, &b));
    }

    #[test]
    fn test_nested_structures() {
        let a = json!({"outer": {"inner": [1, 2, 3]}});
        let b = json!({"outer": {"inner": [1, 2, 3]}});
        let c = json!({"outer": {"inner": [1, 2, 4]}});
        assert!(json_equal(&a, &b));
        assert!(!json_equal(&a, &c));
    }
}
