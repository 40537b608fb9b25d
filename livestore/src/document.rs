//! Raw documents and the value ordering used for snapshot sorting.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::query::{OrderBy, OrderDirection};

/// One document as the store delivers it: an id plus a JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

static NULL: Value = Value::Null;

/// Resolve a dotted field path (`created.on`) against a document body.
/// Missing segments resolve to `Null`.
pub fn field_value<'a>(data: &'a Value, path: &str) -> &'a Value {
    let mut current = data;
    for segment in path.split('.') {
        match current.get(segment) {
            Some(next) => current = next,
            None => return &NULL,
        }
    }
    current
}

/// Total order over JSON values, for `order_by`:
/// numbers by f64, strings lexicographic, `false < true`, nulls sort last,
/// mixed types by type rank (number < string < bool < other).
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (Value::Number(na), Value::Number(nb)) => {
            let fa = na.as_f64().unwrap_or(f64::NAN);
            let fb = nb.as_f64().unwrap_or(f64::NAN);
            fa.partial_cmp(&fb).unwrap_or(Ordering::Equal)
        }
        (Value::String(sa), Value::String(sb)) => sa.cmp(sb),
        (Value::Bool(ba), Value::Bool(bb)) => ba.cmp(bb),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Number(_) => 0,
        Value::String(_) => 1,
        Value::Bool(_) => 2,
        _ => 3,
    }
}

/// Sort documents in place by the given ordering rule. Ties keep their
/// relative order.
pub fn sort_documents(docs: &mut [Document], order: &OrderBy) {
    docs.sort_by(|a, b| {
        let va = field_value(&a.data, &order.field);
        let vb = field_value(&b.data, &order.field);
        let cmp = compare_values(va, vb);
        match order.direction {
            OrderDirection::Asc => cmp,
            OrderDirection::Desc => cmp.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn field_value_walks_nested_objects() {
        let data = json!({"created": {"on": 42, "by": "dr-lee"}});
        assert_eq!(field_value(&data, "created.on"), &json!(42));
        assert_eq!(field_value(&data, "created.by"), &json!("dr-lee"));
        assert_eq!(field_value(&data, "created.missing"), &Value::Null);
        assert_eq!(field_value(&data, "nope.on"), &Value::Null);
    }

    #[test]
    fn nulls_sort_last_regardless_of_direction_input() {
        assert_eq!(
            compare_values(&Value::Null, &json!(1)),
            Ordering::Greater
        );
        assert_eq!(compare_values(&json!(1), &Value::Null), Ordering::Less);
    }

    #[test]
    fn sort_descending_by_nested_timestamp() {
        let mut docs = vec![
            Document {
                id: "n1".into(),
                data: json!({"created": {"on": 1}}),
            },
            Document {
                id: "n3".into(),
                data: json!({"created": {"on": 3}}),
            },
            Document {
                id: "n2".into(),
                data: json!({"created": {"on": 2}}),
            },
        ];
        sort_documents(&mut docs, &OrderBy::desc("created.on"));
        let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["n3", "n2", "n1"]);
    }

    #[test]
    fn rfc3339_strings_sort_chronologically() {
        let mut docs = vec![
            Document {
                id: "b".into(),
                data: json!({"created": {"on": "2026-02-01T10:00:00Z"}}),
            },
            Document {
                id: "a".into(),
                data: json!({"created": {"on": "2026-01-15T10:00:00Z"}}),
            },
        ];
        sort_documents(&mut docs, &OrderBy::asc("created.on"));
        assert_eq!(docs[0].id, "a");
    }
}
