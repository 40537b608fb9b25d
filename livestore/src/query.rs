//! Declarative description of one live query against the store.

use serde_json::Value;

use crate::document::{Document, field_value};

/// Sort direction for an [`OrderBy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }
}

/// Ordering rule: a dotted field path plus a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub direction: OrderDirection,
}

impl OrderBy {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: OrderDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: OrderDirection::Desc,
        }
    }
}

/// Single-field equality filter. Field and value always travel together, so
/// "filter field without a value" is unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    /// Dotted path into the document body, e.g. `appointmentId`.
    pub field: String,
    pub value: Value,
}

/// One live query: a collection plus an optional direct document id, an
/// optional equality filter, and an optional ordering.
///
/// Direct-id mode wins over the filter when both are set. A query with
/// neither (`is_unkeyed`) means the caller's parent key is not known yet;
/// [`crate::subscribe`] resolves such queries to an empty snapshot without
/// contacting the store.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionQuery {
    pub collection: String,
    pub doc_id: Option<String>,
    pub filter: Option<FieldFilter>,
    pub order_by: Option<OrderBy>,
}

impl CollectionQuery {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            doc_id: None,
            filter: None,
            order_by: None,
        }
    }

    /// Subscribe to the single document with this id (direct-id mode).
    pub fn doc(mut self, id: impl Into<String>) -> Self {
        self.doc_id = Some(id.into());
        self
    }

    /// Keep only documents where `field == value`.
    pub fn filter(mut self, field: impl Into<String>, value: Value) -> Self {
        self.filter = Some(FieldFilter {
            field: field.into(),
            value,
        });
        self
    }

    pub fn order_by(mut self, order: OrderBy) -> Self {
        self.order_by = Some(order);
        self
    }

    /// True when neither a document id nor a filter value is known.
    pub fn is_unkeyed(&self) -> bool {
        self.doc_id.is_none() && self.filter.is_none()
    }

    /// Whether a document of this query's collection belongs in the result
    /// set. Direct-id mode ignores the filter entirely.
    pub fn selects(&self, doc: &Document) -> bool {
        if let Some(id) = &self.doc_id {
            return doc.id == *id;
        }
        if let Some(filter) = &self.filter {
            return field_value(&doc.data, &filter.field) == &filter.value;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn doc(id: &str, data: Value) -> Document {
        Document {
            id: id.to_string(),
            data,
        }
    }

    #[test]
    fn unkeyed_means_no_id_and_no_filter() {
        let query = CollectionQuery::new("doctorNotes");
        assert!(query.is_unkeyed());

        assert!(!query.clone().doc("n1").is_unkeyed());
        assert!(
            !query
                .filter("appointmentId", json!("A1"))
                .is_unkeyed()
        );
    }

    #[test]
    fn filter_matches_on_dotted_path() {
        let query =
            CollectionQuery::new("doctorNotes").filter("created.by", json!("dr-lee"));

        assert!(query.selects(&doc(
            "n1",
            json!({"created": {"by": "dr-lee"}})
        )));
        assert!(!query.selects(&doc(
            "n2",
            json!({"created": {"by": "dr-kim"}})
        )));
        assert!(!query.selects(&doc("n3", json!({}))));
    }

    #[test]
    fn direct_id_takes_precedence_over_filter() {
        let query = CollectionQuery::new("doctorNotes")
            .doc("n1")
            .filter("appointmentId", json!("A1"));

        // Matching id selected even though the filter would reject it.
        assert!(query.selects(&doc("n1", json!({"appointmentId": "other"}))));
        // Filter match alone is not enough in direct-id mode.
        assert!(!query.selects(&doc("n2", json!({"appointmentId": "A1"}))));
    }
}
