#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use std::collections::HashMap;

use thiserror::Error;

use crate::state::link::LinkType;

/// Record identifier, normalized to a string at the snapshot boundary.
pub type Identifier = String;

/// An opaque record: field name to JSON value. Owned by the data source;
/// this crate only reads it.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// One page of a record collection, as supplied by the surrounding list
/// machinery through context.
///
/// Immutable per render pass. Invariant: every id in `ordered_ids` has an
/// entry in `records_by_id`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ListSnapshot {
    pub ordered_ids: Vec<Identifier>,
    pub records_by_id: HashMap<Identifier, Record>,
    pub total: u64,
    pub resource: String,
    pub base_path: String,
    pub loading: bool,
    pub loaded: bool,
}

impl ListSnapshot {
    /// True while the first load is still in flight and no usable page has
    /// arrived yet. The loading UI itself belongs to the host.
    #[must_use]
    pub fn initial_load_pending(&self) -> bool {
        self.loading && !self.loaded
    }
}

/// One fully resolved row: the id, its record, and where a click should
/// navigate (`None` for inert rows).
#[derive(Clone, Debug, PartialEq)]
pub struct RowPlan {
    pub id: Identifier,
    pub record: Record,
    pub target: Option<String>,
}

/// Join `ordered_ids` against `records_by_id` and resolve each row's link.
///
/// Row order equals `ordered_ids` order — callers rely on it. An id without
/// a record fails the whole join; a partial list would hide the upstream
/// bug that produced the malformed snapshot.
pub fn plan_rows(snapshot: &ListSnapshot, link_type: &LinkType) -> Result<Vec<RowPlan>, SnapshotError> {
    let mut rows = Vec::with_capacity(snapshot.ordered_ids.len());
    for id in &snapshot.ordered_ids {
        let record = snapshot
            .records_by_id
            .get(id)
            .ok_or_else(|| SnapshotError::MissingRecord { id: id.clone() })?;
        let target = link_type.resolve(record, id, &snapshot.base_path);
        rows.push(RowPlan {
            id: id.clone(),
            record: record.clone(),
            target,
        });
    }
    Ok(rows)
}

/// Contract violation in an externally supplied [`ListSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("record `{id}` is listed in ordered_ids but has no entry in records_by_id")]
    MissingRecord { id: Identifier },
}
