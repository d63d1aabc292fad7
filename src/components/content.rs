#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::state::list::Record;

/// Supplies the content of one row slot (primary, secondary, icon, ...).
///
/// `Fixed` content is the same for every row; `PerRecord` content is derived
/// from the row's record, which is passed in explicitly — producers never
/// read ambient state, so they can be exercised without a running app.
#[derive(Clone)]
pub enum ContentProducer {
    Fixed(Arc<dyn Fn() -> AnyView + Send + Sync>),
    PerRecord(Arc<dyn Fn(&Record) -> AnyView + Send + Sync>),
}

impl ContentProducer {
    /// Content that ignores the record, e.g. a shared icon.
    pub fn fixed<V>(f: impl Fn() -> V + Send + Sync + 'static) -> Self
    where
        V: IntoView + 'static,
    {
        Self::Fixed(Arc::new(move || f().into_any()))
    }

    /// Content derived from the row's record.
    pub fn per_record<V>(f: impl Fn(&Record) -> V + Send + Sync + 'static) -> Self
    where
        V: IntoView + 'static,
    {
        Self::PerRecord(Arc::new(move |record| f(record).into_any()))
    }

    /// A fixed text label.
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::fixed(move || text.clone())
    }

    /// The named record field, rendered as text. Covers the common case
    /// without pulling in a full field-rendering component.
    pub fn field(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::per_record(move |record| field_text(record, &name))
    }

    /// Produce the slot content for one row.
    #[must_use]
    pub fn produce(&self, record: &Record) -> AnyView {
        match self {
            Self::Fixed(render) => (**render)(),
            Self::PerRecord(render) => (**render)(record),
        }
    }
}

impl From<&str> for ContentProducer {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for ContentProducer {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

/// Textual form of a record field: strings verbatim, other scalars via
/// their JSON display, absent or null fields as empty.
#[must_use]
pub fn field_text(record: &Record, name: &str) -> String {
    match record.get(name) {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
