use std::sync::Arc;

use leptos::prelude::*;

use crate::components::content::ContentProducer;
use crate::state::link::LinkType;
use crate::state::list::{ListSnapshot, Record, RowPlan, plan_rows};

/// Per-row styling hook: extra class(es) for a row, derived from its record
/// and position. Styling values themselves are the host's concern.
pub type RowClass = Arc<dyn Fn(&Record, usize) -> Option<String> + Send + Sync>;

/// Put a list snapshot into context for a `CardList` subtree.
///
/// Hosts that already manage their own `RwSignal<ListSnapshot>` can call
/// `provide_context` directly; this helper just names the convention.
pub fn provide_list_snapshot(snapshot: ListSnapshot) -> RwSignal<ListSnapshot> {
    let signal = RwSignal::new(snapshot);
    provide_context(signal);
    signal
}

/// The list snapshot provided by the surrounding list machinery.
#[must_use]
pub fn use_list_snapshot() -> RwSignal<ListSnapshot> {
    expect_context::<RwSignal<ListSnapshot>>()
}

/// Compact, card-style rendering of the current record page — one row per
/// id, in snapshot order, each optionally wrapped in a link resolved from
/// `link_type`.
///
/// Reads `RwSignal<ListSnapshot>` from context and re-renders whole rows on
/// every snapshot change; nothing persists across renders. Navigation is
/// left to the host router: clickable rows are plain anchors with relative
/// hrefs.
#[component]
pub fn CardList(
    /// Main label of each row.
    #[prop(into)]
    primary_text: ContentProducer,
    /// Second text line.
    #[prop(optional)]
    secondary_text: Option<ContentProducer>,
    /// Third text line.
    #[prop(optional)]
    tertiary_text: Option<ContentProducer>,
    /// Decoration before the text block (icon, avatar).
    #[prop(optional)]
    left_icon: Option<ContentProducer>,
    /// Decoration after the text block.
    #[prop(optional)]
    right_icon: Option<ContentProducer>,
    /// Where row clicks navigate. Defaults to the edit view.
    #[prop(optional)]
    link_type: LinkType,
    /// Extra per-row classes.
    #[prop(optional)]
    row_class: Option<RowClass>,
) -> impl IntoView {
    let snapshot = use_list_snapshot();
    let slots = RowSlots {
        primary: primary_text,
        secondary: secondary_text,
        tertiary: tertiary_text,
        leading: left_icon,
        trailing: right_icon,
    };

    view! {
        <ul class="card-list">
            {move || {
                let snap = snapshot.get();
                if snap.initial_load_pending() {
                    log::debug!("card list for `{}`: first page still loading", snap.resource);
                    return Vec::new();
                }
                match plan_rows(&snap, &link_type) {
                    Ok(rows) => rows
                        .iter()
                        .enumerate()
                        .map(|(index, row)| card_row(row, index, &slots, row_class.as_deref()))
                        .collect::<Vec<_>>(),
                    Err(err) => {
                        log::error!("card list for `{}`: malformed snapshot: {err}", snap.resource);
                        Vec::new()
                    }
                }
            }}
        </ul>
    }
}

/// The content producers for one list, slot by slot.
struct RowSlots {
    primary: ContentProducer,
    secondary: Option<ContentProducer>,
    tertiary: Option<ContentProducer>,
    leading: Option<ContentProducer>,
    trailing: Option<ContentProducer>,
}

/// Render one planned row. Every slot is produced from this row's own
/// record; rows without a target get no anchor and no link styling.
fn card_row(
    plan: &RowPlan,
    index: usize,
    slots: &RowSlots,
    row_class: Option<&(dyn Fn(&Record, usize) -> Option<String> + Send + Sync)>,
) -> AnyView {
    let record = &plan.record;

    let mut item_class = String::from("card-list__item");
    if plan.target.is_none() {
        item_class.push_str(" card-list__item--static");
    }
    if let Some(extra) = row_class.and_then(|class_for| class_for(record, index)) {
        item_class.push(' ');
        item_class.push_str(&extra);
    }

    let leading = slots.leading.as_ref().map(|producer| {
        view! { <span class="card-list__leading">{producer.produce(record)}</span> }
    });
    let trailing = slots.trailing.as_ref().map(|producer| {
        view! { <span class="card-list__trailing">{producer.produce(record)}</span> }
    });
    let body = view! {
        <div class="card-list__body">
            <span class="card-list__primary">{slots.primary.produce(record)}</span>
            {slots
                .secondary
                .as_ref()
                .map(|producer| {
                    view! { <span class="card-list__secondary">{producer.produce(record)}</span> }
                })}
            {slots
                .tertiary
                .as_ref()
                .map(|producer| {
                    view! { <span class="card-list__tertiary">{producer.produce(record)}</span> }
                })}
        </div>
    };

    match &plan.target {
        Some(path) => view! {
            <li class=item_class>
                <a class="card-list__link" href=path.clone()>
                    {leading}
                    {body}
                    {trailing}
                </a>
            </li>
        }
        .into_any(),
        None => view! {
            <li class=item_class>
                {leading}
                {body}
                {trailing}
            </li>
        }
        .into_any(),
    }
}
