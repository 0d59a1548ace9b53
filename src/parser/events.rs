//! Backfill event descriptions from the `cesiumEventProps` mapping.

use crate::model::{DeclarationRecord, EventNameMapping};

/// Give undocumented `cesiumEvents` entries a cross-reference description.
///
/// Authored descriptions are never overwritten, so running this twice is
/// the same as running it once.
pub fn reconcile(record: &mut DeclarationRecord, events: &EventNameMapping, docs_url: &str) {
    for (native, prop) in events {
        let Some(event) = record.cesium_events.iter_mut().find(|e| &e.name == native) else {
            tracing::debug!(event = %native, prop = %prop, "no matching event property");
            continue;
        };
        if event.description.is_empty() {
            event.description = cross_reference(&record.name, native, prop, docs_url);
        }
    }
}

fn cross_reference(component: &str, native: &str, prop: &str, docs_url: &str) -> String {
    format!(
        "Correspond to [{component}#{prop}]({docs_url}{component}.html#{prop}) (`{native}` event)"
    )
}
