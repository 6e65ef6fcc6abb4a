use leptos::prelude::*;

use super::state::CatalogState;
use crate::shared::api::CatalogApi;
use crate::shared::notify::Notifier;
use crate::usecases::u503_catalog_maintenance;

/// Fetch the whole collection once: Loading, then Ready or Error.
pub async fn fetch_items(state: RwSignal<CatalogState>, api: &dyn CatalogApi) {
    state.update(|s| s.begin_fetch());
    let result = api.list_items().await;
    match &result {
        Ok(items) => log::info!("Fetched {} catalog items", items.len()),
        Err(e) => log::warn!("Failed to fetch catalog items: {}", e),
    }
    state.update(|s| s.finish_fetch(result));
}

/// Seed an empty catalog, fetch it again, then report. A failed seed
/// leaves the screen as it was.
pub async fn populate(
    state: RwSignal<CatalogState>,
    api: &dyn CatalogApi,
    notifier: &dyn Notifier,
) {
    let seeded = u503_catalog_maintenance::seed(api).await;
    if seeded {
        fetch_items(state, api).await;
    }
    u503_catalog_maintenance::report_populate(notifier, seeded);
}
