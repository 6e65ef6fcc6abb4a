use leptos::prelude::*;

use super::state::BulkLoaderState;
use crate::shared::api::CatalogApi;
use crate::shared::notify::{NoticeKind, Notifier};

pub const LOAD_FAILED: &str = "Failed to load items";

/// Validate the buffer and, when it passes, send it verbatim to `POST /item`.
///
/// Rejections are reported without a request. A failed request keeps the
/// buffer; nothing is retried.
pub async fn submit(
    state: RwSignal<BulkLoaderState>,
    api: &dyn CatalogApi,
    notifier: &dyn Notifier,
) {
    let body = match state.try_update(|s| s.begin_submit()) {
        Some(Ok(body)) => body,
        Some(Err(rejection)) => {
            log::debug!("Bulk load rejected locally: {:?}", rejection);
            notifier.notify(NoticeKind::Error, rejection.message());
            return;
        }
        None => return,
    };

    match api.create_items(&body).await {
        Ok(message) => {
            log::info!("Bulk load accepted: {}", message);
            state.update(|s| s.finish_submit(true));
            notifier.notify(NoticeKind::Success, &message);
        }
        Err(e) => {
            log::warn!("Bulk load failed: {}", e);
            state.update(|s| s.finish_submit(false));
            notifier.notify(NoticeKind::Error, LOAD_FAILED);
        }
    }
}
