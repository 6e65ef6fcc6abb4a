//! Auto-populate and reset, shared by the Home screen and the catalog list.

use crate::shared::api::CatalogApi;
use crate::shared::notify::{NoticeKind, Notifier};

pub const POPULATE_OK: &str = "Data has been auto populated.";
pub const POPULATE_FAILED: &str = "Failed to auto populate data.";
pub const RESET_OK: &str = "System state has been reset.";
pub const RESET_FAILED: &str = "Failed to reset the system state.";

/// `POST /load` without telling the user. Returns whether the server
/// accepted it.
pub async fn seed(api: &dyn CatalogApi) -> bool {
    match api.auto_populate().await {
        Ok(()) => {
            log::info!("Catalog auto populated");
            true
        }
        Err(e) => {
            log::warn!("Auto populate failed: {}", e);
            false
        }
    }
}

pub fn report_populate(notifier: &dyn Notifier, succeeded: bool) {
    if succeeded {
        notifier.notify(NoticeKind::Success, POPULATE_OK);
    } else {
        notifier.notify(NoticeKind::Error, POPULATE_FAILED);
    }
}

/// `POST /load` and report the outcome right away.
pub async fn auto_populate(api: &dyn CatalogApi, notifier: &dyn Notifier) -> bool {
    let succeeded = seed(api).await;
    report_populate(notifier, succeeded);
    succeeded
}

/// `DELETE /clear`. Returns whether the server accepted it.
pub async fn reset(api: &dyn CatalogApi, notifier: &dyn Notifier) -> bool {
    match api.reset().await {
        Ok(()) => {
            log::info!("Catalog reset");
            notifier.notify(NoticeKind::Success, RESET_OK);
            true
        }
        Err(e) => {
            log::warn!("Reset failed: {}", e);
            notifier.notify(NoticeKind::Error, RESET_FAILED);
            false
        }
    }
}
