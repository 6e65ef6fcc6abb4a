use crate::layout::ToastService;
use crate::routes::AppRoutes;
use crate::shared::api::{provide_api, HttpCatalogApi, SharedApi};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // One notification channel for every screen
    provide_context(ToastService::new());

    let api: SharedApi = Arc::new(HttpCatalogApi::from_config());
    provide_api(api);

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
