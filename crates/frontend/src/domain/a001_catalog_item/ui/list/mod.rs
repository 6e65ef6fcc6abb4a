pub mod controller;
pub mod state;

use self::state::{create_state, CatalogView};
use crate::layout::toast_service::use_toasts;
use crate::shared::api::use_api;
use crate::shared::components::{ItemCard, PaginationControls};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn CatalogItemList() -> impl IntoView {
    let state = create_state();
    let api = use_api();
    let toasts = use_toasts();

    // Load on mount
    let api_for_load = api.clone();
    Effect::new(move |_| {
        let api = api_for_load.clone();
        spawn_local(async move {
            controller::fetch_items(state, api.as_ref()).await;
        });
    });

    let on_populate = move |_| {
        let api = api.clone();
        spawn_local(async move {
            controller::populate(state, api.as_ref(), &toasts).await;
        });
    };

    let current_page = Signal::derive(move || state.with(|s| s.page));
    let total_pages = Signal::derive(move || state.with(|s| s.page_count()));
    let has_previous = Signal::derive(move || state.with(|s| s.has_previous()));
    let has_next = Signal::derive(move || state.with(|s| s.has_next()));

    view! {
        <div class="catalog-list" style="padding: 16px;">
            {move || match state.with(|s| s.view()) {
                CatalogView::Loading => view! {
                    <Flex justify=FlexJustify::Center align=FlexAlign::Center style="margin-top: 32px;">
                        <Spinner />
                    </Flex>
                }.into_any(),
                CatalogView::Error(message) => view! {
                    <div class="catalog-list__error">"Error: " {message}</div>
                }.into_any(),
                CatalogView::Empty => view! {
                    <div class="catalog-list__empty">
                        <h2>"The system has no data"</h2>
                        <p>"Please load some items to get started."</p>
                        <Button appearance=ButtonAppearance::Primary on_click=on_populate.clone()>
                            "Auto Populate"
                        </Button>
                    </div>
                }.into_any(),
                CatalogView::Grid => view! {
                    <h2>"Current Data"</h2>
                    <div class="catalog-list__grid">
                        {state.with(|s| s.current_items().to_vec())
                            .into_iter()
                            .map(|item| view! { <ItemCard item=item /> })
                            .collect_view()}
                    </div>
                    <Show when=move || state.with(|s| s.shows_pagination())>
                        <PaginationControls
                            current_page=current_page
                            total_pages=total_pages
                            has_previous=has_previous
                            has_next=has_next
                            on_previous=Callback::new(move |_| state.update(|s| s.previous_page()))
                            on_next=Callback::new(move |_| state.update(|s| s.next_page()))
                        />
                    </Show>
                }.into_any(),
            }}
        </div>
    }
}
