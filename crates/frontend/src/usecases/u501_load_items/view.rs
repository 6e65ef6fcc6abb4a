use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_load_items::LoadItems;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use super::controller;
use super::state::create_state;
use crate::layout::toast_service::use_toasts;
use crate::shared::api::use_api;
use crate::shared::icons::icon;

#[component]
pub fn LoadItemsView() -> impl IntoView {
    let state = create_state();
    let api = use_api();
    let toasts = use_toasts();

    let on_submit = move |_| {
        let api = api.clone();
        spawn_local(async move {
            controller::submit(state, api.as_ref(), &toasts).await;
        });
    };

    let textarea_class = move || {
        if state.with(|s| s.is_valid) {
            "load-items__input"
        } else {
            "load-items__input load-items__input--invalid"
        }
    };

    view! {
        <div id="u501_load_items--usecase" class="load-items">
            <Flex align=FlexAlign::Center style="margin-bottom: 16px;">
                {icon("upload")}
                <h2 style="margin: 0 0 0 8px;">{LoadItems::display_name()}</h2>
            </Flex>
            <p style="color: #666;">{LoadItems::description()}</p>

            <textarea
                class=textarea_class
                placeholder="Enter JSON data here..."
                rows=5
                prop:value=move || state.with(|s| s.buffer.clone())
                on:input=move |ev| state.update(|s| s.edit(event_target_value(&ev)))
            ></textarea>

            {move || state.with(|s| s.preview()).map(|pretty| view! {
                <pre class="load-items__preview">{pretty}</pre>
            })}

            <Space>
                <Button appearance=ButtonAppearance::Primary on_click=on_submit>
                    {move || if state.with(|s| s.is_submitting()) { "Loading..." } else { "Load Items" }}
                </Button>
                <A href="/current-data">
                    <Button appearance=ButtonAppearance::Secondary>"View Current Data"</Button>
                </A>
            </Space>
        </div>
    }
}
