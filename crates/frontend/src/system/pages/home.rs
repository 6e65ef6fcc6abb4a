use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u503_catalog_maintenance::{AutoPopulate, ResetCatalog};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::layout::toast_service::use_toasts;
use crate::shared::api::use_api;
use crate::shared::icons::icon;
use crate::usecases::u503_catalog_maintenance;

#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_api();
    let toasts = use_toasts();
    let navigate = StoredValue::new_local(use_navigate());

    let api_for_populate = api.clone();
    let on_populate = move |_| {
        let api = api_for_populate.clone();
        spawn_local(async move {
            u503_catalog_maintenance::auto_populate(api.as_ref(), &toasts).await;
        });
    };

    let on_reset = move |_| {
        let api = api.clone();
        spawn_local(async move {
            if u503_catalog_maintenance::reset(api.as_ref(), &toasts).await {
                navigate.with_value(|nav| nav("/", Default::default()));
            }
        });
    };

    view! {
        <div class="home">
            <h1>"QuoteCheck Code Challenge"</h1>
            <p>"Choose an option to get started:"</p>
            <Flex vertical=true align=FlexAlign::Center gap=FlexGap::Medium>
                <A href="/load-items">
                    <Button appearance=ButtonAppearance::Primary>{icon("upload")} " Load Data"</Button>
                </A>
                <A href="/match-items">
                    <Button appearance=ButtonAppearance::Primary>{icon("search")} " Find the Best Match"</Button>
                </A>
                <A href="/current-data">
                    <Button appearance=ButtonAppearance::Primary>{icon("grid")} " View Current Data"</Button>
                </A>
                <Button appearance=ButtonAppearance::Secondary on_click=on_populate>
                    {icon("refresh")}
                    " "
                    {AutoPopulate::display_name()}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=on_reset>
                    {icon("trash")}
                    " "
                    {ResetCatalog::display_name()}
                </Button>
            </Flex>
        </div>
    }
}
