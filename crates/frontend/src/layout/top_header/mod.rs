//! TopHeader component - application top navigation bar.

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <A href="/home">
                    <span class="top-header__title">"QuoteCheck"</span>
                </A>
            </div>

            <nav class="top-header__actions">
                <A href="/load-items">{icon("upload")} " Load Items"</A>
                <A href="/match-items">{icon("search")} " Match Items"</A>
                <A href="/current-data">{icon("grid")} " Current Data"</A>
            </nav>
        </div>
    }
}
