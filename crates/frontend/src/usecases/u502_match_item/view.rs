use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_match_item::MatchItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::controller;
use super::state::{create_state, MatchCard};
use crate::layout::toast_service::use_toasts;
use crate::shared::api::use_api;
use crate::shared::icons::icon;

#[component]
pub fn MatchItemView() -> impl IntoView {
    let state = create_state();
    let api = use_api();
    let toasts = use_toasts();

    let on_find = move |_| {
        let api = api.clone();
        spawn_local(async move {
            controller::find_match(state, api.as_ref(), &toasts).await;
        });
    };

    view! {
        <div id="u502_match_item--usecase" class="match-items" style="padding: 16px;">
            <Flex align=FlexAlign::Center style="margin-bottom: 24px;">
                {icon("search")}
                <h2 style="margin: 0 0 0 8px;">{MatchItem::display_name()}</h2>
            </Flex>

            <Flex vertical=true gap=FlexGap::Medium>
                <input
                    type="text"
                    class="match-items__input"
                    placeholder="Enter trade"
                    prop:value=move || state.with(|s| s.trade.clone())
                    on:input=move |ev| state.update(|s| s.trade = event_target_value(&ev))
                />
                <input
                    type="text"
                    class="match-items__input"
                    placeholder="Enter unit of measure"
                    prop:value=move || state.with(|s| s.unit_of_measure.clone())
                    on:input=move |ev| state.update(|s| s.unit_of_measure = event_target_value(&ev))
                />
                <Button appearance=ButtonAppearance::Primary on_click=on_find>
                    {move || if state.with(|s| s.is_searching()) { "Searching..." } else { "Find Match" }}
                </Button>
            </Flex>

            {move || {
                let (card, no_match) = state.with(|s| (s.matched_card(), s.shows_no_match()));
                match card {
                    Some(card) => view! { <MatchedCard card=card /> }.into_any(),
                    None if no_match => view! { <NoMatchCard /> }.into_any(),
                    None => view! { <></> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn MatchedCard(card: MatchCard) -> impl IntoView {
    view! {
        <div class="match-items__result match-items__result--matched">
            <h3>{card.heading}</h3>
            <Card attr:style="padding: 48px 24px; text-align: center; background: #F5F1E6;">
                <div class="item-card__trade">"Trade: " {card.trade}</div>
                <div class="item-card__unit">"Unit: " {card.unit_of_measure}</div>
                <div class="item-card__rate">"Rate: " {card.rate}</div>
            </Card>
        </div>
    }
}

#[component]
fn NoMatchCard() -> impl IntoView {
    view! {
        <div class="match-items__result match-items__result--none">
            <span class="match-items__icon">{icon("x-circle")}</span>
            <h3>"No Match Found"</h3>
            <p>"Please try a different criteria."</p>
        </div>
    }
}
