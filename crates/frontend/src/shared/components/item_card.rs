//! Card showing one catalog item.

use contracts::domain::a001_catalog_item::Item;
use leptos::prelude::*;
use thaw::*;

use crate::shared::number_format::format_rate;

/// Trade, unit and rate of an item. The rate is rounded for display only.
#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    view! {
        <Card attr:style="padding: 48px 24px; text-align: center; height: 225px;">
            <div class="item-card__trade">"Trade: " {item.trade.clone()}</div>
            <div class="item-card__unit">"Unit: " {item.unit_of_measure.clone()}</div>
            <div class="item-card__rate">"Rate: " {format_rate(item.rate)}</div>
        </Card>
    }
}
