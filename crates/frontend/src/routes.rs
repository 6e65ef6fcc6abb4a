use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_catalog_item::ui::list::CatalogItemList;
use crate::layout::Shell;
use crate::system::pages::home::HomePage;
use crate::usecases::u501_load_items::LoadItemsView;
use crate::usecases::u502_match_item::MatchItemView;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p>"Page not found."</p> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/home" /> } />
                    <Route path=path!("/home") view=HomePage />
                    <Route path=path!("/load-items") view=LoadItemsView />
                    <Route path=path!("/match-items") view=MatchItemView />
                    <Route path=path!("/current-data") view=CatalogItemList />
                </Routes>
            </Shell>
        </Router>
    }
}
