use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="app-footer">
            "© 2024 QuoteCheck. All rights reserved."
        </footer>
    }
}
