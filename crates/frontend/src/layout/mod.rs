pub mod footer;
pub mod toast_service;
pub mod top_header;

pub use toast_service::{ToastService, Toaster};

use leptos::prelude::*;
use footer::Footer;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |              Content                      |
/// +------------------------------------------+
/// |              Footer                       |
/// +------------------------------------------+
/// ```
///
/// Toasts float above the content.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-main">
                {children()}
            </div>
            <Footer />
            <Toaster />
        </div>
    }
}
