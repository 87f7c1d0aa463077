use crate::config::load_page_config;
use crate::page::Page;
use contracts::portfolio::portfolio_content;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the PageConfig to the whole page via context.
    provide_context(load_page_config());

    if let Err(err) = portfolio_content().validate() {
        log::error!("content: {}", err);
    }

    view! {
        <Page />
    }
}
