use crate::domain::a001_menu_item::ui::MenuPage;
use crate::shared::config::ClientConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    // MenuPage reads the configuration from context
    provide_context(config);

    view! {
        <main class="menu-app">
            <h1>"Restaurant Menu"</h1>
            <MenuPage />
        </main>
    }
}
