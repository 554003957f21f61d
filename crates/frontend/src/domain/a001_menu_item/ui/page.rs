use super::super::api::HttpMenuGateway;
use super::super::controller::MenuController;
use super::super::state::{NoticeKind, ViewState};
use super::signals::MenuSignals;
use crate::shared::api_utils::api_base;
use crate::shared::config::ClientConfig;
use contracts::domain::a001_menu_item::MenuItem;
use contracts::enums::Category;
use leptos::prelude::*;
use std::rc::Rc;

type PageController = MenuController<HttpMenuGateway, MenuSignals>;

/// Shared controller handle; `Copy`, so every handler can capture it
type ControllerHandle = StoredValue<Rc<PageController>, LocalStorage>;

/// Menu page. Reads `ClientConfig` from the context provided by `App`.
#[component]
pub fn MenuPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_else(|| {
        log::warn!("ClientConfig is not provided, using defaults");
        ClientConfig::default()
    });
    let signals = MenuSignals::new();
    let base = api_base(&config);
    log::info!("Menu API: {}", base);

    let controller: ControllerHandle = StoredValue::new_local(Rc::new(MenuController::new(
        HttpMenuGateway::new(base),
        signals,
    )));

    let ctrl = controller.get_value();
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = ctrl.initial_load().await {
            log::error!("Initial menu load failed: {}", e);
        }
    });

    let on_back = move |_: leptos::ev::MouseEvent| controller.get_value().go_back();
    let on_add = move |_: leptos::ev::MouseEvent| {
        if let Err(e) = controller.get_value().start_add() {
            log::warn!("{}", e);
        }
    };

    view! {
        <div class="menu-page">
            <NoticeBanner signals=signals />

            <div class="menu-toolbar">
                <Show when=move || signals.state.get().shows_back_button()>
                    <button id="back-to-menu-button" class="btn btn-secondary" on:click=on_back>
                        "Back"
                    </button>
                </Show>
                <Show when=move || signals.state.get().shows_add_button()>
                    <button id="add-item-button" class="btn btn-primary" on:click=on_add>
                        "Add Item"
                    </button>
                </Show>
            </div>

            {move || match signals.state.get() {
                ViewState::Home => {
                    view! { <CategoryButtons signals=signals controller=controller /> }.into_any()
                }
                ViewState::CategoryDetail(_) => {
                    view! { <ItemList signals=signals controller=controller /> }.into_any()
                }
                ViewState::AddForm => {
                    view! { <AddItemPanel signals=signals controller=controller /> }.into_any()
                }
                ViewState::EditForm(target) => {
                    view! {
                        <EditItemPanel
                            signals=signals
                            controller=controller
                            title=format!("Edit {}", target.item.name)
                        />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn NoticeBanner(signals: MenuSignals) -> impl IntoView {
    move || {
        signals.notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Info => "notice notice--info",
                NoticeKind::Error => "notice notice--error",
            };
            view! {
                <div class=class role="status">
                    <span>{notice.message}</span>
                    <button class="notice__close" on:click=move |_| signals.dismiss_notice()>
                        "×"
                    </button>
                </div>
            }
        })
    }
}

#[component]
fn CategoryButtons(signals: MenuSignals, controller: ControllerHandle) -> impl IntoView {
    view! {
        <div id="menu-list" class="menu-list">
            <For
                each=move || signals.categories.get()
                key=|category| *category
                children=move |category: Category| {
                    let on_select = move |_: leptos::ev::MouseEvent| {
                        if let Err(e) = controller.get_value().select_category(category) {
                            log::warn!("{}", e);
                        }
                    };
                    view! {
                        <button
                            id=format!("{}-button", category.code())
                            class="menu-button"
                            on:click=on_select
                        >
                            {category.button_label()}
                        </button>
                    }
                }
            />
            <Show when=move || signals.categories.get().is_empty()>
                <p class="menu-empty">"The menu is not available right now."</p>
            </Show>
        </div>
    }
}

#[component]
fn ItemList(signals: MenuSignals, controller: ControllerHandle) -> impl IntoView {
    view! {
        <div class="menu-container">
            {move || {
                signals.items.get().map(|(category, items)| {
                    let rows = if items.is_empty() {
                        view! { <p class="menu-empty">"No items"</p> }.into_any()
                    } else {
                        view! {
                            <ul id=format!("{}-details", category.code()) class="menu-details">
                                {items
                                    .into_iter()
                                    .map(|item| {
                                        view! {
                                            <MenuItemRow
                                                item=item
                                                category=category
                                                controller=controller
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_any()
                    };
                    view! {
                        <div class="menu-category">
                            <h3>{category.button_label()}</h3>
                            {rows}
                        </div>
                    }
                })
            }}
        </div>
    }
}

#[component]
fn MenuItemRow(item: MenuItem, category: Category, controller: ControllerHandle) -> impl IntoView {
    let image = item.image_or_default().to_string();
    let name = item.name.clone();
    let description = item.description.clone();
    let id = item.id;

    let on_edit = move |_: leptos::ev::MouseEvent| {
        if let Err(e) = controller.get_value().start_edit(&item, category) {
            log::warn!("{}", e);
        }
    };
    let on_delete = move |_: leptos::ev::MouseEvent| {
        let Some(id) = id else {
            log::warn!("Cannot delete an item without id");
            return;
        };
        let ctrl = controller.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = ctrl.request_delete(category, id).await {
                log::debug!("Delete not completed: {}", e);
            }
        });
    };

    view! {
        <li>
            <div class="menu-item-container">
                <img src=image alt=name.clone() class="menu-item-image" />
                <div>
                    <strong>{name}</strong>
                    ": "
                    {description}
                </div>
            </div>
            <button class="btn" on:click=on_edit>"Edit"</button>
            <button class="btn btn-danger" on:click=on_delete>"Delete"</button>
        </li>
    }
}

#[component]
fn AddItemPanel(signals: MenuSignals, controller: ControllerHandle) -> impl IntoView {
    let form = signals.add_form;

    let on_submit = move |_: leptos::ev::MouseEvent| {
        let current = form.get_untracked();
        let ctrl = controller.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = ctrl.submit_add(&current).await {
                log::debug!("Add not completed: {}", e);
            }
        });
    };

    view! {
        <div class="add-item-container details-form">
            <h3>"Add Meal"</h3>
            <div class="form-group">
                <label for="meal-name">"Name"</label>
                <input
                    type="text"
                    id="meal-name"
                    prop:value=move || form.get().name
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="meal-description">"Description"</label>
                <input
                    type="text"
                    id="meal-description"
                    prop:value=move || form.get().description
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="meal-image">"Image URL"</label>
                <input
                    type="text"
                    id="meal-image"
                    prop:value=move || form.get().image
                    on:input=move |ev| form.update(|f| f.image = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="menu-name">"Menu"</label>
                <select
                    id="menu-name"
                    prop:value=move || form.get().category
                    on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                >
                    <option value="">"Select a menu"</option>
                    {Category::all()
                        .iter()
                        .map(|category| {
                            view! { <option value=category.code()>{category.display_name()}</option> }
                        })
                        .collect_view()}
                </select>
            </div>
            <button id="add-meal-button" class="btn btn-primary" on:click=on_submit>
                "Add Meal"
            </button>
        </div>
    }
}

#[component]
fn EditItemPanel(signals: MenuSignals, controller: ControllerHandle, title: String) -> impl IntoView {
    let form = signals.edit_form;

    let on_submit = move |_: leptos::ev::MouseEvent| {
        let current = form.get_untracked();
        let ctrl = controller.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = ctrl.submit_edit(&current).await {
                log::debug!("Update not completed: {}", e);
            }
        });
    };

    view! {
        <div class="edit-item-container details-form">
            <h3>{title}</h3>
            <div class="form-group">
                <label for="edit-meal-name">"Name"</label>
                <input
                    type="text"
                    id="edit-meal-name"
                    prop:value=move || form.get().name
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="edit-meal-description">"Description"</label>
                <input
                    type="text"
                    id="edit-meal-description"
                    prop:value=move || form.get().description
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="edit-meal-image">"Image URL"</label>
                <input
                    type="text"
                    id="edit-meal-image"
                    prop:value=move || form.get().image
                    on:input=move |ev| form.update(|f| f.image = event_target_value(&ev))
                />
            </div>
            <button id="update-meal-button" class="btn btn-primary" on:click=on_submit>
                "Update Meal"
            </button>
        </div>
    }
}
