use std::collections::HashMap;

use contracts::domain::catalog::ProductKey;
use contracts::domain::order::review::NewReview;
use contracts::domain::order::OrderItem;
use contracts::system::session::{scoped_storage_key, LAST_ORDER_STORAGE_BASE};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::domain::orders::api;
use crate::shared::storage;
use crate::system::session::context::use_session;

fn item_key(item: &OrderItem) -> ProductKey {
    ProductKey::new(item.category, item.product_id)
}

/// Post-purchase rating page for the most recent order. Items come from
/// client storage, written at checkout; the key is scoped to the account.
#[component]
pub fn RateOrdersPage() -> impl IntoView {
    let (session, _) = use_session();
    let navigate = use_navigate();

    let storage_key = move || {
        scoped_storage_key(
            LAST_ORDER_STORAGE_BASE,
            session.get_untracked().user.as_ref(),
        )
    };

    let items = RwSignal::new(
        storage::load_json::<Vec<OrderItem>>(&scoped_storage_key(
            LAST_ORDER_STORAGE_BASE,
            session.get_untracked().user.as_ref(),
        ))
        .unwrap_or_default(),
    );
    let ratings = RwSignal::new(HashMap::<ProductKey, u8>::new());
    let message = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let skip = {
        let navigate = navigate.clone();
        move |_| {
            storage::remove(&storage_key());
            navigate("/profile", Default::default());
        }
    };

    let submit = {
        let navigate = navigate.clone();
        move |_| {
            let current = items.get_untracked();
            if current.is_empty() {
                return;
            }
            let Some(user) = session.get_untracked().user else {
                navigate("/login", Default::default());
                return;
            };

            let chosen = ratings.get_untracked();
            if current.iter().any(|item| !chosen.contains_key(&item_key(item))) {
                message.set(Some(
                    "Please select a rating for each item before submitting.".to_string(),
                ));
                return;
            }

            submitting.set(true);
            message.set(None);
            let key = storage_key();
            let navigate = navigate.clone();
            spawn_local(async move {
                for item in &current {
                    let rating = chosen[&item_key(item)];
                    let review =
                        NewReview::for_product(user.id, item.category, item.product_id, rating, None);
                    if let Err(e) = api::submit_review(&review).await {
                        log::warn!("review for {} not recorded: {e}", item.name);
                    }
                }
                storage::remove(&key);
                navigate("/profile", Default::default());
            });
        }
    };

    view! {
        <section class="rate-orders-page">
            <h1>"Rate Your Experience"</h1>
            <Show
                when=move || !items.with(Vec::is_empty)
                fallback=|| view! { <p>"Nothing to rate right now."</p> }
            >
                <p>"Please rate each wine or coffee from your last order."</p>
                <For each=move || items.get() key=item_key let:item>
                    {
                        let key = item_key(&item);
                        view! {
                            <div class="rate-row">
                                <span>{item.name.clone()}</span>
                                <select on:change=move |ev| {
                                    match event_target_value(&ev).parse::<u8>() {
                                        Ok(value) => {
                                            ratings.update(|r| {
                                                r.insert(key, value);
                                            })
                                        }
                                        Err(_) => {
                                            ratings.update(|r| {
                                                r.remove(&key);
                                            })
                                        }
                                    }
                                }>
                                    <option value="">"Select rating"</option>
                                    <option value="1">"1 - Not for me"</option>
                                    <option value="2">"2"</option>
                                    <option value="3">"3"</option>
                                    <option value="4">"4"</option>
                                    <option value="5">"5 - Superb"</option>
                                </select>
                            </div>
                        }
                    }
                </For>
                {move || message.get().map(|m| view! { <p class="error">{m}</p> })}
                <button on:click=submit.clone() disabled=move || submitting.get()>
                    "Submit ratings"
                </button>
                <button on:click=skip.clone()>"Skip"</button>
            </Show>
        </section>
    }
}
