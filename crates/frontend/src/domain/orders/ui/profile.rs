use contracts::domain::catalog::ProductCategory;
use contracts::domain::order::OrderSummary;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::domain::orders::api;
use crate::shared::format::{order_date, price_inr};
use crate::system::session::context::{do_logout, use_session};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let (session, set_session) = use_session();
    let navigate = use_navigate();

    let orders = RwSignal::new(Vec::<OrderSummary>::new());
    let error = RwSignal::new(None::<String>);
    let is_loaded = RwSignal::new(false);

    Effect::new(move |_| {
        if let Some(user) = session.get().user {
            spawn_local(async move {
                match api::by_user(user.id).await {
                    Ok(list) => orders.set(list),
                    Err(e) => error.set(Some(e)),
                }
                is_loaded.set(true);
            });
        }
    });

    let total_spent =
        Memo::new(move |_| orders.get().iter().map(|o| o.total_amount).sum::<f64>());
    let wine_units = Memo::new(move |_| {
        orders.with(|all| {
            all.iter()
                .flat_map(|o| &o.items)
                .filter(|i| i.category == ProductCategory::Wine)
                .map(|i| i.quantity)
                .sum::<u32>()
        })
    });
    let coffee_units = Memo::new(move |_| {
        orders.with(|all| {
            all.iter()
                .flat_map(|o| &o.items)
                .filter(|i| i.category == ProductCategory::Coffee)
                .map(|i| i.quantity)
                .sum::<u32>()
        })
    });
    // Most-ordered product by total quantity.
    let favourite = Memo::new(move |_| {
        orders.with(|all| {
            let mut counts = std::collections::HashMap::<String, u32>::new();
            for item in all.iter().flat_map(|o| &o.items) {
                *counts.entry(item.name.clone()).or_default() += item.quantity;
            }
            counts
                .into_iter()
                .max_by_key(|(_, quantity)| *quantity)
                .map(|(name, _)| name)
        })
    });

    let logout = move |_| {
        do_logout(set_session);
        navigate("/", Default::default());
    };

    view! {
        <section class="profile-page">
            <Show
                when=move || session.get().user.is_some()
                fallback=|| {
                    view! {
                        <p>"Please sign in to see your profile."</p>
                        <A href="/login">"Sign in"</A>
                    }
                }
            >
                <h1>
                    "Hey "
                    {move || {
                        session.get().user.map(|u| u.username).unwrap_or_default()
                    }} ", welcome back!"
                </h1>
                <button on:click=logout.clone()>"Log out"</button>

                <div class="profile-stats">
                    <p>"Total spent: " {move || price_inr(total_spent.get())}</p>
                    <p>"Bottles of wine: " {move || wine_units.get()}</p>
                    <p>"Bags of coffee: " {move || coffee_units.get()}</p>
                    {move || {
                        favourite
                            .get()
                            .map(|name| view! { <p>"House favourite: " {name}</p> })
                    }}
                </div>

                <A href="/rate-orders">"Rate your last order"</A>

                <h2>"Order History"</h2>
                {move || error.get().map(|e| view! { <p class="error">{e}</p> })}
                <Show when=move || is_loaded.get() && orders.with(Vec::is_empty)>
                    <p>"No orders yet."</p>
                </Show>
                <ul class="order-history">
                    <For
                        each=move || orders.get()
                        key=|order| order.id
                        let:order
                    >
                        <li class="order-row">
                            <span>
                                {order
                                    .id
                                    .map(|id| format!("Order #{id}"))
                                    .unwrap_or_else(|| "Order".to_string())}
                            </span>
                            <span>
                                {order.created_at.as_deref().map(order_date).unwrap_or_default()}
                            </span>
                            <span>{price_inr(order.total_amount)}</span>
                            <span>
                                {order.status.clone().unwrap_or_else(|| "recorded".to_string())}
                            </span>
                        </li>
                    </For>
                </ul>
            </Show>
        </section>
    }
}
