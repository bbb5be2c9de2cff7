use contracts::domain::cart::CartLine;
use contracts::domain::catalog::coffee::{Coffee, CoffeeFilter};
use contracts::domain::catalog::distinct_values;
use contracts::domain::catalog::ProductCategory;
use leptos::prelude::*;
use leptos_router::components::A;
use wasm_bindgen_futures::spawn_local;

use crate::domain::cart::context::use_cart;
use crate::domain::coffee::api;
use crate::shared::format::price_inr;

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn CoffeeListPage() -> impl IntoView {
    let cart = use_cart();

    let coffees = RwSignal::new(Vec::<Coffee>::new());
    let error = RwSignal::new(None::<String>);
    let is_loaded = RwSignal::new(false);

    let search = RwSignal::new(String::new());
    let coffee_type = RwSignal::new(String::new());
    let origin = RwSignal::new(String::new());
    let roast = RwSignal::new(String::new());

    spawn_local(async move {
        match api::get_all().await {
            Ok(list) => coffees.set(list),
            Err(e) => error.set(Some(e)),
        }
        is_loaded.set(true);
    });

    let filtered = Memo::new(move |_| {
        let filter = CoffeeFilter {
            search_term: search.get(),
            coffee_type: none_if_empty(coffee_type.get()),
            origin: none_if_empty(origin.get()),
            roast_level: none_if_empty(roast.get()),
        };
        filter.apply(&coffees.get())
    });

    let types = Memo::new(move |_| {
        coffees.with(|all| distinct_values(all.iter().map(|c| c.coffee_type.as_deref())))
    });
    let origins = Memo::new(move |_| {
        coffees.with(|all| distinct_values(all.iter().map(|c| c.origin.as_deref())))
    });
    let roasts = Memo::new(move |_| {
        coffees.with(|all| distinct_values(all.iter().map(|c| c.roast_level.as_deref())))
    });

    view! {
        <section class="catalog-page">
            <h1>"Coffee Roastery"</h1>
            <div class="catalog-filters">
                <input
                    type="text"
                    placeholder="Search coffees by name, origin, roast..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select on:change=move |ev| coffee_type.set(event_target_value(&ev))>
                    <option value="">"All types"</option>
                    <For each=move || types.get() key=|t| t.clone() let:t>
                        <option value=t.clone()>{t.clone()}</option>
                    </For>
                </select>
                <select on:change=move |ev| origin.set(event_target_value(&ev))>
                    <option value="">"All origins"</option>
                    <For each=move || origins.get() key=|o| o.clone() let:o>
                        <option value=o.clone()>{o.clone()}</option>
                    </For>
                </select>
                <select on:change=move |ev| roast.set(event_target_value(&ev))>
                    <option value="">"All roasts"</option>
                    <For each=move || roasts.get() key=|r| r.clone() let:r>
                        <option value=r.clone()>{r.clone()}</option>
                    </For>
                </select>
            </div>

            {move || error.get().map(|e| view! { <p class="error">{e}</p> })}
            <Show when=move || !is_loaded.get()>
                <p>"Warming up the roaster..."</p>
            </Show>

            <div class="catalog-grid">
                <For each=move || filtered.get() key=|c| c.id let:coffee>
                    {
                        let add_line = CartLine {
                            product_id: coffee.id,
                            category: ProductCategory::Coffee,
                            name: coffee.name.clone(),
                            price: coffee.price.unwrap_or(0.0),
                            quantity: 1,
                        };
                        view! {
                            <article class="catalog-card">
                                <A href=format!("/coffees/{}", coffee.id)>
                                    <h2>{coffee.name.clone()}</h2>
                                </A>
                                <p>{coffee.origin.clone().unwrap_or_else(|| "N/A".to_string())}</p>
                                <p>{coffee.roast_level.clone().unwrap_or_else(|| "N/A".to_string())}</p>
                                <p>{price_inr(coffee.price.unwrap_or(0.0))}</p>
                                <button on:click=move |_| cart.add(add_line.clone())>
                                    "Add to Cart"
                                </button>
                            </article>
                        }
                    }
                </For>
            </div>
        </section>
    }
}
