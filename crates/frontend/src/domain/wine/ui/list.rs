use contracts::domain::cart::CartLine;
use contracts::domain::catalog::wine::{distinct_values, AlcoholBand, Wine, WineFilter};
use contracts::domain::catalog::ProductCategory;
use leptos::prelude::*;
use leptos_router::components::A;
use wasm_bindgen_futures::spawn_local;

use crate::domain::cart::context::use_cart;
use crate::domain::wine::api;
use crate::shared::format::price_inr;

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn parse_band(value: &str) -> Option<AlcoholBand> {
    match value {
        "low" => Some(AlcoholBand::Low),
        "medium" => Some(AlcoholBand::Medium),
        "high" => Some(AlcoholBand::High),
        _ => None,
    }
}

#[component]
pub fn WineListPage() -> impl IntoView {
    let cart = use_cart();

    let wines = RwSignal::new(Vec::<Wine>::new());
    let error = RwSignal::new(None::<String>);
    let is_loaded = RwSignal::new(false);

    let search = RwSignal::new(String::new());
    let wine_type = RwSignal::new(String::new());
    let region = RwSignal::new(String::new());
    let band = RwSignal::new(String::new());

    spawn_local(async move {
        match api::get_all().await {
            Ok(list) => wines.set(list),
            Err(e) => error.set(Some(e)),
        }
        is_loaded.set(true);
    });

    let filtered = Memo::new(move |_| {
        let filter = WineFilter {
            search_term: search.get(),
            wine_type: none_if_empty(wine_type.get()),
            region: none_if_empty(region.get()),
            alcohol_band: parse_band(&band.get()),
        };
        filter.apply(&wines.get())
    });

    let types = Memo::new(move |_| {
        wines.with(|all| distinct_values(all.iter().map(|w| w.wine_type.as_deref())))
    });
    let regions = Memo::new(move |_| {
        wines.with(|all| distinct_values(all.iter().map(|w| w.region.as_deref())))
    });

    view! {
        <section class="catalog-page">
            <h1>"Wine Cellar"</h1>
            <div class="catalog-filters">
                <input
                    type="text"
                    placeholder="Search wines by name, region, type, country..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select on:change=move |ev| wine_type.set(event_target_value(&ev))>
                    <option value="">"All types"</option>
                    <For each=move || types.get() key=|t| t.clone() let:t>
                        <option value=t.clone()>{t.clone()}</option>
                    </For>
                </select>
                <select on:change=move |ev| region.set(event_target_value(&ev))>
                    <option value="">"All regions"</option>
                    <For each=move || regions.get() key=|r| r.clone() let:r>
                        <option value=r.clone()>{r.clone()}</option>
                    </For>
                </select>
                <select on:change=move |ev| band.set(event_target_value(&ev))>
                    <option value="">"Any strength"</option>
                    <option value="low">"Light (under 13%)"</option>
                    <option value="medium">"Medium (13-14%)"</option>
                    <option value="high">"Bold (14%+)"</option>
                </select>
            </div>

            {move || error.get().map(|e| view! { <p class="error">{e}</p> })}
            <Show when=move || !is_loaded.get()>
                <p>"Loading the cellar..."</p>
            </Show>

            <div class="catalog-grid">
                <For each=move || filtered.get() key=|w| w.id let:wine>
                    {
                        let add_line = CartLine {
                            product_id: wine.id,
                            category: ProductCategory::Wine,
                            name: wine.name.clone(),
                            price: wine.price.unwrap_or(0.0),
                            quantity: 1,
                        };
                        view! {
                            <article class="catalog-card">
                                <A href=format!("/wines/{}", wine.id)>
                                    <h2>{wine.name.clone()}</h2>
                                </A>
                                <p>{wine.wine_type.clone().unwrap_or_else(|| "N/A".to_string())}</p>
                                <p>{wine.region.clone().unwrap_or_else(|| "N/A".to_string())}</p>
                                <p>{price_inr(wine.price.unwrap_or(0.0))}</p>
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
