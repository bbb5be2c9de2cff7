use contracts::domain::cart::CartLine;
use contracts::domain::catalog::stock::display_stock;
use contracts::domain::catalog::wine::Wine;
use contracts::domain::catalog::ProductCategory;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

use crate::domain::cart::context::use_cart;
use crate::domain::wine::api;
use crate::shared::format::price_inr;
use crate::shared::random::JsRandom;

#[component]
pub fn WineDetailsPage() -> impl IntoView {
    let cart = use_cart();
    let params = use_params_map();

    let wine = RwSignal::new(None::<Wine>);
    let stock = RwSignal::new(0u32);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let Some(id) = params.read().get("id").and_then(|v| v.parse::<i64>().ok()) else {
            error.set(Some("Invalid wine id".to_string()));
            return;
        };
        spawn_local(async move {
            match api::get_by_id(id).await {
                Ok(loaded) => {
                    stock.set(display_stock(loaded.price.unwrap_or(0.0), &mut JsRandom));
                    wine.set(Some(loaded));
                }
                Err(e) => error.set(Some(e)),
            }
        });
    });

    let add_to_cart = move |_| {
        if let Some(w) = wine.get() {
            cart.add(CartLine {
                product_id: w.id,
                category: ProductCategory::Wine,
                name: w.name,
                price: w.price.unwrap_or(0.0),
                quantity: 1,
            });
        }
    };

    view! {
        <section class="product-details">
            {move || error.get().map(|e| view! { <p class="error">{e}</p> })}
            {move || {
                wine.get()
                    .map(|w| {
                        view! {
                            <article>
                                <h1>{w.name.clone()}</h1>
                                <p>"Type: " {w.wine_type.clone().unwrap_or_else(|| "N/A".to_string())}</p>
                                <p>"Region: " {w.region.clone().unwrap_or_else(|| "N/A".to_string())}</p>
                                <p>"Country: " {w.country.clone().unwrap_or_else(|| "N/A".to_string())}</p>
                                <p>"Vintage: " {w.vintage.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())}</p>
                                <p>"Alcohol: " {w.alcohol_content.map(|a| format!("{a}%")).unwrap_or_else(|| "N/A".to_string())}</p>
                                <p>{w.description.clone().unwrap_or_default()}</p>
                                <p class="price">{price_inr(w.price.unwrap_or(0.0))}</p>
                                {w.avg_rating.map(|r| view! { <p>"Rated " {format!("{r:.1}")} " / 5"</p> })}
                                <p class="stock">{move || format!("{} bottles left", stock.get())}</p>
                                <button on:click=add_to_cart>"Add to Cart"</button>
                            </article>
                        }
                    })
            }}
        </section>
    }
}
