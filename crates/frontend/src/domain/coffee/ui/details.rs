use contracts::domain::cart::CartLine;
use contracts::domain::catalog::coffee::Coffee;
use contracts::domain::catalog::stock::display_stock;
use contracts::domain::catalog::ProductCategory;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

use crate::domain::cart::context::use_cart;
use crate::domain::coffee::api;
use crate::shared::format::price_inr;
use crate::shared::random::JsRandom;

#[component]
pub fn CoffeeDetailsPage() -> impl IntoView {
    let cart = use_cart();
    let params = use_params_map();

    let coffee = RwSignal::new(None::<Coffee>);
    let stock = RwSignal::new(0u32);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let Some(id) = params.read().get("id").and_then(|v| v.parse::<i64>().ok()) else {
            error.set(Some("Invalid coffee id".to_string()));
            return;
        };
        spawn_local(async move {
            match api::get_by_id(id).await {
                Ok(loaded) => {
                    stock.set(display_stock(loaded.price.unwrap_or(0.0), &mut JsRandom));
                    coffee.set(Some(loaded));
                }
                Err(e) => error.set(Some(e)),
            }
        });
    });

    let add_to_cart = move |_| {
        if let Some(c) = coffee.get() {
            cart.add(CartLine {
                product_id: c.id,
                category: ProductCategory::Coffee,
                name: c.name,
                price: c.price.unwrap_or(0.0),
                quantity: 1,
            });
        }
    };

    view! {
        <section class="product-details">
            {move || error.get().map(|e| view! { <p class="error">{e}</p> })}
            {move || {
                coffee.get()
                    .map(|c| {
                        view! {
                            <article>
                                <h1>{c.name.clone()}</h1>
                                <p>"Type: " {c.coffee_type.clone().unwrap_or_else(|| "N/A".to_string())}</p>
                                <p>"Origin: " {c.origin.clone().unwrap_or_else(|| "N/A".to_string())}</p>
                                <p>"Roast: " {c.roast_level.clone().unwrap_or_else(|| "N/A".to_string())}</p>
                                <p>"Acidity: " {c.acidity_level.clone().unwrap_or_else(|| "N/A".to_string())}</p>
                                <p>{c.description.clone().unwrap_or_default()}</p>
                                <p class="price">{price_inr(c.price.unwrap_or(0.0))}</p>
                                {c.avg_rating.map(|r| view! { <p>"Rated " {format!("{r:.1}")} " / 5"</p> })}
                                <p class="stock">{move || format!("{} bags left", stock.get())}</p>
                                <button on:click=add_to_cart>"Add to Cart"</button>
                            </article>
                        }
                    })
            }}
        </section>
    }
}
