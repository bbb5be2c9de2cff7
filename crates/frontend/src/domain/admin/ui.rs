use contracts::domain::catalog::coffee::Coffee;
use contracts::domain::catalog::wine::Wine;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::{coffee, wine};
use crate::shared::format::price_inr;
use crate::system::session::context::use_session;

/// Admin hub: inventory tables for both catalogs with delete actions.
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let (session, _) = use_session();

    let wines = RwSignal::new(Vec::<Wine>::new());
    let coffees = RwSignal::new(Vec::<Coffee>::new());
    let error = RwSignal::new(None::<String>);

    spawn_local(async move {
        match wine::api::get_all().await {
            Ok(list) => wines.set(list),
            Err(e) => error.set(Some(e)),
        }
        match coffee::api::get_all().await {
            Ok(list) => coffees.set(list),
            Err(e) => error.set(Some(e)),
        }
    });

    let delete_wine = move |id: i64| {
        spawn_local(async move {
            match wine::api::delete(id).await {
                Ok(()) => wines.update(|list| list.retain(|w| w.id != id)),
                Err(e) => error.set(Some(e)),
            }
        });
    };
    let delete_coffee = move |id: i64| {
        spawn_local(async move {
            match coffee::api::delete(id).await {
                Ok(()) => coffees.update(|list| list.retain(|c| c.id != id)),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <section class="admin-page">
            <Show
                when=move || session.get().is_admin()
                fallback=|| view! { <p>"This area is for administrators."</p> }
            >
                <h1>"Cellar Command Console"</h1>
                {move || error.get().map(|e| view! { <p class="error">{e}</p> })}

                <h2>"Wines"</h2>
                <table class="inventory-table">
                    <For each=move || wines.get() key=|w| w.id let:w>
                        <tr>
                            <td>{w.name.clone()}</td>
                            <td>{w.wine_type.clone().unwrap_or_else(|| "N/A".to_string())}</td>
                            <td>{price_inr(w.price.unwrap_or(0.0))}</td>
                            <td>
                                <button on:click=move |_| delete_wine(w.id)>"Retire"</button>
                            </td>
                        </tr>
                    </For>
                </table>

                <h2>"Coffees"</h2>
                <table class="inventory-table">
                    <For each=move || coffees.get() key=|c| c.id let:c>
                        <tr>
                            <td>{c.name.clone()}</td>
                            <td>{c.roast_level.clone().unwrap_or_else(|| "N/A".to_string())}</td>
                            <td>{price_inr(c.price.unwrap_or(0.0))}</td>
                            <td>
                                <button on:click=move |_| delete_coffee(c.id)>"Retire"</button>
                            </td>
                        </tr>
                    </For>
                </table>
            </Show>
        </section>
    }
}
