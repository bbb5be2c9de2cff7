use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::cart::context::use_cart;
use crate::shared::format::price_inr;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = use_cart();
    let lines = move || cart.cart().get().lines;
    let is_empty = move || cart.cart().get().is_empty();
    let total = move || cart.cart().get().total();

    view! {
        <section class="cart-page">
            <h1>"Your Cart"</h1>
            <Show
                when=move || !is_empty()
                fallback=|| {
                    view! {
                        <p>"Your cart is empty."</p>
                        <A href="/wines">"Browse the cellar"</A>
                    }
                }
            >
                <ul class="cart-lines">
                    <For each=lines key=|line| line.key() let:line>
                        {
                            let key = line.key();
                            let quantity = line.quantity;
                            view! {
                                <li class="cart-line">
                                    <span>{line.name.clone()}</span>
                                    <span>{price_inr(line.price)}</span>
                                    <button on:click=move |_| {
                                        cart.set_quantity(key, quantity.saturating_sub(1))
                                    }>"-"</button>
                                    <span>{quantity}</span>
                                    <button on:click=move |_| {
                                        cart.set_quantity(key, quantity + 1)
                                    }>"+"</button>
                                    <span>{price_inr(line.line_total())}</span>
                                    <button on:click=move |_| cart.remove(key)>"Remove"</button>
                                </li>
                            }
                        }
                    </For>
                </ul>
                <p class="cart-total">"Total: " {move || price_inr(total())}</p>
                <A href="/checkout">"Proceed to Checkout"</A>
            </Show>
        </section>
    }
}
