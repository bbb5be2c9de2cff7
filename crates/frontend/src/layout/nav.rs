use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::cart::context::use_cart;
use crate::system::session::context::use_session;

#[component]
pub fn NavigationBar() -> impl IntoView {
    let (session, _) = use_session();
    let cart = use_cart();
    let item_count = move || cart.cart().get().item_count();

    view! {
        <nav class="main-nav">
            <A href="/">"Wine & Coffee Studio"</A>
            <A href="/wines">"Wines"</A>
            <A href="/coffees">"Coffees"</A>
            <A href="/cart">
                "Cart"
                <Show when={move || item_count() > 0}>
                    <span class="cart-badge">{item_count}</span>
                </Show>
            </A>
            <Show when=move || session.get().is_admin()>
                <A href="/admin">"Admin"</A>
            </Show>
            {move || match session.get().user {
                Some(user) => view! { <A href="/profile">{user.username.clone()}</A> }.into_any(),
                None => view! { <A href="/login">"Sign In"</A> }.into_any(),
            }}
        </nav>
    }
}
