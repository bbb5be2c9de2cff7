use crate::domain::cart::context::CartProvider;
use crate::routes::routes::AppRoutes;
use crate::system::session::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SessionProvider>
            <CartProvider>
                <AppRoutes />
            </CartProvider>
        </SessionProvider>
    }
}
