use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::domain::admin::AdminDashboard;
use crate::domain::cart::ui::CartPage;
use crate::domain::checkout::CheckoutPage;
use crate::domain::coffee::ui::{CoffeeDetailsPage, CoffeeListPage};
use crate::domain::orders::ui::{ProfilePage, RateOrdersPage};
use crate::domain::wine::ui::{WineDetailsPage, WineListPage};
use crate::layout::NavigationBar;
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1>"Premium Wine & Coffee Collection"</h1>
            <p>"Curated pairings for every moment."</p>
            <A href="/wines">"Enter the cellar"</A>
            <A href="/coffees">"Visit the roastery"</A>
        </section>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <NavigationBar />
            <main>
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route path=path!("/wines") view=WineListPage />
                    <Route path=path!("/wines/:id") view=WineDetailsPage />
                    <Route path=path!("/coffees") view=CoffeeListPage />
                    <Route path=path!("/coffees/:id") view=CoffeeDetailsPage />
                    <Route path=path!("/cart") view=CartPage />
                    <Route path=path!("/checkout") view=CheckoutPage />
                    <Route path=path!("/profile") view=ProfilePage />
                    <Route path=path!("/rate-orders") view=RateOrdersPage />
                    <Route path=path!("/admin") view=AdminDashboard />
                </Routes>
            </main>
        </Router>
    }
}
