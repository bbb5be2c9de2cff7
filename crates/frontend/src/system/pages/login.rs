use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::system::session::context::{do_login, use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (_, set_session) = use_session();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        loading.set(true);
        error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            match do_login(
                set_session,
                username.get_untracked(),
                password.get_untracked(),
            )
            .await
            {
                Ok(user) => {
                    let target = if user.is_admin() { "/admin" } else { "/wines" };
                    navigate(target, Default::default());
                }
                Err(e) => {
                    error.set(Some(e));
                    loading.set(false);
                }
            }
        });
    };

    view! {
        <section class="auth-page">
            <h1>"Welcome Back"</h1>
            <p>"Sign in to continue exploring curated wines and coffees."</p>
            <form on:submit=submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                {move || error.get().map(|e| view! { <p class="error">{e}</p> })}
                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
            <A href="/register">"New here? Create an account"</A>
        </section>
    }
}
