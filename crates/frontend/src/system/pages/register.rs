use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::system::session::context::{do_register, use_session};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (_, set_session) = use_session();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if password.get_untracked().len() < 6 {
            error.set(Some("Password must be at least 6 characters long".to_string()));
            return;
        }
        loading.set(true);
        error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            let email_value = email.get_untracked();
            let email_opt = if email_value.trim().is_empty() {
                None
            } else {
                Some(email_value)
            };
            match do_register(
                set_session,
                username.get_untracked(),
                email_opt,
                password.get_untracked(),
            )
            .await
            {
                Ok(_) => navigate("/wines", Default::default()),
                Err(e) => {
                    error.set(Some(e));
                    loading.set(false);
                }
            }
        });
    };

    view! {
        <section class="auth-page">
            <h1>"Join the Collection"</h1>
            <form on:submit=submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email (optional)"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                {move || error.get().map(|e| view! { <p class="error">{e}</p> })}
                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Creating account..." } else { "Create Account" }}
                </button>
            </form>
            <A href="/login">"Already have an account? Sign in"</A>
        </section>
    }
}
