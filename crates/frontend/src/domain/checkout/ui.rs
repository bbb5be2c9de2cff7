use contracts::domain::cart::CartLine;
use contracts::domain::order::{OrderItem, OrderPayload, PaymentMode, ShippingDetails};
use contracts::domain::pairing::{PairingCandidate, PairingStage};
use contracts::system::session::{scoped_storage_key, LAST_ORDER_STORAGE_BASE};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use super::view_model::CheckoutViewModel;
use crate::domain::cart::context::use_cart;
use crate::domain::orders::api as orders_api;
use crate::shared::format::price_inr;
use crate::shared::storage;
use crate::system::session::context::use_session;

#[component]
fn ShippingField(
    vm: CheckoutViewModel,
    label: &'static str,
    field: &'static str,
    read: fn(&ShippingDetails) -> String,
    write: fn(&mut ShippingDetails, String),
) -> impl IntoView {
    let form = vm.form;
    let errors = vm.errors;
    view! {
        <label class="form-field">
            <span>{label}</span>
            <input
                prop:value=move || form.with(|f| read(f))
                on:input=move |ev| form.update(|f| write(f, event_target_value(&ev)))
            />
            {move || {
                errors
                    .get()
                    .get(field)
                    .copied()
                    .map(|message| view! { <span class="field-error">{message}</span> })
            }}
        </label>
    }
}

#[component]
fn PairingCard(candidate: PairingCandidate) -> impl IntoView {
    let cart = use_cart();
    let add_line = candidate.key().map(|key| CartLine {
        product_id: key.id,
        category: key.category,
        name: candidate.name.clone(),
        price: candidate.price.unwrap_or(0.0),
        quantity: 1,
    });

    view! {
        <article class="pairing-card">
            <h4>{candidate.name.clone()}</h4>
            <p class="pairing-source">"Pairs with " {candidate.source_name.clone()}</p>
            {candidate
                .pairing_score
                .map(|score| view! { <span class="pairing-score">{format!("{score:.1}")}</span> })}
            <p>{candidate.description.clone().unwrap_or_default()}</p>
            {candidate.price.map(|price| view! { <span class="price">{price_inr(price)}</span> })}
            {add_line.map(|line| {
                view! {
                    <button on:click=move |_| cart.add(line.clone())>"Add to Cart"</button>
                }
            })}
        </article>
    }
}

#[component]
fn PairingPanel(vm: CheckoutViewModel) -> impl IntoView {
    let loading = vm.pairings_loading;
    let unavailable = vm.pairings_unavailable;
    let pairings = vm.pairings;

    view! {
        <aside class="pairing-panel">
            <h2>"Perfect Pairings"</h2>
            <Show when=move || loading.get()>
                <p>"Curating pairings for your selection..."</p>
            </Show>
            <Show when=move || unavailable.get()>
                <p class="notice">"Pairing suggestions are unavailable right now."</p>
            </Show>
            {move || {
                pairings
                    .get()
                    .map(|resolved| {
                        match resolved.stage {
                            None => view! {
                                <p>"Add something to your cart to see pairings."</p>
                            }
                                .into_any(),
                            Some(PairingStage::Sample) => view! {
                                <div class="pairing-samples">
                                    <p>"While we learn your taste, two pairings we love:"</p>
                                    {resolved
                                        .samples
                                        .iter()
                                        .map(|candidate| {
                                            view! { <PairingCard candidate=candidate.clone() /> }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_any(),
                            Some(_) => view! {
                                <div class="pairing-suggestions">
                                    {resolved
                                        .suggestions
                                        .values()
                                        .map(|suggestion| {
                                            view! {
                                                <section class="pairing-group">
                                                    <h3>"For " {suggestion.source_name.clone()}</h3>
                                                    {suggestion
                                                        .items
                                                        .iter()
                                                        .map(|candidate| {
                                                            view! {
                                                                <PairingCard candidate=candidate.clone() />
                                                            }
                                                        })
                                                        .collect_view()}
                                                </section>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_any(),
                        }
                    })
            }}
        </aside>
    }
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let cart_ctx = use_cart();
    let (session, _) = use_session();
    let navigate = use_navigate();
    let vm = CheckoutViewModel::new();
    let save_details = RwSignal::new(true);

    // Pairings follow every cart change; stale passes lose to newer ones.
    {
        let vm = vm.clone();
        Effect::new(move |_| {
            vm.refresh_pairings(cart_ctx.cart().get());
        });
    }

    // Returning customers get their saved shipping details pre-filled.
    {
        let vm = vm.clone();
        Effect::new(move |_| {
            if let Some(user) = session.get().user {
                vm.prefill_for(user.id);
            }
        });
    }

    let place_order = {
        let vm = vm.clone();
        let navigate = navigate.clone();
        move |_| {
            let cart = cart_ctx.cart().get_untracked();
            if cart.is_empty() {
                return;
            }
            let Some(user) = session.get_untracked().user else {
                navigate("/login", Default::default());
                return;
            };
            if !vm.validate() {
                return;
            }

            vm.submitting.set(true);
            vm.submit_error.set(None);

            let items: Vec<OrderItem> = cart
                .lines
                .iter()
                .map(|line| OrderItem {
                    product_id: line.product_id,
                    category: line.category,
                    name: line.name.clone(),
                    quantity: line.quantity,
                    price: line.price,
                })
                .collect();
            let payload = OrderPayload {
                user_id: user.id,
                items: items.clone(),
                shipping: vm.form.get_untracked(),
                total: cart.total(),
                save_details: save_details.get_untracked(),
            };

            let vm = vm.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                match orders_api::create(&payload).await {
                    Ok(_) => {
                        let key = scoped_storage_key(LAST_ORDER_STORAGE_BASE, Some(&user));
                        storage::save_json(&key, &items);
                        cart_ctx.clear();
                        navigate("/profile", Default::default());
                    }
                    Err(e) => {
                        vm.submitting.set(false);
                        vm.submit_error.set(Some(e));
                    }
                }
            });
        }
    };

    let submitting = vm.submitting;
    let submit_error = vm.submit_error;
    let payment_mode = vm.payment_mode;
    let cart_view = cart_ctx.cart();

    view! {
        <section class="checkout-page">
            <h1>"Checkout"</h1>

            <div class="checkout-summary">
                {move || {
                    cart_view
                        .get()
                        .lines
                        .iter()
                        .map(|line| {
                            view! {
                                <p>
                                    {line.name.clone()} " x " {line.quantity} " - "
                                    {price_inr(line.line_total())}
                                </p>
                            }
                        })
                        .collect_view()
                }}
                <p class="cart-total">"Total: " {move || price_inr(cart_view.get().total())}</p>
            </div>

            <PairingPanel vm=vm.clone() />

            <form class="shipping-form" on:submit=move |ev| ev.prevent_default()>
                <ShippingField
                    vm=vm.clone()
                    label="Full name"
                    field="full_name"
                    read=|f| f.full_name.clone()
                    write=|f, v| f.full_name = v
                />
                <ShippingField
                    vm=vm.clone()
                    label="Phone"
                    field="phone"
                    read=|f| f.phone.clone()
                    write=|f, v| f.phone = v
                />
                <ShippingField
                    vm=vm.clone()
                    label="Address line 1"
                    field="address_line1"
                    read=|f| f.address_line1.clone()
                    write=|f, v| f.address_line1 = v
                />
                <ShippingField
                    vm=vm.clone()
                    label="Address line 2"
                    field="address_line2"
                    read=|f| f.address_line2.clone()
                    write=|f, v| f.address_line2 = v
                />
                <ShippingField
                    vm=vm.clone()
                    label="City"
                    field="city"
                    read=|f| f.city.clone()
                    write=|f, v| f.city = v
                />
                <ShippingField
                    vm=vm.clone()
                    label="State"
                    field="state"
                    read=|f| f.state.clone()
                    write=|f, v| f.state = v
                />
                <ShippingField
                    vm=vm.clone()
                    label="Postal code"
                    field="postal_code"
                    read=|f| f.postal_code.clone()
                    write=|f, v| f.postal_code = v
                />
                <ShippingField
                    vm=vm.clone()
                    label="Country"
                    field="country"
                    read=|f| f.country.clone()
                    write=|f, v| f.country = v
                />
                <ShippingField
                    vm=vm.clone()
                    label="Delivery instructions"
                    field="delivery_instructions"
                    read=|f| f.delivery_instructions.clone()
                    write=|f, v| f.delivery_instructions = v
                />

                <label class="form-field">
                    <span>"Payment mode"</span>
                    <select on:change=move |ev| {
                        payment_mode
                            .set(
                                match event_target_value(&ev).as_str() {
                                    "card" => PaymentMode::Card,
                                    "upi" => PaymentMode::Upi,
                                    _ => PaymentMode::Cash,
                                },
                            )
                    }>
                        <option value="cash">{PaymentMode::Cash.label()}</option>
                        <option value="card">{PaymentMode::Card.label()}</option>
                        <option value="upi">{PaymentMode::Upi.label()}</option>
                    </select>
                </label>

                <label class="form-field">
                    <input
                        type="checkbox"
                        prop:checked=move || save_details.get()
                        on:change=move |ev| save_details.set(event_target_checked(&ev))
                    />
                    <span>"Save these details for next time"</span>
                </label>

                {move || submit_error.get().map(|e| view! { <p class="error">{e}</p> })}

                <button
                    on:click=place_order
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Placing order..." } else { "Place Order" }}
                </button>
            </form>
        </section>
    }
}
