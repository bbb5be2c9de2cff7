use contracts::domain::cart::Cart;
use contracts::domain::order::{FieldErrors, PaymentMode, ShippingDetails};
use contracts::domain::pairing::{resolve_pairings, PassTracker, ResolvedPairings};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::gateway::HttpPairingGateway;
use crate::domain::orders::api as orders_api;
use crate::shared::random::JsRandom;

/// State behind the checkout page: the shipping form plus the pairing
/// panel fed by the resolver.
#[derive(Clone)]
pub struct CheckoutViewModel {
    pub form: RwSignal<ShippingDetails>,
    pub errors: RwSignal<FieldErrors>,
    pub payment_mode: RwSignal<PaymentMode>,
    pub submitting: RwSignal<bool>,
    pub submit_error: RwSignal<Option<String>>,

    pub pairings: RwSignal<Option<ResolvedPairings>>,
    pub pairings_loading: RwSignal<bool>,
    pub pairings_unavailable: RwSignal<bool>,

    pass: PassTracker,
}

impl CheckoutViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ShippingDetails::with_country_default()),
            errors: RwSignal::new(FieldErrors::new()),
            payment_mode: RwSignal::new(PaymentMode::default()),
            submitting: RwSignal::new(false),
            submit_error: RwSignal::new(None),
            pairings: RwSignal::new(None),
            pairings_loading: RwSignal::new(false),
            pairings_unavailable: RwSignal::new(false),
            pass: PassTracker::new(),
        }
    }

    /// Runs the shipping validation and stores the per-field messages.
    pub fn validate(&self) -> bool {
        let errors = self.form.get_untracked().validate();
        let ok = errors.is_empty();
        self.errors.set(errors);
        ok
    }

    /// Pre-fill the form from the customer's last saved shipping profile.
    pub fn prefill_for(&self, user_id: i64) {
        let form = self.form;
        spawn_local(async move {
            match orders_api::payment_profile(user_id).await {
                Ok(Some(profile)) => form.set(profile.into()),
                Ok(None) => {}
                Err(e) => log::warn!("payment profile unavailable: {e}"),
            }
        });
    }

    /// Starts a resolution pass for the given cart snapshot. An older pass
    /// that settles after a newer one began is discarded.
    pub fn refresh_pairings(&self, cart: Cart) {
        let token = self.pass.begin();
        self.pairings_loading.set(true);
        self.pairings_unavailable.set(false);

        let vm = self.clone();
        spawn_local(async move {
            let result = resolve_pairings(&cart, &HttpPairingGateway, &mut JsRandom).await;
            if !vm.pass.is_current(token) {
                return;
            }
            vm.pairings_loading.set(false);
            match result {
                Ok(resolved) => vm.pairings.set(Some(resolved)),
                Err(_) => {
                    vm.pairings.set(None);
                    vm.pairings_unavailable.set(true);
                }
            }
        });
    }
}

impl Default for CheckoutViewModel {
    fn default() -> Self {
        Self::new()
    }
}
