use contracts::domain::cart::{Cart, CartLine};
use contracts::domain::catalog::ProductKey;
use contracts::system::session::{scoped_storage_key, CART_STORAGE_BASE};
use leptos::prelude::*;

use crate::shared::storage;
use crate::system::session::context::{use_session, SessionState};

/// Cart state with write-through persistence. Every mutation lands in
/// localStorage under a key scoped to the active account, so signing in or
/// out swaps carts instead of mixing them.
#[derive(Clone, Copy)]
pub struct CartContext {
    cart: RwSignal<Cart>,
    session: ReadSignal<SessionState>,
}

impl CartContext {
    pub fn cart(&self) -> RwSignal<Cart> {
        self.cart
    }

    fn storage_key(&self) -> String {
        scoped_storage_key(
            CART_STORAGE_BASE,
            self.session.get_untracked().user.as_ref(),
        )
    }

    fn persist(&self) {
        storage::save_json(&self.storage_key(), &self.cart.get_untracked());
    }

    pub fn add(&self, line: CartLine) {
        self.cart.update(|cart| cart.add(line));
        self.persist();
    }

    pub fn remove(&self, key: ProductKey) {
        self.cart.update(|cart| cart.remove(key));
        self.persist();
    }

    pub fn set_quantity(&self, key: ProductKey, quantity: u32) {
        self.cart.update(|cart| cart.set_quantity(key, quantity));
        self.persist();
    }

    /// Empties the cart and drops its stored copy (order placed).
    pub fn clear(&self) {
        self.cart.set(Cart::default());
        storage::remove(&self.storage_key());
    }
}

#[component]
pub fn CartProvider(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let cart = RwSignal::new(Cart::default());

    // Reload whenever the active account changes (including first render).
    Effect::new(move |_| {
        let key = scoped_storage_key(CART_STORAGE_BASE, session.get().user.as_ref());
        cart.set(storage::load_json(&key).unwrap_or_default());
    });

    provide_context(CartContext { cart, session });

    children()
}

/// Hook to access the cart context
pub fn use_cart() -> CartContext {
    use_context::<CartContext>().expect("CartProvider not found in component tree")
}
