pub mod gateway;
pub mod ui;
pub mod view_model;

pub use ui::CheckoutPage;
