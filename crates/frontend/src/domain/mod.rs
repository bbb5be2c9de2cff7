pub mod admin;
pub mod cart;
pub mod checkout;
pub mod coffee;
pub mod orders;
pub mod wine;
