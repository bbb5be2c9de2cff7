pub mod cart;
pub mod catalog;
pub mod order;
pub mod pairing;
pub mod random;
