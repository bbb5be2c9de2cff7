pub mod details;
pub mod list;

pub use details::CoffeeDetailsPage;
pub use list::CoffeeListPage;
