pub mod details;
pub mod list;

pub use details::WineDetailsPage;
pub use list::WineListPage;
