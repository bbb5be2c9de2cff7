pub mod profile;
pub mod rate;

pub use profile::ProfilePage;
pub use rate::RateOrdersPage;
