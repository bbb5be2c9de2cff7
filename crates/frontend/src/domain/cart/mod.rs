pub mod context;
pub mod ui;
