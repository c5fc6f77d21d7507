pub mod core;
pub mod views;
