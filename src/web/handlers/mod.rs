//! HTML template rendering handlers.

mod home;

pub use home::home_handler;
