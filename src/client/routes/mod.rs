pub mod admin;
pub mod home;
pub mod login;
pub mod not_found;

pub use admin::Admin;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
