pub mod avatar;
pub mod guard;
pub mod navbar;
