pub mod create_comment;
pub mod create_question;
pub mod create_user;
pub mod edit_comment;
pub mod login;
pub mod logout;
pub mod profile;
pub mod question;
pub mod questions;
