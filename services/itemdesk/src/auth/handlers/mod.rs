//! Auth HTTP handlers.

mod http;
mod login;
mod verify;

pub(crate) use http::login_handler;
