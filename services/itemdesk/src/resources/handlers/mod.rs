//! Resource HTTP handlers.

mod http;
mod items;
mod profile;

pub(crate) use http::{list_items_handler, update_profile_handler};
