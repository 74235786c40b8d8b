//! Item listing and profile update for authenticated callers.

pub(crate) mod handlers;
