//! API surface: error mapping and wire types.

pub(crate) mod error;
pub(crate) mod types;
