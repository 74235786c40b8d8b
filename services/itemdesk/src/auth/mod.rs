//! Auth module: token signing, bearer middleware and login handling.

pub(crate) mod handlers;
pub(crate) mod middleware;
pub(crate) mod token;
