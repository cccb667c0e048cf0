//! Checkout Handlers

pub(crate) mod buy;
pub(crate) mod confirm;
