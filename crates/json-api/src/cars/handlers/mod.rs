//! Car Handlers

pub(crate) mod index;
