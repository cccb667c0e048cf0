//! Car catalog, cart and checkout domain with its persistence.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

pub mod uuids;
