//! Product catalog domain, store capability and store backends.

pub mod context;
pub mod domain;
pub mod seed;
pub mod store;

#[cfg(test)]
mod test;
