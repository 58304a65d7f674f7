//! Task management.
//!
//! Tasks are created, listed, edited, deleted and enhanced through the
//! use-cases in [`services`]. Creation may ask for an enhancement up front; a
//! failed enhancement never blocks creation, while an explicit enhancement
//! request reports the failure. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Input contracts in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Use-cases in [`services`], wired together by [`composition`]

pub mod adapters;
pub mod composition;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
