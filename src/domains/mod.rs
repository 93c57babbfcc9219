//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: the tool contract, discovery, verification, routing and dispatch
//! - **assets**: static assets served ahead of routing

pub mod assets;
pub mod tools;
