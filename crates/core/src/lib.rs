//! # Classweek Core
//!
//! Domain types and the week-resolution algorithm for the classweek service.
//! Everything in this crate is pure and persistence-free: the data-access
//! layer fetches slot collections, the [`resolver`] reconciles them.

pub mod errors;
pub mod models;
pub mod resolver;
