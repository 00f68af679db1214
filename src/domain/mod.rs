//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains (where it applies):
//! - `mod.rs`: Rich domain types (validated, business-logic-ready)
//! - `wire.rs`: Raw serde structs matching backend requests/responses
//! - `convert.rs`: `From` conversions between wire and domain types
//! - `state.rs`: State containers with transition methods
//! - `client.rs`: Sub-client with HTTP methods

pub mod analysis;
pub mod catalog;
pub mod settings;
pub mod upload;
pub mod zone;
