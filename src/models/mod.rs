//! Model catalog: request bodies and response payloads.
//!
//! All records are plain serde data with no invariants beyond field-level
//! required/optional. Response fields are uniformly optional so partial
//! server payloads decode; request-body optionals are skipped when unset.
//! Nested configuration records mirror the Hyperledger Fabric YAML the
//! server accepts, one-to-one and without semantic validation.

mod ca;
mod common;
mod components;
mod msp;
mod notifications;
mod orderer;
mod peer;
mod settings;

pub use ca::*;
pub use common::*;
pub use components::*;
pub use msp::*;
pub use notifications::*;
pub use orderer::*;
pub use peer::*;
pub use settings::*;
