//! Pulsar Restriction - resource-name restriction codec
//!
//! Translates the nested resource-name restriction attached to a credential
//! into the flat string map a declarative schema can store, and back.
//! It exposes all modules for testing purposes.

pub mod convert;
pub mod errors;
pub mod restriction;
pub mod settings;
