//! Fundamental types for the SS58 address codec.
//!
//! This crate defines the values the codec produces and consumes: the decoded
//! [`Address`], the error types, and a few well-known network prefixes.

pub mod address;
pub mod error;
pub mod network;

pub use address::Address;
pub use error::{InvalidReason, Ss58Error};
pub use network::NetworkPrefix;
