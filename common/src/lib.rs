//! # ipgen common
//!
//! Value types shared by the `ipgen` tools.
//!
//! * **[`network`]**: address fragments (IPv4 octets, IPv6 hextets) and the
//!   dynamically-typed input they are built from.
//! * **[`error`]**: validation errors raised while building fragments.
//! * **[`config`]**: runtime options collected by the CLI.
//! * **[`utils`]**: small format helpers.

pub mod config;
pub mod error;
pub mod network;
pub mod utils;
