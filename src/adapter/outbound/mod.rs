//! Outbound adapters.

pub mod bazaar;
