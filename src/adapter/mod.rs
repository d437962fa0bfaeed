//! Adapters connecting the domain to the outside world.

pub mod inbound;
pub mod outbound;
