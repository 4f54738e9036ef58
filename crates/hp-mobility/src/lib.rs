//! `hp-mobility` — how people get from one building to another.
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`transport`] | `TransportModel`, `TransportChoice`                      |
//! | [`route`]     | `move_to`: departure slot plus unit transit slots        |
//! | [`error`]     | `MobilityError`, `MobilityResult<T>`                     |
//!
//! Travel time between cells is the Chebyshev distance divided by the mode's
//! rate, rounded up.  No road network is involved: a trip is decomposed into
//! one transit slot per time unit at the hubs of the cells it crosses.

pub mod error;
pub mod route;
pub mod transport;

#[cfg(test)]
mod tests;

pub use error::{MobilityError, MobilityResult};
pub use route::move_to;
pub use transport::{TransportChoice, TransportModel};
