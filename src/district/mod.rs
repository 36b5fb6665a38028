//! District records consumed by the allocation optimizer.
//!
//! A district is an administrative area with a daily water demand, the supply it
//! contributes to the shared pool, a guaranteed minimum, and the allocation it
//! currently receives. Records are immutable values; each run declares the list
//! it works with (see [`wasit_districts`] for the built-in table).

mod district;
mod error;

pub use district::{wasit_districts, District};
pub use error::DistrictError;
