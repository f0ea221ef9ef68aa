//! Primitive value generators shared by the entity samplers.
//!
//! Every function takes the random stream explicitly; nothing in this crate
//! owns an RNG except [`crate::PopulationGenerator`].

pub mod numeric;
pub mod uuid;
