//! PokeAPI access: record types, the HTTP client, and its errors.

mod client;
mod error;
mod types;

pub use client::{PokeApiClient, PokemonSource};
pub use error::FetchError;
pub use types::{NamedResource, Pokemon, Sprites, StatSlot, TypeSlot};
