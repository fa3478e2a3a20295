pub mod console;
pub mod constants;
pub mod elo;
pub mod error;
pub mod pairing;
mod record;
pub mod report;
pub mod store;

pub use error::{Error, Result};
pub use pairing::{generate_pairings, Pairing};
pub use store::{Match, Player, Store, Timestamp};
