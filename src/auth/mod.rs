pub mod identity;
pub mod sessions;
pub mod token;

pub use identity::{Identity, IdentityProvider, SessionAuth};
