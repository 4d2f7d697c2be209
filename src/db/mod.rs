pub mod appraisals;
pub mod connection;

pub use connection::{init_db, Database};
