pub mod case;
pub mod input;
pub mod schema;

mod error;

pub use error::Error;
