mod error;
mod types;

pub use error::CarError;
pub use types::Car;
