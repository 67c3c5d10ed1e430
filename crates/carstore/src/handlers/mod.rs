pub mod cars;
pub mod error;
pub mod health;

pub use error::AppError;
