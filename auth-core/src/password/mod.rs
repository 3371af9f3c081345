pub mod errors;
pub mod hasher;

pub use errors::HashingError;
pub use hasher::PasswordHasher;
