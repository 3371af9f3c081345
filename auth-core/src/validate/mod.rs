pub mod errors;
pub mod rules;

pub use errors::Rule;
pub use errors::ValidationError;
pub use rules::CredentialPolicy;
pub use rules::CredentialValidator;
