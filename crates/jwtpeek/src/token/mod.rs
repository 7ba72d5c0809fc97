// Internal modules
mod header;
mod holder;
#[allow(clippy::module_inception)]
mod token;

// Public API exports
pub use header::TokenHeader;
pub use holder::TokenHolder;
pub use token::Token;
pub use token::{decode, decode_with_custom};
