//! JWT access-token codec.
//!
//! There are no refresh tokens: access tokens expire after the configured
//! TTL and clients log in again. Expiry is evaluated lazily at decode time.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;
