//! Registered claim access for JWT payloads
//!
//! This module provides the claim-side vocabulary of the crate: the
//! [`ClaimKey`] enumeration, the [`ClaimData`]/[`ClaimValue`] pair that
//! normalizes heterogeneous JSON claim encodings, the [`RegisteredClaims`]
//! trait payload types implement, and the default [`Claims`] payload.

mod key;
mod value;

pub use key::ClaimKey;
pub use value::{ClaimData, ClaimValue};

use crate::claims;

// Alias so macro-generated code can reference jwtpeek::RegisteredClaims
// within this crate
use crate as jwtpeek;

/// The `RegisteredClaims` trait exposes the seven registered JWT claims
///
/// Each accessor returns a snapshot of the claim's raw JSON shape as
/// [`ClaimData`], or `None` when the payload has no usable value for it.
/// Claim derivation iterates this interface; no runtime introspection of
/// payload fields is involved.
///
/// Implement it by hand for payload types with their own storage, or let
/// the [`claims`](macro@crate::claims) attribute generate the fields and
/// the implementation together.
pub trait RegisteredClaims {
    /// Issuer (iss) - identifies the principal that issued the JWT
    fn issuer(&self) -> Option<ClaimData>;
    /// Subject (sub) - identifies the principal that is the subject of the JWT
    fn subject(&self) -> Option<ClaimData>;
    /// Audience (aud) - identifies the recipients that the JWT is intended for
    fn audience(&self) -> Option<ClaimData>;
    /// Expiration Time (exp) - identifies the expiration time (seconds since Unix epoch)
    fn expiration(&self) -> Option<ClaimData>;
    /// Not Before (nbf) - identifies the time before which the JWT MUST NOT be accepted
    fn not_before(&self) -> Option<ClaimData>;
    /// Issued At (iat) - identifies the time at which the JWT was issued
    fn issued_at(&self) -> Option<ClaimData>;
    /// JWT ID (jti) - provides a unique identifier for the JWT
    fn jwt_id(&self) -> Option<ClaimData>;

    /// Claim access by key; the iteration domain for claim derivation
    fn claim_data(&self, key: ClaimKey) -> Option<ClaimData> {
        match key {
            ClaimKey::Issuer => self.issuer(),
            ClaimKey::Subject => self.subject(),
            ClaimKey::Audience => self.audience(),
            ClaimKey::Expiration => self.expiration(),
            ClaimKey::NotBefore => self.not_before(),
            ClaimKey::IssuedAt => self.issued_at(),
            ClaimKey::JwtId => self.jwt_id(),
        }
    }
}

#[claims]
pub struct Claims {}
