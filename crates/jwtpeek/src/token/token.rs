//! Public Token type and the decode pipeline
//!
//! This module provides the `Token` type—the result of decoding a JWT's
//! compact serialization. A `Token` has been split, base64url-decoded, and
//! JSON-deserialized, and its registered claims have been derived. Nothing
//! about it has been verified.

use miniserde::Deserialize;

use crate::claims::{ClaimKey, ClaimValue, Claims, RegisteredClaims};
use crate::error::{Error, Result};
use crate::token::TokenHeader;
use crate::utils::base64url;

/// Split a compact token into its three segments
///
/// Splits on `.` as a literal separator. Anything other than exactly three
/// segments fails with the observed count. Empty segments pass through; the
/// decode stage rejects them if they matter.
pub(crate) fn split_token(token: &str) -> Result<(&str, &str, &str)> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(Error::IncorrectSegmentCount(parts.len()));
    }

    Ok((parts[0], parts[1], parts[2]))
}

/// Decode one base64url segment into a typed structure via JSON
///
/// Base64url failures carry the offending segment text; everything after
/// that (invalid UTF-8, malformed JSON, missing required fields, type
/// mismatches) collapses into [`Error::InvalidToken`].
pub(crate) fn decode_segment<T: Deserialize>(segment: &str) -> Result<T> {
    let json = base64url::decode(segment)?;
    miniserde::json::from_str(&json).map_err(|_| Error::InvalidToken)
}

/// Derive claim values from a payload's registered fields
///
/// Walks the seven claim keys in declared order and appends one
/// [`ClaimValue`] per present field. Absent fields contribute nothing, so
/// the list length varies with the payload.
pub(crate) fn derive_claims<P: RegisteredClaims>(body: &P) -> Vec<ClaimValue> {
    ClaimKey::ALL
        .into_iter()
        .filter_map(|key| {
            body.claim_data(key)
                .map(|data| ClaimValue::new(key, Some(data)))
        })
        .collect()
}

/// A decoded, unverified JWT token
///
/// This is the result of the decode pipeline. By the time you receive a
/// `Token`, the compact string has been split into its three segments, the
/// header and payload segments have been base64url-decoded and parsed into
/// typed structures, and the registered claims have been derived from the
/// payload.
///
/// **The signature has not been checked.** The third segment is carried
/// verbatim for a downstream verifier; nothing in this crate establishes
/// trust in the token's contents.
///
/// The payload type defaults to [`Claims`] (the seven registered claims);
/// pass your own `#[claims]` struct to capture additional fields.
///
/// # Examples
///
/// ```ignore
/// use jwtpeek::*;
///
/// let token = jwtpeek::decode(token_str)?;
///
/// println!("Algorithm: {}", token.header().algorithm_str());
/// println!("Subject: {:?}", token.subject());
/// println!("Expires: {:?}", token.expiration());
///
/// // Key-addressed access with typed coercions
/// let exp = token.claim(ClaimKey::Expiration);
/// println!("As integer: {:?}", exp.integer());
/// println!("As date: {:?}", exp.date());
/// ```
pub struct Token<P = Claims> {
    header: TokenHeader,
    body: P,
    signature: Option<String>,
    string: String,
    claims: Vec<ClaimValue>,
}

impl<P> Token<P>
where
    P: Deserialize + RegisteredClaims,
{
    /// Decode a JWT from its compact serialization
    ///
    /// Fails with [`Error::IncorrectSegmentCount`] when the string does not
    /// split into three segments, and with [`Error::UnableToGetHeader`] /
    /// [`Error::UnableToGetBody`] wrapping the underlying cause when the
    /// respective segment cannot be decoded. The signature segment is never
    /// decoded; an empty one reads as absent.
    pub fn decode(token: &str) -> Result<Self> {
        tracing::debug!("decode");

        let (header_b64, body_b64, signature) = split_token(token)?;

        let header: TokenHeader =
            decode_segment(header_b64).map_err(|e| Error::UnableToGetHeader(Box::new(e)))?;
        let body: P =
            decode_segment(body_b64).map_err(|e| Error::UnableToGetBody(Box::new(e)))?;

        let signature = (!signature.is_empty()).then(|| signature.to_string());
        let claims = derive_claims(&body);

        Ok(Self {
            header,
            body,
            signature,
            string: token.to_string(),
            claims,
        })
    }

    /// Get the token header
    pub fn header(&self) -> &TokenHeader {
        &self.header
    }

    /// Get the typed payload
    pub fn body(&self) -> &P {
        &self.body
    }

    /// Get the signature segment, verbatim and unverified
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// Get the original compact token string
    pub fn as_str(&self) -> &str {
        &self.string
    }

    /// Get the derived claim values, in claim-key declaration order
    ///
    /// Only claims present on the payload appear, so the slice is not
    /// guaranteed to have seven entries. For key-addressed access use
    /// [`claim`](Self::claim).
    pub fn claims(&self) -> &[ClaimValue] {
        &self.claims
    }

    /// Get the claim value for a key, reading the payload directly
    ///
    /// Always returns a [`ClaimValue`]; when the payload field is absent,
    /// every coercion on it yields `None`.
    pub fn claim(&self, key: ClaimKey) -> ClaimValue {
        ClaimValue::new(key, self.body.claim_data(key))
    }

    /// Get the issuer (iss claim)
    pub fn issuer(&self) -> Option<String> {
        self.claim(ClaimKey::Issuer).string().map(String::from)
    }

    /// Get the subject (sub claim)
    pub fn subject(&self) -> Option<String> {
        self.claim(ClaimKey::Subject).string().map(String::from)
    }

    /// Get the audience (aud claim); a bare string reads as one element
    pub fn audience(&self) -> Option<Vec<String>> {
        self.claim(ClaimKey::Audience).string_array()
    }

    /// Get the expiration time (exp claim) as a point in time
    pub fn expiration(&self) -> Option<std::time::SystemTime> {
        self.claim(ClaimKey::Expiration).date()
    }

    /// Get the not-before time (nbf claim) as a point in time
    pub fn not_before(&self) -> Option<std::time::SystemTime> {
        self.claim(ClaimKey::NotBefore).date()
    }

    /// Get the issued-at time (iat claim) as a point in time
    pub fn issued_at(&self) -> Option<std::time::SystemTime> {
        self.claim(ClaimKey::IssuedAt).date()
    }

    /// Get the JWT ID (jti claim)
    pub fn jwt_id(&self) -> Option<String> {
        self.claim(ClaimKey::JwtId).string().map(String::from)
    }
}

/// Decode a JWT into a [`Token`] with the default [`Claims`] payload
pub fn decode(token: &str) -> Result<Token> {
    Token::decode(token)
}

/// Decode a JWT with a caller-provided payload type
///
/// The payload type is any `#[claims]` struct (or hand-written
/// [`RegisteredClaims`] implementor that also deserializes from JSON).
pub fn decode_with_custom<P>(token: &str) -> Result<Token<P>>
where
    P: Deserialize + RegisteredClaims,
{
    Token::decode(token)
}
