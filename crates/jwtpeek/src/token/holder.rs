//! Held-token accessor surface
//!
//! A `TokenHolder` owns an optional raw token string and answers
//! header/body/signature/claims questions about it on demand. Every
//! accessor re-runs the decode stages it needs against the held string;
//! nothing is cached, so the answers always reflect the current string.

use miniserde::Deserialize;

use crate::claims::{ClaimKey, ClaimValue, Claims, RegisteredClaims};
use crate::error::{Error, Result};
use crate::token::token::{decode_segment, derive_claims, split_token};
use crate::token::{Token, TokenHeader};

fn header_of(token: &str) -> Result<TokenHeader> {
    let (header_b64, _, _) = split_token(token)?;
    decode_segment(header_b64)
}

fn body_of<P: Deserialize>(token: &str) -> Result<P> {
    let (_, body_b64, _) = split_token(token)?;
    decode_segment(body_b64)
}

fn signature_of(token: &str) -> Result<Option<String>> {
    let (_, _, signature) = split_token(token)?;
    Ok((!signature.is_empty()).then(|| signature.to_string()))
}

/// Holds a raw token string and decodes pieces of it on demand
///
/// Accessors fail with [`Error::UnableToGetJwt`] while no token is held.
/// Once a token is set, each accessor runs only the stages it needs (the
/// body accessors never touch the header segment) and wraps whatever goes
/// wrong into its stage-specific error, keeping the underlying cause.
///
/// # Examples
///
/// ```ignore
/// use jwtpeek::*;
///
/// let mut holder = TokenHolder::new();
/// assert!(matches!(holder.header(), Err(Error::UnableToGetJwt)));
///
/// holder.set_token(token_str);
/// println!("Algorithm: {}", holder.header()?.algorithm_str());
/// println!("Subject: {:?}", holder.claim(ClaimKey::Subject)?.string());
/// ```
#[derive(Debug, Clone)]
pub struct TokenHolder {
    token: Option<String>,
}

impl TokenHolder {
    /// Create an empty holder
    pub fn new() -> Self {
        Self { token: None }
    }

    /// Create a holder over a token string
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
        }
    }

    /// Hold a token string, replacing any previous one
    pub fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    /// Drop the held token string
    pub fn clear(&mut self) {
        self.token = None;
    }

    /// Get the held token string
    pub fn token(&self) -> Result<&str> {
        self.token.as_deref().ok_or(Error::UnableToGetJwt)
    }

    /// Decode the header of the held token
    pub fn header(&self) -> Result<TokenHeader> {
        let token = self.token()?;
        header_of(token).map_err(|e| Error::UnableToGetHeader(Box::new(e)))
    }

    /// Decode the payload of the held token as the default [`Claims`]
    pub fn body(&self) -> Result<Claims> {
        self.body_with_custom::<Claims>()
    }

    /// Decode the payload of the held token as a caller-provided type
    pub fn body_with_custom<P>(&self) -> Result<P>
    where
        P: Deserialize + RegisteredClaims,
    {
        let token = self.token()?;
        body_of(token).map_err(|e| Error::UnableToGetBody(Box::new(e)))
    }

    /// Get the signature segment of the held token, verbatim
    ///
    /// An empty third segment reads as `Ok(None)`, not an error.
    pub fn signature(&self) -> Result<Option<String>> {
        let token = self.token()?;
        signature_of(token).map_err(|e| Error::UnableToGetSignature(Box::new(e)))
    }

    /// Derive the claim values of the held token, in declaration order
    pub fn claims(&self) -> Result<Vec<ClaimValue>> {
        let body = self.body()?;
        Ok(derive_claims(&body))
    }

    /// Get one claim value of the held token by key
    pub fn claim(&self, key: ClaimKey) -> Result<ClaimValue> {
        let body = self.body()?;
        Ok(ClaimValue::new(key, body.claim_data(key)))
    }

    /// Run the full decode pipeline on the held token
    pub fn decode(&self) -> Result<Token> {
        self.decode_with_custom::<Claims>()
    }

    /// Run the full decode pipeline with a caller-provided payload type
    pub fn decode_with_custom<P>(&self) -> Result<Token<P>>
    where
        P: Deserialize + RegisteredClaims,
    {
        Token::decode(self.token()?)
    }
}

impl Default for TokenHolder {
    fn default() -> Self {
        Self::new()
    }
}
