use miniserde::Deserialize;

/// JWT header structure
#[derive(Debug, Clone, Deserialize)]
pub struct TokenHeader {
    /// Algorithm named by the issuer (never used to verify anything here)
    #[serde(rename = "alg")]
    pub algorithm: String,

    /// Token type (typically "JWT")
    #[serde(rename = "typ")]
    pub token_type: String,

    /// Key ID (for JWKS key selection by a downstream verifier)
    #[serde(rename = "kid")]
    pub key_id: Option<String>,
}

impl TokenHeader {
    /// Get algorithm as string
    pub fn algorithm_str(&self) -> &str {
        &self.algorithm
    }

    /// Get key ID if present
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }
}
