use std::fmt;

/// The seven registered claim names from RFC 7519
///
/// Doubles as the selector for [`Token::claim`](crate::Token::claim) and as
/// the iteration domain when deriving the claims list from a payload; the
/// declared order here is the derivation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimKey {
    /// Issuer (`iss`)
    Issuer,
    /// Subject (`sub`)
    Subject,
    /// Audience (`aud`)
    Audience,
    /// Expiration Time (`exp`)
    Expiration,
    /// Not Before (`nbf`)
    NotBefore,
    /// Issued At (`iat`)
    IssuedAt,
    /// JWT ID (`jti`)
    JwtId,
}

impl ClaimKey {
    /// All registered claim keys, in derivation order
    pub const ALL: [ClaimKey; 7] = [
        ClaimKey::Issuer,
        ClaimKey::Subject,
        ClaimKey::Audience,
        ClaimKey::Expiration,
        ClaimKey::NotBefore,
        ClaimKey::IssuedAt,
        ClaimKey::JwtId,
    ];

    /// Wire name of the claim as it appears in payload JSON
    pub fn name(&self) -> &'static str {
        match self {
            ClaimKey::Issuer => "iss",
            ClaimKey::Subject => "sub",
            ClaimKey::Audience => "aud",
            ClaimKey::Expiration => "exp",
            ClaimKey::NotBefore => "nbf",
            ClaimKey::IssuedAt => "iat",
            ClaimKey::JwtId => "jti",
        }
    }

    /// Look up a claim key from its wire name
    pub fn from_name(name: &str) -> Option<ClaimKey> {
        match name {
            "iss" => Some(ClaimKey::Issuer),
            "sub" => Some(ClaimKey::Subject),
            "aud" => Some(ClaimKey::Audience),
            "exp" => Some(ClaimKey::Expiration),
            "nbf" => Some(ClaimKey::NotBefore),
            "iat" => Some(ClaimKey::IssuedAt),
            "jti" => Some(ClaimKey::JwtId),
            _ => None,
        }
    }
}

impl fmt::Display for ClaimKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for key in ClaimKey::ALL {
            assert_eq!(ClaimKey::from_name(key.name()), Some(key));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(ClaimKey::from_name("nonce"), None);
        assert_eq!(ClaimKey::from_name(""), None);
        assert_eq!(ClaimKey::from_name("ISS"), None);
    }

    #[test]
    fn test_derivation_order() {
        let names: Vec<&str> = ClaimKey::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, ["iss", "sub", "aud", "exp", "nbf", "iat", "jti"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(ClaimKey::Expiration.to_string(), "exp");
    }
}
