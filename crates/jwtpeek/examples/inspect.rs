//! Basic example demonstrating token inspection
//!
//! This example demonstrates the decode pipeline:
//! 1. Decode a compact token string into a `Token`
//! 2. Read the header and the registered claims through typed accessors
//! 3. Capture application fields with a custom `#[claims]` payload
//! 4. Hold a raw token and query it on demand with `TokenHolder`
//!
//! Nothing here verifies a signature. Decoded data is untrusted input;
//! pair this crate with a verifier before acting on any claim.

use jwtpeek::*;

#[claims]
struct SessionClaims {
    scope: Option<String>,
}

fn main() -> Result<()> {
    println!("=== jwtpeek - Inspection Example ===\n");

    // In a real application, you would receive this token from a client
    let token_string = create_sample_token();
    println!("Token: {}\n", token_string);

    // Step 1: Decode the token
    println!("Step 1: Decoding token...");
    let token = jwtpeek::decode(&token_string)?;
    println!("  ✓ Algorithm: {}", token.header().algorithm_str());
    println!("  ✓ Token type: {}", token.header().token_type);
    println!("  ✓ Key ID: {:?}\n", token.header().key_id());

    // Step 2: Read the registered claims
    println!("Step 2: Reading registered claims...");
    println!("  Issuer: {:?}", token.issuer());
    println!("  Subject: {:?}", token.subject());
    println!("  Audience: {:?}", token.audience());
    println!("  Expires at: {:?}", token.expiration());

    // The key-addressed accessor exposes every coercion
    let exp = token.claim(ClaimKey::Expiration);
    println!("  exp as integer: {:?}", exp.integer());
    println!("  exp as double: {:?}", exp.double());
    println!("  Derived claims: {} present\n", token.claims().len());

    // Step 3: Decode with a custom payload to reach application fields
    println!("Step 3: Decoding with a custom payload...");
    let token = jwtpeek::decode_with_custom::<SessionClaims>(&token_string)?;
    println!("  ✓ Scope: {:?}\n", token.body().scope);

    // Step 4: Hold the raw string and query it on demand
    println!("Step 4: Querying through a TokenHolder...");
    let holder = TokenHolder::with_token(&token_string);
    println!("  Header: {}", holder.header()?.algorithm_str());
    println!("  Subject: {:?}", holder.claim(ClaimKey::Subject)?.string());
    println!("  Signature: {:?}", holder.signature()?);

    println!("\nDecoded only - nothing has been verified.");

    Ok(())
}

/// Helper function to create a sample JWT token
fn create_sample_token() -> String {
    let header = r#"{"alg":"HS256","typ":"JWT"}"#;

    // Create a token that expires in 1 hour
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0) as i64;

    let payload = format!(
        r#"{{"iss":"https://example.com","sub":"user123","aud":"my-app","exp":{},"scope":"read write"}}"#,
        now + 3600
    );

    let header_b64 = jwtpeek::utils::base64url::encode(header);
    let payload_b64 = jwtpeek::utils::base64url::encode(&payload);

    // No signing key here: the decoder treats the third segment as opaque
    format!("{}.{}.unsigned-placeholder", header_b64, payload_b64)
}
