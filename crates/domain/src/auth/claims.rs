//! Unverified decoding of the bearer token payload.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DomainError, DomainResult};

/// base64url that accepts payloads with or without `=` padding.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Claims carried in the token the backend signs at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Account ID.
    pub sub: String,
    /// Username.
    pub usr: String,
    /// Role code (`0` user, `1` admin).
    #[serde(default)]
    pub role: i32,
    /// Deletion flag; the backend sends either `0`/`1` or a boolean.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub del: Option<bool>,
    /// Organization the account belongs to.
    #[serde(default)]
    pub organ_id: Option<String>,
    /// Issued at, seconds since epoch.
    pub iat: i64,
    /// Expires at, seconds since epoch.
    pub exp: i64,
    /// Issuer.
    #[serde(default)]
    pub iss: String,
}

impl JwtClaims {
    /// Whether the claims mark the account as deleted.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.del.unwrap_or(false)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Number(i64),
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = Option::<Flag>::deserialize(deserializer)?;
    Ok(flag.map(|f| match f {
        Flag::Bool(b) => b,
        Flag::Number(n) => n != 0,
    }))
}

/// Decodes the payload segment of a JWT without verifying its signature.
///
/// Accepts the raw token or an `Authorization` value with a `Bearer ` prefix
/// (case-insensitive).
///
/// # Errors
///
/// Returns [`DomainError::InvalidToken`] if the token has no payload segment,
/// the segment is not base64url, or the JSON does not match [`JwtClaims`].
pub fn decode_claims(token: &str) -> DomainResult<JwtClaims> {
    let token = strip_bearer(token.trim());
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| DomainError::InvalidToken("missing payload segment".to_string()))?;

    let bytes = PAYLOAD_ENGINE
        .decode(payload)
        .map_err(|e| DomainError::InvalidToken(format!("payload is not base64url: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| DomainError::InvalidToken(format!("payload is not valid claims: {e}")))
}

fn strip_bearer(token: &str) -> &str {
    match token.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("bearer ") => token[7..].trim_start(),
        _ => token,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use pretty_assertions::assert_eq;

    fn token_with(payload: &str) -> String {
        format!(
            "eyJhbGciOiJIUzI1NiJ9.{}.signature",
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_decode_claims() {
        let token = token_with(
            r#"{"sub":"u-1","usr":"alice","role":1,"iat":1700000000,"exp":1700003600,"iss":"foodapp"}"#,
        );
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "u-1");
        assert_eq!(claims.usr, "alice");
        assert_eq!(claims.role, 1);
        assert_eq!(claims.exp, 1_700_003_600);
        assert_eq!(claims.iss, "foodapp");
        assert!(!claims.is_deleted());
    }

    #[test]
    fn test_decode_claims_with_bearer_prefix() {
        let token = token_with(r#"{"sub":"u-2","usr":"bob","iat":1,"exp":2}"#);
        let claims = decode_claims(&format!("bearer {token}")).unwrap();
        assert_eq!(claims.usr, "bob");
        assert_eq!(claims.role, 0);
    }

    #[test]
    fn test_decode_claims_numeric_and_bool_deletion_flag() {
        let numeric = token_with(r#"{"sub":"a","usr":"a","del":1,"iat":1,"exp":2}"#);
        assert!(decode_claims(&numeric).unwrap().is_deleted());

        let boolean = token_with(r#"{"sub":"a","usr":"a","del":false,"iat":1,"exp":2}"#);
        assert_eq!(decode_claims(&boolean).unwrap().del, Some(false));
    }

    #[test]
    fn test_decode_claims_non_ascii_username() {
        let token = token_with(r#"{"sub":"a","usr":"管理员","iat":1,"exp":2}"#);
        assert_eq!(decode_claims(&token).unwrap().usr, "管理员");
    }

    #[test]
    fn test_decode_claims_rejects_garbage() {
        assert!(decode_claims("not-a-token").is_err());
        assert!(decode_claims("a..c").is_err());
        assert!(decode_claims("a.!!!.c").is_err());
        assert!(decode_claims(&token_with("[1,2,3]")).is_err());
    }
}
