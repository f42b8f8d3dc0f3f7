use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

/// Claims issued by the HRM auth service.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: u64,
    pub sub: String,
    pub role: u8, // role id
    pub exp: usize,

    pub token_type: TokenType,
    /// Present only if this user is linked to an employee record
    pub employee_id: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub enum TokenType {
    Access,
    Refresh,
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use std::time::{SystemTime, UNIX_EPOCH};

    pub(crate) const SECRET: &str = "test-secret";

    fn now() -> usize {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as usize
    }

    pub(crate) fn mint(role: u8, token_type: TokenType, ttl: i64) -> String {
        let claims = Claims {
            user_id: 7,
            sub: "jane".to_string(),
            role,
            exp: (now() as i64 + ttl) as usize,
            token_type,
            employee_id: Some(1000),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn accepts_valid_token() {
        let claims = verify_token(&mint(2, TokenType::Access, 900), SECRET).unwrap();
        assert_eq!(claims.sub, "jane");
        assert_eq!(claims.role, 2);
        assert_eq!(claims.token_type, TokenType::Access);
        assert_eq!(claims.employee_id, Some(1000));
    }

    #[test]
    fn rejects_wrong_secret_and_expired() {
        assert!(verify_token(&mint(2, TokenType::Access, 900), "other").is_err());
        assert!(verify_token(&mint(2, TokenType::Access, -3600), SECRET).is_err());
    }
}
