//! bcrypt helpers. Verification runs on the blocking pool so it never stalls
//! the async workers.
use crate::services::auth::error::PasswordError;

pub fn hash_password(password: &str, cost: u32) -> Result<String, PasswordError> {
    Ok(bcrypt::hash(password, cost)?)
}

pub async fn verify_password(password: String, hashed: String) -> Result<bool, PasswordError> {
    let matched = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hashed)).await??;
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn verifies_matching_password_only() {
        let hashed = hash_password("secret", 4).unwrap();

        assert!(verify_password("secret".into(), hashed.clone()).await.unwrap());
        assert!(!verify_password("Secret".into(), hashed).await.unwrap());
    }

    #[tokio::test]
    async fn malformed_hash_is_an_error() {
        assert!(verify_password("secret".into(), "not-a-hash".into()).await.is_err());
    }
}
