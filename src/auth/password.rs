use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

/// Hash a plaintext password into a salted PHC string.
pub fn hash(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hashed = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("password hashing failed: {e}"))?;
    Ok(hashed.to_string())
}

/// Check a plaintext password against a stored PHC hash.
///
/// A wrong password is `Ok(false)`; only an unparseable stored hash is an
/// error.
pub fn matches(plain: &str, stored: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| anyhow::anyhow!("stored password hash is malformed: {e}"))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashing_never_returns_the_plaintext() {
        let hashed = hash("123456").expect("hashing should succeed");
        assert_ne!(hashed, "123456");
        assert!(hashed.starts_with("$argon2"));
    }

    #[test]
    fn matches_accepts_the_original_password() {
        let hashed = hash("correct-horse-battery-staple").expect("hashing should succeed");
        assert!(matches("correct-horse-battery-staple", &hashed).expect("verify should succeed"));
    }

    #[test]
    fn matches_rejects_a_wrong_password() {
        let hashed = hash("123456").expect("hashing should succeed");
        assert!(!matches("1234567", &hashed).expect("verify should not error"));
    }

    #[test]
    fn matches_errors_on_a_malformed_hash() {
        assert!(matches("anything", "not-a-phc-string").is_err());
    }
}
