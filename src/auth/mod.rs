use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

const SALT_BYTES: usize = 16;
const TOKEN_BYTES: usize = 32;

/// Generate an opaque session token: 32 bytes from the OS CSPRNG, hex-encoded.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Hash a password with a fresh random salt. Stored as `hex(salt)$hex(digest)`.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_BYTES];
    OsRng.fill_bytes(&mut salt);
    let digest = digest_with_salt(&salt, password);
    format!("{}${}", hex::encode(salt), hex::encode(digest))
}

/// Check a candidate password against a stored hash. Malformed stored values
/// verify as false rather than erroring.
pub fn verify_password(stored: &str, candidate: &str) -> bool {
    let Some((salt_hex, digest_hex)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    let Ok(expected) = hex::decode(digest_hex) else {
        return false;
    };
    digest_with_salt(&salt, candidate).as_slice() == expected.as_slice()
}

fn digest_with_salt(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let stored = hash_password("hunter2");
        assert!(verify_password(&stored, "hunter2"));
        assert!(!verify_password(&stored, "hunter3"));
        assert!(!verify_password(&stored, ""));
    }

    #[test]
    fn hashes_are_salted() {
        // Same password, different salt, different stored value
        assert_ne!(hash_password("secret"), hash_password("secret"));
    }

    #[test]
    fn malformed_stored_hash_never_verifies() {
        assert!(!verify_password("", "x"));
        assert!(!verify_password("no-separator", "x"));
        assert!(!verify_password("zz$zz", "x"));
    }

    #[test]
    fn tokens_are_long_and_unique() {
        let a = generate_token();
        let b = generate_token();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
    }
}
