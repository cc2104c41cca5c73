//! 26-character identifiers used for users and terms-of-service versions.

use uuid::Uuid;

pub const ID_LENGTH: usize = 26;

const ENCODING: &[u8; 32] = b"ybndrfg8ejkmcpqxot1uwisza345h769";

/// A random v4 UUID, base32-encoded with the identifier alphabet and no padding.
pub fn new_id() -> String {
    encode(Uuid::new_v4().as_bytes())
}

/// Exactly 26 ASCII letters or digits; non-ASCII letters and digits are rejected.
pub fn is_valid_id(value: &str) -> bool {
    value.len() == ID_LENGTH && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// `serde_valid` hook for id fields.
pub fn validate_id(value: &String) -> Result<(), serde_valid::validation::Error> {
    if is_valid_id(value) {
        Ok(())
    } else {
        Err(serde_valid::validation::Error::Custom(format!(
            "must be {} ASCII letters or digits",
            ID_LENGTH
        )))
    }
}

fn encode(bytes: &[u8; 16]) -> String {
    let mut out = String::with_capacity(ID_LENGTH);
    let mut buffer: u16 = 0;
    let mut bits = 0u8;

    for byte in bytes {
        buffer = (buffer << 8) | u16::from(*byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ENCODING[((buffer >> bits) & 0x1f) as usize] as char);
        }
    }
    if bits > 0 {
        out.push(ENCODING[((buffer << (5 - bits)) & 0x1f) as usize] as char);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_is_valid() {
        for _ in 0..100 {
            let id = new_id();
            assert_eq!(id.len(), ID_LENGTH);
            assert!(is_valid_id(&id), "{} should be valid", id);
        }
    }

    #[test]
    fn test_new_id_is_unique() {
        assert_ne!(new_id(), new_id());
    }

    #[test]
    fn test_encode_known_values() {
        assert_eq!(encode(&[0u8; 16]), "y".repeat(26));
        assert_eq!(encode(&[0xffu8; 16]), format!("{}h", "9".repeat(25)));
    }

    #[test]
    fn test_is_valid_id_rejects() {
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("abc"));
        assert!(!is_valid_id(&"a".repeat(27)));
        assert!(!is_valid_id(&format!("{}-", "a".repeat(25))));
        assert!(is_valid_id(&"a".repeat(26)));
        // 26 bytes but non-ASCII letters
        assert!(!is_valid_id(&"é".repeat(13)));
    }

    #[test]
    fn test_validate_id_hook() {
        assert!(validate_id(&new_id()).is_ok());
        assert!(validate_id(&"short".to_string()).is_err());
    }
}
