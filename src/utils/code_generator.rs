//! Short code generation and validation.
//!
//! Codes are a deterministic, reversible encoding of the row identifier:
//! the id is obfuscated with a salted multiply-and-XOR step and written in
//! positional base-62 over a salt-shuffled alphabet. The goal is surface
//! obfuscation of sequential ids, not access control.

use crate::error::AppError;
use serde_json::json;
use sha2::{Digest, Sha256};

/// Unshuffled base-62 digit set.
const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Minimum length of a generated code.
const MIN_CODE_LEN: usize = 6;

/// Reserved codes that cannot be used as custom aliases.
///
/// These words are route prefixes; allowing them as aliases would shadow
/// system endpoints.
const RESERVED_CODES: &[&str] = &["api", "healthz", "shorten", "static", "stats"];

/// Deterministic encoder from row identifiers to short codes.
///
/// All parameters are derived from a SHA-256 digest of the secret salt, so
/// two generators built from the same salt produce identical codes and a
/// changed salt changes every code.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    alphabet: [u8; 62],
    multiplier: u64,
    inverse: u64,
    mask: u64,
}

impl CodeGenerator {
    pub fn new(salt: &str) -> Self {
        let digest = Sha256::digest(salt.as_bytes());

        // Forced odd so the multiplier is invertible mod 2^64.
        let multiplier = u64::from_be_bytes(digest[0..8].try_into().unwrap_or([0; 8])) | 1;
        let mask = u64::from_be_bytes(digest[8..16].try_into().unwrap_or([0; 8]));

        let mut alphabet = *ALPHABET;
        let key = &digest[16..32];
        for i in (1..alphabet.len()).rev() {
            let k = (key[i % key.len()] as usize).wrapping_add(i.wrapping_mul(0x9e37)) % (i + 1);
            alphabet.swap(i, k);
        }

        Self {
            alphabet,
            multiplier,
            inverse: mul_inverse(multiplier),
            mask,
        }
    }

    /// Encodes a row identifier as a short code of at least six characters.
    ///
    /// Pure in `(id, salt)`: the same inputs always yield the same code.
    /// Output stays within `[A-Za-z0-9]`, a subset of the allowed code charset.
    pub fn encode(&self, id: i64) -> String {
        let mut n = (id as u64).wrapping_mul(self.multiplier) ^ self.mask;

        let mut digits = Vec::with_capacity(11);
        while n > 0 {
            digits.push(self.alphabet[(n % 62) as usize]);
            n /= 62;
        }
        // Left-pad with the zero digit; leading zeros keep decode exact.
        while digits.len() < MIN_CODE_LEN {
            digits.push(self.alphabet[0]);
        }
        digits.reverse();

        digits.iter().map(|&b| b as char).collect()
    }

    /// Inverts [`Self::encode`].
    ///
    /// Returns `None` for codes that were not produced by this generator
    /// (unknown digits or overflow).
    pub fn decode(&self, code: &str) -> Option<i64> {
        let mut n: u64 = 0;
        for byte in code.bytes() {
            let digit = self.alphabet.iter().position(|&a| a == byte)? as u64;
            n = n.checked_mul(62)?.checked_add(digit)?;
        }
        Some(((n ^ self.mask).wrapping_mul(self.inverse)) as i64)
    }
}

/// Multiplicative inverse mod 2^64 via Newton iteration; `a` must be odd.
fn mul_inverse(a: u64) -> u64 {
    let mut x = a;
    for _ in 0..5 {
        x = x.wrapping_mul(2u64.wrapping_sub(a.wrapping_mul(x)));
    }
    x
}

/// Validates a user-provided custom alias.
///
/// # Rules
///
/// - Length: 3-64 characters
/// - Allowed characters: letters, digits, `-`, `_`
/// - Cannot be a reserved route word
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.len() < 3 || alias.len() > 64 {
        return Err(AppError::bad_request(
            "Custom alias must be 3-64 characters",
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom alias can only contain letters, digits, '-' and '_'",
            json!({ "alias": alias }),
        ));
    }

    if RESERVED_CODES.contains(&alias) {
        return Err(AppError::bad_request(
            "This alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}
