//! Keccak-256 + secp256k1 signing of concatenated parameters.
//!
//! The signing input is built by concatenating every parameter type name
//! followed by every parameter value, with no separators and no length
//! prefixes. The Keccak-256 digest of those bytes is signed with a
//! deterministic (RFC 6979) recoverable ECDSA signature and returned as
//! `0x`-prefixed hex in `r || s || v` layout, where `v` is the recovery id
//! (`0` or `1`).

use alloy_primitives::{Address, B256, Signature, hex, keccak256};
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;

/// Length in bytes of an encoded signature.
pub const SIGNATURE_LENGTH: usize = 65;

/// Errors that can occur while signing.
#[derive(Debug, thiserror::Error)]
pub enum SignError {
    /// The private key is not 32 bytes of hex.
    #[error("malformed private key: {0}")]
    MalformedKey(#[from] hex::FromHexError),

    /// The private key is not a valid secp256k1 scalar.
    #[error("invalid private key: {0}")]
    InvalidKey(String),

    /// The signer rejected the digest.
    #[error("signing failed: {0}")]
    Signer(#[from] alloy_signer::Error),
}

/// Parses a private key given as 64 bare hex digits.
///
/// # Errors
///
/// Returns [`SignError`] if the key carries any non-hex character (a `0x`
/// prefix included), is not 32 bytes long, or is not a valid secp256k1
/// scalar (zero or above the curve order).
pub fn parse_private_key(private_key: &str) -> Result<PrivateKeySigner, SignError> {
    if let Some((index, c)) = private_key
        .char_indices()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(hex::FromHexError::InvalidHexCharacter { c, index }.into());
    }
    let bytes: B256 = private_key.parse()?;
    PrivateKeySigner::from_bytes(&bytes).map_err(|e| SignError::InvalidKey(e.to_string()))
}

/// Returns the Ethereum address controlled by a hex private key.
///
/// # Errors
///
/// Returns [`SignError`] if the key cannot be parsed.
pub fn address_of(private_key: &str) -> Result<Address, SignError> {
    Ok(parse_private_key(private_key)?.address())
}

/// Computes the digest that [`sign`] signs: the Keccak-256 hash of all type
/// names followed by all values, concatenated.
pub fn signing_hash<T, V>(param_types: &[T], param_values: &[V]) -> B256
where
    T: AsRef<str>,
    V: AsRef<str>,
{
    let mut input = Vec::new();
    for part in param_types
        .iter()
        .map(AsRef::as_ref)
        .chain(param_values.iter().map(AsRef::as_ref))
    {
        input.extend_from_slice(part.as_bytes());
    }
    keccak256(&input)
}

/// Signs `param_types` followed by `param_values` with a hex private key.
///
/// Returns the signature as `0x`-prefixed lowercase hex of [`SIGNATURE_LENGTH`]
/// bytes. Signing is deterministic: identical inputs give identical output.
///
/// # Errors
///
/// Returns [`SignError`] if the key is malformed or signing fails.
pub fn sign<T, V>(private_key: &str, param_types: &[T], param_values: &[V]) -> Result<String, SignError>
where
    T: AsRef<str>,
    V: AsRef<str>,
{
    let signer = parse_private_key(private_key)?;
    let hash = signing_hash(param_types, param_values);
    let signature = signer.sign_hash_sync(&hash)?;
    Ok(hex::encode_prefixed(encode_signature(&signature)))
}

/// Encodes a signature as `r || s || v` with `v` in `{0, 1}`.
fn encode_signature(signature: &Signature) -> [u8; SIGNATURE_LENGTH] {
    let mut out = [0u8; SIGNATURE_LENGTH];
    out[..32].copy_from_slice(&signature.r().to_be_bytes::<32>());
    out[32..64].copy_from_slice(&signature.s().to_be_bytes::<32>());
    out[64] = u8::from(signature.v());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIVATE_KEY: &str = "d723d3cdf932464de15845c0719ca13ce15e64c83625d86ddbfc217bd2ac5f5a";

    fn recover(signature_hex: &str, hash: &B256) -> Address {
        let bytes = hex::decode(signature_hex).unwrap();
        Signature::from_raw(&bytes)
            .unwrap()
            .recover_address_from_prehash(hash)
            .unwrap()
    }

    #[test]
    fn test_signing_hash_is_plain_concatenation() {
        let hash = signing_hash(&["uint256", "address"], &["1", "0xabc"]);
        assert_eq!(hash, keccak256(b"uint256address10xabc"));
    }

    #[test]
    fn test_signing_hash_ignores_element_boundaries() {
        let split = signing_hash(&["uint", "256"], &["1"]);
        let joined = signing_hash(&["uint256"], &["1"]);
        assert_eq!(split, joined);
    }

    #[test]
    fn test_signing_hash_of_nothing() {
        let empty: [&str; 0] = [];
        assert_eq!(signing_hash(&empty, &empty), keccak256(b""));
    }

    #[test]
    fn test_sign_is_deterministic() {
        let a = sign(PRIVATE_KEY, &["uint256"], &["42"]).unwrap();
        let b = sign(PRIVATE_KEY, &["uint256"], &["42"]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sign_output_format() {
        let signature = sign(PRIVATE_KEY, &["uint256"], &["42"]).unwrap();
        assert!(signature.starts_with("0x"));
        assert_eq!(signature.len(), 2 + 2 * SIGNATURE_LENGTH);
        assert_eq!(signature, signature.to_lowercase());
        let v = &signature[signature.len() - 2..];
        assert!(v == "00" || v == "01", "unexpected recovery id {v}");
    }

    #[test]
    fn test_sign_recovers_to_signer() {
        let types = ["uint256", "address"];
        let values = ["7", "0x321"];
        let signature = sign(PRIVATE_KEY, &types, &values).unwrap();
        let recovered = recover(&signature, &signing_hash(&types, &values));
        assert_eq!(recovered, address_of(PRIVATE_KEY).unwrap());
    }

    #[test]
    fn test_sign_rejects_prefixed_key() {
        let err = sign(&format!("0x{PRIVATE_KEY}"), &["uint256"], &["1"]).unwrap_err();
        assert!(matches!(
            err,
            SignError::MalformedKey(hex::FromHexError::InvalidHexCharacter { c: 'x', index: 1 })
        ));
    }

    #[test]
    fn test_sign_differs_per_input() {
        let a = sign(PRIVATE_KEY, &["uint256"], &["1"]).unwrap();
        let b = sign(PRIVATE_KEY, &["uint256"], &["2"]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_sign_rejects_short_key() {
        let err = sign("0x123", &["uint256"], &["1"]).unwrap_err();
        assert!(matches!(err, SignError::MalformedKey(_)));
    }

    #[test]
    fn test_sign_rejects_non_hex_key() {
        let key = "zz23d3cdf932464de15845c0719ca13ce15e64c83625d86ddbfc217bd2ac5f5a";
        assert!(matches!(
            sign(key, &["uint256"], &["1"]).unwrap_err(),
            SignError::MalformedKey(_)
        ));
    }

    #[test]
    fn test_sign_rejects_zero_scalar() {
        let key = "0".repeat(64);
        assert!(matches!(
            sign(&key, &["uint256"], &["1"]).unwrap_err(),
            SignError::InvalidKey(_)
        ));
    }
}
