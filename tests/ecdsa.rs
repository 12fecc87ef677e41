use cryptolab::hash::sha256;
use cryptolab::keys::secp256r1::{PUBLIC_KEY_LEN, SECRET_KEY_LEN};
use cryptolab::keys::{KeyPair, PrivateKey, PublicKey};
use cryptolab::signatures::{EcdsaP256, SIGNATURE_LEN, Signature, SignatureProvider, SignatureService};
use cryptolab::{Error, Result, bytes_to_hex, hex_to_bytes};

// RFC 6979, appendix A.2.5 (P-256, SHA-256).
const RFC6979_SECRET: &str = "c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721";
const RFC6979_PUBLIC: &str = concat!(
    "04",
    "60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6",
    "7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299"
);
const RFC6979_SAMPLE: &str = concat!(
    "efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716",
    "f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8"
);
const RFC6979_TEST: &str = concat!(
    "f1abb023518351cd71d881567b1ea663ed3efcf6c5132b354f28d3b0b7d38367",
    "019f4113742a2b14bd25926b49c649155f267e60d3814b4c0cc84250e46f0083"
);

fn rfc6979_keys() -> KeyPair {
    KeyPair::from_secret_bytes(&hex_to_bytes(RFC6979_SECRET).unwrap()).unwrap()
}

/// Hands out the same key pair every time.
struct FixedKeys {
    secret: [u8; 32],
}

impl SignatureProvider for FixedKeys {
    fn name(&self) -> &'static str {
        "fixed keys"
    }

    fn generate_keypair(&self) -> Result<KeyPair> {
        KeyPair::from_secret_bytes(&self.secret)
    }

    fn sign(&self, message: &[u8], private_key: &PrivateKey) -> Result<Signature> {
        EcdsaP256.sign(message, private_key)
    }

    fn verify(&self, message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
        EcdsaP256.verify(message, signature, public_key)
    }
}

#[test]
fn test_ecdsa_rfc6979_public_key() {
    let keys = rfc6979_keys();
    assert_eq!(keys.public_key().to_hex(), RFC6979_PUBLIC);
    assert_eq!(keys.public_key().to_sec1_bytes().len(), 65);
}

#[test]
fn test_ecdsa_rfc6979_signatures() {
    let keys = rfc6979_keys();

    for (message, expected) in [("sample", RFC6979_SAMPLE), ("test", RFC6979_TEST)] {
        let signature = EcdsaP256.sign(message.as_bytes(), keys.private_key()).unwrap();
        assert_eq!(signature.to_hex(), expected, "signature for {message:?}");
        assert!(EcdsaP256.verify(message.as_bytes(), &signature, keys.public_key()));
    }
}

#[test]
fn test_ecdsa_known_signature_verifies_from_hex() {
    let keys = rfc6979_keys();
    let service = SignatureService::new();

    assert_eq!(service.verify_hex("sample", RFC6979_SAMPLE, keys.public_key()), Ok(true));
    assert_eq!(service.verify_hex("test", RFC6979_SAMPLE, keys.public_key()), Ok(false));
}

#[test]
fn test_ecdsa_tampered_message_is_rejected() {
    let service = SignatureService::new();
    let keys = service.generate_key_pair().unwrap();
    let signature = service.sign("Transfer 100 to Alice", keys.private_key()).unwrap();

    assert!(service.verify("Transfer 100 to Alice", &signature, keys.public_key()));

    for tampered in ["Transfer 900 to Alice", "Transfer 100 to Alice ", "transfer 100 to Alice", ""] {
        assert!(
            !service.verify(tampered, &signature, keys.public_key()),
            "tampered message {tampered:?} must not verify"
        );
    }
}

#[test]
fn test_ecdsa_flipped_signature_bits_are_rejected() {
    let service = SignatureService::new();
    let keys = service.generate_key_pair().unwrap();
    let signature = service.sign("hello", keys.private_key()).unwrap();

    // Sample across both halves, including the first and last bit.
    for index in (0..SIGNATURE_LEN * 8).step_by(29).chain([255, 256, 511]) {
        let flipped = signature.with_bit_flipped(index);
        assert_ne!(flipped, signature);
        assert!(
            !service.verify("hello", &flipped, keys.public_key()),
            "signature with bit {index} flipped must not verify"
        );
    }
}

#[test]
fn test_ecdsa_wrong_key_is_rejected() {
    let service = SignatureService::new();
    let signer = service.generate_key_pair().unwrap();
    let other = service.generate_key_pair().unwrap();

    assert_ne!(signer.public_key(), other.public_key());

    let signature = service.sign("hello", signer.private_key()).unwrap();
    assert!(!service.verify("hello", &signature, other.public_key()));
}

#[test]
fn test_ecdsa_out_of_range_signature_is_false_not_error() {
    let keys = rfc6979_keys();
    let service = SignatureService::new();

    // r = s = 0 and r = s = 2^256 - 1 are well-formed 64-byte values that
    // can never verify.
    let zeros = "00".repeat(SIGNATURE_LEN);
    let ones = "ff".repeat(SIGNATURE_LEN);

    assert_eq!(service.verify_hex("sample", &zeros, keys.public_key()), Ok(false));
    assert_eq!(service.verify_hex("sample", &ones, keys.public_key()), Ok(false));
}

#[test]
fn test_ecdsa_malformed_signature_text_is_an_error() {
    let keys = rfc6979_keys();
    let service = SignatureService::new();

    let too_short = &RFC6979_SAMPLE[..126];
    let odd = &RFC6979_SAMPLE[..127];
    let too_long = format!("{RFC6979_SAMPLE}00");
    let not_hex = format!("zz{}", &RFC6979_SAMPLE[2..]);

    for text in [too_short, odd, too_long.as_str(), not_hex.as_str(), ""] {
        assert!(
            matches!(
                service.verify_hex("sample", text, keys.public_key()),
                Err(Error::MalformedSignature { .. })
            ),
            "{text:?} should be reported as malformed"
        );
    }
}

#[test]
fn test_ecdsa_signature_hex_accepts_surrounding_whitespace() {
    let keys = rfc6979_keys();
    let service = SignatureService::new();
    let padded = format!("  {RFC6979_SAMPLE}\n");

    assert_eq!(service.verify_hex("sample", &padded, keys.public_key()), Ok(true));
}

#[test]
fn test_ecdsa_invalid_secret_scalars() {
    assert!(matches!(
        KeyPair::from_secret_bytes(&[0u8; 32]),
        Err(Error::KeyGeneration { .. })
    ));
    assert!(matches!(
        KeyPair::from_secret_bytes(&[0xffu8; 32]),
        Err(Error::KeyGeneration { .. })
    ));
    assert!(matches!(
        KeyPair::from_secret_bytes(&[1u8; 31]),
        Err(Error::KeyGeneration { .. })
    ));
}

#[test]
fn test_ecdsa_fixture_provider_through_service() {
    let mut secret = [0u8; 32];
    secret[31] = 7;
    let service = SignatureService::with_provider(FixedKeys { secret });

    let first = service.generate_key_pair().unwrap();
    let second = service.generate_key_pair().unwrap();
    assert_eq!(first.public_key(), second.public_key());

    let a = service.sign("deterministic", first.private_key()).unwrap();
    let b = service.sign("deterministic", second.private_key()).unwrap();
    assert_eq!(a, b, "RFC 6979 signing must be deterministic");
    assert!(service.verify("deterministic", &a, second.public_key()));
}

#[test]
fn test_ecdsa_private_key_debug_is_redacted() {
    let keys = rfc6979_keys();
    let rendered = format!("{keys:?}");

    assert!(!rendered.to_lowercase().contains(RFC6979_SECRET));
    assert!(rendered.contains("redacted"));
}

#[test]
fn test_ecdsa_generated_public_key_is_uncompressed_sec1() {
    let pair = KeyPair::generate().unwrap();
    let sec1 = pair.public_key().to_sec1_bytes();

    assert_eq!(sec1.len(), PUBLIC_KEY_LEN);
    assert_eq!(sec1[0], 0x04);
    assert_eq!(pair.public_key().to_hex().len(), PUBLIC_KEY_LEN * 2);
    assert_eq!(pair.public_key().to_string(), pair.public_key().to_hex());
}

#[test]
fn test_ecdsa_from_secret_bytes_is_deterministic() {
    let secret = [0x42u8; SECRET_KEY_LEN];
    let a = KeyPair::from_secret_bytes(&secret).unwrap();
    let b = KeyPair::from_secret_bytes(&secret).unwrap();

    assert_eq!(a.public_key(), b.public_key());
    assert_eq!(a.public_key().fingerprint(), b.public_key().fingerprint());
}

#[test]
fn test_ecdsa_fingerprint_is_sha256_of_sec1() {
    let keys = rfc6979_keys();
    let expected = bytes_to_hex(&sha256(&keys.public_key().to_sec1_bytes()));

    assert_eq!(keys.public_key().fingerprint(), expected);
    assert_eq!(expected.len(), 64);
    assert_eq!(
        format!("{:?}", keys.private_key()),
        "PrivateKey(<redacted>)"
    );
}

#[test]
fn test_ecdsa_signature_hex_form() {
    let mut raw = [0u8; SIGNATURE_LEN];
    raw[0] = 0xab;
    raw[63] = 0x01;
    let signature = Signature::from_array(raw);

    let text = signature.to_hex();
    assert_eq!(text.len(), 128);
    assert!(text.starts_with("ab"));
    assert!(text.ends_with("01"));
    assert_eq!(signature.to_string(), text);
    assert_eq!(format!("{signature:?}"), format!("Signature({text})"));
    assert_eq!(Signature::from_hex(&text.to_uppercase()).unwrap(), signature);
}

#[test]
fn test_ecdsa_signature_bytes_must_be_64_long() {
    assert!(Signature::from_bytes(&[0u8; SIGNATURE_LEN]).is_ok());

    for len in [0usize, 63, 65] {
        assert!(
            matches!(
                Signature::from_bytes(&vec![0u8; len]),
                Err(Error::MalformedSignature { .. })
            ),
            "{len} bytes must be rejected"
        );
    }
}

#[test]
fn test_ecdsa_signature_bit_flip_is_an_involution() {
    let signature = Signature::from_array([0u8; SIGNATURE_LEN]);
    let flipped = signature.with_bit_flipped(511);

    assert_eq!(flipped.as_bytes()[63], 0x01);
    assert_eq!(flipped.with_bit_flipped(511), signature);
    assert_eq!(signature.with_bit_flipped(0).as_bytes()[0], 0x80);
    assert_eq!(signature.with_bit_flipped(512), signature);
}

#[test]
fn test_ecdsa_multibyte_messages_are_signed_as_utf8() {
    let service = SignatureService::new();
    let keys = service.generate_key_pair().unwrap();

    let signature = service.sign("héllo ✓", keys.private_key()).unwrap();
    assert!(service.verify("héllo ✓", &signature, keys.public_key()));
    assert!(!service.verify("hello ✓", &signature, keys.public_key()));
}
