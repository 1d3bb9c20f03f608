use proptest::prelude::*;

use xrb_types::address::ACCOUNT_ALPHABET;
use xrb_types::{Address, Balance, BlockHash, PublicKey, Seed};

fn alphabet_symbol() -> impl Strategy<Value = char> {
    (0usize..32).prop_map(|i| ACCOUNT_ALPHABET[i] as char)
}

proptest! {
    /// BlockHash hex rendering parses back to the same hash.
    #[test]
    fn block_hash_hex_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = BlockHash::new(bytes);
        let parsed = BlockHash::from_hex(&hash.to_string()).unwrap();
        prop_assert_eq!(parsed, hash);
    }

    /// BlockHash::is_zero is true only for all-zero bytes.
    #[test]
    fn block_hash_is_zero_correct(bytes in prop::array::uniform32(0u8..)) {
        let hash = BlockHash::new(bytes);
        prop_assert_eq!(hash.is_zero(), bytes == [0u8; 32]);
    }

    /// BlockHash bincode serialization roundtrip.
    #[test]
    fn block_hash_bincode_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = BlockHash::new(bytes);
        let encoded = bincode::serialize(&hash).unwrap();
        prop_assert_eq!(encoded.len(), 32);
        let decoded: BlockHash = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, hash);
    }

    /// PublicKey bincode serialization roundtrip.
    #[test]
    fn public_key_bincode_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let key = PublicKey(bytes);
        let encoded = bincode::serialize(&key).unwrap();
        let decoded: PublicKey = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, key);
    }

    /// Any 32 bytes rendered as a seed parse back to the same bytes.
    #[test]
    fn seed_hex_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let seed = Seed::new(bytes);
        let rendered = seed.to_hex();
        prop_assert_eq!(rendered.len(), 64);
        let parsed = Seed::from_hex(&rendered).unwrap();
        prop_assert_eq!(parsed.as_bytes(), &bytes);
    }

    /// Lowercase hex never passes the seed format, whatever its content.
    #[test]
    fn seed_rejects_lowercase_letters(bytes in prop::array::uniform32(0u8..)) {
        let lower = hex_lower(&bytes);
        let has_letter = lower.bytes().any(|b| b.is_ascii_lowercase());
        prop_assert_eq!(Seed::from_hex(&lower).is_ok(), !has_letter);
    }

    /// Balance wire bytes agree with the raw value.
    #[test]
    fn balance_be_bytes(raw in any::<u128>()) {
        let bytes = Balance::new(raw).to_be_bytes();
        prop_assert_eq!(u128::from_be_bytes(bytes), raw);
    }

    /// Any 60 alphabet symbols behind the prefix form a well-formed address.
    #[test]
    fn address_format_accepts_alphabet(symbols in prop::collection::vec(alphabet_symbol(), 60)) {
        let raw: String = std::iter::once("xrb_".to_string())
            .chain(symbols.iter().map(|c| c.to_string()))
            .collect();
        let addr = Address::parse(&raw).unwrap();
        prop_assert_eq!(addr.encoded_key().len(), 52);
        prop_assert_eq!(addr.encoded_checksum().len(), 8);
        let encoded = bincode::serialize(&addr).unwrap();
        let decoded: Address = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, addr);
    }
}

fn hex_lower(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
