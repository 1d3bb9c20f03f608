use proptest::prelude::*;

use xrb_crypto::address::{decode_bits, encode_bits};
use xrb_crypto::{
    create_address, derive_keypair, encoded_checksum, hash_change_block, hash_receive_block,
    to_address, to_public_key,
};
use xrb_types::address::ACCOUNT_ALPHABET;
use xrb_types::{PublicKey, Seed, XrbError};

proptest! {
    /// Every 32-byte public key survives encode then decode.
    #[test]
    fn public_key_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let key = PublicKey(bytes);
        let address = to_address(&key);
        prop_assert_eq!(to_public_key(address.as_str()).unwrap(), key);
    }

    /// Every accepted address re-encodes to itself.
    #[test]
    fn address_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let address = to_address(&PublicKey(bytes));
        let key = to_public_key(address.as_str()).unwrap();
        prop_assert_eq!(to_address(&key), address);
    }

    /// Flipping any single key bit changes the checksum.
    #[test]
    fn checksum_detects_single_bit_flip(
        bytes in prop::array::uniform32(0u8..),
        bit in 0usize..256,
    ) {
        let key = PublicKey(bytes);
        let mut flipped = bytes;
        flipped[bit / 8] ^= 1 << (bit % 8);
        prop_assert_ne!(encoded_checksum(&key), encoded_checksum(&PublicKey(flipped)));
    }

    /// Replacing any symbol of a valid address is detected.
    #[test]
    fn corrupted_symbol_rejected(
        bytes in prop::array::uniform32(0u8..),
        pos in 4usize..64,
        symbol in 0usize..32,
    ) {
        let address = to_address(&PublicKey(bytes)).as_str().to_string();
        let replacement = ACCOUNT_ALPHABET[symbol] as char;
        prop_assume!(address.as_bytes()[pos] as char != replacement);
        let mut corrupted = address.clone();
        corrupted.replace_range(pos..pos + 1, &replacement.to_string());
        let rejected = matches!(to_public_key(&corrupted), Err(XrbError::InvalidArgument(_)));
        prop_assert!(rejected);
    }

    /// Bit strings whose length is a multiple of 5 survive the alphabet.
    #[test]
    fn bit_string_roundtrip(bits in prop::collection::vec(any::<bool>(), 0..40usize)) {
        let len = bits.len() - bits.len() % 5;
        let s: String = bits[..len].iter().map(|&b| if b { '1' } else { '0' }).collect();
        let symbols = encode_bits(&s).unwrap();
        prop_assert_eq!(symbols.len(), len / 5);
        prop_assert_eq!(decode_bits(&symbols).unwrap(), s);
    }

    /// Same seed and index always produce the same address.
    #[test]
    fn create_address_deterministic(bytes in prop::array::uniform32(0u8..), index in any::<u32>()) {
        let seed = Seed::new(bytes);
        prop_assert_eq!(create_address(&seed, index), create_address(&seed, index));
    }

    /// Different indices of one seed produce different addresses.
    #[test]
    fn indices_do_not_collide(
        bytes in prop::array::uniform32(0u8..),
        a in any::<u32>(),
        b in any::<u32>(),
    ) {
        prop_assume!(a != b);
        let seed = Seed::new(bytes);
        prop_assert_ne!(create_address(&seed, a), create_address(&seed, b));
    }

    /// Changing either field of a receive or change block changes its hash.
    #[test]
    fn single_field_changes_hash(
        previous in prop::array::uniform32(0u8..),
        other in prop::array::uniform32(0u8..),
        key in prop::array::uniform32(0u8..),
        other_key in prop::array::uniform32(0u8..),
    ) {
        prop_assume!(previous != other && key != other_key);
        let (previous, other) = (hex::encode(previous), hex::encode(other));
        let representative = to_address(&PublicKey(key));
        let other_representative = to_address(&PublicKey(other_key));

        let receive = hash_receive_block(&previous, &previous).unwrap();
        prop_assert_ne!(receive, hash_receive_block(&other, &previous).unwrap());
        prop_assert_ne!(receive, hash_receive_block(&previous, &other).unwrap());

        let change = hash_change_block(&previous, representative.as_str()).unwrap();
        prop_assert_ne!(change, hash_change_block(&other, representative.as_str()).unwrap());
        prop_assert_ne!(
            change,
            hash_change_block(&previous, other_representative.as_str()).unwrap()
        );
    }
}

#[test]
fn zero_seed_addresses() {
    let seed = Seed::from_hex(&"0".repeat(64)).unwrap();
    assert_eq!(
        create_address(&seed, 0).as_str(),
        "xrb_3i1aq1cchnmbn9x5rsbap8b15akfh7wj7pwskuzi7ahz8oq6cobd99d4r3b7"
    );
    assert_eq!(
        create_address(&seed, 1).as_str(),
        "xrb_3rrf6cus8pye6o1kzi5n6wwjof8bjb7ff4xcgesi3njxid6x64pms6onw1f9"
    );
    let kp = derive_keypair(&seed, 0);
    assert_eq!(
        to_public_key(create_address(&seed, 0).as_str()).unwrap(),
        kp.public
    );
}
