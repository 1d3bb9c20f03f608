//! Command implementations. Each returns the text printed on stdout.

use xrb_crypto::{BlockHasher, EntropySource};
use xrb_types::{
    Address, Balance, Block, BlockHash, ChangeBlock, OpenBlock, PublicKey, ReceiveBlock,
    Result, SendBlock, Seed,
};

pub fn seed(source: &dyn EntropySource) -> Result<String> {
    Ok(xrb_crypto::generate_seed_with(source)?.to_hex())
}

pub fn address(seed: &str, index: i64) -> Result<String> {
    Ok(xrb_crypto::create_address_str(seed, index)?.to_string())
}

/// One `index address` line per account in `start..start + count`.
pub fn addresses(seed: &str, start: u32, count: u32) -> Result<String> {
    let seed = Seed::from_hex(seed)?;
    let lines: Vec<String> = (0..count)
        .map_while(|offset| start.checked_add(offset))
        .map(|index| format!("{index} {}", xrb_crypto::create_address(&seed, index)))
        .collect();
    Ok(lines.join("\n"))
}

pub fn encode(public_key: &str) -> Result<String> {
    let key = PublicKey::from_hex(public_key)?;
    Ok(xrb_crypto::to_address(&key).to_string())
}

pub fn decode(address: &str) -> Result<String> {
    Ok(xrb_crypto::to_public_key(address)?.to_hex())
}

pub fn hash_open(
    hasher: &BlockHasher,
    source: &str,
    representative: &str,
    account: &str,
) -> Result<String> {
    let block = Block::Open(OpenBlock {
        source: BlockHash::from_hex(source)?,
        representative: Address::parse(representative)?,
        account: Address::parse(account)?,
    });
    Ok(hasher.hash(&block)?.to_hex())
}

pub fn hash_send(
    hasher: &BlockHasher,
    previous: &str,
    destination: &str,
    balance: u128,
) -> Result<String> {
    let block = Block::Send(SendBlock {
        previous: BlockHash::from_hex(previous)?,
        destination: Address::parse(destination)?,
        balance: Balance::new(balance),
    });
    Ok(hasher.hash(&block)?.to_hex())
}

pub fn hash_receive(hasher: &BlockHasher, previous: &str, source: &str) -> Result<String> {
    let block = Block::Receive(ReceiveBlock {
        previous: BlockHash::from_hex(previous)?,
        source: BlockHash::from_hex(source)?,
    });
    Ok(hasher.hash(&block)?.to_hex())
}

pub fn hash_change(hasher: &BlockHasher, previous: &str, representative: &str) -> Result<String> {
    let block = Block::Change(ChangeBlock {
        previous: BlockHash::from_hex(previous)?,
        representative: Address::parse(representative)?,
    });
    Ok(hasher.hash(&block)?.to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;
    use xrb_crypto::BalanceEncoding;
    use xrb_types::XrbError;

    const ZERO_SEED: &str = "0000000000000000000000000000000000000000000000000000000000000000";
    const ZERO_KEY_ADDRESS: &str =
        "xrb_1111111111111111111111111111111111111111111111111111hifc8npp";

    struct Fixed;

    impl EntropySource for Fixed {
        fn fill(&self, buf: &mut [u8]) -> Result<()> {
            buf.fill(0x0F);
            Ok(())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn seed_prints_hex() {
        assert_eq!(seed(&Fixed).unwrap(), "0F".repeat(32));
    }

    #[test]
    fn address_for_zero_seed() {
        assert_eq!(
            address(ZERO_SEED, 0).unwrap(),
            "xrb_3i1aq1cchnmbn9x5rsbap8b15akfh7wj7pwskuzi7ahz8oq6cobd99d4r3b7"
        );
        assert!(matches!(
            address(ZERO_SEED, -5),
            Err(XrbError::InvalidArgument(_))
        ));
    }

    #[test]
    fn addresses_lists_consecutive_indices() {
        let out = addresses(ZERO_SEED, 0, 2).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0 xrb_3i1aq1cc"));
        assert!(lines[1].starts_with("1 xrb_3rrf6cus"));
    }

    #[test]
    fn addresses_stop_at_index_limit() {
        let out = addresses(ZERO_SEED, u32::MAX, 3).unwrap();
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn encode_and_decode_are_inverse() {
        let key = "00".repeat(32);
        let address = encode(&key).unwrap();
        assert_eq!(address, ZERO_KEY_ADDRESS);
        assert_eq!(decode(&address).unwrap(), key);
    }

    #[test]
    fn hash_commands_respect_encoding() {
        let previous = "11".repeat(32);
        let fixed = hash_send(&BlockHasher::default(), &previous, ZERO_KEY_ADDRESS, 5).unwrap();
        let minimal = hash_send(
            &BlockHasher::new(BalanceEncoding::Minimal),
            &previous,
            ZERO_KEY_ADDRESS,
            5,
        )
        .unwrap();
        assert_ne!(fixed, minimal);
        assert_eq!(fixed.len(), 64);
    }

    #[test]
    fn hash_commands_match_library() {
        let hasher = BlockHasher::default();
        let previous = "22".repeat(32);
        let source = "33".repeat(32);
        assert_eq!(
            hash_receive(&hasher, &previous, &source).unwrap(),
            xrb_crypto::hash_receive_block(&previous, &source).unwrap().to_hex()
        );
        assert_eq!(
            hash_change(&hasher, &previous, ZERO_KEY_ADDRESS).unwrap(),
            xrb_crypto::hash_change_block(&previous, ZERO_KEY_ADDRESS)
                .unwrap()
                .to_hex()
        );
        assert_eq!(
            hash_open(&hasher, &source, ZERO_KEY_ADDRESS, ZERO_KEY_ADDRESS).unwrap(),
            xrb_crypto::hash_open_block(&source, ZERO_KEY_ADDRESS, ZERO_KEY_ADDRESS)
                .unwrap()
                .to_hex()
        );
    }
}
