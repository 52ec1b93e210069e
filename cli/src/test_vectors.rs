//! Stealth derivation test vectors
//!
//! Each vector recomputes the derivation from first principles with `k256`
//! and checks the CLI wallet and the world state agree with it.

#[cfg(test)]
#[allow(non_snake_case)] // Curve notation uses P, R, S, Q
mod stealth_test_vectors {
    use crate::crypto::WalletKey;
    use k256::elliptic_curve::ops::Reduce;
    use k256::elliptic_curve::sec1::ToEncodedPoint;
    use k256::{FieldBytes, ProjectivePoint, Scalar, U256};
    use stealth_nft::crypto::keccak256;
    use stealth_nft::{Address, StealthNft, TokenId};

    const RECIPIENT_KEY: [u8; 32] = [
        0xde, 0xad, 0xbe, 0xef, 0xde, 0xad, 0xbe, 0xef, 0xde, 0xad, 0xbe, 0xef, 0xde, 0xad,
        0xbe, 0xef, 0xde, 0xad, 0xbe, 0xef, 0xde, 0xad, 0xbe, 0xef, 0xde, 0xad, 0xbe, 0xef,
        0xde, 0xad, 0xbe, 0xef,
    ];

    /// Recipient address and stealth outputs computed independently of this crate
    const RECIPIENT_ADDRESS: &str = "0xc96aaa54e2d44c299564da76e1cd3184a2386b8d";
    const TEST_STEALTH: &str = "0xda3d24a3661793d5f203c61a3648e22c5309b81b";
    const TEST_R_X: &str = "ab16b8c7fc1febb74ceedf1349944ffd4a04d11802451d02e808f08cb3b0c1c1";
    const TEST_R_Y: &str = "a9c4e1efb7d309a762baa4c9c8da08890b3b712d1666b5b630d6c6a09cbba171";
    const OTHER_STEALTH: &str = "0x253353d7a8d3a37500e5dc77ee35f4c5f2a7d543";

    fn reduce(bytes: &[u8; 32]) -> Scalar {
        <Scalar as Reduce<U256>>::reduce_bytes(&FieldBytes::clone_from_slice(bytes))
    }

    fn uncompressed(point: &ProjectivePoint) -> [u8; 64] {
        let encoded = point.to_affine().to_encoded_point(false);
        let mut out = [0u8; 64];
        out.copy_from_slice(&encoded.as_bytes()[1..]);
        out
    }

    fn address_of(point: &ProjectivePoint) -> Address {
        let digest = keccak256(&uncompressed(point));
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&digest[12..]);
        Address::from_bytes(bytes)
    }

    /// (stealth scalar c, stealth point Q) computed by hand
    fn expected(secret: &[u8]) -> (Scalar, ProjectivePoint) {
        let g = ProjectivePoint::GENERATOR;
        let P = g * reduce(&RECIPIENT_KEY);
        let r = reduce(&keccak256(secret));
        let S = P * r;
        let c = reduce(&keccak256(&uncompressed(&S)));
        (c, g * c + P)
    }

    fn registered_world(wallet: &WalletKey) -> StealthNft {
        let mut world = StealthNft::new();
        let key = *wallet.public_key();
        world.provide_public_key(wallet.address(), key.x, key.y).unwrap();
        world
    }

    /// Test Vector 1: well-known account addresses
    #[test]
    fn test_vector_1_known_addresses() {
        let cases = [
            (1u8, "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf"),
            (2u8, "0x2b5ad5c4795c026514f8317c7a215e218dccd6cf"),
            (3u8, "0x6813eb9362372eef6200f3b1dbc3f819671cba69"),
        ];

        for (scalar, address) in cases {
            let mut secret = [0u8; 32];
            secret[31] = scalar;
            let wallet = WalletKey::from_secret(&secret).unwrap();
            assert_eq!(wallet.address().to_string(), address, "private key {}", scalar);
        }
    }

    /// Test Vector 2: the "test" secret against the deadbeef recipient
    #[test]
    fn test_vector_2_deadbeef_test_secret() {
        let wallet = WalletKey::from_secret(&RECIPIENT_KEY).unwrap();
        let mut world = registered_world(&wallet);

        assert_eq!(wallet.address().to_string(), RECIPIENT_ADDRESS);

        let (_, Q) = expected(b"test");
        let minted = world.mint_stealthily(&wallet.address(), b"test").unwrap();

        assert_eq!(minted.stealth_address.to_string(), TEST_STEALTH);
        assert_eq!(hex::encode(minted.ephemeral.x), TEST_R_X);
        assert_eq!(hex::encode(minted.ephemeral.y), TEST_R_Y);

        assert_eq!(minted.stealth_address, address_of(&Q));
        assert_eq!(minted.token_id, TokenId(0));
        assert_eq!(world.owner_of(TokenId(0)).unwrap(), address_of(&Q));

        let R = ProjectivePoint::GENERATOR * reduce(&keccak256(b"test"));
        assert_eq!(
            [minted.ephemeral.x, minted.ephemeral.y].concat(),
            uncompressed(&R).to_vec()
        );
    }

    /// Test Vector 3: a second secret gives a different stealth owner
    #[test]
    fn test_vector_3_other_secret() {
        let wallet = WalletKey::from_secret(&RECIPIENT_KEY).unwrap();
        let mut world = registered_world(&wallet);

        let first = world.mint_stealthily(&wallet.address(), b"test").unwrap();
        let second = world.mint_stealthily(&wallet.address(), b"other").unwrap();

        let (_, Q) = expected(b"other");
        assert_eq!(second.stealth_address.to_string(), OTHER_STEALTH);
        assert_eq!(second.stealth_address, address_of(&Q));
        assert_eq!(second.token_id, TokenId(1));
        assert_ne!(first.stealth_address, second.stealth_address);
        assert_ne!(
            world.owner_of(first.token_id).unwrap(),
            world.owner_of(second.token_id).unwrap()
        );
    }

    /// Test Vector 4: the recovered private key is p + c
    #[test]
    fn test_vector_4_recovered_scalar() {
        let wallet = WalletKey::from_secret(&RECIPIENT_KEY).unwrap();
        let world = registered_world(&wallet);
        let derivation = world.get_stealth_address(&wallet.address(), b"test").unwrap();

        let key = wallet
            .scan(&derivation.ephemeral, &derivation.stealth_address)
            .unwrap();

        let (c, Q) = expected(b"test");
        let d = reduce(&RECIPIENT_KEY) + c;
        assert_eq!(key.secret_bytes().to_vec(), d.to_bytes().to_vec());
        assert_eq!(address_of(&(ProjectivePoint::GENERATOR * d)), address_of(&Q));
    }

    /// Test Vector 5: the whole secret is hashed, however long
    #[test]
    fn test_vector_5_long_secret() {
        let wallet = WalletKey::from_secret(&RECIPIENT_KEY).unwrap();
        let world = registered_world(&wallet);

        let long_a = [b'a'; 100];
        let mut long_b = long_a;
        long_b[99] = b'b';

        let a = world.get_stealth_address(&wallet.address(), &long_a).unwrap();
        let b = world.get_stealth_address(&wallet.address(), &long_b).unwrap();

        assert_eq!(a.stealth_address, address_of(&expected(&long_a).1));
        assert_ne!(a.stealth_address, b.stealth_address);
    }

    /// Test Vector 6: preview and mint agree
    #[test]
    fn test_vector_6_preview_matches_mint() {
        let wallet = WalletKey::from_secret(&RECIPIENT_KEY).unwrap();
        let mut world = registered_world(&wallet);

        let preview = world.get_stealth_address(&wallet.address(), b"test").unwrap();
        let minted = world.mint_stealthily(&wallet.address(), b"test").unwrap();

        assert_eq!(preview.stealth_address, minted.stealth_address);
        assert_eq!(preview.ephemeral, minted.ephemeral);
    }
}
