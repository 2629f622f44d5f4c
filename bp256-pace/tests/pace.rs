//! PACE generic mapping tests.

use bp256_pace::{CurveGroup, CurvePoint, Error, PointEncoding, PrivateKey, PublicKey, pace};
use hex_literal::hex;
use proptest::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

const NONCE: [u8; 16] = hex!("A44248628B8E8B94072EF3843C56E844");

const OWN_KEY1: [u8; 32] =
    hex!("0D7DFFAC3558C4C3C075A0479F4C3A4864DBD8E686CDB154DD0BDD0BA7CE4D51");

const PEER_KEY1: [u8; 65] = hex!(
    "045CAC41779F548CBE714A08CBCEB40F616B5EFDD59DD3345802027DCB0C3FB02B
       20DC7A458B7744102DE98D350D4399FEC0F8CC5CCE50317A2CEE3CB418A4DA41"
);

const KEY2: [u8; 32] = hex!("4C164B01D17B7C097B3640AF1EBCE0C88ED4B57738803872EEC3261EBB9A89E7");

const MAPPED_GENERATOR: [u8; 65] = hex!(
    "04A651AC6CBF8CBFDF4CDF1D1A3C9AB2FD6066B7061A08CACFC0B26A1F35C8F71F
       4BF1C29B0D9F2A8D8930BC55954C1939A17B94887DF45557CD212612ACA759F3"
);

const PUBLIC_KEY2: [u8; 65] = hex!(
    "04A1D37688F62647E4B7CCEB64881142EEEC48FCF148BA2B518E3246166EF8495C
       81D0644A59DD6927E7492A4BD52926957450BEDED208B2E616D03D9504F9FE12"
);

#[test]
fn mapped_generator() {
    let own_key1 = PrivateKey::from_raw(&OWN_KEY1).unwrap();
    let peer_key1 = PublicKey::from_x962(&PEER_KEY1).unwrap();

    let generator = pace::ephemeral_generator(&NONCE, &own_key1, &peer_key1).unwrap();
    assert_eq!(
        generator.encode(PointEncoding::Uncompressed).unwrap(),
        MAPPED_GENERATOR
    );
}

#[test]
fn map_nonce_with_fixed_key() {
    let own_key1 = PrivateKey::from_raw(&OWN_KEY1).unwrap();
    let peer_key1 = PublicKey::from_x962(&PEER_KEY1).unwrap();

    let (public_key2, private_key2) = own_key1
        .pace_map_nonce_with(&NONCE, &peer_key1, || PrivateKey::from_raw(&KEY2))
        .unwrap();

    assert_eq!(public_key2.x962_value(), PUBLIC_KEY2);
    assert_eq!(private_key2.to_raw().as_slice(), &KEY2);
}

#[test]
fn key_generator_errors_propagate() {
    let own_key1 = PrivateKey::from_raw(&OWN_KEY1).unwrap();
    let peer_key1 = PublicKey::from_x962(&PEER_KEY1).unwrap();

    let result = pace::map_nonce_with(&NONCE, &own_key1, &peer_key1, || {
        Err(Error::GenerationFailure)
    });
    assert_eq!(result.unwrap_err(), Error::GenerationFailure);
}

#[test]
fn second_key_pair_requires_generator_on_curve() {
    let mut off_curve = MAPPED_GENERATOR;
    off_curve[64] ^= 0x01;
    let generator = CurvePoint::decode(&off_curve, CurveGroup::brainpool_p256r1()).unwrap();

    let mut generated = false;
    let result = pace::derive_second_key_pair(&generator, || {
        generated = true;
        PrivateKey::from_raw(&KEY2)
    });
    assert_eq!(result.unwrap_err(), Error::PointNotOnCurve);
    assert!(!generated);

    let result =
        pace::derive_second_key_pair(&CurvePoint::identity(), || PrivateKey::from_raw(&KEY2));
    assert_eq!(result.unwrap_err(), Error::PointNotOnCurve);
}

#[test]
fn empty_nonce_is_rejected() {
    let own_key1 = PrivateKey::from_raw(&OWN_KEY1).unwrap();
    let peer_key1 = PublicKey::from_x962(&PEER_KEY1).unwrap();

    assert_eq!(
        pace::ephemeral_generator(&[], &own_key1, &peer_key1).unwrap_err(),
        Error::InvalidNonceEncoding
    );
}

#[test]
fn leading_zeros_in_nonce_are_insignificant() {
    let own_key1 = PrivateKey::from_raw(&OWN_KEY1).unwrap();
    let peer_key1 = PublicKey::from_x962(&PEER_KEY1).unwrap();

    let mut padded = [0u8; 20];
    padded[4..].copy_from_slice(&NONCE);

    assert_eq!(
        pace::ephemeral_generator(&padded, &own_key1, &peer_key1).unwrap(),
        pace::ephemeral_generator(&NONCE, &own_key1, &peer_key1).unwrap()
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn both_parties_share_generator(seed in any::<[u8; 32]>(), nonce in any::<[u8; 16]>()) {
        let mut rng = ChaCha8Rng::from_seed(seed);
        let chip = PrivateKey::generate(&mut rng, false).unwrap();
        let terminal = PrivateKey::generate(&mut rng, false).unwrap();

        let g_chip = pace::ephemeral_generator(&nonce, &chip, terminal.public_key()).unwrap();
        let g_terminal = pace::ephemeral_generator(&nonce, &terminal, chip.public_key()).unwrap();
        prop_assert_eq!(g_chip, g_terminal);

        // the second exchange on the mapped domain agrees as well
        let (chip_pk2, chip_sk2) = chip.pace_map_nonce(&mut rng, &nonce, terminal.public_key()).unwrap();
        let (terminal_pk2, terminal_sk2) =
            terminal.pace_map_nonce(&mut rng, &nonce, chip.public_key()).unwrap();

        prop_assert_eq!(
            chip_sk2.multiply(terminal_pk2.point()).unwrap(),
            terminal_sk2.multiply(chip_pk2.point()).unwrap()
        );
    }

    #[test]
    fn mapping_is_deterministic(seed in any::<[u8; 32]>()) {
        let own_key1 = PrivateKey::from_raw(&OWN_KEY1).unwrap();
        let peer_key1 = PublicKey::from_x962(&PEER_KEY1).unwrap();

        let a = pace::map_nonce(&mut ChaCha8Rng::from_seed(seed), &NONCE, &own_key1, &peer_key1).unwrap();
        let b = pace::map_nonce(&mut ChaCha8Rng::from_seed(seed), &NONCE, &own_key1, &peer_key1).unwrap();
        prop_assert_eq!(a.0, b.0);
        prop_assert_eq!(a.1, b.1);
    }
}
