use rand::rngs::StdRng;
use rand::SeedableRng;

use mindlens_booking::confirmation::{confirmation_id, ALPHABET};

#[test]
fn ids_carry_the_brand_prefix_and_six_characters() {
    let mut rng = StdRng::seed_from_u64(7);
    let id = confirmation_id(&mut rng);
    assert!(id.starts_with("ML-"));
    assert_eq!(id.len(), 9);
}

#[test]
fn ids_draw_only_from_the_unambiguous_alphabet() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let id = confirmation_id(&mut rng);
        for c in id["ML-".len()..].chars() {
            assert!(ALPHABET.contains(c), "unexpected character {c} in {id}");
        }
    }
}

#[test]
fn the_alphabet_omits_lookalike_glyphs() {
    for banned in ['I', 'O', '0', '1'] {
        assert!(!ALPHABET.contains(banned));
    }
    assert_eq!(ALPHABET.len(), 32);
}

#[test]
fn seeded_rngs_reproduce_the_same_id() {
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    assert_eq!(confirmation_id(&mut a), confirmation_id(&mut b));
}
