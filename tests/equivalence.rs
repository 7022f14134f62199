//! Randomized cross-checks between the two distance variants.

use rand::{rngs::StdRng, Rng, SeedableRng};

use editdistance::{levenshtein_matrix, levenshtein_rolling};

/// Random lowercase word over a small alphabet so collisions and partial
/// matches actually occur.
fn random_word(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| rng.gen_range(b'a'..=b'e') as char).collect()
}

#[test]
fn variants_agree_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let a = random_word(&mut rng, 12);
        let b = random_word(&mut rng, 12);
        assert_eq!(
            levenshtein_matrix(&a, &b),
            levenshtein_rolling(&a, &b),
            "variants disagree on ({a:?}, {b:?})"
        );
    }
}

#[test]
fn distance_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let a = random_word(&mut rng, 10);
        let b = random_word(&mut rng, 10);
        assert_eq!(levenshtein_matrix(&a, &b), levenshtein_matrix(&b, &a));
        assert_eq!(levenshtein_rolling(&a, &b), levenshtein_rolling(&b, &a));
    }
}

#[test]
fn distance_to_self_is_zero() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..100 {
        let a = random_word(&mut rng, 16);
        assert_eq!(levenshtein_matrix(&a, &a), 0);
        assert_eq!(levenshtein_rolling(&a, &a), 0);
    }
}

#[test]
fn distance_to_empty_is_length() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        let a = random_word(&mut rng, 16);
        let len = a.chars().count();
        assert_eq!(levenshtein_matrix(&a, ""), len);
        assert_eq!(levenshtein_matrix("", &a), len);
        assert_eq!(levenshtein_rolling(&a, ""), len);
        assert_eq!(levenshtein_rolling("", &a), len);
    }
}

#[test]
fn triangle_inequality_holds() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..200 {
        let a = random_word(&mut rng, 10);
        let b = random_word(&mut rng, 10);
        let c = random_word(&mut rng, 10);
        let ab = levenshtein_rolling(&a, &b);
        let bc = levenshtein_rolling(&b, &c);
        let ac = levenshtein_rolling(&a, &c);
        assert!(
            ac <= ab + bc,
            "triangle bound violated: d({a:?},{c:?})={ac} > {ab} + {bc}"
        );
    }
}
