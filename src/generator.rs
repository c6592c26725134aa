//! Random password generation.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use secrecy::SecretString;

use crate::alphabet::ALPHABET;

/// Shortest password [`generate_password`] produces.
pub const MIN_LENGTH: usize = 12;
/// Longest password [`generate_password`] produces.
pub const MAX_LENGTH: usize = 18;

/// Generates a password of 12 to 18 characters drawn uniformly from [`ALPHABET`].
///
/// Both the length and every character come from the operating system's
/// CSPRNG. Characters are drawn independently, so a result may lack one of
/// the character classes.
pub fn generate_password() -> SecretString {
    generate_with(&mut OsRng)
}

fn generate_with<R>(rng: &mut R) -> SecretString
where
    R: Rng + CryptoRng,
{
    let alphabet = ALPHABET.as_bytes();
    let len = rng.gen_range(MIN_LENGTH..=MAX_LENGTH);

    #[cfg(feature = "tracing")]
    tracing::debug!("generating password of {} characters", len);

    let password: String = (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect();
    SecretString::new(password.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use secrecy::ExposeSecret;
    use std::collections::{HashMap, HashSet};

    fn assert_crypto_rng<R: CryptoRng>(_: &R) {}

    #[test]
    fn test_source_is_cryptographic() {
        // OsRng carries no seed state; only CryptoRng sources are accepted by generate_with.
        assert_crypto_rng(&OsRng);
        assert_eq!(std::mem::size_of::<OsRng>(), 0);
    }

    #[test]
    fn test_generate_length_bounds() {
        for _ in 0..500 {
            let pwd = generate_password();
            let len = pwd.expose_secret().chars().count();
            assert!(
                (MIN_LENGTH..=MAX_LENGTH).contains(&len),
                "length {} out of bounds",
                len
            );
        }
    }

    #[test]
    fn test_generate_alphabet_containment() {
        for _ in 0..500 {
            let pwd = generate_password();
            assert!(pwd.expose_secret().chars().all(|c| ALPHABET.contains(c)));
        }
    }

    #[test]
    fn test_generate_is_not_repeatable() {
        let generated: HashSet<String> = (0..1000)
            .map(|_| generate_password().expose_secret().to_string())
            .collect();
        assert_eq!(generated.len(), 1000);
    }

    #[test]
    fn test_generate_covers_every_length() {
        let mut rng = StdRng::seed_from_u64(7);
        let lengths: HashSet<usize> = (0..2000)
            .map(|_| generate_with(&mut rng).expose_secret().len())
            .collect();
        let expected: HashSet<usize> = (MIN_LENGTH..=MAX_LENGTH).collect();
        assert_eq!(lengths, expected);
    }

    #[test]
    fn test_generate_uses_whole_alphabet() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<char, usize> = HashMap::new();
        for _ in 0..3000 {
            for c in generate_with(&mut rng).expose_secret().chars() {
                *counts.entry(c).or_default() += 1;
            }
        }
        // ~45k draws over 90 symbols: each should land near 500.
        assert_eq!(counts.len(), ALPHABET.len());
        for (c, n) in counts {
            assert!((300..=700).contains(&n), "char {:?} drawn {} times", c, n);
        }
    }
}
