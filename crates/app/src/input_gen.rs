//! Sample text generation for zero-argument runs.
//!
//! When no input is specified in info mode, we generate text with a skewed
//! letter distribution so the entropy tables and code lengths come out
//! visibly non-uniform, which is the interesting case for a teaching tool.
//!
//! # Design
//!
//! Letters are drawn from a weighted pool approximating English letter
//! frequency, with spaces mixed in for readability (the frequency extractor
//! discards them anyway). All randomness comes from a seeded ChaCha8 RNG,
//! so a given seed always produces the same text.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Weighted letter pool: high-frequency English letters appear more often.
const POOL: &[u8] = b"EEEEEEEEEEEETTTTTTTTTAAAAAAAAOOOOOOOIIIIIIINNNNNNNSSSSSSHHHHHHRRRRRDDDDLLLLUUUCCCMMMWWFFGGYYPPBBVKJXQZ      ";

/// Generate sample text of exactly `chars` characters.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `chars`: length of the generated text
pub fn generate_sample_text(seed: u64, chars: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut text = String::with_capacity(chars);

    for _ in 0..chars {
        let idx = rng.gen_range(0..POOL.len());
        text.push(POOL[idx] as char);
    }

    text
}
