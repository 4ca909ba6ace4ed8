// src/benchmark/moduli.rs
//
// Synthetic RSA-style modulus generation for the benchmark suite. Each
// modulus is a product of two random probable primes; a configurable share
// of the batch reuses one common prime so the scan has something to find.

use num::bigint::RandBigInt;
use num::{BigInt, BigUint, Integer, One};
use rand::Rng;

use crate::core::num_list::NumList;

/// Miller–Rabin rounds per candidate. These primes only feed benchmarks,
/// so a modest count is plenty.
const MR_ROUNDS: usize = 20;

const SMALL_PRIMES: [u32; 24] = [
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// A generated batch plus how many of its moduli share the planted prime.
#[derive(Debug)]
pub struct SyntheticBatch {
    pub moduli: NumList,
    pub planted_weak: usize,
}

/// Generates `count` moduli of roughly `modulus_bits` bits each. The first
/// `round(count * shared_fraction)` moduli (at least two, when the fraction
/// is non-zero and the batch allows it) share one prime factor.
pub fn synthesize_batch<R: Rng>(
    rng: &mut R,
    count: usize,
    modulus_bits: u64,
    shared_fraction: f64,
) -> SyntheticBatch {
    let half_bits = (modulus_bits / 2).max(8);

    let mut planted = (count as f64 * shared_fraction).round() as usize;
    if planted == 1 {
        // A shared prime is only detectable in two or more moduli.
        planted = 2;
    }
    if count < 2 {
        planted = 0;
    }
    let planted = planted.min(count);

    let shared = if planted > 0 {
        Some(random_probable_prime(rng, half_bits))
    } else {
        None
    };

    let mut moduli = NumList::new();
    for i in 0..count {
        let p = match &shared {
            Some(s) if i < planted => s.clone(),
            _ => random_probable_prime(rng, half_bits),
        };
        let q = random_probable_prime(rng, half_bits);
        moduli.push(BigInt::from(p * q));
    }

    SyntheticBatch {
        moduli,
        planted_weak: planted,
    }
}

/// Generates a random probable prime of exactly `bits` bits (`bits >= 8`).
pub fn random_probable_prime<R: Rng>(rng: &mut R, bits: u64) -> BigUint {
    assert!(bits >= 8);
    loop {
        let mut candidate = rng.gen_biguint(bits);
        // Force the top bit for the exact length and the low bit for oddness.
        candidate.set_bit(bits - 1, true);
        candidate.set_bit(0, true);

        if small_prime_precheck(&candidate) && is_probable_prime(rng, &candidate) {
            return candidate;
        }
    }
}

fn small_prime_precheck(n: &BigUint) -> bool {
    for &p in SMALL_PRIMES.iter() {
        if n.is_multiple_of(&BigUint::from(p)) {
            return false;
        }
    }
    true
}

/// Miller–Rabin with random bases. `n` must be odd and above the small
/// primes table.
fn is_probable_prime<R: Rng>(rng: &mut R, n: &BigUint) -> bool {
    let one = BigUint::one();
    let two = &one + &one;
    let n_minus_one = n - &one;

    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for _ in 0..MR_ROUNDS {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = a.modpow(&d, n);
        if x == one || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
