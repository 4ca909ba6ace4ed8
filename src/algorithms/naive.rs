// src/algorithms/naive.rs
//
// Direct computation of the per-modulus GCD list, straight from the
// definition: gcd(N[i], product of all the other inputs). Quadratic in
// bignum work, which is exactly what the remainder tree exists to avoid;
// kept as the correctness oracle for tests and the baseline the benchmark
// suite compares against.

use num::{BigInt, Integer, One};
use rayon::prelude::*;

use crate::core::num_list::NumList;

/// The definitional GCD list. Output matches `batch_gcd` exactly.
pub fn reference_gcd_list(nlist: &NumList) -> NumList {
    if nlist.is_empty() {
        return NumList::new();
    }

    let mut product = BigInt::one();
    for n in nlist.iter() {
        product *= n;
    }

    let gcds: Vec<BigInt> = (0..nlist.len())
        .into_par_iter()
        .map(|i| {
            let rest = &product / &nlist[i];
            rest.gcd(&nlist[i])
        })
        .collect();

    NumList::from_vec(gcds)
}
