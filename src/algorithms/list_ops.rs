// src/algorithms/list_ops.rs
//
// The three data-parallel kernels the batch-GCD pipeline is built from.
// Each kernel fans out elementwise work across the rayon pool and joins
// before returning; within a kernel every output index is written by exactly
// one worker and no output aliases an input, so no locking is needed.

use num::{BigInt, Integer};
use rayon::prelude::*;

use crate::core::num_list::NumList;

/// Pairwise product: `dst[i] = src[2i] * src[2i+1]`.
///
/// Requires `dst.len() == ceil(src.len() / 2) >= 1`. Only the interior
/// indices are scheduled across workers; the trailing slot is filled after
/// the parallel pass because its rule depends on the source parity: an even
/// source pairs its last two elements, an odd source propagates its last
/// element unchanged.
pub fn pair_mul(dst: &mut NumList, src: &NumList) {
    assert!(!dst.is_empty());
    assert_eq!(dst.len(), (src.len() + 1) / 2);

    let last = dst.len() - 1;
    let (interior, tail) = dst.as_mut_slice().split_at_mut(last);

    interior
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, d)| *d = &src[2 * i] * &src[2 * i + 1]);

    if src.len() % 2 == 0 {
        tail[0] = &src[src.len() - 1] * &src[src.len() - 2];
    } else {
        tail[0] = src[src.len() - 1].clone();
    }
}

/// Squared-modulus reduction: `nr[i] = r[i / 2] mod x[i]²`.
///
/// Requires `nr.len() == x.len()` and `r.len() == ceil(x.len() / 2)`. The
/// `i / 2` mapping hands each element the remainder computed for its parent
/// node one level up; this is the remainder-tree step. The squaring scratch
/// lives inside the worker closure, never shared across threads.
pub fn sq_mod(x: &NumList, r: &NumList, nr: &mut NumList) {
    assert_eq!(nr.len(), x.len());
    assert_eq!(r.len(), (x.len() + 1) / 2);

    nr.as_mut_slice()
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, out)| {
            let sq = &x[i] * &x[i];
            *out = &r[i / 2] % &sq;
        });
}

/// Divide-then-gcd: `g[i] = gcd(r[i] / n[i], n[i])`.
///
/// Requires equal lengths. The division is exact by construction: the caller
/// guarantees `n[i]` divides `r[i]` (each leaf remainder is `P mod n[i]²`
/// where `n[i]` divides `P`).
pub fn div_gcd(g: &mut NumList, r: &NumList, n: &NumList) {
    assert_eq!(g.len(), r.len());
    assert_eq!(g.len(), n.len());

    g.as_mut_slice()
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, out)| {
            let d = &r[i] / &n[i];
            *out = d.gcd(&n[i]);
        });
}
