// src/algorithms/coprime_resolver.rs
//
// Post-processing for the batch-GCD output: turn each non-trivial GCD into
// the smallest non-trivial co-factor of its modulus. A GCD strictly between
// one and the modulus already splits it. A GCD equal to the modulus means
// every prime of that modulus appears elsewhere in the batch, and a direct
// pairwise pass over the weak moduli is needed to separate the factors.

use log::info;
use num::{BigInt, Integer, One};

use crate::core::num_list::NumList;

/// Co-factor list plus the resolution counts surfaced to the caller.
///
/// `cofactors[i]` is the modulus itself when it is coprime to the rest of
/// the batch, the smaller of the two factors found when it could be split,
/// and zero when it shares all of its primes with the batch and no pair
/// produced a proper divisor.
#[derive(Debug)]
pub struct ResolveOutcome {
    pub cofactors: NumList,
    pub weak: Vec<usize>,
    pub needs_pairwise: usize,
    pub pairwise_resolved: usize,
}

impl ResolveOutcome {
    pub fn weak_count(&self) -> usize {
        self.weak.len()
    }

    /// Weak moduli that could not be split even by the pairwise pass.
    pub fn still_unresolved(&self) -> usize {
        self.needs_pairwise - self.pairwise_resolved
    }
}

fn smaller_cofactor(modulus: &BigInt, divisor: &BigInt) -> BigInt {
    let q = modulus / divisor;
    if *divisor < q {
        divisor.clone()
    } else {
        q
    }
}

/// Derives the smallest non-trivial co-factor for every weak modulus.
///
/// `gcdlist` is the batch-GCD output for `nlist`. Indices with a GCD of one
/// keep their modulus as the "co-factor" (nothing to split). Indices whose
/// GCD properly divides the modulus are split immediately. Indices whose
/// GCD equals the modulus are retried against every other weak modulus,
/// stopping at the first pair that yields a proper divisor.
pub fn resolve(nlist: &NumList, gcdlist: &NumList) -> ResolveOutcome {
    assert_eq!(nlist.len(), gcdlist.len());

    let one = BigInt::one();
    let mut cofactors = NumList::with_len(nlist.len());
    let mut weak: Vec<usize> = Vec::new();
    let mut pending: Vec<usize> = Vec::new();

    for i in 0..nlist.len() {
        if gcdlist[i] == one {
            // Coprime with every other modulus; standing alone its smallest
            // non-trivial factor is itself.
            cofactors[i] = nlist[i].clone();
            continue;
        }

        weak.push(i);
        if gcdlist[i] != nlist[i] {
            cofactors[i] = smaller_cofactor(&nlist[i], &gcdlist[i]);
        } else {
            // Shares all of its primes with other moduli; needs the
            // pairwise pass to separate a single factor out.
            pending.push(i);
        }
    }

    info!("Found {} weak moduli out of {}.", weak.len(), nlist.len());
    info!(
        "Still need to perform GCD co-factoring on {} weak moduli.",
        pending.len()
    );
    info!(
        "Work still to do: O({} * {}) == O({})",
        weak.len(),
        pending.len(),
        weak.len() * pending.len()
    );

    let mut pairwise_resolved = 0;
    for &ig in &pending {
        for &iw in &weak {
            if iw == ig {
                continue;
            }

            let g = nlist[iw].gcd(&nlist[ig]);
            if g != one && g != nlist[ig] {
                cofactors[ig] = smaller_cofactor(&nlist[ig], &g);
                pairwise_resolved += 1;
                break;
            }
        }
        // No pair split this modulus: its co-factor stays zero and the
        // caller sees it in the unresolved count.
    }

    info!(
        "Further found co-factors for {} weak moduli.",
        pairwise_resolved
    );

    ResolveOutcome {
        cofactors,
        weak,
        needs_pairwise: pending.len(),
        pairwise_resolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::batch_gcd::batch_gcd;

    fn list_of(vals: &[u64]) -> NumList {
        NumList::from_vec(vals.iter().map(|&v| BigInt::from(v)).collect())
    }

    #[test]
    fn test_coprime_modulus_keeps_itself() {
        let nlist = list_of(&[15, 77, 143]);
        let gcds = batch_gcd(&nlist);
        let outcome = resolve(&nlist, &gcds);
        assert_eq!(outcome.cofactors[0], BigInt::from(15));
        assert_eq!(outcome.weak, vec![1, 2]);
    }

    #[test]
    fn test_split_takes_smaller_factor() {
        // 35 = 5·7 with gcd 7 splits as min(7, 5) = 5;
        // 77 = 7·11 with gcd 7 splits as min(7, 11) = 7.
        let nlist = list_of(&[35, 77]);
        let gcds = batch_gcd(&nlist);
        let outcome = resolve(&nlist, &gcds);
        assert_eq!(outcome.cofactors[0], BigInt::from(5));
        assert_eq!(outcome.cofactors[1], BigInt::from(7));
        assert_eq!(outcome.weak_count(), 2);
        assert_eq!(outcome.needs_pairwise, 0);
    }

    #[test]
    fn test_pairwise_pass_splits_full_gcds() {
        // 15 = 3·5, 21 = 3·7, 35 = 5·7: every modulus shares all of its
        // primes with the other two, so all three need the pairwise pass.
        let nlist = list_of(&[15, 21, 35]);
        let gcds = batch_gcd(&nlist);
        let outcome = resolve(&nlist, &gcds);
        assert_eq!(outcome.needs_pairwise, 3);
        assert_eq!(outcome.pairwise_resolved, 3);
        assert_eq!(outcome.cofactors[0], BigInt::from(3));
        assert_eq!(outcome.cofactors[1], BigInt::from(3));
        assert_eq!(outcome.cofactors[2], BigInt::from(5));
    }

    #[test]
    fn test_unresolvable_duplicates_stay_zero() {
        let nlist = list_of(&[21, 21]);
        let gcds = batch_gcd(&nlist);
        let outcome = resolve(&nlist, &gcds);
        assert_eq!(outcome.needs_pairwise, 2);
        assert_eq!(outcome.pairwise_resolved, 0);
        assert_eq!(outcome.still_unresolved(), 2);
        assert_eq!(outcome.cofactors[0], BigInt::from(0));
        assert_eq!(outcome.cofactors[1], BigInt::from(0));
    }
}
