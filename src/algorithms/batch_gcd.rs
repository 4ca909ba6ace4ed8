// src/algorithms/batch_gcd.rs
//
// Bernstein's remainder-tree batch GCD. For every input modulus this
// computes gcd(N[i], product of all the other inputs) in O(n log² n)
// bignum operations instead of the O(n²) of a direct pairwise scan:
//
//     prods = producttree(N)
//     R = prods.top()
//     for each level X descending from the root:
//         R = [R[i / 2] mod X[i]² for i in range(len(X))]
//     return [gcd(r / n, n) for r, n in zip(R, N)]
//
// At the root R holds the full product P. Each sq_mod step maintains
// R[i] ≡ P (mod level[l][i]²), so at the leaves R[i] ≡ P (mod N[i]²),
// and gcd(R[i] / N[i], N[i]) = gcd(P / N[i], N[i]).

use log::debug;
use num::{BigInt, One};

use crate::algorithms::list_ops::{div_gcd, sq_mod};
use crate::algorithms::product_tree::ProductTree;
use crate::core::num_list::NumList;

/// Computes, for each input, the GCD with the product of all other inputs.
///
/// The result has the input's length; entry `i` equals one iff `nlist[i]`
/// is coprime to every other entry.
pub fn batch_gcd(nlist: &NumList) -> NumList {
    if nlist.is_empty() {
        return NumList::new();
    }
    if nlist.len() == 1 {
        // A lone modulus is coprime with the (empty) rest of the batch.
        let mut gcdlist = NumList::with_len(1);
        gcdlist[0] = BigInt::one();
        return gcdlist;
    }

    let tree = ProductTree::build(nlist);
    let height = tree.height();
    debug!(
        "remainder tree descent: {} moduli, tree height {}",
        nlist.len(),
        height
    );

    // The remainder baton. It starts as a borrow of the tree's top level;
    // each step produces the next list and drops the previous owned one.
    let mut remainder: Option<NumList> = None;
    for up in 2..=height {
        let x = tree.level(height - up);
        let mut next = NumList::with_len(x.len());
        match remainder.as_ref() {
            Some(r) => sq_mod(x, r, &mut next),
            None => sq_mod(x, tree.level(height - 1), &mut next),
        }
        remainder = Some(next);
    }

    let remainder = remainder.expect("descent runs at least once for n >= 2");
    let mut gcdlist = NumList::with_len(nlist.len());
    div_gcd(&mut gcdlist, &remainder, nlist);
    gcdlist
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(vals: &[u64]) -> NumList {
        NumList::from_vec(vals.iter().map(|&v| BigInt::from(v)).collect())
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(batch_gcd(&NumList::new()).is_empty());
    }

    #[test]
    fn test_single_modulus_is_coprime_with_rest() {
        let gcds = batch_gcd(&list_of(&[143]));
        assert_eq!(gcds.len(), 1);
        assert_eq!(gcds[0], BigInt::one());
    }

    #[test]
    fn test_shared_prime_pair() {
        // 35 = 5·7 and 77 = 7·11 share 7.
        let gcds = batch_gcd(&list_of(&[35, 77]));
        assert_eq!(gcds[0], BigInt::from(7));
        assert_eq!(gcds[1], BigInt::from(7));
    }

    #[test]
    fn test_mixed_batch() {
        // 15 = 3·5 is coprime to the rest; 77 = 7·11 and 143 = 11·13
        // share 11.
        let gcds = batch_gcd(&list_of(&[15, 77, 143]));
        assert_eq!(gcds[0], BigInt::one());
        assert_eq!(gcds[1], BigInt::from(11));
        assert_eq!(gcds[2], BigInt::from(11));
    }

    #[test]
    fn test_duplicate_modulus_shares_everything() {
        let gcds = batch_gcd(&list_of(&[21, 21]));
        assert_eq!(gcds[0], BigInt::from(21));
        assert_eq!(gcds[1], BigInt::from(21));
    }

    #[test]
    fn test_all_coprime_primes() {
        let gcds = batch_gcd(&list_of(&[3, 5, 7, 11, 13]));
        for i in 0..5 {
            assert_eq!(gcds[i], BigInt::one(), "index {}", i);
        }
    }
}
