// tests/ingest_tests.rs
//
// Ingestion-to-scan integration: hex parsing feeds the pipeline directly.

use batch_gcd::algorithms;
use batch_gcd::core::ingest::read_moduli;
use num::{BigInt, One};
use std::io::Cursor;

#[cfg(test)]
mod ingest_tests {
    use super::*;

    #[test]
    fn test_hex_stream_to_scan() {
        // 0x23 = 35 = 5·7 and 0x4d = 77 = 7·11 share a factor.
        let input = "23\n4d\n";
        let ingest = read_moduli(Cursor::new(input)).unwrap();
        assert_eq!(ingest.accepted, 2);

        let outcome = algorithms::scan(&ingest.moduli);
        assert_eq!(outcome.gcds[0], BigInt::from(7));
        assert_eq!(outcome.resolution.cofactors[0], BigInt::from(5));
        assert_eq!(outcome.resolution.cofactors[1], BigInt::from(7));
    }

    #[test]
    fn test_bad_entry_skipped_scan_continues() {
        let input = "not-hex\n23\n4d\n";
        let ingest = read_moduli(Cursor::new(input)).unwrap();
        assert_eq!(ingest.accepted, 2);
        assert_eq!(ingest.skipped, 1);

        let outcome = algorithms::scan(&ingest.moduli);
        assert_eq!(outcome.resolution.weak_count(), 2);
    }

    #[test]
    fn test_realistic_modulus_lengths() {
        // Mersenne primes keep the arithmetic exact at real key sizes:
        // two moduli share the 127-bit prime, the third is coprime.
        let p = BigInt::parse_bytes(b"170141183460469231731687303715884105727", 10).unwrap();
        let q1 = BigInt::parse_bytes(b"618970019642690137449562111", 10).unwrap();
        let q2 = BigInt::parse_bytes(b"162259276829213363391578010288127", 10).unwrap();
        let other = BigInt::parse_bytes(b"2305843009213693951", 10).unwrap();

        let n1 = &p * &q1;
        let n2 = &p * &q2;
        let n3 = &other * &other;

        let input = format!("{:x}\n{:x}\n{:x}\n", n1, n2, n3);
        let ingest = read_moduli(Cursor::new(input)).unwrap();
        assert_eq!(ingest.accepted, 3);

        let outcome = algorithms::scan(&ingest.moduli);
        assert_eq!(outcome.gcds[0], p);
        assert_eq!(outcome.gcds[1], p);
        assert!(outcome.gcds[2].is_one());

        // The reported co-factor is the smaller prime of each weak modulus.
        assert_eq!(outcome.resolution.cofactors[0], q1);
        assert_eq!(outcome.resolution.cofactors[1], q2);
        assert_eq!(outcome.resolution.cofactors[2], n3);
    }
}
