// src/core/ingest.rs

use log::warn;
use num::bigint::Sign;
use num::{BigInt, Num, Zero};
use std::io::BufRead;

use crate::core::num_list::NumList;

/// Result of reading a modulus stream: the accepted moduli plus counts for
/// the summary diagnostics. `skipped` counts tokens that were not valid hex
/// at all; `rejected` counts well-formed integers turned away for their
/// value (zero or negative).
#[derive(Debug)]
pub struct IngestOutcome {
    pub moduli: NumList,
    pub accepted: usize,
    pub skipped: usize,
    pub rejected: usize,
}

/// Reads whitespace-separated hexadecimal moduli from `reader`.
///
/// Each token is parsed as a hex integer. A token that fails to parse is a
/// format error, reported with its 1-based line number and skipped;
/// processing continues with the next token. A token that parses to zero or
/// to a negative value is not a format error: it is reported under its own
/// diagnostic and counted separately. Zero is turned away up front because
/// a zero modulus would poison every product above it in the tree and break
/// the exact divisions of the descent. EOF terminates ingestion cleanly.
pub fn read_moduli<R: BufRead>(reader: R) -> std::io::Result<IngestOutcome> {
    let mut moduli = NumList::new();
    let mut skipped = 0;
    let mut rejected = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            match BigInt::from_str_radix(token, 16) {
                Ok(n) => {
                    if n.is_zero() {
                        warn!("Zero modulus input on line {} skipped", idx + 1);
                        rejected += 1;
                    } else if n.sign() == Sign::Minus {
                        warn!("Negative modulus input on line {} skipped", idx + 1);
                        rejected += 1;
                    } else {
                        moduli.push(n);
                    }
                }
                Err(_) => {
                    warn!("Invalid modulus input on line {}", idx + 1);
                    skipped += 1;
                }
            }
        }
    }

    let accepted = moduli.len();
    Ok(IngestOutcome {
        moduli,
        accepted,
        skipped,
        rejected,
    })
}
