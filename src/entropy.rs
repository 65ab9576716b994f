//! Shannon entropy of a symbol sequence.
//!
//! ```text
//! H = sum over symbols s of  p(s) * log2(1 / p(s)),   p(s) = count(s) / len
//! ```
//!
//! `H` is the lower bound, in bits per symbol, for any code that only looks at
//! single-symbol frequencies. Comparing it with
//! [`EncodedDocument::average_bits`](crate::codec::EncodedDocument::average_bits)
//! shows how far gamma rank coding is from that bound. Nothing in the codec
//! depends on it.

use crate::error::{Error, Result};
use crate::frequency::{FrequencyTable, Symbol};

impl<S: Symbol> FrequencyTable<S> {
    /// Entropy of the distribution this table was counted from.
    ///
    /// Symbols are visited in rank order so the floating point sum is the
    /// same on every run.
    pub fn entropy(&self) -> f64 {
        let total = self.total() as f64;
        self.alphabet()
            .iter()
            .map(|s| {
                let p = self.count(s) as f64 / total;
                p * (1.0 / p).log2()
            })
            .sum()
    }
}

/// Entropy of `symbols` in bits per symbol.
///
/// # Errors
/// Returns `Error::UndefinedMeasure` if `symbols` is empty.
pub fn entropy<S: Symbol>(symbols: &[S]) -> Result<f64> {
    if symbols.is_empty() {
        return Err(Error::UndefinedMeasure);
    }
    Ok(FrequencyTable::from_symbols(symbols)?.entropy())
}

/// Entropy of a string, one symbol per `char`.
///
/// # Errors
/// Returns `Error::UndefinedMeasure` if `text` is empty.
pub fn text_entropy(text: &str) -> Result<f64> {
    let symbols: Vec<char> = text.chars().collect();
    entropy(&symbols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_symbol_has_zero_entropy() {
        assert_eq!(text_entropy("aaaa").unwrap(), 0.0);
    }

    #[test]
    fn test_empty_is_undefined() {
        assert_eq!(text_entropy(""), Err(Error::UndefinedMeasure));
        assert_eq!(entropy::<u8>(&[]), Err(Error::UndefinedMeasure));
    }

    #[test]
    fn test_known_values() {
        assert_eq!(text_entropy("ab").unwrap(), 1.0);
        assert_eq!("0.81", format!("{:.2}", text_entropy("aaab").unwrap()));
        assert_eq!("1.57", format!("{:.2}", entropy(&[0, 0, 0, 1, 1, 1, 2, 2, 2, 2]).unwrap()));
        assert_eq!(
            "3.30",
            format!("{:.2}", text_entropy("Ala ma kota, a to lis!").unwrap())
        );
    }

    #[test]
    fn test_table_and_free_function_agree() {
        let text: Vec<char> = "the quick brown fox jumps over the lazy dog".chars().collect();
        let table = FrequencyTable::from_symbols(&text).unwrap();
        assert_eq!(table.entropy(), entropy(&text).unwrap());
    }

    proptest! {
        #[test]
        fn prop_uniform_distribution_is_log2_n(n in 1usize..64, reps in 1usize..8) {
            let symbols: Vec<usize> = (0..reps).flat_map(|_| 0..n).collect();
            let h = entropy(&symbols).unwrap();
            prop_assert!((h - (n as f64).log2()).abs() < 1e-9);
        }

        #[test]
        fn prop_entropy_is_bounded(input in prop::collection::vec(any::<u8>(), 1..300)) {
            let table = FrequencyTable::from_symbols(&input).unwrap();
            let h = table.entropy();
            prop_assert!(h >= 0.0);
            prop_assert!(h <= (table.len() as f64).log2() + 1e-9);
        }
    }
}
