//! Frequency tables and rank-ordered alphabets.
//!
//! Ranking sorts the distinct symbols of an input by descending count, with
//! ties broken by ascending symbol order, so the same input always yields the
//! same alphabet. The most frequent symbol gets rank 1 and therefore the
//! shortest gamma code.

use std::fmt;
use std::hash::Hash;

use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

/// Inputs at least this long are counted in parallel.
pub const PARALLEL_THRESHOLD: usize = 64_000;

/// Chunk size for parallel counting.
const CHUNK_SIZE: usize = 16_000;

/// Anything that can be ranked: copyable, totally ordered, hashable.
pub trait Symbol: Copy + Ord + Hash + Send + Sync {}

impl<T: Copy + Ord + Hash + Send + Sync> Symbol for T {}

/// Occurrence counts of each distinct symbol in an input.
#[derive(Clone, Debug)]
pub struct FrequencyTable<S: Symbol> {
    counts: FxHashMap<S, u64>,
    total: u64,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Count the symbols of `symbols`.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if `symbols` is empty.
    pub fn from_symbols(symbols: &[S]) -> Result<Self> {
        if symbols.is_empty() {
            return Err(Error::InvalidInput("cannot rank an empty sequence"));
        }

        let counts = if symbols.len() >= PARALLEL_THRESHOLD {
            count_parallel(symbols)
        } else {
            count_serial(symbols)
        };

        Ok(Self {
            counts,
            total: symbols.len() as u64,
        })
    }

    /// Occurrences of `symbol`, 0 if it never occurs.
    pub fn count(&self, symbol: &S) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// Total number of occurrences (the input length).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Always false for a table built from a non-empty input.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(symbol, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (S, u64)> + '_ {
        self.counts.iter().map(|(&s, &c)| (s, c))
    }

    /// Distinct symbols sorted by count descending, then symbol ascending.
    pub fn alphabet(&self) -> Alphabet<S> {
        let mut ranked: Vec<(S, u64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Alphabet::from_ranked(ranked.into_iter().map(|(s, _)| s).collect())
    }
}

fn count_serial<S: Symbol>(symbols: &[S]) -> FxHashMap<S, u64> {
    let mut counts = FxHashMap::default();
    symbols
        .iter()
        .for_each(|&s| *counts.entry(s).or_insert(0) += 1);
    counts
}

fn count_parallel<S: Symbol>(symbols: &[S]) -> FxHashMap<S, u64> {
    symbols
        .par_chunks(CHUNK_SIZE)
        .fold(FxHashMap::default, |mut counts, chunk| {
            chunk.iter().for_each(|&s| *counts.entry(s).or_insert(0) += 1);
            counts
        })
        .reduce(FxHashMap::default, |mut a, b| {
            for (s, c) in b {
                *a.entry(s).or_insert(0) += c;
            }
            a
        })
}

/// Distinct symbols in rank order. Rank `r` (1-based) is `symbols[r - 1]`.
///
/// The alphabet is the only key for decoding, so it travels with the
/// codewords in [`EncodedDocument`](crate::codec::EncodedDocument).
#[derive(Clone)]
pub struct Alphabet<S: Symbol> {
    symbols: Vec<S>,
    ranks: FxHashMap<S, u64>,
}

impl<S: Symbol> Alphabet<S> {
    /// Build an alphabet from symbols already in rank order, e.g. one
    /// received alongside a list of codewords.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if `symbols` is empty or has duplicates.
    pub fn from_symbols(symbols: Vec<S>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(Error::InvalidInput("alphabet must not be empty"));
        }
        let alphabet = Self::from_ranked(symbols);
        if alphabet.ranks.len() != alphabet.symbols.len() {
            return Err(Error::InvalidInput("alphabet has duplicate symbols"));
        }
        Ok(alphabet)
    }

    fn from_ranked(symbols: Vec<S>) -> Self {
        let ranks = symbols
            .iter()
            .enumerate()
            .map(|(i, &s)| (s, i as u64 + 1))
            .collect();
        Self { symbols, ranks }
    }

    /// 1-based rank of `symbol`, if it is in the alphabet.
    pub fn rank(&self, symbol: &S) -> Option<u64> {
        self.ranks.get(symbol).copied()
    }

    /// Symbol with the given 1-based rank.
    pub fn symbol(&self, rank: u64) -> Option<S> {
        let idx = usize::try_from(rank.checked_sub(1)?).ok()?;
        self.symbols.get(idx).copied()
    }

    /// Number of symbols (the largest rank).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for an alphabet built through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in rank order.
    pub fn as_slice(&self) -> &[S] {
        &self.symbols
    }

    /// Iterate symbols in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.symbols.iter()
    }

    /// Consume the alphabet, returning its symbols in rank order.
    pub fn into_symbols(self) -> Vec<S> {
        self.symbols
    }
}

impl<S: Symbol> PartialEq for Alphabet<S> {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl<S: Symbol> Eq for Alphabet<S> {}

impl<S: Symbol + fmt::Debug> fmt::Debug for Alphabet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.symbols).finish()
    }
}

impl<'a, S: Symbol> IntoIterator for &'a Alphabet<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Count `symbols` and derive their rank-ordered alphabet.
///
/// # Errors
/// Returns `Error::InvalidInput` if `symbols` is empty.
pub fn rank_symbols<S: Symbol>(symbols: &[S]) -> Result<(FrequencyTable<S>, Alphabet<S>)> {
    let table = FrequencyTable::from_symbols(symbols)?;
    let alphabet = table.alphabet();
    debug!(
        "ranked {} occurrences into an alphabet of {} symbols",
        table.total(),
        alphabet.len()
    );
    Ok((table, alphabet))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_rank_aaab() {
        let (table, alphabet) = rank_symbols(&chars("aaab")).unwrap();
        assert_eq!(table.count(&'a'), 3);
        assert_eq!(table.count(&'b'), 1);
        assert_eq!(table.count(&'z'), 0);
        assert_eq!(table.total(), 4);
        assert_eq!(alphabet.as_slice(), &['a', 'b']);
        assert_eq!(alphabet.rank(&'a'), Some(1));
        assert_eq!(alphabet.rank(&'b'), Some(2));
    }

    #[test]
    fn test_ties_break_by_ascending_symbol() {
        let (_, alphabet) = rank_symbols(&chars("dcbabcd d")).unwrap();
        // d:3, b:2, c:2, ' ':1, a:1
        assert_eq!(alphabet.as_slice(), &['d', 'b', 'c', ' ', 'a']);
    }

    #[test]
    fn test_reference_sentence() {
        let (table, alphabet) = rank_symbols(&chars("Ala ma kota, a to lis!")).unwrap();
        assert_eq!(table.count(&' '), 5);
        assert_eq!(table.count(&'a'), 4);
        assert_eq!(&alphabet.as_slice()[..4], &[' ', 'a', 'l', 'o']);
        assert_eq!(alphabet.len(), 12);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(
            rank_symbols::<char>(&[]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parallel_count_matches_serial() {
        let data: Vec<u8> = (0..PARALLEL_THRESHOLD * 3)
            .map(|i| ((i * 7919) % 251) as u8)
            .collect();
        assert_eq!(count_parallel(&data), count_serial(&data));

        let table = FrequencyTable::from_symbols(&data).unwrap();
        assert_eq!(table.total(), data.len() as u64);
        for b in 0..=255u8 {
            let expected = data.iter().filter(|&&x| x == b).count() as u64;
            assert_eq!(table.count(&b), expected);
        }

        // Fewer elements than one chunk still merge correctly.
        let short = &data[..CHUNK_SIZE / 2];
        assert_eq!(count_parallel(short), count_serial(short));
    }

    #[test]
    fn test_alphabet_lookup_bounds() {
        let alphabet = Alphabet::from_symbols(vec!['x', 'y']).unwrap();
        assert_eq!(alphabet.symbol(0), None);
        assert_eq!(alphabet.symbol(1), Some('x'));
        assert_eq!(alphabet.symbol(2), Some('y'));
        assert_eq!(alphabet.symbol(3), None);
        assert_eq!(alphabet.symbol(u64::MAX), None);
    }

    #[test]
    fn test_alphabet_rejects_bad_symbol_lists() {
        assert!(Alphabet::<char>::from_symbols(vec![]).is_err());
        assert!(Alphabet::from_symbols(vec!['a', 'b', 'a']).is_err());
    }

    proptest! {
        #[test]
        fn prop_alphabet_is_a_sorted_bijection(input in prop::collection::vec(0u8..16, 1..200)) {
            let (table, alphabet) = rank_symbols(&input).unwrap();
            prop_assert_eq!(alphabet.len(), table.len());

            for (i, &s) in alphabet.iter().enumerate() {
                prop_assert_eq!(alphabet.rank(&s), Some(i as u64 + 1));
            }
            for pair in alphabet.as_slice().windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let (ca, cb) = (table.count(&a), table.count(&b));
                prop_assert!(ca > cb || (ca == cb && a < b));
            }

            let (_, again) = rank_symbols(&input).unwrap();
            prop_assert_eq!(alphabet, again);
        }
    }
}
