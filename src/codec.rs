//! Rank coding of whole symbol sequences.
//!
//! Encoding ranks the input, then replaces every occurrence with the gamma
//! code of its rank. The result is an [`EncodedDocument`]: the codewords
//! together with the alphabet needed to map ranks back to symbols.

use log::{debug, trace};
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::frequency::{rank_symbols, Alphabet, Symbol, PARALLEL_THRESHOLD};
use crate::gamma::{gamma_decode, gamma_encode, GammaCode};

/// Codewords in input order, paired with the alphabet that produced them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedDocument<S: Symbol = char> {
    codewords: Vec<GammaCode>,
    alphabet: Alphabet<S>,
}

impl<S: Symbol> EncodedDocument<S> {
    /// Pair codewords with the alphabet they should be decoded against.
    pub fn new(codewords: Vec<GammaCode>, alphabet: Alphabet<S>) -> Self {
        Self {
            codewords,
            alphabet,
        }
    }

    /// The codewords, one per encoded occurrence.
    pub fn codewords(&self) -> &[GammaCode] {
        &self.codewords
    }

    /// The decoding alphabet.
    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    /// Split into codewords and alphabet.
    pub fn into_parts(self) -> (Vec<GammaCode>, Alphabet<S>) {
        (self.codewords, self.alphabet)
    }

    /// Number of encoded occurrences.
    pub fn len(&self) -> usize {
        self.codewords.len()
    }

    /// Whether there are no codewords.
    pub fn is_empty(&self) -> bool {
        self.codewords.is_empty()
    }

    /// Sum of all codeword lengths.
    pub fn total_bits(&self) -> u64 {
        self.codewords.iter().map(|c| c.len() as u64).sum()
    }

    /// Mean codeword length in bits per symbol, 0 for an empty document.
    pub fn average_bits(&self) -> f64 {
        if self.codewords.is_empty() {
            return 0.0;
        }
        self.total_bits() as f64 / self.codewords.len() as f64
    }
}

/// Encode a symbol sequence.
///
/// # Errors
/// Returns `Error::InvalidInput` if `symbols` is empty.
pub fn encode_symbols<S: Symbol>(symbols: &[S]) -> Result<EncodedDocument<S>> {
    let (_, alphabet) = rank_symbols(symbols)?;

    // One codeword per rank, cloned per occurrence.
    let codebook = (1..=alphabet.len() as u64)
        .map(gamma_encode)
        .collect::<Result<Vec<_>>>()?;

    let code_for = |s: &S| -> Result<GammaCode> {
        let rank = alphabet
            .rank(s)
            .ok_or(Error::InvalidInput("symbol missing from its own alphabet"))?;
        Ok(codebook[(rank - 1) as usize].clone())
    };

    let codewords = if symbols.len() >= PARALLEL_THRESHOLD {
        symbols.par_iter().map(code_for).collect::<Result<Vec<_>>>()?
    } else {
        symbols.iter().map(code_for).collect::<Result<Vec<_>>>()?
    };

    let document = EncodedDocument::new(codewords, alphabet);
    debug!(
        "encoded {} symbols into {} bits ({:.2} bits/symbol)",
        document.len(),
        document.total_bits(),
        document.average_bits()
    );
    Ok(document)
}

/// Decode a document back into its symbol sequence.
///
/// # Errors
/// - `Error::MissingOneBit` / `Error::Overflow` for a malformed codeword.
/// - `Error::RankOutOfRange` if a codeword names a rank the alphabet lacks,
///   which happens when codewords and alphabet come from different inputs.
pub fn decode_symbols<S: Symbol>(document: &EncodedDocument<S>) -> Result<Vec<S>> {
    let alphabet = &document.alphabet;
    let symbol_for = |code: &GammaCode| -> Result<S> {
        let rank = gamma_decode(code)?;
        alphabet.symbol(rank).ok_or(Error::RankOutOfRange {
            rank,
            len: alphabet.len(),
        })
    };

    let codewords = &document.codewords;
    let symbols = if codewords.len() >= PARALLEL_THRESHOLD {
        codewords.par_iter().map(symbol_for).collect::<Result<Vec<_>>>()
    } else {
        codewords.iter().map(symbol_for).collect::<Result<Vec<_>>>()
    };

    if let Err(e) = &symbols {
        trace!("decode of {} codewords failed: {}", codewords.len(), e);
    }
    symbols
}

/// Encode a string, one symbol per `char`.
///
/// # Errors
/// Returns `Error::InvalidInput` if `text` is empty.
pub fn encode(text: &str) -> Result<EncodedDocument<char>> {
    let symbols: Vec<char> = text.chars().collect();
    encode_symbols(&symbols)
}

/// Decode a document produced by [`encode`] back into a string.
///
/// # Errors
/// See [`decode_symbols`].
pub fn decode(document: &EncodedDocument<char>) -> Result<String> {
    Ok(decode_symbols(document)?.into_iter().collect())
}
