//! # Elias Gamma Rank Coding
//!
//! *A static, frequency-ranked universal code for text.*
//!
//! ## Intuition First
//!
//! Sort the characters of a text from most to least frequent and number them
//! 1, 2, 3, ... Small numbers are common, large numbers are rare. Now write
//! every character as its number using a code where small numbers are short.
//! The Elias gamma code is the simplest such code that needs no table of its
//! own: the number of leading zeros says how many bits follow.
//!
//! ## The Problem
//!
//! Fixed-width codes spend the same number of bits on `e` as on `q`. Optimal
//! prefix codes (Huffman) need a code table built from the exact
//! distribution. A universal code sits in between: one fixed code for all
//! positive integers, whose lengths grow like `2 log2(m) + 1`. Ranking symbols
//! by frequency is the only modelling step.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1952  Huffman     Optimal prefix codes for a known distribution
//! 1975  Elias       Universal codeword sets: gamma, delta, omega codes
//! 1999  Witten+     Managing Gigabytes: gamma codes for inverted index gaps
//! 2004  Boldi+      WebGraph: gamma/zeta codes for adjacency lists
//! ```
//!
//! ## Mathematical Formulation
//!
//! For `m >= 1` let `n = floor(log2(m))`. Then
//!
//! ```text
//! gamma(m) = 0^n  1  b_{n-1} ... b_0      where m = 2^n + sum b_i 2^i
//! |gamma(m)| = 2n + 1
//! ```
//!
//! A text of length `L` over an alphabet ranked by count `c_1 >= c_2 >= ...`
//! encodes to `sum_r c_r (2 floor(log2 r) + 1)` bits. [`entropy()`] gives the
//! per-symbol lower bound `H` for comparison.
//!
//! ## Complexity Analysis
//!
//! - **Ranking**: O(L) counting plus O(N log N) sorting for N distinct symbols.
//! - **Coding**: O(1) rank lookup and O(log r) bits per occurrence.
//! - Inputs of at least [`frequency::PARALLEL_THRESHOLD`] symbols are counted
//!   and coded in parallel; output order never changes.
//!
//! ## Failure Modes
//!
//! 1. **Lost alphabet**: codewords carry ranks, not symbols. Without the
//!    alphabet that produced them they cannot be decoded, which is why
//!    [`EncodedDocument`] keeps the two together.
//! 2. **Flat distributions**: with many equally frequent symbols the code is
//!    far from `H`, roughly `2 log2 N` bits against `log2 N`.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - [`gamma`]: the integer code and its building blocks.
//! - [`frequency`]: frequency tables and deterministic rank-ordered alphabets.
//! - [`codec`]: whole-text encoding and decoding.
//! - [`mod@entropy`]: Shannon entropy of a sequence.
//!
//! ```rust
//! let doc = elias::encode("aaab").unwrap();
//! let codes: Vec<String> = doc.codewords().iter().map(|c| c.to_string()).collect();
//! assert_eq!(codes, ["1", "1", "1", "010"]);
//! assert_eq!(doc.alphabet().as_slice(), &['a', 'b']);
//! assert_eq!(elias::decode(&doc).unwrap(), "aaab");
//! ```
//!
//! ## References
//!
//! - Elias, P. (1975). "Universal codeword sets and representations of the integers."
//! - Shannon, C. E. (1948). "A Mathematical Theory of Communication."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod entropy;
pub mod error;
pub mod frequency;
pub mod gamma;

pub use codec::{decode, decode_symbols, encode, encode_symbols, EncodedDocument};
pub use entropy::{entropy, text_entropy};
pub use error::{Error, Result};
pub use frequency::{rank_symbols, Alphabet, FrequencyTable, Symbol};
pub use gamma::{gamma_decode, gamma_encode, GammaCode};
