//! Polynomial rolling hash over the `ACGT` alphabet.
//!
//! A window is treated as a base-`base` numeral with each symbol mapped to a
//! fixed positive value (A=1, C=2, G=3, T=4), reduced modulo a large prime.
//! [`hash_window`] computes a window from scratch in O(length);
//! [`roll_hash`] advances to the next window in O(1), which is what makes
//! scanning all windows of a fixed length linear in the sequence length.
//!
//! Hash equality is *not* sequence equality; callers must compare literals
//! before trusting a match.

use super::DetectError;

/// Default polynomial base
pub const DEFAULT_BASE: u64 = 101;

/// Default modulus (1e9 + 7, prime)
pub const DEFAULT_MODULUS: u64 = 1_000_000_007;

/// Parameters of the polynomial hash.
///
/// The modulus must be below 2^63; intermediate products are computed in
/// 128-bit arithmetic so `base * modulus` cannot overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashParams {
    pub base: u64,
    pub modulus: u64,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            modulus: DEFAULT_MODULUS,
        }
    }
}

/// Numeric value of a symbol, or None for anything outside `ACGT`.
#[must_use]
pub fn symbol_value(symbol: u8) -> Option<u64> {
    match symbol {
        b'A' => Some(1),
        b'C' => Some(2),
        b'G' => Some(3),
        b'T' => Some(4),
        _ => None,
    }
}

#[inline]
fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    (u128::from(a) * u128::from(b) % u128::from(modulus)) as u64
}

#[inline]
fn shift_add_mod(hash: u64, value: u64, params: &HashParams) -> u64 {
    ((u128::from(hash) * u128::from(params.base) + u128::from(value))
        % u128::from(params.modulus)) as u64
}

/// Precompute `base^i mod modulus` for `i` in `0..max_length`.
///
/// `powers[0]` is 1. A `max_length` of zero yields an empty table.
#[must_use]
pub fn precompute_powers(base: u64, max_length: usize, modulus: u64) -> Vec<u64> {
    let mut powers = Vec::with_capacity(max_length);
    if max_length == 0 {
        return powers;
    }
    powers.push(1 % modulus);
    for i in 1..max_length {
        powers.push(mul_mod(powers[i - 1], base, modulus));
    }
    powers
}

/// Hash a window from scratch.
///
/// # Errors
///
/// Returns `DetectError::InvalidSymbol` for symbols outside `ACGT`; the
/// reported position is relative to the window.
pub fn hash_window(window: &[u8], params: &HashParams) -> Result<u64, DetectError> {
    let mut hash = 0u64;
    for (position, &symbol) in window.iter().enumerate() {
        let value = symbol_value(symbol).ok_or(DetectError::InvalidSymbol {
            symbol: symbol as char,
            position,
        })?;
        hash = shift_add_mod(hash, value, params);
    }
    Ok(hash)
}

/// Advance a window hash by one position.
///
/// Removes the leaving symbol's positional contribution
/// (`value * base^(length-1)`), shifts, and adds the entering symbol.
/// `position` is the absolute offset of the entering symbol and is used only
/// for error reporting; the leaving symbol sits at `position - length`.
///
/// For any sequence, rolling from the first window's [`hash_window`] value
/// must reproduce every window's from-scratch hash.
///
/// # Errors
///
/// Returns `DetectError::InvalidSymbol` if either symbol is outside `ACGT`.
pub fn roll_hash(
    prev_hash: u64,
    leaving: u8,
    entering: u8,
    length: usize,
    position: usize,
    params: &HashParams,
    powers: &[u64],
) -> Result<u64, DetectError> {
    let leaving_value = symbol_value(leaving).ok_or(DetectError::InvalidSymbol {
        symbol: leaving as char,
        position: position - length,
    })?;
    let entering_value = symbol_value(entering).ok_or(DetectError::InvalidSymbol {
        symbol: entering as char,
        position,
    })?;

    let removed = mul_mod(leaving_value, powers[length - 1], params.modulus);
    // add the modulus first so the subtraction stays non-negative
    let remainder = (prev_hash + params.modulus - removed) % params.modulus;
    Ok(shift_add_mod(remainder, entering_value, params))
}
