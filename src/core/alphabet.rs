//! The 58-symbol alphabet and its digit lookup tables.
//!
//! Symbols are listed in ascending ASCII order, so comparing two encodings of
//! equal length byte-by-byte gives the same answer as comparing the numbers
//! they represent. `I`, `O`, `l` and `o` are left out because they are too
//! easily mistaken for `1` and `0`.

/// Number of symbols in the alphabet, i.e. the radix.
pub const BASE: usize = 58;

/// Digit `i` is `ALPHABET[i]`.
pub const ALPHABET: &[u8; BASE] = b"0123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnpqrstuvwxyz";

/// The zero digit.
pub const ZERO: char = ALPHABET[0] as char;

const MIN_SYMBOL: u8 = ALPHABET[0];
const MAX_SYMBOL: u8 = ALPHABET[BASE - 1];
const SPAN: usize = (MAX_SYMBOL - MIN_SYMBOL) as usize + 1;
const NO_VALUE: u8 = u8::MAX;

// Strictly ascending implies distinct, and is what makes byte order match
// numeric order.
const _: () = {
    let mut i = 1;
    while i < BASE {
        assert!(ALPHABET[i - 1] < ALPHABET[i], "alphabet must be strictly ascending");
        i += 1;
    }
};

/// Symbol code, offset by the smallest symbol, to digit value.
const DIGIT_VALUES: [u8; SPAN] = {
    let mut lut = [NO_VALUE; SPAN];
    let mut i = 0;
    while i < BASE {
        lut[(ALPHABET[i] - MIN_SYMBOL) as usize] = i as u8;
        i += 1;
    }
    lut
};

/// Returns the digit value of `symbol`, or `None` if it is not in the alphabet.
#[inline]
pub fn digit_value(symbol: u8) -> Option<u8> {
    let slot = symbol.checked_sub(MIN_SYMBOL)? as usize;
    match DIGIT_VALUES.get(slot) {
        Some(&value) if value != NO_VALUE => Some(value),
        _ => None,
    }
}

/// Returns the symbol for `digit`.
///
/// Total over `0..58`; callers only ever pass remainders of a division by
/// [`BASE`].
#[inline]
pub fn symbol(digit: u8) -> u8 {
    debug_assert!((digit as usize) < BASE);
    ALPHABET[digit as usize]
}

/// The alphabet as a string slice.
pub fn as_str() -> &'static str {
    // Every symbol is ASCII.
    match std::str::from_utf8(ALPHABET) {
        Ok(s) => s,
        Err(_) => unreachable!("alphabet is ASCII"),
    }
}
