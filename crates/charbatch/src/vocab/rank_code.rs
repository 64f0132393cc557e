//! # Rank-Code Assignment
//!
//! Fixed-width binary codes derived from a descending rank counter.

/// Number of binary digits needed to represent `n`.
///
/// `n = 0` is defined as width 1 so that even an empty vocabulary reports a
/// usable code dimension.
pub fn bit_length(n: usize) -> usize {
    if n == 0 {
        1
    } else {
        (usize::BITS - n.leading_zeros()) as usize
    }
}

/// Assign a fixed-width binary code to each of `count` ordered symbols.
///
/// The width is `bit_length(count)`. A counter starts at `count` and
/// decrements once per symbol; each symbol's code is the counter's binary
/// digits right-aligned into a zero-filled vector of the width, truncating
/// from the left if they do not fit (they never do here, since the counter
/// never exceeds `count`). The first symbol's code value is therefore
/// `count` and the last symbol's is 1.
///
/// The counter is the documented mechanism, not an artifact: codes come
/// from the countdown, not from each symbol's own position, even though the
/// two coincide in this construction.
///
/// ## Arguments
/// * `count` - The number of symbols to code.
///
/// ## Returns
/// The code width and one code per symbol, in symbol order.
pub fn assign_rank_codes(count: usize) -> (usize, Vec<Vec<u8>>) {
    let width = bit_length(count);

    let mut remaining = count;
    let mut codes = Vec::with_capacity(count);
    for _ in 0..count {
        let mut code = vec![0u8; width];
        let mut value = remaining;
        let mut slot = width;
        while value > 0 && slot > 0 {
            slot -= 1;
            code[slot] = (value & 1) as u8;
            value >>= 1;
        }
        codes.push(code);
        remaining -= 1;
    }

    (width, codes)
}
