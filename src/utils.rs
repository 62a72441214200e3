/// Decode a row index into its input vector, most-significant input first.
///
/// ```text
/// (i, n) -> [bit(n-1) of i, bit(n-2) of i, ..., bit(0) of i]
/// ```
///
/// For `n = 2` this yields `[F,F]`, `[F,T]`, `[T,F]`, `[T,T]` for `i = 0..4`.
pub fn index_to_bits(index: usize, n: usize) -> Vec<bool> {
    (0..n).rev().map(|j| (index >> j) & 1 == 1).collect()
}

/// Encode an input vector into its row index, first input as the most-significant bit.
///
/// ```text
/// [b0, b1, ..., b(n-1)] -> b0 * 2^(n-1) + b1 * 2^(n-2) + ... + b(n-1)
/// ```
///
/// This is the inverse of [`index_to_bits`].
pub fn bits_to_index(bits: &[bool]) -> usize {
    bits.iter().fold(0, |acc, &b| (acc << 1) | b as usize)
}

/// Label of the input at the given position: `'A'` for 0, `'B'` for 1, and so on.
pub fn input_label(index: usize) -> char {
    assert!(index < 26, "Input index should be in the range 0..26");
    (b'A' + index as u8) as char
}

/// Render a boolean as the digit `'1'` or `'0'`.
pub fn bit_char(b: bool) -> char {
    if b {
        '1'
    } else {
        '0'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_to_bits() {
        // i  bits
        // --------
        // 0  0 0
        // 1  0 1
        // 2  1 0
        // 3  1 1
        assert_eq!(index_to_bits(0, 2), vec![false, false]);
        assert_eq!(index_to_bits(1, 2), vec![false, true]);
        assert_eq!(index_to_bits(2, 2), vec![true, false]);
        assert_eq!(index_to_bits(3, 2), vec![true, true]);
        assert_eq!(index_to_bits(1, 1), vec![true]);
        assert_eq!(index_to_bits(5, 3), vec![true, false, true]);
    }

    #[test]
    fn test_bits_to_index() {
        assert_eq!(bits_to_index(&[false, false]), 0);
        assert_eq!(bits_to_index(&[false, true]), 1);
        assert_eq!(bits_to_index(&[true, false]), 2);
        assert_eq!(bits_to_index(&[true, true]), 3);
        assert_eq!(bits_to_index(&[]), 0);
    }

    #[test]
    fn test_bits_index_inverse() {
        for n in 1..=4 {
            for i in 0..(1 << n) {
                assert_eq!(bits_to_index(&index_to_bits(i, n)), i);
            }
        }
    }

    #[test]
    fn test_input_label() {
        assert_eq!(input_label(0), 'A');
        assert_eq!(input_label(1), 'B');
        assert_eq!(input_label(25), 'Z');
    }

    #[test]
    #[should_panic(expected = "Input index should be in the range 0..26")]
    fn test_input_label_out_of_range() {
        input_label(26);
    }

    #[test]
    fn test_bit_char() {
        assert_eq!(bit_char(true), '1');
        assert_eq!(bit_char(false), '0');
    }
}
