use std::fmt;

/// An MSB-first bit pattern of at most 64 bits.
///
/// Codewords are root-to-leaf paths, so their length is bounded by the tree
/// depth; 64 bits is unreachable for any realistic character inventory.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Codeword {
    buf: u64,
    len: usize,
}

impl Codeword {
    pub(super) fn new() -> Codeword {
        Codeword { buf: 0, len: 0 }
    }

    pub(super) fn push(self, bit: bool) -> Codeword {
        let mut result = self;
        if result.len >= 64 {
            panic!("In Codeword: attempted to push further than 64 bits");
        }
        if bit {
            result.buf |= (1 << 63) >> result.len;
        }
        result.len += 1;
        result
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The bit at `position`, counted from the most significant end.
    pub fn bit(&self, position: usize) -> bool {
        assert!(position < self.len, "bit position out of range");
        self.buf & ((1 << 63) >> position) > 0
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|position| self.bit(position))
    }

    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        self.len <= other.len && (0..self.len).all(|position| self.bit(position) == other.bit(position))
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Codeword({})", self)
    }
}

#[cfg(test)]
mod test {
    use super::Codeword;

    fn codeword_from_str(bits: &str) -> Codeword {
        bits.chars()
            .fold(Codeword::new(), |word, c| word.push(c == '1'))
    }

    #[test]
    fn test_push_and_display() {
        let word = codeword_from_str("0110");
        assert_eq!(word.len(), 4);
        assert_eq!(word.to_string(), "0110");
    }

    #[test]
    fn test_bit_access() {
        let word = codeword_from_str("101");
        assert!(word.bit(0));
        assert!(!word.bit(1));
        assert!(word.bit(2));
    }

    #[test]
    fn test_prefix_detection() {
        let prefix = codeword_from_str("01");
        let word = codeword_from_str("0110");
        let sibling = codeword_from_str("0011");
        assert!(prefix.is_prefix_of(&word), "'01' is a prefix of '0110'");
        assert!(
            !prefix.is_prefix_of(&sibling),
            "'01' is not a prefix of '0011'"
        );
        assert!(
            !word.is_prefix_of(&prefix),
            "A longer word is never a prefix of a shorter one"
        );
    }

    #[test]
    fn test_every_word_is_a_prefix_of_itself() {
        let word = codeword_from_str("110");
        assert!(word.is_prefix_of(&word));
    }

    #[test]
    #[should_panic]
    fn test_push_beyond_capacity() {
        let mut word = Codeword::new();
        for _ in 0..65 {
            word = word.push(true);
        }
    }
}
