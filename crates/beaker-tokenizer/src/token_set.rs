use crate::TokenKind;

/// A set of token kinds packed into one word, one bit per kind.
///
/// Every operation is `const`, so the parser's operator tables are built at
/// compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

// `WHILE_KW` is the last kind.
const _: () = assert!((TokenKind::WHILE_KW as u32) < u64::BITS);

impl TokenSet {
    pub const EMPTY: Self = Self(0);

    const fn bit(kind: TokenKind) -> u64 {
        1 << kind as u8
    }

    pub const fn new<const N: usize>(kinds: [TokenKind; N]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < N {
            bits |= Self::bit(kinds[i]);
            i += 1;
        }
        Self(bits)
    }

    pub const fn union(self, other: &Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn difference(self, other: &Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub const fn contains(&self, kind: TokenKind) -> bool {
        self.0 & Self::bit(kind) != 0
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}
