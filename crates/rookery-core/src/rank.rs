//! Board ranks, the rows 1 through 8.

use std::fmt;

use crate::color::Color;

/// A rank (row) on the chess board, from `R1` (White's back rank) to `R8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// Total number of ranks.
    pub const COUNT: usize = 8;

    /// All ranks from 1 to 8.
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Return the zero-based index (rank 1 = 0, rank 8 = 7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a rank from a zero-based index, `None` when out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Rank> {
        if index < 8 {
            Some(Rank::ALL[index as usize])
        } else {
            None
        }
    }

    /// Parse a rank digit (`'1'..='8'`).
    #[inline]
    pub const fn from_char(c: char) -> Option<Rank> {
        match c {
            '1'..='8' => Rank::from_index(c as u8 - b'1'),
            _ => None,
        }
    }

    /// Return the rank digit.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }

    /// The back rank of `color`, where its pieces start.
    #[inline]
    pub const fn back_rank(color: Color) -> Rank {
        match color {
            Color::White => Rank::R1,
            Color::Black => Rank::R8,
        }
    }

    /// The rank `color`'s pawns start on.
    #[inline]
    pub const fn pawn_rank(color: Color) -> Rank {
        match color {
            Color::White => Rank::R2,
            Color::Black => Rank::R7,
        }
    }

    /// The rank `color` captures onto en passant.
    #[inline]
    pub const fn en_passant_rank(color: Color) -> Rank {
        match color {
            Color::White => Rank::R6,
            Color::Black => Rank::R3,
        }
    }

    /// The rank `color`'s pawns promote on.
    #[inline]
    pub const fn promotion_rank(color: Color) -> Rank {
        Rank::back_rank(color.flip())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::Rank;
    use crate::color::Color;

    #[test]
    fn index_values() {
        assert_eq!(Rank::R1.index(), 0);
        assert_eq!(Rank::R8.index(), 7);
    }

    #[test]
    fn char_roundtrip() {
        for rank in Rank::ALL {
            assert_eq!(Rank::from_char(rank.to_char()), Some(rank));
        }
        assert_eq!(Rank::from_char('0'), None);
        assert_eq!(Rank::from_char('9'), None);
    }

    #[test]
    fn color_relative_ranks() {
        assert_eq!(Rank::back_rank(Color::White), Rank::R1);
        assert_eq!(Rank::pawn_rank(Color::Black), Rank::R7);
        assert_eq!(Rank::promotion_rank(Color::White), Rank::R8);
        assert_eq!(Rank::promotion_rank(Color::Black), Rank::R1);
        assert_eq!(Rank::en_passant_rank(Color::White), Rank::R6);
        assert_eq!(Rank::en_passant_rank(Color::Black), Rank::R3);
    }

    #[test]
    fn ordering() {
        assert!(Rank::R1 < Rank::R8);
    }
}
