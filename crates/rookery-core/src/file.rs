//! Board files, the columns a through h.

use std::fmt;

/// A file (column) on the chess board, from `A` (queenside) to `H`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// Total number of files.
    pub const COUNT: usize = 8;

    /// All files from a to h.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Return the zero-based index (a = 0, h = 7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a file from a zero-based index, `None` when out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<File> {
        if index < 8 {
            Some(File::ALL[index as usize])
        } else {
            None
        }
    }

    /// Parse a lowercase file letter (`'a'..='h'`).
    #[inline]
    pub const fn from_char(c: char) -> Option<File> {
        match c {
            'a'..='h' => File::from_index(c as u8 - b'a'),
            _ => None,
        }
    }

    /// Return the lowercase file letter.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::File;

    #[test]
    fn index_values() {
        assert_eq!(File::A.index(), 0);
        assert_eq!(File::H.index(), 7);
    }

    #[test]
    fn char_roundtrip() {
        for file in File::ALL {
            assert_eq!(File::from_char(file.to_char()), Some(file));
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(File::from_index(8), None);
        assert_eq!(File::from_char('i'), None);
        assert_eq!(File::from_char('A'), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", File::A), "a");
        assert_eq!(format!("{}", File::H), "h");
    }
}
