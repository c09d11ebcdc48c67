//! Four-axis investment style codes (I/E, N/S, T/F, J/P).

use crate::domain::error::SectorScopeError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    I,
    E,
    N,
    S,
    T,
    F,
    J,
    P,
}

impl Letter {
    pub const fn axis(self) -> Axis {
        match self {
            Letter::I | Letter::E => Axis::IE,
            Letter::N | Letter::S => Axis::NS,
            Letter::T | Letter::F => Axis::TF,
            Letter::J | Letter::P => Axis::JP,
        }
    }

    /// The other letter on the same axis.
    pub fn opposite(self) -> Letter {
        match self {
            Letter::I => Letter::E,
            Letter::E => Letter::I,
            Letter::N => Letter::S,
            Letter::S => Letter::N,
            Letter::T => Letter::F,
            Letter::F => Letter::T,
            Letter::J => Letter::P,
            Letter::P => Letter::J,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::I => 'I',
            Letter::E => 'E',
            Letter::N => 'N',
            Letter::S => 'S',
            Letter::T => 'T',
            Letter::F => 'F',
            Letter::J => 'J',
            Letter::P => 'P',
        }
    }

    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'I' => Some(Letter::I),
            'E' => Some(Letter::E),
            'N' => Some(Letter::N),
            'S' => Some(Letter::S),
            'T' => Some(Letter::T),
            'F' => Some(Letter::F),
            'J' => Some(Letter::J),
            'P' => Some(Letter::P),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    IE,
    NS,
    TF,
    JP,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::IE, Axis::NS, Axis::TF, Axis::JP];

    /// The two letters of the axis; the first also wins ties.
    pub fn letters(self) -> (Letter, Letter) {
        match self {
            Axis::IE => (Letter::I, Letter::E),
            Axis::NS => (Letter::N, Letter::S),
            Axis::TF => (Letter::T, Letter::F),
            Axis::JP => (Letter::J, Letter::P),
        }
    }

    pub fn tie_break(self) -> Letter {
        self.letters().0
    }

    pub fn index(self) -> usize {
        match self {
            Axis::IE => 0,
            Axis::NS => 1,
            Axis::TF => 2,
            Axis::JP => 3,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.letters();
        write!(f, "{}{}", a, b)
    }
}

/// One of the 16 four-letter style codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleCode([Letter; 4]);

impl StyleCode {
    /// Builds a code from one letter per axis, in any order. Returns `None`
    /// unless each axis is covered exactly once.
    pub fn from_letters(letters: [Letter; 4]) -> Option<StyleCode> {
        let mut slots: [Option<Letter>; 4] = [None; 4];
        for letter in letters {
            let slot = &mut slots[letter.axis().index()];
            if slot.is_some() {
                return None;
            }
            *slot = Some(letter);
        }
        Some(StyleCode([slots[0]?, slots[1]?, slots[2]?, slots[3]?]))
    }

    pub fn letter(&self, axis: Axis) -> Letter {
        self.0[axis.index()]
    }

    pub fn letters(&self) -> [Letter; 4] {
        self.0
    }

    /// Every letter replaced by its opposite.
    pub fn complement(&self) -> StyleCode {
        StyleCode(self.0.map(Letter::opposite))
    }

    /// All 16 codes, ordered by axis with the tie-break letter first.
    pub fn all() -> Vec<StyleCode> {
        let mut codes = Vec::with_capacity(16);
        for ie in [Letter::I, Letter::E] {
            for ns in [Letter::N, Letter::S] {
                for tf in [Letter::T, Letter::F] {
                    for jp in [Letter::J, Letter::P] {
                        codes.push(StyleCode([ie, ns, tf, jp]));
                    }
                }
            }
        }
        codes
    }
}

impl fmt::Display for StyleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl FromStr for StyleCode {
    type Err = SectorScopeError;

    /// Parses exactly four letters, one per axis in I/E, N/S, T/F, J/P order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SectorScopeError::InvalidStyleCode(s.to_string());
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 4 {
            return Err(invalid());
        }
        let mut letters = [Letter::I; 4];
        for (i, (c, axis)) in chars.iter().zip(Axis::ALL).enumerate() {
            let letter = Letter::from_char(*c).ok_or_else(invalid)?;
            if letter.axis() != axis {
                return Err(invalid());
            }
            letters[i] = letter;
        }
        Ok(StyleCode(letters))
    }
}

/// Per-letter answer counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [u32; 8],
}

impl Tally {
    fn slot(letter: Letter) -> usize {
        letter as usize
    }

    pub fn credit(&mut self, letter: Letter) {
        self.counts[Self::slot(letter)] += 1;
    }

    pub fn count(&self, letter: Letter) -> u32 {
        self.counts[Self::slot(letter)]
    }

    /// The letter with the strictly greater count on `axis`, or the axis
    /// tie-break letter when the counts are equal.
    pub fn winner(&self, axis: Axis) -> Letter {
        let (first, second) = axis.letters();
        if self.count(second) > self.count(first) {
            second
        } else {
            first
        }
    }

    pub fn is_tied(&self, axis: Axis) -> bool {
        let (first, second) = axis.letters();
        self.count(first) == self.count(second)
    }

    pub fn code(&self) -> StyleCode {
        StyleCode(Axis::ALL.map(|axis| self.winner(axis)))
    }
}
