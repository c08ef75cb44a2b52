//! Castling rights packed into four bits.
//!
//! `CastlingRights` is `Copy`: history snapshots are independent values, so
//! revoking a right on the live value can never reach back into the log.

use std::fmt;

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const WHITE_KINGSIDE: u8 = 1 << 0;
    pub const BLACK_KINGSIDE: u8 = 1 << 1;
    pub const WHITE_QUEENSIDE: u8 = 1 << 2;
    pub const BLACK_QUEENSIDE: u8 = 1 << 3;

    pub const ALL: Self = Self(0b1111);
    pub const NONE: Self = Self(0);

    pub const fn new(wks: bool, bks: bool, wqs: bool, bqs: bool) -> Self {
        let mut bits = 0;
        if wks {
            bits |= Self::WHITE_KINGSIDE;
        }
        if bks {
            bits |= Self::BLACK_KINGSIDE;
        }
        if wqs {
            bits |= Self::WHITE_QUEENSIDE;
        }
        if bqs {
            bits |= Self::BLACK_QUEENSIDE;
        }
        Self(bits)
    }

    #[inline]
    pub const fn kingside(self, color: Color) -> bool {
        self.0 & Self::kingside_bit(color) != 0
    }

    #[inline]
    pub const fn queenside(self, color: Color) -> bool {
        self.0 & Self::queenside_bit(color) != 0
    }

    /// Returns a copy with both rights of `color` removed.
    #[inline]
    #[must_use]
    pub const fn without_color(self, color: Color) -> Self {
        Self(self.0 & !(Self::kingside_bit(color) | Self::queenside_bit(color)))
    }

    #[inline]
    #[must_use]
    pub const fn without_kingside(self, color: Color) -> Self {
        Self(self.0 & !Self::kingside_bit(color))
    }

    #[inline]
    #[must_use]
    pub const fn without_queenside(self, color: Color) -> Self {
        Self(self.0 & !Self::queenside_bit(color))
    }

    const fn kingside_bit(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_KINGSIDE,
            Color::Black => Self::BLACK_KINGSIDE,
        }
    }

    const fn queenside_bit(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_QUEENSIDE,
            Color::Black => Self::BLACK_QUEENSIDE,
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}

/// Renders the familiar `KQkq` form, `-` when no right is left.
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("-");
        }
        for (held, symbol) in [
            (self.kingside(Color::White), 'K'),
            (self.queenside(Color::White), 'Q'),
            (self.kingside(Color::Black), 'k'),
            (self.queenside(Color::Black), 'q'),
        ] {
            if held {
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revoking_one_color_leaves_the_other_untouched() {
        let rights = CastlingRights::ALL.without_color(Color::White);
        assert!(!rights.kingside(Color::White));
        assert!(!rights.queenside(Color::White));
        assert!(rights.kingside(Color::Black));
        assert!(rights.queenside(Color::Black));
        assert_eq!(rights.to_string(), "kq");
    }

    #[test]
    fn snapshots_are_independent_values() {
        let snapshot = CastlingRights::ALL;
        let live = snapshot.without_queenside(Color::Black);
        assert_eq!(snapshot, CastlingRights::ALL);
        assert_eq!(live, CastlingRights::new(true, true, true, false));
        assert_eq!(CastlingRights::NONE.to_string(), "-");
    }
}
