// Copyright 2025 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph tables: static character → polyline data.

use crate::builtin;

/// A single glyph: the polylines that draw one character.
///
/// Coordinates are in table units with a y-up convention and the baseline at
/// `y = 0`. One font-size unit corresponds to [`GlyphTable::divisor`] table
/// units. A polyline with a single repeated point is a dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    /// Character drawn by this glyph.
    pub ch: char,
    /// Polylines in table units.
    pub strokes: &'static [&'static [(i8, i8)]],
}

/// Static mapping from characters to [`Glyph`]s.
///
/// Glyphs must be sorted by character; lookups use binary search. The space
/// character never has a glyph: layout advances over it without drawing.
#[derive(Clone, Copy, Debug)]
pub struct GlyphTable {
    name: &'static str,
    divisor: f64,
    glyphs: &'static [Glyph],
}

impl GlyphTable {
    /// Creates a table from sorted static glyph data.
    ///
    /// `divisor` is the number of table units that make up one font-size
    /// unit, i.e. the cap height of the table.
    #[must_use]
    pub const fn new(name: &'static str, divisor: f64, glyphs: &'static [Glyph]) -> Self {
        Self {
            name,
            divisor,
            glyphs,
        }
    }

    /// Human-readable table name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Normalization divisor of this table.
    #[must_use]
    pub fn divisor(&self) -> f64 {
        self.divisor
    }

    /// All glyphs, sorted by character.
    #[must_use]
    pub fn glyphs(&self) -> &'static [Glyph] {
        self.glyphs
    }

    /// Number of glyphs in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns `true` if the table holds no glyphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Looks up the glyph for `ch`.
    #[must_use]
    pub fn get(&self, ch: char) -> Option<&'static Glyph> {
        self.glyphs
            .binary_search_by_key(&ch, |g| g.ch)
            .ok()
            .map(|i| &self.glyphs[i])
    }

    /// Returns `true` if `ch` has a glyph in this table.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.get(ch).is_some()
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        BUILTIN
    }
}

/// Built-in table covering printable ASCII (`'!'..='~'`).
///
/// Cap height is 18 units, the x-height 12 and descenders reach down to -6.
/// Glyph cells are 12 units wide.
pub static BUILTIN: GlyphTable = GlyphTable::new("plotview-ascii", 18.0, builtin::GLYPHS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_sorted_and_unique() {
        let glyphs = BUILTIN.glyphs();
        for pair in glyphs.windows(2) {
            assert!(
                pair[0].ch < pair[1].ch,
                "{:?} must sort before {:?}",
                pair[0].ch,
                pair[1].ch
            );
        }
    }

    #[test]
    fn builtin_covers_printable_ascii() {
        for ch in '!'..='~' {
            assert!(BUILTIN.contains(ch), "missing glyph for {ch:?}");
        }
        assert_eq!(BUILTIN.len(), 94);
        assert!(!BUILTIN.contains(' '));
        assert!(!BUILTIN.contains('\u{00b0}'));
    }

    #[test]
    fn every_stroke_has_a_point() {
        for glyph in BUILTIN.glyphs() {
            assert!(!glyph.strokes.is_empty(), "{:?} has no strokes", glyph.ch);
            for stroke in glyph.strokes {
                assert!(!stroke.is_empty(), "{:?} has an empty stroke", glyph.ch);
            }
        }
    }

    #[test]
    fn custom_table_lookup() {
        static GLYPHS: &[Glyph] = &[
            Glyph {
                ch: '-',
                strokes: &[&[(0, 5), (10, 5)]],
            },
            Glyph {
                ch: '|',
                strokes: &[&[(5, 0), (5, 10)]],
            },
        ];
        let table = GlyphTable::new("bars", 10.0, GLYPHS);
        assert_eq!(table.divisor(), 10.0);
        assert_eq!(table.get('|').map(|g| g.strokes.len()), Some(1));
        assert!(table.get('+').is_none());
    }
}
