// Copyright 2025 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph data for [`crate::BUILTIN`].
//!
//! Grid: cells are 12 units wide, cap height 18, x-height 12, descenders to -6.

use crate::table::Glyph;

macro_rules! glyph {
    ($ch:literal => $([$(($x:expr, $y:expr)),+ $(,)?]),+ $(,)?) => {
        Glyph {
            ch: $ch,
            strokes: &[$(&[$(($x, $y)),+]),+],
        }
    };
}

// Sorted by character.
pub(crate) static GLYPHS: &[Glyph] = &[
    glyph!('!' => [(6, 18), (6, 5)], [(6, 0), (6, 0)]),
    glyph!('"' => [(4, 18), (4, 13)], [(8, 18), (8, 13)]),
    glyph!('#' => [(4, 0), (4, 18)], [(8, 0), (8, 18)], [(0, 6), (12, 6)], [(0, 12), (12, 12)]),
    glyph!('$' =>
        [(12, 14), (9, 16), (3, 16), (0, 13), (3, 9), (9, 9), (12, 5), (9, 2), (3, 2), (0, 4)],
        [(6, 18), (6, 0)],
    ),
    glyph!('%' =>
        [(0, 0), (12, 18)],
        [(2, 18), (0, 16), (2, 14), (4, 16), (2, 18)],
        [(10, 4), (8, 2), (10, 0), (12, 2), (10, 4)],
    ),
    glyph!('&' =>
        [(12, 0), (2, 13), (2, 16), (4, 18), (7, 18), (9, 16), (9, 13), (0, 6), (0, 3), (3, 0), (7, 0), (12, 6)],
    ),
    glyph!('\'' => [(6, 18), (6, 13)]),
    glyph!('(' => [(8, 18), (5, 15), (4, 9), (5, 3), (8, 0)]),
    glyph!(')' => [(4, 18), (7, 15), (8, 9), (7, 3), (4, 0)]),
    glyph!('*' => [(6, 15), (6, 3)], [(1, 12), (11, 6)], [(1, 6), (11, 12)]),
    glyph!('+' => [(6, 15), (6, 3)], [(0, 9), (12, 9)]),
    glyph!(',' => [(6, 1), (6, 0), (4, -3)]),
    glyph!('-' => [(2, 9), (10, 9)]),
    glyph!('.' => [(6, 0), (6, 0)]),
    glyph!('/' => [(0, 0), (12, 18)]),
    glyph!('0' =>
        [(3, 0), (0, 3), (0, 15), (3, 18), (9, 18), (12, 15), (12, 3), (9, 0), (3, 0)],
        [(2, 2), (10, 16)],
    ),
    glyph!('1' => [(3, 15), (6, 18), (6, 0)], [(3, 0), (9, 0)]),
    glyph!('2' => [(0, 15), (3, 18), (9, 18), (12, 15), (12, 11), (0, 0), (12, 0)]),
    glyph!('3' =>
        [(0, 15), (3, 18), (9, 18), (12, 15), (12, 12), (9, 9), (4, 9)],
        [(9, 9), (12, 6), (12, 3), (9, 0), (3, 0), (0, 3)],
    ),
    glyph!('4' => [(9, 0), (9, 18), (0, 5), (12, 5)]),
    glyph!('5' => [(12, 18), (0, 18), (0, 10), (9, 10), (12, 7), (12, 3), (9, 0), (3, 0), (0, 3)]),
    glyph!('6' =>
        [(11, 18), (5, 18), (0, 12), (0, 3), (3, 0), (9, 0), (12, 3), (12, 7), (9, 10), (3, 10), (0, 7)],
    ),
    glyph!('7' => [(0, 18), (12, 18), (4, 0)]),
    glyph!('8' =>
        [
            (3, 9), (0, 12), (0, 15), (3, 18), (9, 18), (12, 15), (12, 12), (9, 9),
            (3, 9), (0, 6), (0, 3), (3, 0), (9, 0), (12, 3), (12, 6), (9, 9),
        ],
    ),
    glyph!('9' =>
        [(12, 11), (9, 8), (3, 8), (0, 11), (0, 15), (3, 18), (9, 18), (12, 15), (12, 6), (7, 0), (1, 0)],
    ),
    glyph!(':' => [(6, 12), (6, 12)], [(6, 0), (6, 0)]),
    glyph!(';' => [(6, 12), (6, 12)], [(6, 1), (6, 0), (4, -3)]),
    glyph!('<' => [(12, 15), (0, 9), (12, 3)]),
    glyph!('=' => [(0, 12), (12, 12)], [(0, 6), (12, 6)]),
    glyph!('>' => [(0, 15), (12, 9), (0, 3)]),
    glyph!('?' => [(0, 15), (3, 18), (9, 18), (12, 15), (12, 12), (6, 8), (6, 5)], [(6, 0), (6, 0)]),
    glyph!('@' =>
        [
            (9, 6), (9, 12), (5, 12), (3, 9), (5, 6), (9, 6), (12, 9), (12, 15),
            (9, 18), (3, 18), (0, 15), (0, 3), (3, 0), (10, 0),
        ],
    ),
    glyph!('A' => [(0, 0), (6, 18), (12, 0)], [(2, 6), (10, 6)]),
    glyph!('B' =>
        [(0, 0), (0, 18), (9, 18), (12, 15), (12, 12), (9, 9), (0, 9)],
        [(9, 9), (12, 6), (12, 3), (9, 0), (0, 0)],
    ),
    glyph!('C' => [(12, 15), (9, 18), (3, 18), (0, 15), (0, 3), (3, 0), (9, 0), (12, 3)]),
    glyph!('D' => [(0, 0), (0, 18), (8, 18), (12, 14), (12, 4), (8, 0), (0, 0)]),
    glyph!('E' => [(12, 18), (0, 18), (0, 0), (12, 0)], [(0, 9), (8, 9)]),
    glyph!('F' => [(12, 18), (0, 18), (0, 0)], [(0, 9), (8, 9)]),
    glyph!('G' =>
        [(12, 15), (9, 18), (3, 18), (0, 15), (0, 3), (3, 0), (9, 0), (12, 3), (12, 8), (7, 8)],
    ),
    glyph!('H' => [(0, 0), (0, 18)], [(12, 0), (12, 18)], [(0, 9), (12, 9)]),
    glyph!('I' => [(3, 18), (9, 18)], [(6, 18), (6, 0)], [(3, 0), (9, 0)]),
    glyph!('J' => [(12, 18), (12, 3), (9, 0), (3, 0), (0, 3)]),
    glyph!('K' => [(0, 0), (0, 18)], [(12, 18), (0, 6)], [(4, 10), (12, 0)]),
    glyph!('L' => [(0, 18), (0, 0), (12, 0)]),
    glyph!('M' => [(0, 0), (0, 18), (6, 9), (12, 18), (12, 0)]),
    glyph!('N' => [(0, 0), (0, 18), (12, 0), (12, 18)]),
    glyph!('O' => [(3, 0), (0, 3), (0, 15), (3, 18), (9, 18), (12, 15), (12, 3), (9, 0), (3, 0)]),
    glyph!('P' => [(0, 0), (0, 18), (9, 18), (12, 15), (12, 12), (9, 9), (0, 9)]),
    glyph!('Q' =>
        [(3, 0), (0, 3), (0, 15), (3, 18), (9, 18), (12, 15), (12, 3), (9, 0), (3, 0)],
        [(7, 5), (12, 0)],
    ),
    glyph!('R' => [(0, 0), (0, 18), (9, 18), (12, 15), (12, 12), (9, 9), (0, 9)], [(6, 9), (12, 0)]),
    glyph!('S' =>
        [(12, 15), (9, 18), (3, 18), (0, 15), (0, 12), (3, 9), (9, 9), (12, 6), (12, 3), (9, 0), (3, 0), (0, 3)],
    ),
    glyph!('T' => [(0, 18), (12, 18)], [(6, 18), (6, 0)]),
    glyph!('U' => [(0, 18), (0, 3), (3, 0), (9, 0), (12, 3), (12, 18)]),
    glyph!('V' => [(0, 18), (6, 0), (12, 18)]),
    glyph!('W' => [(0, 18), (3, 0), (6, 12), (9, 0), (12, 18)]),
    glyph!('X' => [(0, 18), (12, 0)], [(12, 18), (0, 0)]),
    glyph!('Y' => [(0, 18), (6, 9), (12, 18)], [(6, 9), (6, 0)]),
    glyph!('Z' => [(0, 18), (12, 18), (0, 0), (12, 0)]),
    glyph!('[' => [(8, 18), (4, 18), (4, 0), (8, 0)]),
    glyph!('\\' => [(0, 18), (12, 0)]),
    glyph!(']' => [(4, 18), (8, 18), (8, 0), (4, 0)]),
    glyph!('^' => [(2, 12), (6, 18), (10, 12)]),
    glyph!('_' => [(0, -3), (12, -3)]),
    glyph!('`' => [(4, 18), (8, 14)]),
    glyph!('a' =>
        [(12, 12), (12, 0)],
        [(12, 9), (9, 12), (3, 12), (0, 9), (0, 3), (3, 0), (9, 0), (12, 3)],
    ),
    glyph!('b' =>
        [(0, 18), (0, 0)],
        [(0, 3), (3, 0), (9, 0), (12, 3), (12, 9), (9, 12), (3, 12), (0, 9)],
    ),
    glyph!('c' => [(12, 9), (9, 12), (3, 12), (0, 9), (0, 3), (3, 0), (9, 0), (12, 3)]),
    glyph!('d' =>
        [(12, 18), (12, 0)],
        [(12, 9), (9, 12), (3, 12), (0, 9), (0, 3), (3, 0), (9, 0), (12, 3)],
    ),
    glyph!('e' =>
        [(0, 6), (12, 6), (12, 9), (9, 12), (3, 12), (0, 9), (0, 3), (3, 0), (9, 0), (12, 3)],
    ),
    glyph!('f' => [(10, 18), (7, 18), (4, 15), (4, 0)], [(0, 12), (9, 12)]),
    glyph!('g' =>
        [(12, 12), (12, -3), (9, -6), (3, -6), (0, -3)],
        [(12, 9), (9, 12), (3, 12), (0, 9), (0, 3), (3, 0), (9, 0), (12, 3)],
    ),
    glyph!('h' => [(0, 18), (0, 0)], [(0, 9), (3, 12), (9, 12), (12, 9), (12, 0)]),
    glyph!('i' => [(6, 12), (6, 0)], [(6, 16), (6, 16)]),
    glyph!('j' => [(8, 12), (8, -3), (5, -6), (2, -6)], [(8, 16), (8, 16)]),
    glyph!('k' => [(0, 18), (0, 0)], [(10, 12), (0, 4)], [(4, 7), (12, 0)]),
    glyph!('l' => [(4, 18), (6, 18), (6, 0)], [(3, 0), (9, 0)]),
    glyph!('m' =>
        [(0, 12), (0, 0)],
        [(0, 9), (2, 12), (4, 12), (6, 9), (6, 0)],
        [(6, 9), (8, 12), (10, 12), (12, 9), (12, 0)],
    ),
    glyph!('n' => [(0, 12), (0, 0)], [(0, 9), (3, 12), (9, 12), (12, 9), (12, 0)]),
    glyph!('o' => [(3, 0), (0, 3), (0, 9), (3, 12), (9, 12), (12, 9), (12, 3), (9, 0), (3, 0)]),
    glyph!('p' =>
        [(0, 12), (0, -6)],
        [(0, 9), (3, 12), (9, 12), (12, 9), (12, 3), (9, 0), (3, 0), (0, 3)],
    ),
    glyph!('q' =>
        [(12, 12), (12, -6)],
        [(12, 9), (9, 12), (3, 12), (0, 9), (0, 3), (3, 0), (9, 0), (12, 3)],
    ),
    glyph!('r' => [(0, 12), (0, 0)], [(0, 8), (4, 12), (9, 12), (12, 10)]),
    glyph!('s' =>
        [(12, 10), (9, 12), (3, 12), (0, 10), (0, 8), (3, 6), (9, 6), (12, 4), (12, 2), (9, 0), (3, 0), (0, 2)],
    ),
    glyph!('t' => [(4, 18), (4, 3), (7, 0), (10, 0)], [(0, 12), (9, 12)]),
    glyph!('u' => [(0, 12), (0, 3), (3, 0), (9, 0), (12, 3)], [(12, 12), (12, 0)]),
    glyph!('v' => [(0, 12), (6, 0), (12, 12)]),
    glyph!('w' => [(0, 12), (3, 0), (6, 8), (9, 0), (12, 12)]),
    glyph!('x' => [(0, 12), (12, 0)], [(12, 12), (0, 0)]),
    glyph!('y' => [(0, 12), (6, 0)], [(12, 12), (4, -6), (1, -6)]),
    glyph!('z' => [(0, 12), (12, 12), (0, 0), (12, 0)]),
    glyph!('{' => [(8, 18), (6, 16), (6, 11), (4, 9), (6, 7), (6, 2), (8, 0)]),
    glyph!('|' => [(6, 18), (6, 0)]),
    glyph!('}' => [(4, 18), (6, 16), (6, 11), (8, 9), (6, 7), (6, 2), (4, 0)]),
    glyph!('~' => [(0, 8), (3, 11), (6, 9), (9, 7), (12, 10)]),
];
