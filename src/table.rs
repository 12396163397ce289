//! Fixed Morse code table: the 36 letter and digit patterns.
//!
//! The patterns are the externally standardized International Morse codes.
//! The table is compiled-in, immutable, and matched by exact equality —
//! no prefix or fuzzy matching.

/// Sentinel character displayed for sequences that resolve to nothing.
pub const UNRECOGNIZED: char = '?';

/// Pattern → character mapping, letters A–Z then digits 0–9.
pub const CODE_TABLE: [(&str, char); 36] = [
    (".-", 'A'),
    ("-...", 'B'),
    ("-.-.", 'C'),
    ("-..", 'D'),
    (".", 'E'),
    ("..-.", 'F'),
    ("--.", 'G'),
    ("....", 'H'),
    ("..", 'I'),
    (".---", 'J'),
    ("-.-", 'K'),
    (".-..", 'L'),
    ("--", 'M'),
    ("-.", 'N'),
    ("---", 'O'),
    (".--.", 'P'),
    ("--.-", 'Q'),
    (".-.", 'R'),
    ("...", 'S'),
    ("-", 'T'),
    ("..-", 'U'),
    ("...-", 'V'),
    (".--", 'W'),
    ("-..-", 'X'),
    ("-.--", 'Y'),
    ("--..", 'Z'),
    ("-----", '0'),
    (".----", '1'),
    ("..---", '2'),
    ("...--", '3'),
    ("....-", '4'),
    (".....", '5'),
    ("-....", '6'),
    ("--...", '7'),
    ("---..", '8'),
    ("----.", '9'),
];

/// Resolve a dot-dash pattern to its character.
///
/// Exact linear match over the 36 entries; patterns are unique by
/// construction of the alphabet, so the first hit is the only hit.
pub fn lookup(pattern: &str) -> Option<char> {
    CODE_TABLE
        .iter()
        .find(|(p, _)| *p == pattern)
        .map(|(_, c)| *c)
}
