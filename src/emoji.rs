//! Static emoji reference table.

use std::io::{self, Write};

const EMOJI_NAMES: [(&str, &str); 41] = [
    ("😀", "grinning face"),
    ("😃", "smiling face with big eyes"),
    ("😄", "smiling face with smiling eyes"),
    ("😁", "beaming face"),
    ("😆", "grinning squinting face"),
    ("😅", "grinning face with sweat"),
    ("😂", "face with tears of joy"),
    ("🤣", "rolling on the floor laughing"),
    ("😊", "smiling face with blushing cheeks"),
    ("😍", "smiling face with heart-eyes"),
    ("😘", "face blowing a kiss"),
    ("😎", "smiling face with sunglasses"),
    ("🤩", "star-struck"),
    ("😋", "face savoring food"),
    ("😜", "winking face with tongue"),
    ("🤔", "thinking face"),
    ("😴", "sleeping face"),
    ("😷", "face with medical mask"),
    ("🤖", "robot"),
    ("👋", "waving hand"),
    ("👍", "thumbs up"),
    ("👎", "thumbs down"),
    ("🙏", "folded hands"),
    ("❤", "red heart"),
    ("🔥", "fire"),
    ("⭐", "star"),
    ("🌙", "moon"),
    ("☀", "sun"),
    ("🌍", "earth globe"),
    ("🚀", "rocket"),
    ("⚽", "soccer ball"),
    ("🎵", "musical note"),
    ("🎉", "party popper"),
    ("💡", "light bulb"),
    ("📚", "books"),
    ("💻", "laptop"),
    ("📱", "mobile phone"),
    ("🍎", "red apple"),
    ("🍕", "pizza"),
    ("🍔", "burger"),
    ("⚡", "high voltage"),
];

/// `(symbol, name)` pairs in listing order.
#[must_use]
pub fn entries() -> &'static [(&'static str, &'static str)] {
    &EMOJI_NAMES
}

/// Human-readable name for `symbol`.
#[must_use]
pub fn lookup(symbol: &str) -> Option<&'static str> {
    EMOJI_NAMES
        .iter()
        .find(|(candidate, _)| *candidate == symbol)
        .map(|(_, name)| *name)
}

/// Write one `symbol: name` line per entry.
pub fn print_table<W: Write>(out: &mut W) -> io::Result<()> {
    for (symbol, name) in entries() {
        writeln!(out, "{symbol}: {name}")?;
    }
    Ok(())
}
