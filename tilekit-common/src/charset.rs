//! Character sequences cycled through by flip-clock and split-flap tiles.
//! Each table lists the characters in flip order.

pub const TIME_0_TO_5: &[&str] = &["1", "2", "3", "4", "5", "0"];
pub const TIME_5_TO_0: &[&str] = &["5", "4", "3", "2", "1", "0"];
pub const TIME_0_TO_9: &[&str] = &["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"];
pub const TIME_9_TO_0: &[&str] = &["9", "8", "7", "6", "5", "4", "3", "2", "1", "0"];
pub const TIME_0_TO_12: &[&str] = &[
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];
pub const TIME_0_TO_24: &[&str] = &[
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16", "17",
    "18", "19", "20", "21", "22", "23", "00",
];
pub const TIME_24_TO_0: &[&str] = &[
    "00", "23", "22", "21", "20", "19", "18", "17", "16", "15", "14", "13", "12", "11", "10", "09",
    "08", "07", "06", "05", "04", "03", "02", "01",
];
pub const TIME_00_TO_59: &[&str] = &[
    "00", "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14", "15",
    "16", "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30", "31",
    "32", "33", "34", "35", "36", "37", "38", "39", "40", "41", "42", "43", "44", "45", "46", "47",
    "48", "49", "50", "51", "52", "53", "54", "55", "56", "57", "58", "59",
];
pub const TIME_59_TO_00: &[&str] = &[
    "59", "58", "57", "56", "55", "54", "53", "52", "51", "50", "49", "48", "47", "46", "45", "44",
    "43", "42", "41", "40", "39", "38", "37", "36", "35", "34", "33", "32", "31", "30", "29", "28",
    "27", "26", "25", "24", "23", "22", "21", "20", "19", "18", "17", "16", "15", "14", "13", "12",
    "11", "10", "09", "08", "07", "06", "05", "04", "03", "02", "01", "00",
];
pub const NUMERIC: &[&str] = &[" ", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0"];
pub const ALPHA: &[&str] = &[
    " ", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z",
];
pub const ALPHANUMERIC: &[&str] = &[
    " ", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "A", "B", "C", "D", "E", "F", "G", "H",
    "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
];
pub const EXTENDED: &[&str] = &[
    " ", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "A", "B", "C", "D", "E", "F", "G", "H",
    "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z", "-",
    "/", ":", ",", "", ";", "@", "#", "+", "?", "!", "%", "$", "=", "<", ">",
];
pub const EXTENDED_UMLAUTE: &[&str] = &[
    " ", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "A", "B", "C", "D", "E", "F", "G", "H",
    "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z", "-",
    "/", ":", ",", "", ";", "@", "#", "+", "?", "!", "%", "$", "=", "<", ">", "Ä", "Ö", "Ü", "ß",
];

/// The character that follows `current` in `set`, wrapping at the end.
/// Characters not in the set start over at the first entry.
pub fn next_in<'a>(set: &[&'a str], current: &str) -> Option<&'a str> {
    let idx = set
        .iter()
        .position(|c| *c == current)
        .map(|i| (i + 1) % set.len())
        .unwrap_or(0);
    set.get(idx).copied()
}
