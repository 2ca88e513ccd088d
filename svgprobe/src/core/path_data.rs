// src/core/path_data.rs
use regex::Regex;
use std::sync::OnceLock;

// Integer or decimal literal with optional sign. Potrace never emits
// exponents, so scientific notation is not recognized; an `e` reads as a
// command letter.
fn number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[-+]?\d*\.?\d+").expect("valid regex"))
}

/// Tokenizes a path-data string into its numeric operands, in order of
/// appearance. Command letters and separators are skipped; a string with
/// no numbers yields an empty sequence.
#[must_use]
pub fn tokenize(data: &str) -> Vec<f64> {
    number_regex()
        .find_iter(data)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// One drawing command letter and where its operands begin in the flat
/// numeric token sequence.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandSite {
    pub op: char,
    /// Index of the first token at or after the letter. Equals the total
    /// token count when nothing follows.
    pub operand_index: usize,
}

/// Walks the path data pairing each command letter with the flat index of
/// its first following operand.
#[must_use]
pub fn scan_commands(data: &str) -> Vec<CommandSite> {
    let token_starts: Vec<usize> = number_regex().find_iter(data).map(|m| m.start()).collect();

    data.char_indices()
        .filter(|&(_, ch)| ch.is_ascii_alphabetic())
        .map(|(pos, ch)| CommandSite {
            op: ch,
            operand_index: token_starts.partition_point(|&start| start < pos),
        })
        .collect()
}

/// Flat token indices of the first coordinate of each moveto command,
/// absolute or relative. A trailing moveto with no operands is dropped.
#[must_use]
pub fn move_positions(data: &str) -> Vec<usize> {
    let token_count = number_regex().find_iter(data).count();

    scan_commands(data)
        .into_iter()
        .filter(|site| matches!(site.op, 'M' | 'm') && site.operand_index < token_count)
        .map(|site| site.operand_index)
        .collect()
}
