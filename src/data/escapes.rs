//! LaTeX special character escapes
//!
//! Tokens read from a plan file are copied verbatim into the table by
//! default. When escaping is enabled, characters that LaTeX treats as
//! markup are replaced using this table.

use std::borrow::Cow;

use phf::phf_map;

/// Special character to its text-mode LaTeX spelling
pub static LATEX_ESCAPES: phf::Map<char, &'static str> = phf_map! {
    '&' => "\\&",
    '%' => "\\%",
    '$' => "\\$",
    '#' => "\\#",
    '_' => "\\_",
    '{' => "\\{",
    '}' => "\\}",
    '~' => "\\textasciitilde{}",
    '^' => "\\textasciicircum{}",
    '\\' => "\\textbackslash{}",
};

/// Check if a character needs escaping in LaTeX text mode
#[inline]
pub fn is_special(c: char) -> bool {
    LATEX_ESCAPES.contains_key(&c)
}

/// First special character in a token, if any
#[inline]
pub fn find_special(token: &str) -> Option<char> {
    token.chars().find(|&c| is_special(c))
}

/// Escape a token for LaTeX text mode
///
/// Borrows the input when nothing needs replacing.
pub fn escape_latex(token: &str) -> Cow<'_, str> {
    if find_special(token).is_none() {
        return Cow::Borrowed(token);
    }

    let mut out = String::with_capacity(token.len() + 8);
    for c in token.chars() {
        match LATEX_ESCAPES.get(&c) {
            Some(rep) => out.push_str(rep),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}
