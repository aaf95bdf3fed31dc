//! Quote-mark rewriting so a quotation can be nested inside double quotes

/// Replace every double quote with its single-quote counterpart.
///
/// `"` becomes `'`, `“` becomes `‘`, and `”` becomes `’`. Apostrophes and
/// existing single quotes are left alone, so only one level of nesting is
/// handled.
pub fn replace_double_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '"' => '\'',
            '\u{201C}' => '\u{2018}',
            '\u{201D}' => '\u{2019}',
            other => other,
        })
        .collect()
}
