//! Locating the YAML front matter block of a Markdown note

/// A document split into its front matter and the text after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    /// YAML between the delimiters, without the delimiter lines
    pub yaml: &'a str,
    /// Everything after the closing delimiter line
    pub body: &'a str,
}

/// Split off a leading `---` ... `---` (or `...`) block.
///
/// Returns `None` when the document does not open with a delimiter line or
/// the block is never closed.
pub fn split_front_matter(document: &str) -> Option<FrontMatter<'_>> {
    let rest = document.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;
    let yaml_start = document.len() - rest.len();

    let mut offset = yaml_start;
    for line in rest.split_inclusive('\n') {
        let content = line.trim_end_matches(&['\r', '\n'][..]);
        if content == "---" || content == "..." {
            return Some(FrontMatter {
                yaml: &document[yaml_start..offset],
                body: &document[offset + line.len()..],
            });
        }
        offset += line.len();
    }

    None
}
