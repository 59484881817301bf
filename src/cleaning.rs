// WHY: per-line noise removal kept separate from segmentation so both can be tested alone

/// Attribution line the source PDF repeats on every page
pub const OHAIR_LIBRARY_NOTICE: &str =
    "Visit the J. C. O\u{2019}Hair Online Library at https://bereanbiblesociety.org/j-c-ohair-online-library/";

const FORM_FEED: char = '\u{000C}';

/// Unicode whitespace plus the information separators U+001C..=U+001F, which PDF
/// extraction leaves at line edges
fn is_edge_space(ch: char) -> bool {
    ch.is_whitespace() || ('\u{001C}'..='\u{001F}').contains(&ch)
}

/// Removes blacklisted boilerplate and normalizes a raw line
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    blacklist: Vec<String>,
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new(vec![OHAIR_LIBRARY_NOTICE.to_string()])
    }
}

impl NoiseFilter {
    /// Empty entries are dropped, they would match everywhere
    pub fn new(blacklist: Vec<String>) -> Self {
        let blacklist = blacklist.into_iter().filter(|entry| !entry.is_empty()).collect();
        Self { blacklist }
    }

    pub fn blacklist(&self) -> &[String] {
        &self.blacklist
    }

    /// Produce the cleaned form of one raw line
    ///
    /// Blacklisted substrings are removed, form feeds stripped, the text lowercased and
    /// trimmed of whitespace and information separators. The result never contains a
    /// blacklisted entry and cleaning it again returns it unchanged.
    pub fn clean(&self, raw: &str) -> String {
        let mut text = self.strip_blacklisted(raw);
        text.retain(|ch| ch != FORM_FEED);
        let text = self.strip_blacklisted(&text.to_lowercase());
        text.trim_matches(is_edge_space).to_string()
    }

    /// Remove entries until none remain; a removal can join two halves of another entry
    fn strip_blacklisted(&self, text: &str) -> String {
        let mut result = text.to_string();
        loop {
            let before = result.len();
            for entry in &self.blacklist {
                if result.contains(entry.as_str()) {
                    result = result.replace(entry.as_str(), "");
                }
            }
            if result.len() == before {
                return result;
            }
        }
    }
}
