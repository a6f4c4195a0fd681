//! Parsing of the plain-text registry into an extension→MIME-type map.
//!
//! Registry lines look like `text/html html htm`: the first token is the
//! canonical MIME type, every following token an extension mapped to it.
//! Lines starting with `#` are comments. Parsing cannot fail; malformed
//! lines are skipped.

use std::collections::HashMap;

/// Extension→MIME-type mapping, iterated in parse order.
///
/// Keys are unique and last-write-wins: a later registry line overwrites
/// the stored MIME type for an extension already seen, but the entry keeps
/// the position of its first occurrence.
#[derive(Debug, Default, Clone)]
pub struct MimeMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl MimeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses registry text into a map.
    ///
    /// Skips blank lines, `#` comment lines, and lines with fewer than two
    /// whitespace-separated tokens.
    pub fn parse(text: &str) -> Self {
        let mut map = Self::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let tokens: Vec<&str> = line.split_ascii_whitespace().collect();
            if tokens.len() < 2 {
                continue;
            }
            let mime = tokens[0];
            for ext in &tokens[1..] {
                map.insert(ext, mime);
            }
        }
        map
    }

    /// Inserts or overwrites the MIME type for `ext`.
    pub fn insert(&mut self, ext: &str, mime: &str) {
        if let Some(&i) = self.index.get(ext) {
            self.entries[i].1 = mime.to_string();
        } else {
            self.index.insert(ext.to_string(), self.entries.len());
            self.entries.push((ext.to_string(), mime.to_string()));
        }
    }

    pub fn get(&self, ext: &str) -> Option<&str> {
        self.index.get(ext).map(|&i| self.entries[i].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates (extension, MIME type) pairs in parse order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(e, m)| (e.as_str(), m.as_str()))
    }
}
