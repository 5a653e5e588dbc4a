//! Document and section model.
//!
//! A document is plain text with markdown-style top-level headings
//! (`# Title`). Each heading opens a section; the section's id is the
//! slugified heading text and its row range runs until the next heading.
//! Lines before the first heading belong to no section.

/// An addressable region of the document, identified by a unique slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub title: String,
    /// First row of the section (the heading row)
    pub top: u16,
    /// Number of rows up to the next section
    pub height: u16,
}

impl Section {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// A `[label](#fragment)` reference inside the document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineLink {
    /// Row the link appears on
    pub line: usize,
    /// First column of the link token (chars)
    pub start: usize,
    /// One past the last column of the link token (chars)
    pub end: usize,
    pub label: String,
    pub fragment: String,
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    lines: Vec<String>,
    sections: Vec<Section>,
    links: Vec<InlineLink>,
}

impl Document {
    /// Parse a document from plain text.
    pub fn parse(input: &str) -> Self {
        let mut lines: Vec<String> = Vec::new();
        let mut sections: Vec<Section> = Vec::new();
        let mut links: Vec<InlineLink> = Vec::new();

        for raw in input.lines() {
            let row = lines.len();
            if let Some(title) = heading_title(raw) {
                if let Some(prev) = sections.last_mut() {
                    prev.height = row as u16 - prev.top;
                }
                let id = unique_slug(&title, &sections);
                sections.push(Section {
                    id,
                    title: title.clone(),
                    top: row as u16,
                    height: 0,
                });
            } else {
                links.extend(scan_links(raw, row));
            }
            lines.push(raw.to_string());
        }

        if let Some(last) = sections.last_mut() {
            last.height = lines.len() as u16 - last.top;
        }

        Self {
            lines,
            sections,
            links,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn links(&self) -> &[InlineLink] {
        &self.links
    }

    /// Look up a section by id; a dangling fragment yields `None`.
    pub fn section(&self, id: &str) -> Option<&Section> {
        let id = id.strip_prefix('#').unwrap_or(id);
        self.sections.iter().find(|s| s.id == id)
    }

    /// Whether the given row is a section heading.
    pub fn is_heading(&self, row: u16) -> bool {
        self.sections.iter().any(|s| s.top == row)
    }

    pub fn total_height(&self) -> u16 {
        self.lines.len() as u16
    }

    /// The link covering the given row/column, if any.
    pub fn link_at(&self, line: usize, col: usize) -> Option<&InlineLink> {
        self.links
            .iter()
            .find(|l| l.line == line && l.start <= col && col < l.end)
    }
}

fn heading_title(line: &str) -> Option<String> {
    let rest = line.strip_prefix("# ")?;
    let title = rest.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Slugify a heading: lowercase alphanumerics, runs of anything else
/// collapsed to single dashes.
pub fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            for lc in c.to_lowercase() {
                out.push(lc);
            }
        } else {
            pending_dash = true;
        }
    }
    out
}

fn unique_slug(title: &str, existing: &[Section]) -> String {
    let base = slug(title);
    if !existing.iter().any(|s| s.id == base) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base}-{n}");
        if !existing.iter().any(|s| s.id == candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Scan one line for `[label](#fragment)` tokens, recording char columns.
fn scan_links(line: &str, row: usize) -> Vec<InlineLink> {
    let chars: Vec<char> = line.chars().collect();
    let mut links = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '[' {
            i += 1;
            continue;
        }
        let Some(label_end) = find_from(&chars, i + 1, ']') else {
            break;
        };
        if label_end + 1 >= chars.len() || chars[label_end + 1] != '(' {
            i = label_end + 1;
            continue;
        }
        let Some(target_end) = find_from(&chars, label_end + 2, ')') else {
            break;
        };
        let target: String = chars[label_end + 2..target_end].iter().collect();
        if let Some(fragment) = target.strip_prefix('#') {
            if !fragment.is_empty() {
                links.push(InlineLink {
                    line: row,
                    start: i,
                    end: target_end + 1,
                    label: chars[i + 1..label_end].iter().collect(),
                    fragment: fragment.to_string(),
                });
            }
        }
        i = target_end + 1;
    }

    links
}

fn find_from(chars: &[char], start: usize, needle: char) -> Option<usize> {
    chars[start..]
        .iter()
        .position(|&c| c == needle)
        .map(|p| start + p)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
intro line
# Hello
hello body
hello body 2
# Works
works body
# About Me
about body
see [hello](#hello) again
# Contact
contact body";

    #[test]
    fn test_parse_sections() {
        let doc = Document::parse(SAMPLE);
        let ids: Vec<&str> = doc.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["hello", "works", "about-me", "contact"]);

        let hello = doc.section("hello").unwrap();
        assert_eq!(hello.top, 1);
        assert_eq!(hello.height, 3);

        let contact = doc.section("contact").unwrap();
        assert_eq!(contact.top, 9);
        assert_eq!(contact.height, 2);
        assert_eq!(doc.total_height(), 11);
    }

    #[test]
    fn test_fragment_prefix_accepted() {
        let doc = Document::parse(SAMPLE);
        assert_eq!(doc.section("#works").unwrap().id, "works");
        assert!(doc.section("#missing").is_none());
    }

    #[test]
    fn test_preamble_belongs_to_no_section() {
        let doc = Document::parse(SAMPLE);
        assert!(doc.sections().iter().all(|s| s.top > 0));
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("About Me"), "about-me");
        assert_eq!(slug("  Hello,  World!  "), "hello-world");
        assert_eq!(slug("Größe"), "größe");
    }

    #[test]
    fn test_duplicate_headings_get_unique_ids() {
        let doc = Document::parse("# Notes\na\n# Notes\nb");
        let ids: Vec<&str> = doc.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["notes", "notes-2"]);
    }

    #[test]
    fn test_inline_links() {
        let doc = Document::parse(SAMPLE);
        assert_eq!(doc.links().len(), 1);
        let link = &doc.links()[0];
        assert_eq!(link.fragment, "hello");
        assert_eq!(link.label, "hello");
        assert_eq!(link.line, 8);
        assert_eq!(link.start, 4);

        assert!(doc.link_at(link.line, link.start).is_some());
        assert!(doc.link_at(link.line, link.end).is_none());
        assert!(doc.link_at(0, 0).is_none());
    }

    #[test]
    fn test_non_section_link_ignored() {
        let doc = Document::parse("see [docs](https://example.com) here");
        assert!(doc.links().is_empty());
    }
}
