//! Atom feed parsing for the arXiv export API.
//!
//! The export API answers with an Atom document; each `<entry>` is one
//! paper. This module walks the document with quick-xml's event reader and
//! builds [`Paper`] values: short id (last path segment of the entry id
//! URL), whitespace-collapsed title and abstract, authors, RFC 3339
//! timestamps, category terms plus the `arxiv:primary_category`, and the
//! PDF / abstract-page links.

use chrono::{DateTime, Utc};
use papyr_core::{Error, Paper, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parse an Atom response body into papers, in document order.
pub fn parse_feed(xml: &str) -> Result<Vec<Paper>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut papers = Vec::new();
    let mut entry: Option<EntryDraft> = None;
    let mut in_author = false;
    let mut text_field = TextField::None;

    loop {
        match reader.read_event() {
            Err(e) => return Err(Error::parse(format!("malformed feed: {e}"))),
            Ok(Event::Eof) => break,

            Ok(Event::Start(e)) => match e.name().local_name().as_ref() {
                b"entry" => entry = Some(EntryDraft::default()),
                b"author" if entry.is_some() => in_author = true,
                b"id" if entry.is_some() => text_field = TextField::Id,
                b"title" if entry.is_some() => text_field = TextField::Title,
                b"summary" if entry.is_some() => text_field = TextField::Summary,
                b"published" if entry.is_some() => text_field = TextField::Published,
                b"updated" if entry.is_some() => text_field = TextField::Updated,
                b"name" if in_author => text_field = TextField::AuthorName,
                b"category" | b"primary_category" | b"link" => {
                    if let Some(draft) = entry.as_mut() {
                        draft.apply_attributes(&e)?;
                    }
                }
                _ => {}
            },

            // Category and link elements are self-closing in practice
            Ok(Event::Empty(e)) => match e.name().local_name().as_ref() {
                b"category" | b"primary_category" | b"link" => {
                    if let Some(draft) = entry.as_mut() {
                        draft.apply_attributes(&e)?;
                    }
                }
                _ => {}
            },

            Ok(Event::Text(t)) => {
                if let Some(draft) = entry.as_mut() {
                    let text = t
                        .unescape()
                        .map_err(|e| Error::parse(format!("bad text node: {e}")))?;
                    draft.append_text(text_field, &text);
                }
            }

            Ok(Event::End(e)) => match e.name().local_name().as_ref() {
                b"entry" => {
                    if let Some(draft) = entry.take() {
                        papers.push(draft.finish()?);
                    }
                }
                b"author" => in_author = false,
                _ => text_field = TextField::None,
            },

            Ok(_) => {}
        }
    }

    Ok(papers)
}

/// Which entry field the next text node belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
enum TextField {
    None,
    Id,
    Title,
    Summary,
    Published,
    Updated,
    AuthorName,
}

/// Accumulator for one `<entry>`.
#[derive(Debug, Default)]
struct EntryDraft {
    id_url: String,
    title: String,
    summary: String,
    published: String,
    updated: String,
    authors: Vec<String>,
    categories: Vec<String>,
    primary_category: Option<String>,
    pdf_url: Option<String>,
}

impl EntryDraft {
    fn append_text(&mut self, field: TextField, text: &str) {
        let buffer = match field {
            TextField::Id => &mut self.id_url,
            TextField::Title => &mut self.title,
            TextField::Summary => &mut self.summary,
            TextField::Published => &mut self.published,
            TextField::Updated => &mut self.updated,
            TextField::AuthorName => {
                self.authors.push(text.to_string());
                return;
            }
            TextField::None => return,
        };
        if !buffer.is_empty() {
            buffer.push(' ');
        }
        buffer.push_str(text);
    }

    fn apply_attributes(&mut self, element: &BytesStart<'_>) -> Result<()> {
        match element.name().local_name().as_ref() {
            b"primary_category" => {
                self.primary_category = attribute(element, "term")?;
            }
            b"category" => {
                if let Some(term) = attribute(element, "term")? {
                    self.categories.push(term);
                }
            }
            b"link" => {
                // The PDF link carries title="pdf"; other links are the
                // abstract page and DOI, which we reconstruct from the id.
                if attribute(element, "title")?.as_deref() == Some("pdf") {
                    self.pdf_url = attribute(element, "href")?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn finish(self) -> Result<Paper> {
        if self.id_url.is_empty() {
            return Err(Error::parse("entry without id"));
        }

        let short_id = self
            .id_url
            .rsplit('/')
            .next()
            .unwrap_or(&self.id_url)
            .to_string();

        let primary = self
            .primary_category
            .clone()
            .or_else(|| self.categories.first().cloned())
            .ok_or_else(|| Error::parse(format!("entry {short_id} without category")))?;

        let pdf_url = self
            .pdf_url
            .unwrap_or_else(|| format!("https://arxiv.org/pdf/{short_id}"));
        let page_url = format!("https://arxiv.org/abs/{short_id}");

        Ok(
            Paper::new(short_id, collapse_ws(&self.title), collapse_ws(&self.summary))
                .with_authors(self.authors)
                .with_timestamps(
                    parse_timestamp(&self.published)?,
                    parse_timestamp(&self.updated)?,
                )
                .with_categories(self.categories, primary)
                .with_links(pdf_url, page_url),
        )
    }
}

fn attribute(element: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    element
        .try_get_attribute(name)
        .map_err(|e| Error::parse(format!("bad attribute: {e}")))?
        .map(|attr| {
            attr.unescape_value()
                .map(|value| value.into_owned())
                .map_err(|e| Error::parse(format!("bad attribute value: {e}")))
        })
        .transpose()
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::parse(format!("bad timestamp {value:?}: {e}")))
}

/// Collapse runs of whitespace (including the feed's hard line wraps).
fn collapse_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// Tests
// ============================================================================
