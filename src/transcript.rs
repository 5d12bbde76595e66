// src/transcript.rs

use std::error::Error;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::core::html::{inner_after_open_tag, next_tag_block_ci, strip_tags};
use crate::core::net;
use crate::core::sanitize::normalize_entities;

/// Outcome of one episode fetch. Only the two modeled skip conditions are
/// soft; everything else (network, malformed XML) propagates as an error.
pub enum Payload {
    /// The page HTML carried inside the envelope.
    Text(String),
    /// Envelope with no root element: skip silently.
    Missing,
    /// The API answered with an `<error>` element: the episode has no
    /// transcript page. Skip with a notice.
    ApiError,
}

pub fn fetch(url: &str) -> Result<Payload, Box<dyn Error>> {
    parse_envelope(&net::http_get(url)?)
}

/// Walk the XML envelope: root → first child → first grandchild, whose text
/// value is the page HTML. `<error>` may arrive as a start or an empty tag.
pub fn parse_envelope(xml: &str) -> Result<Payload, Box<dyn Error>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut depth = 0usize;
    let mut saw_root = false;
    let mut saw_child = false;
    let mut in_payload = false;
    let mut payload = s!();

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(e) => {
                match depth {
                    0 => saw_root = true,
                    1 => {
                        if !saw_child {
                            saw_child = true;
                            if e.local_name().as_ref() == b"error" {
                                return Ok(Payload::ApiError);
                            }
                        }
                    }
                    2 => in_payload = true,
                    _ => {}
                }
                depth += 1;
            }
            Event::Empty(e) => match depth {
                0 => saw_root = true,
                1 => {
                    if !saw_child {
                        saw_child = true;
                        if e.local_name().as_ref() == b"error" {
                            return Ok(Payload::ApiError);
                        }
                    }
                }
                2 => return Ok(Payload::Text(s!())),
                _ => {}
            },
            Event::Text(t) => {
                if in_payload {
                    payload.push_str(&t.unescape()?);
                }
            }
            Event::CData(t) => {
                if in_payload {
                    payload.push_str(&String::from_utf8_lossy(&t.into_inner()));
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if in_payload && depth == 2 {
                    return Ok(Payload::Text(payload));
                }
            }
            _ => {}
        }
    }

    if !saw_root {
        return Ok(Payload::Missing);
    }
    // Root present but the expected child/grandchild chain is not: the
    // envelope shape changed, which is not a skippable condition.
    Err("Envelope has no payload element".into())
}

/// Concatenate the text of every paragraph in document order, one line per
/// paragraph. Everything outside `<p>` blocks (navigation, infoboxes,
/// category links) is ignored.
pub fn paragraph_text(html: &str) -> String {
    let mut text = s!();
    let mut pos = 0usize;

    while let Some((p_s, p_e)) = next_tag_block_ci(html, "p", pos) {
        let block = &html[p_s..p_e];
        pos = p_e;

        text.push_str(&strip_tags(normalize_entities(&inner_after_open_tag(block))));
        text.push('\n');
    }
    text
}
