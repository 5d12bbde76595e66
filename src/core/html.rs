// src/core/html.rs
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Find the next `<tag …>…</tag>` span at or after `from`.
/// The tag name must be followed by '>', '/' or whitespace, so "p"
/// does not hit "<pre".
pub fn next_tag_block_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let open = join!("<", &to_lower(tag));
    let close = join!("</", &to_lower(tag), ">");

    let mut at = from;
    loop {
        let start = lc.get(at..)?.find(&open)? + at;
        let after = start + open.len();
        match lc.as_bytes().get(after).copied() {
            Some(b'>') | Some(b'/') | Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') => {
                let open_end = s[start..].find('>')? + start + 1;
                let end_rel = lc[open_end..].find(&close)?;
                return Some((start, open_end + end_rel + close.len()));
            }
            _ => at = after, // "<pX…" for some other tag; keep scanning
        }
    }
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Read a quoted attribute value out of a block's open tag.
pub fn tag_attr_ci(block: &str, name: &str) -> Option<String> {
    let open = &block[..block.find('>')?];
    let lc = to_lower(open);
    let needle = join!(&to_lower(name), "=");
    let at = lc.find(&needle)? + needle.len();
    let rest = &open[at..];
    let quote = rest.chars().next()?;
    if quote != '"' && quote != '\'' {
        return None;
    }
    let rest = &rest[1..];
    let end = rest.find(quote)?;
    Some(rest[..end].to_string())
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}
