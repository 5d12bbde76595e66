// src/episodes.rs

use std::error::Error;

use crate::core::html::{inner_after_open_tag, next_tag_block_ci, strip_tags, tag_attr_ci};
use crate::core::net;
use crate::core::sanitize::normalize_entities;
use crate::params::{
    API_QUERY_TAIL, API_URL, EPISODE_LIMIT, EPISODE_SUFFIX, INDEX_URL, PAGE_NEXT, PAGE_PREV,
    TRANSCRIPT_PREFIX,
};

/// Fetch the episode index page. Any failure here aborts the run.
pub fn fetch_index() -> Result<String, Box<dyn Error>> {
    net::http_get(INDEX_URL)
}

/// Walk the index table cells in document order and build one parse-API URL
/// per episode. Pagination cells (arrow glyphs) are dropped; at most
/// `EPISODE_LIMIT` episodes are taken, fewer if the table is shorter.
pub fn episode_urls(doc: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let mut urls = Vec::new();
    let mut pos = 0usize;

    while let Some((td_s, td_e)) = next_tag_block_ci(doc, "td", pos) {
        let cell = &doc[td_s..td_e];
        pos = td_e;

        let text = strip_tags(normalize_entities(&inner_after_open_tag(cell)));
        if text.contains(PAGE_NEXT) || text.contains(PAGE_PREV) {
            continue;
        }
        if urls.len() == EPISODE_LIMIT {
            break;
        }

        urls.push(transcript_url(&episode_name(cell)?));
    }

    Ok(urls)
}

/// Last path segment of the cell's first anchor, minus the page-type suffix.
fn episode_name(cell: &str) -> Result<String, Box<dyn Error>> {
    let (a_s, a_e) =
        next_tag_block_ci(cell, "a", 0).ok_or("Index cell without episode link")?;
    let href = tag_attr_ci(&cell[a_s..a_e], "href")
        .ok_or("Episode link without href")?;

    let segment = href.rsplit('/').next().unwrap_or(&href);
    let name = segment.strip_suffix(EPISODE_SUFFIX).unwrap_or(segment);
    Ok(s!(name))
}

fn transcript_url(name: &str) -> String {
    join!(API_URL, "?page=", TRANSCRIPT_PREFIX, name, API_QUERY_TAIL)
}
