// src/runner.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::{
    episodes,
    freq::Tally,
    params,
    progress::Progress,
    report, tokenize, transcript,
    transcript::Payload,
};

/// Summary of one completed run.
pub struct RunSummary {
    pub episodes_done: usize,
    pub skipped: usize,
    pub distinct_words: usize,
    pub out_path: PathBuf,
}

/// The whole pipeline, start to finish: enumerate episode URLs, fetch and
/// tally each transcript in order, then sort and write the report.
///
/// Fetch and parse failures abort the run. Only two per-episode conditions
/// are skippable: an envelope with no root (silent) and an API error
/// element (with a notice). Nothing is written until the loop completes.
pub fn run(mut progress: Option<&mut dyn Progress>) -> Result<RunSummary, Box<dyn Error>> {
    let index = episodes::fetch_index()?;
    let urls = episodes::episode_urls(&index)?;
    logf!("Enumerated {} episode pages", urls.len());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(urls.len());
    }

    let mut tally = Tally::new();
    let mut done = 0usize;
    let mut skipped = 0usize;

    for url in urls {
        match transcript::fetch(&url)? {
            Payload::Missing => {
                skipped += 1;
                continue;
            }
            Payload::ApiError => {
                skipped += 1;
                let msg = format!("Episode {url} doesn't exist");
                loge!("{msg}");
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&msg);
                }
                continue;
            }
            Payload::Text(html) => {
                let text = transcript::paragraph_text(&html);
                tally.extend(tokenize::words(&text));
            }
        }

        done += 1;
        logd!("Episode {done}: {} distinct words so far", tally.len());
        if let Some(p) = progress.as_deref_mut() {
            p.episode_done(done);
        }
    }

    let rows = tally.into_rows();
    let out_path = report::write(Path::new(params::OUT_FILE), &rows)?;
    logf!("Wrote {} words to {}", rows.len(), out_path.display());

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary {
        episodes_done: done,
        skipped,
        distinct_words: rows.len(),
        out_path,
    })
}
