// tests/pipeline_e2e.rs
use std::fs;
use std::path::PathBuf;

use sp_wordfreq::freq::Tally;
use sp_wordfreq::report;
use sp_wordfreq::tokenize;
use sp_wordfreq::transcript::{self, Payload};

fn tmp_file(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("sp_wordfreq_e2e_{}", name));
    let _ = fs::remove_file(&p);
    p
}

/// Wrap page HTML the way the parse API does: escaped text inside the
/// first grandchild of the envelope root.
fn envelope(paragraphs: &[&str]) -> String {
    let mut html = String::new();
    for p in paragraphs {
        html.push_str("<p>");
        html.push_str(p);
        html.push_str("</p>");
    }
    let escaped = html.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;");
    format!(
        r#"<api><parse title="Episodenmitschrift"><text xml:space="preserve">{escaped}</text></parse></api>"#
    )
}

/// Feed one envelope through fetch-parse-tokenize-tally, the way the run
/// loop does. Returns false when the episode was skipped.
fn tally_episode(tally: &mut Tally, xml: &str) -> bool {
    match transcript::parse_envelope(xml).unwrap() {
        Payload::Missing | Payload::ApiError => false,
        Payload::Text(html) => {
            let text = transcript::paragraph_text(&html);
            tally.extend(tokenize::words(&text));
            true
        }
    }
}

#[test]
fn two_episodes_tally_and_report() {
    let mut tally = Tally::new();

    assert!(tally_episode(
        &mut tally,
        &envelope(&["Bob ate jellyfish. Bob ate again."]),
    ));
    assert!(tally_episode(&mut tally, &envelope(&["Patrick ate too."])));

    assert_eq!(tally.len(), 6);
    let rows = tally.into_rows();

    // Unique maximum comes first.
    assert_eq!(rows[0], ("ate".to_string(), 3));
    let expect = [
        ("bob", 2),
        ("jellyfish", 1),
        ("again", 1),
        ("patrick", 1),
        ("too", 1),
    ];
    for (word, n) in expect {
        let row = rows
            .iter()
            .find(|(w, _)| w.eq_ignore_ascii_case(word))
            .unwrap_or_else(|| panic!("missing row for {word}"));
        assert_eq!(row.1, n);
    }

    // First-seen casing shows up in the report.
    assert!(rows.iter().any(|(w, _)| w == "Bob"));

    let path = tmp_file("report.txt");
    report::write(&path, &rows).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("ate\t3\n"));
    assert_eq!(contents.lines().count(), 6);
    let _ = fs::remove_file(&path);
}

#[test]
fn skipped_episodes_contribute_nothing() {
    let mut tally = Tally::new();

    // No root element: silent skip.
    assert!(!tally_episode(&mut tally, ""));
    // API error element: skip with a notice from the run loop.
    assert!(!tally_episode(
        &mut tally,
        r#"<api><error code="missingtitle" info="Die Seite existiert nicht."/></api>"#,
    ));
    assert!(tally.is_empty());

    // The run continues: a later episode still tallies.
    assert!(tally_episode(&mut tally, &envelope(&["Immer noch da."])));
    assert_eq!(tally.len(), 3);
}

#[test]
fn counts_never_increase_down_the_file() {
    let mut tally = Tally::new();
    tally_episode(
        &mut tally,
        &envelope(&["alpha alpha alpha beta beta gamma", "delta delta beta gamma"]),
    );

    let rows = tally.into_rows();
    let rendered = report::render(&rows);

    let mut last = u32::MAX;
    for line in rendered.lines() {
        let (_, count) = line.split_once('\t').unwrap();
        let count: u32 = count.parse().unwrap();
        assert!(count <= last);
        last = count;
    }
}

#[test]
fn paragraph_boundaries_do_not_merge_words() {
    let mut tally = Tally::new();
    // "…Ende</p><p>Anfang…" must not fuse into "EndeAnfang".
    tally_episode(&mut tally, &envelope(&["Das Ende", "Anfang gut"]));

    let rows = tally.into_rows();
    assert!(rows.iter().any(|(w, _)| w == "Ende"));
    assert!(rows.iter().any(|(w, _)| w == "Anfang"));
}
