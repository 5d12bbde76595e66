// src/params.rs

// Net config
pub const INDEX_URL: &str = "http://de.spongepedia.org/index.php/Episoden";
pub const API_URL: &str = "http://de.spongepedia.org/api.php";

// Episode index
// The index table currently lists 445 episodes. Pagination cells are
// recognized by their arrow glyphs and dropped before counting.
pub const EPISODE_LIMIT: usize = 445;
pub const EPISODE_SUFFIX: &str = "_(Episode)";
pub const PAGE_PREV: char = '←';
pub const PAGE_NEXT: char = '→';

// Transcript pages live under their own namespace prefix
pub const TRANSCRIPT_PREFIX: &str = "Episodenmitschrift:_";
pub const API_QUERY_TAIL: &str = "&format=xml&action=parse&prop=text";

// Export
pub const OUT_FILE: &str = "frequency.txt";
pub const OUT_SEP: char = '\t';
