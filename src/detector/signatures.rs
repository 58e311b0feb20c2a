//! Content sniffing for entropy-dense formats

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Number of leading bytes inspected
pub const SNIFF_LEN: usize = 512;

/// Markers of formats whose payload is already compressed
const DENSE_MARKERS: [&[u8]; 4] = [
    b"PNG",
    b"JFIF",
    b"GIF",
    b"PK\x03\x04",
];

/// Read up to [`SNIFF_LEN`] bytes from the start of a file
pub fn read_sample(path: &Path) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut sample = Vec::with_capacity(SNIFF_LEN);
    file.take(SNIFF_LEN as u64).read_to_end(&mut sample)?;
    Ok(sample)
}

/// Whether the sample contains a PNG, JFIF, GIF or ZIP marker
///
/// JFIF sits a few bytes past the JPEG SOI marker, so the whole sample is
/// searched rather than just its prefix.
pub fn has_dense_marker(sample: &[u8]) -> bool {
    DENSE_MARKERS
        .iter()
        .any(|marker| sample.windows(marker.len()).any(|window| window == *marker))
}
