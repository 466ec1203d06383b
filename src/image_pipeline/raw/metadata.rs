//! File name metadata parser.
//!
//! RAW files carry no header; their geometry and layout live in the name, e.g.
//! `Idx1_Raw_20250402.4064X3048.unpack10_grbg.vcmpos_843.raw`. Matching is substring
//! based and driven by the order of the candidate lists, not by where a keyword occurs.

use crate::image_pipeline::raw::types::{BayerPattern, Packing, ParsedRawName};

/// Packing keywords in priority order.
pub const DEFAULT_PACKINGS: [Packing; 3] = [Packing::Unpack10, Packing::Raw8, Packing::Unpack12];

/// Pattern keywords in priority order.
pub const DEFAULT_PATTERNS: [BayerPattern; 4] = [
    BayerPattern::GRBG,
    BayerPattern::RGGB,
    BayerPattern::BGGR,
    BayerPattern::GBRG,
];

/// Parses `file_name` with the default candidate lists.
pub fn parse_raw_name(file_name: &str) -> ParsedRawName {
    parse_raw_name_with(file_name, &DEFAULT_PACKINGS, &DEFAULT_PATTERNS)
}

/// Parses `file_name`; the first candidate of each list found anywhere in the name wins.
pub fn parse_raw_name_with(
    file_name: &str,
    packings: &[Packing],
    patterns: &[BayerPattern],
) -> ParsedRawName {
    let lower = file_name.to_ascii_lowercase();
    let (width, height) = match find_resolution(file_name) {
        Some((w, h)) => (Some(w), Some(h)),
        None => (None, None),
    };

    ParsedRawName {
        width,
        height,
        packing: packings.iter().copied().find(|p| lower.contains(p.keyword())),
        pattern: patterns
            .iter()
            .copied()
            .find(|p| lower.contains(&p.name().to_ascii_lowercase())),
    }
}

/// Finds the leftmost `<digits>X<digits>` token, `X` in either case.
fn find_resolution(name: &str) -> Option<(usize, usize)> {
    let bytes = name.as_bytes();
    let mut start = 0;
    while start < bytes.len() {
        if !bytes[start].is_ascii_digit() {
            start += 1;
            continue;
        }
        let end = digit_run_end(bytes, start);
        let sep = end;
        if sep + 1 < bytes.len()
            && (bytes[sep] == b'x' || bytes[sep] == b'X')
            && bytes[sep + 1].is_ascii_digit()
        {
            let height_end = digit_run_end(bytes, sep + 1);
            // Values too large for usize are treated as absent.
            let width = name[start..end].parse().ok()?;
            let height = name[sep + 1..height_end].parse().ok()?;
            return Some((width, height));
        }
        start = end;
    }
    None
}

fn digit_run_end(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(bytes.len(), |n| from + n)
}
