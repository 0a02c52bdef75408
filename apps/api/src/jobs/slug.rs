//! Slug codec — human-readable URL segments for job postings.
//!
//! `encode` is total and deterministic. `decode` is a best-effort inverse:
//! it recovers only the last hyphen segment, which callers must treat as an
//! id *prefix* lookup key. A store miss on that prefix is a normal miss,
//! never a decode error.

/// Builds the display slug: slugified title + first hyphen segment of the id.
pub fn encode(title: &str, id: &str) -> String {
    let base = slugify(title);
    let segment = id.split('-').next().unwrap_or("");
    if base.is_empty() {
        segment.to_string()
    } else {
        format!("{base}-{segment}")
    }
}

/// Recovers the id-prefix segment from a slug: the last hyphen segment.
/// Returns `None` only for slugs with no usable trailing segment.
pub fn decode(slug: &str) -> Option<&str> {
    match slug.rsplit('-').next() {
        Some(seg) if !seg.is_empty() => Some(seg),
        _ => None,
    }
}

/// Lowercases and collapses non-alphanumeric runs to single hyphens,
/// trimming hyphens at both edges.
fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut gap = false;
    for c in title.chars() {
        if c.is_alphanumeric() {
            if gap && !out.is_empty() {
                out.push('-');
            }
            gap = false;
            out.extend(c.to_lowercase());
        } else {
            gap = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_matches_documented_example() {
        assert_eq!(
            encode("Senior GHL Developer", "acb5537b-xxxx"),
            "senior-ghl-developer-acb5537b"
        );
    }

    #[test]
    fn test_encode_collapses_punctuation_runs() {
        assert_eq!(
            encode("Funnel  &  Automation!! Expert", "12ab34cd-0000"),
            "funnel-automation-expert-12ab34cd"
        );
    }

    #[test]
    fn test_encode_trims_edge_hyphens() {
        assert_eq!(encode("  --Lead Dev--  ", "deadbeef-1"), "lead-dev-deadbeef");
    }

    #[test]
    fn test_encode_symbol_only_title_degenerates_to_segment() {
        assert_eq!(encode("!!!", "deadbeef-1"), "deadbeef");
    }

    #[test]
    fn test_decode_returns_last_segment() {
        assert_eq!(decode("senior-ghl-developer-acb5537b"), Some("acb5537b"));
    }

    #[test]
    fn test_decode_of_encode_is_first_id_segment_not_full_id() {
        let id = "acb5537b-9f21-4c55-b0d3-aaaaaaaaaaaa";
        let slug = encode("Senior GHL Developer", id);
        // Lossy by design: only the first hyphen segment of the id survives.
        assert_eq!(decode(&slug), Some("acb5537b"));
        assert_ne!(decode(&slug), Some(id));
    }

    #[test]
    fn test_decode_rejects_empty_input() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("ends-with-"), None);
    }

    #[test]
    fn test_decode_single_segment_slug() {
        assert_eq!(decode("acb5537b"), Some("acb5537b"));
    }
}
