//! Suggestion filtering.
//!
//! [`filter`] is a pure function of `(query, suggestions, options)`. The widget
//! calls it after every change to either input and never keeps the result
//! around longer than the pair it was computed from.

use serde::{Deserialize, Serialize};

/// Maximum number of entries shown in the dropdown.
pub const DEFAULT_LIMIT: usize = 8;

/// How a normalized query is matched against a suggestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The query may appear anywhere in the suggestion.
    #[default]
    Substring,
    /// The suggestion must start with the query.
    Prefix,
}

/// Tunables for [`filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    pub limit: usize,
    pub mode: MatchMode,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            mode: MatchMode::default(),
        }
    }
}

/// A suggestion that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub text: String,
    /// Position of the suggestion in the source list.
    pub source_index: usize,
    /// Character indices of the matched span (for highlighting)
    pub match_indices: Vec<u32>,
}

impl Match {
    fn unmatched(text: &str, source_index: usize) -> Self {
        Self {
            text: text.to_string(),
            source_index,
            match_indices: Vec::new(),
        }
    }
}

/// Trim and lowercase a raw query.
///
/// Lowercasing goes char by char, the same way suggestions are lowered in
/// [`filter`], so a query always matches a suggestion equal to it.
pub fn normalize_query(query: &str) -> String {
    query.trim().chars().flat_map(char::to_lowercase).collect()
}

/// Compute the display sequence for `query` over `suggestions`.
///
/// An empty (after trimming) query yields the head of the list unfiltered.
/// Otherwise entries are kept when their lowercased form contains the query,
/// in their original order, until `options.limit` entries are collected.
pub fn filter<S: AsRef<str>>(query: &str, suggestions: &[S], options: &FilterOptions) -> Vec<Match> {
    let needle: Vec<char> = normalize_query(query).chars().collect();

    if needle.is_empty() {
        return suggestions
            .iter()
            .take(options.limit)
            .enumerate()
            .map(|(idx, s)| Match::unmatched(s.as_ref(), idx))
            .collect();
    }

    suggestions
        .iter()
        .enumerate()
        .filter_map(|(idx, s)| {
            let text = s.as_ref();
            find_match(text, &needle, options.mode).map(|match_indices| Match {
                text: text.to_string(),
                source_index: idx,
                match_indices,
            })
        })
        .take(options.limit)
        .collect()
}

/// Locate `needle` in the lowercased `text`, returning the character indices of
/// `text` that the first occurrence covers.
fn find_match(text: &str, needle: &[char], mode: MatchMode) -> Option<Vec<u32>> {
    // One lowercase char may expand to several, so keep the origin of each.
    let lowered: Vec<(char, u32)> = text
        .chars()
        .enumerate()
        .flat_map(|(idx, ch)| ch.to_lowercase().map(move |lc| (lc, idx as u32)))
        .collect();

    if needle.len() > lowered.len() {
        return None;
    }

    let matches_at = |start: usize| {
        lowered[start..start + needle.len()]
            .iter()
            .zip(needle)
            .all(|((lc, _), n)| lc == n)
    };

    let start = match mode {
        MatchMode::Prefix => matches_at(0).then_some(0)?,
        MatchMode::Substring => (0..=lowered.len() - needle.len()).find(|&s| matches_at(s))?,
    };

    let mut indices: Vec<u32> = lowered[start..start + needle.len()]
        .iter()
        .map(|(_, origin)| *origin)
        .collect();
    indices.dedup();
    Some(indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestions::CITIES;

    fn texts(matches: &[Match]) -> Vec<&str> {
        matches.iter().map(|m| m.text.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_head() {
        let result = filter("", CITIES, &FilterOptions::default());
        assert_eq!(texts(&result), CITIES[..8].to_vec());
        assert!(result.iter().all(|m| m.match_indices.is_empty()));
    }

    #[test]
    fn test_whitespace_query_is_empty() {
        let result = filter("   ", CITIES, &FilterOptions::default());
        assert_eq!(result.len(), 8);
        assert_eq!(result[0].text, "New York");
    }

    #[test]
    fn test_substring_case_insensitive() {
        let result = filter("NEW", CITIES, &FilterOptions::default());
        assert_eq!(texts(&result), vec!["New York", "Newark", "New Orleans"]);
    }

    #[test]
    fn test_substring_not_anchored() {
        let result = filter("bad", CITIES, &FilterOptions::default());
        assert_eq!(texts(&result), vec!["Hyderabad", "Ahmedabad"]);
    }

    #[test]
    fn test_query_is_trimmed() {
        let result = filter("  san ", CITIES, &FilterOptions::default());
        assert_eq!(
            texts(&result),
            vec!["San Francisco", "San Jose", "San Diego"]
        );
    }

    #[test]
    fn test_no_match() {
        assert!(filter("zzz", CITIES, &FilterOptions::default()).is_empty());
    }

    #[test]
    fn test_empty_source() {
        let empty: &[&str] = &[];
        assert!(filter("", empty, &FilterOptions::default()).is_empty());
        assert!(filter("a", empty, &FilterOptions::default()).is_empty());
    }

    #[test]
    fn test_limit_caps_matches() {
        // "a" appears in far more than 8 of the cities
        let result = filter("a", CITIES, &FilterOptions::default());
        assert_eq!(result.len(), DEFAULT_LIMIT);
        let positions: Vec<usize> = result.iter().map(|m| m.source_index).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_custom_limit() {
        let options = FilterOptions {
            limit: 2,
            ..Default::default()
        };
        assert_eq!(texts(&filter("new", CITIES, &options)), vec!["New York", "Newark"]);
        assert_eq!(filter("", CITIES, &options).len(), 2);
    }

    #[test]
    fn test_prefix_mode() {
        let options = FilterOptions {
            mode: MatchMode::Prefix,
            ..Default::default()
        };
        assert!(filter("bad", CITIES, &options).is_empty());
        assert_eq!(texts(&filter("se", CITIES, &options)), vec!["Seattle"]);
    }

    #[test]
    fn test_match_indices() {
        let result = filter("ark", CITIES, &FilterOptions::default());
        assert_eq!(texts(&result), vec!["Newark"]);
        assert_eq!(result[0].match_indices, vec![3, 4, 5]);
        assert_eq!(result[0].source_index, 1);
    }

    #[test]
    fn test_match_indices_first_occurrence() {
        let result = filter("a", &["banana"], &FilterOptions::default());
        assert_eq!(result[0].match_indices, vec![1]);
    }

    #[test]
    fn test_non_ascii_indices_are_char_based() {
        let result = filter("üb", &["Zürich über"], &FilterOptions::default());
        assert_eq!(result[0].match_indices, vec![7, 8]);
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  San Diego \t"), "san diego");
        assert_eq!(normalize_query(""), "");
        // no context-dependent final sigma
        assert_eq!(normalize_query("ΟΔΟΣ"), "οδοσ");
    }

    #[test]
    fn test_query_matches_itself_with_final_sigma() {
        let result = filter("ΟΔΟΣ", &["ΟΔΟΣ", "Οδός Ερμού"], &FilterOptions::default());
        assert_eq!(texts(&result), vec!["ΟΔΟΣ"]);
        assert_eq!(result[0].match_indices, vec![0, 1, 2, 3]);

        let result = filter("ΟΔΟΣ ΕΡΜΟΥ", &["ΟΔΟΣ ΕΡΜΟΥ"], &FilterOptions::default());
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_match_mode_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: MatchMode,
        }
        let w: Wrapper = toml::from_str(r#"mode = "prefix""#).unwrap();
        assert_eq!(w.mode, MatchMode::Prefix);
    }
}
