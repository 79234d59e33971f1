use serde::{Deserialize, Serialize};

use super::nucleotide::Nucleotide;

/// The statistic a query asks for over its range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatKind {
    /// Number of distinct bases present in the range.
    Distinct,
    /// The most frequent base in the range and its count. Ties resolve to the
    /// earliest base in [`Nucleotide::ALL`] order.
    MostFrequent,
    /// Percentage of G/C bases in the range.
    GcContent,
    /// Occurrences of the given pattern starting inside the range.
    PatternCount(Vec<Nucleotide>),
    /// Count of adjacent G→A pairs whose both endpoints lie inside the range.
    GaHotspot,
}

/// One range query over a `DnaSequence`, with closed 0-based bounds.
///
/// Bounds are not validated at construction. The batch runner skips queries
/// whose range is inverted or out of bounds and reports those slots as
/// [`Answer::Absent`](super::Answer::Absent); they never reach the sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    pub l: usize,
    pub r: usize,
    pub kind: StatKind,
}

/// A query as delivered by an external collaborator: 1-based inclusive
/// bounds, a free-form kind string, and unfiltered pattern text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuery {
    pub l: i64,
    pub r: i64,
    pub kind: String,
    #[serde(default)]
    pub pattern: String,
}

impl RawQuery {
    /// Lower to a typed [`QuerySpec`], translating the 1-based inclusive
    /// bounds to 0-based closed bounds.
    ///
    /// Returns `None` for a non-positive bound or an unrecognized kind
    /// string; such queries answer as absent rather than failing the batch.
    /// Pattern text is uppercased with non-alphabet characters stripped.
    pub fn normalize(&self) -> Option<QuerySpec> {
        if self.l < 1 || self.r < 1 {
            return None;
        }
        let kind = match self.kind.as_str() {
            "distinct" => StatKind::Distinct,
            "mostFreq" => StatKind::MostFrequent,
            "gcContent" => StatKind::GcContent,
            "patternCount" => StatKind::PatternCount(filter_pattern(&self.pattern)),
            "gaHotspot" => StatKind::GaHotspot,
            _ => return None,
        };
        Some(QuerySpec {
            l: (self.l - 1) as usize,
            r: (self.r - 1) as usize,
            kind,
        })
    }
}

/// Keep only alphabet characters, uppercased. This is the collaborator-side
/// pattern filtering of the input contract.
fn filter_pattern(raw: &str) -> Vec<Nucleotide> {
    raw.bytes().filter_map(Nucleotide::from_byte).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn raw(l: i64, r: i64, kind: &str, pattern: &str) -> RawQuery {
        RawQuery {
            l,
            r,
            kind: kind.to_string(),
            pattern: pattern.to_string(),
        }
    }

    #[test]
    fn test_normalize_translates_bounds() {
        let spec = raw(1, 10, "distinct", "").normalize().unwrap();
        assert_eq!(spec.l, 0);
        assert_eq!(spec.r, 9);
        assert_eq!(spec.kind, StatKind::Distinct);
    }

    #[rstest]
    #[case(0, 5)]
    #[case(-3, 5)]
    #[case(5, 0)]
    fn test_normalize_rejects_non_positive_bounds(#[case] l: i64, #[case] r: i64) {
        assert_eq!(raw(l, r, "distinct", "").normalize(), None);
    }

    #[test]
    fn test_normalize_rejects_unknown_kind() {
        assert_eq!(raw(1, 5, "entropy", "").normalize(), None);
    }

    #[test]
    fn test_normalize_filters_pattern() {
        let spec = raw(1, 12, "patternCount", "a-c?gN t").normalize().unwrap();
        assert_eq!(
            spec.kind,
            StatKind::PatternCount(vec![
                Nucleotide::A,
                Nucleotide::C,
                Nucleotide::G,
                Nucleotide::T
            ])
        );
    }

    #[test]
    fn test_raw_query_from_json() {
        let raw: RawQuery =
            serde_json::from_str(r#"{"l": 1, "r": 10, "kind": "gcContent"}"#).unwrap();
        assert_eq!(raw.pattern, "");
        assert_eq!(raw.normalize().unwrap().kind, StatKind::GcContent);
    }
}
