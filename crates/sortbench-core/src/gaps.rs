//! Named gap schedules.

use serde::Serialize;

use crate::constants::BUILTIN_SCHEDULES;
use crate::gap_sort::validate_gaps;
use crate::sorter::SortError;

/// A named, validated gap schedule.
///
/// Non-empty and free of zeros by construction. Ordering is left to the
/// caller; [`GapSequence::ends_in_one`] reports whether the schedule fully
/// sorts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GapSequence {
    name: String,
    gaps: Vec<usize>,
}

impl GapSequence {
    /// Create a schedule from unsigned gaps.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::InvalidGapSequence`] if `gaps` is empty or holds a zero.
    pub fn new(name: impl Into<String>, gaps: Vec<usize>) -> Result<Self, SortError> {
        validate_gaps(&gaps)?;
        Ok(Self {
            name: name.into(),
            gaps,
        })
    }

    /// Create a schedule from signed values, rejecting anything non-positive.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::InvalidGapSequence`] for an empty list or a value `<= 0`.
    pub fn from_signed(name: impl Into<String>, values: &[i64]) -> Result<Self, SortError> {
        let gaps = values
            .iter()
            .enumerate()
            .map(|(pos, &v)| {
                usize::try_from(v)
                    .ok()
                    .filter(|&g| g > 0)
                    .ok_or_else(|| {
                        SortError::InvalidGapSequence(format!(
                            "gap at position {pos} is not positive: {v}"
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(name, gaps)
    }

    /// Parse `name=g1,g2,...` as given on the command line.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::Config`] when the text is not in that shape and
    /// [`SortError::InvalidGapSequence`] when a gap is not positive.
    pub fn parse(text: &str) -> Result<Self, SortError> {
        let (name, list) = text.split_once('=').ok_or_else(|| {
            SortError::Config(format!("expected NAME=G1,G2,... but got {text:?}"))
        })?;
        let name = name.trim();
        let valid_name = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid_name {
            return Err(SortError::Config(format!("invalid schedule name {name:?}")));
        }
        let values = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<i64>().map_err(|_| {
                    SortError::Config(format!("gap {s:?} in schedule {name} is not an integer"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_signed(name, &values)
    }

    /// Schedule name, e.g. `knuth`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The gaps in application order.
    #[must_use]
    pub fn gaps(&self) -> &[usize] {
        &self.gaps
    }

    /// Whether the final pass uses gap 1, which a fully sorted result needs.
    #[must_use]
    pub fn ends_in_one(&self) -> bool {
        self.gaps.last() == Some(&1)
    }
}

impl std::fmt::Display for GapSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, g) in self.gaps.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{g}")?;
        }
        write!(f, "]")
    }
}

/// The four built-in schedules, in evaluation order.
#[must_use]
pub fn builtin_schedules() -> Vec<GapSequence> {
    BUILTIN_SCHEDULES
        .iter()
        .map(|(name, gaps)| GapSequence {
            name: (*name).to_string(),
            gaps: gaps.to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_valid() {
        let schedules = builtin_schedules();
        assert_eq!(schedules.len(), 4);
        for s in &schedules {
            assert!(validate_gaps(s.gaps()).is_ok());
            assert!(s.ends_in_one());
        }
        assert_eq!(schedules[0].name(), "knuth");
        assert_eq!(schedules[3].name(), "sedgewick");
    }

    #[test]
    fn parse_custom_schedule() {
        let s = GapSequence::parse("ciura=701, 301,132,57,23,10,4,1").unwrap();
        assert_eq!(s.name(), "ciura");
        assert_eq!(s.gaps(), &[701, 301, 132, 57, 23, 10, 4, 1]);
        assert_eq!(s.to_string(), "[701, 301, 132, 57, 23, 10, 4, 1]");
    }

    #[test]
    fn parse_rejects_negative_gap() {
        let err = GapSequence::parse("bad=4,-1,1").unwrap_err();
        assert!(matches!(err, SortError::InvalidGapSequence(_)));
    }

    #[test]
    fn parse_rejects_zero_and_empty() {
        assert!(matches!(
            GapSequence::parse("z=3,0,1"),
            Err(SortError::InvalidGapSequence(_))
        ));
        assert!(matches!(
            GapSequence::parse("empty="),
            Err(SortError::InvalidGapSequence(_))
        ));
    }

    #[test]
    fn parse_rejects_malformed_text() {
        assert!(matches!(GapSequence::parse("4,1"), Err(SortError::Config(_))));
        assert!(matches!(GapSequence::parse("x=4,a,1"), Err(SortError::Config(_))));
        assert!(matches!(GapSequence::parse("=4,1"), Err(SortError::Config(_))));
    }

    #[test]
    fn ends_in_one_detects_partial_schedule() {
        let s = GapSequence::new("partial", vec![5, 2]).unwrap();
        assert!(!s.ends_in_one());
    }
}
