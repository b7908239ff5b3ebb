use super::histogram::Histogram;
use crate::Count;

/// A bucket where the enumerated count disagrees with the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub score: usize,
    pub expected: Count,
    pub actual: Count,
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "incorrect count for score {:>2}: should be {:<8} found {:<8}",
            self.score, self.expected, self.actual
        )
    }
}

/// Outcome of checking one histogram: every mismatch, not just the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verification(Vec<Mismatch>);

impl Verification {
    pub fn is_match(&self) -> bool {
        self.0.is_empty()
    }
    pub fn mismatches(&self) -> &[Mismatch] {
        &self.0
    }
}

impl std::fmt::Display for Verification {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0.as_slice() {
            [] => write!(f, "histogram matches the reference exactly"),
            mismatches => {
                for mismatch in mismatches {
                    writeln!(f, "{}", mismatch)?;
                }
                write!(f, "{} of {} buckets disagree", mismatches.len(), crate::N_SCORES)
            }
        }
    }
}

/// Compares enumerated histograms against a reference. Never fails;
/// disagreement is a reported outcome.
#[derive(Debug, Clone)]
pub struct Verifier(Histogram);

impl From<Histogram> for Verifier {
    fn from(reference: Histogram) -> Self {
        Self(reference)
    }
}

impl Verifier {
    pub fn verify(&self, actual: &Histogram) -> Verification {
        Verification(
            self.0
                .iter()
                .zip(actual.iter())
                .filter(|((_, expected), (_, actual))| expected != actual)
                .map(|((score, expected), (_, actual))| Mismatch {
                    score,
                    expected,
                    actual,
                })
                .collect(),
        )
    }
}
