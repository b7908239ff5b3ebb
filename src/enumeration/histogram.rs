use crate::Count;
use crate::N_SCORES;
use crate::Points;
use anyhow::Context;

/// Known distribution of hand totals over every (draw, hand) pair.
const REFERENCE: &str = include_str!("../../data/frequencies.txt");

/// Number of hands per total score, 0 through 29.
///
/// One histogram is owned by each enumeration shard and the shards are
/// folded together with [`Histogram::absorb`]; there is no global tally.
///
/// The text form is one count per line, line `i` holding the count for a
/// total of `i`. A single trailing newline is allowed; blank lines are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Histogram([Count; N_SCORES]);

impl Default for Histogram {
    fn default() -> Self {
        Self([0; N_SCORES])
    }
}

impl Histogram {
    /// The embedded reference distribution.
    pub fn reference() -> anyhow::Result<Self> {
        REFERENCE.parse::<Self>().context("embedded reference histogram")
    }
    /// Loads a reference distribution from a text file.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?
            .parse::<Self>()
            .with_context(|| format!("parse {}", path.display()))
    }

    /// count one more hand with this total.
    /// totals above 29 cannot come from a legal hand.
    pub fn increment(&mut self, score: Points) {
        self.0[score as usize] += 1;
    }
    /// absorb the other histogram into this one, bucket by bucket.
    pub fn absorb(&mut self, other: &Self) {
        self.0
            .iter_mut()
            .zip(other.0.iter())
            .for_each(|(mine, theirs)| *mine += theirs);
    }
    /// by-value absorb, for folds and reductions.
    pub fn merge(mut self, other: Self) -> Self {
        self.absorb(&other);
        self
    }

    pub fn get(&self, score: usize) -> Count {
        self.0[score]
    }
    pub fn total(&self) -> Count {
        self.0.iter().sum()
    }
    pub fn counts(&self) -> &[Count; N_SCORES] {
        &self.0
    }
    /// (score, count) for every bucket, including empty ones
    pub fn iter(&self) -> impl Iterator<Item = (usize, Count)> + '_ {
        self.0.iter().copied().enumerate()
    }
}

impl From<[Count; N_SCORES]> for Histogram {
    fn from(counts: [Count; N_SCORES]) -> Self {
        Self(counts)
    }
}

impl std::str::FromStr for Histogram {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let counts = s
            .lines()
            .enumerate()
            .map(|(i, line)| {
                line.trim()
                    .parse::<Count>()
                    .with_context(|| format!("line {}: not a count: {:?}", i + 1, line))
            })
            .collect::<anyhow::Result<Vec<Count>>>()?;
        let n = counts.len();
        <[Count; N_SCORES]>::try_from(counts)
            .map(Self)
            .map_err(|_| anyhow::anyhow!("expected {} counts, found {}", N_SCORES, n))
    }
}

impl std::fmt::Display for Histogram {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for count in self.0.iter() {
            writeln!(f, "{}", count)?;
        }
        Ok(())
    }
}
