use super::category::Category;
use super::evaluator::Evaluator;
use crate::Points;
use crate::cards::Hand;

/// Points per category for one Hand.
///
/// Built fresh from an [`Evaluator`] every time; nothing is cached.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreReport {
    nobs: Points,
    flush: Points,
    fifteen: Points,
    pair: Points,
    run: Points,
}

impl ScoreReport {
    pub fn nobs(&self) -> Points {
        self.nobs
    }
    pub fn flush(&self) -> Points {
        self.flush
    }
    pub fn fifteen(&self) -> Points {
        self.fifteen
    }
    pub fn pair(&self) -> Points {
        self.pair
    }
    pub fn run(&self) -> Points {
        self.run
    }
    pub fn get(&self, category: Category) -> Points {
        match category {
            Category::Nobs => self.nobs,
            Category::Flush => self.flush,
            Category::Fifteen => self.fifteen,
            Category::Pair => self.pair,
            Category::Run => self.run,
        }
    }
    pub fn iter(&self) -> impl Iterator<Item = (Category, Points)> + '_ {
        Category::all().into_iter().map(move |c| (c, self.get(c)))
    }
    pub fn total(&self) -> Points {
        self.nobs + self.flush + self.fifteen + self.pair + self.run
    }
}

impl From<Evaluator> for ScoreReport {
    fn from(e: Evaluator) -> Self {
        Self {
            nobs: e.nobs(),
            flush: e.flush(),
            fifteen: e.fifteen(),
            pair: e.pair(),
            run: e.run(),
        }
    }
}

impl From<Hand> for ScoreReport {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl Evaluator {
    /// All five categories in one report.
    pub fn report(self) -> ScoreReport {
        ScoreReport::from(self)
    }
    /// Hand total, the sum of all five categories.
    pub fn score(&self) -> Points {
        self.nobs() + self.flush() + self.fifteen() + self.pair() + self.run()
    }
}

/// serializes as {"nobs":1,"flush":0,"fifteen":16,"pair":12,"run":0,"total":29}
impl serde::Serialize for ScoreReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ScoreReport", 6)?;
        state.serialize_field("nobs", &self.nobs)?;
        state.serialize_field("flush", &self.flush)?;
        state.serialize_field("fifteen", &self.fifteen)?;
        state.serialize_field("pair", &self.pair)?;
        state.serialize_field("run", &self.run)?;
        state.serialize_field("total", &self.total())?;
        state.end()
    }
}

impl std::fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (category, points) in self.iter() {
            writeln!(f, "{:<10}{:>3}", category, points)?;
        }
        write!(f, "{:<10}{:>3}", "total", self.total())
    }
}
