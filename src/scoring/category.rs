/// The five independent ways a hand scores points.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Nobs,
    Flush,
    Fifteen,
    Pair,
    Run,
}

impl Category {
    pub const fn all() -> [Category; 5] {
        [
            Category::Nobs,
            Category::Flush,
            Category::Fifteen,
            Category::Pair,
            Category::Run,
        ]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Nobs => "nobs",
            Category::Flush => "flush",
            Category::Fifteen => "fifteen",
            Category::Pair => "pair",
            Category::Run => "run",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
