use std::str::FromStr;

/// How the literals of a parsed clause are ordered.
///
/// Resolution merges clauses on the assumption that each clause is sorted by atom.
/// So, the choice here only matters for input which lists literals out of order, e.g. `B OR A`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LiteralOrder {
    /// Sort the literals of each clause by atom when the clause is built.
    Sorted = 0,

    /// Keep literals in the order read, dropping repeats only.
    ///
    /// Clauses with literals out of order are then merged as if sorted, and a resolvent may list its literals out of order.
    Preserved,
}

impl std::fmt::Display for LiteralOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sorted => write!(f, "sorted"),
            Self::Preserved => write!(f, "preserved"),
        }
    }
}

impl LiteralOrder {
    /// The minimum LiteralOrder type.
    pub const MIN: LiteralOrder = LiteralOrder::Sorted;

    /// The maximum LiteralOrder type.
    pub const MAX: LiteralOrder = LiteralOrder::Preserved;
}

impl FromStr for LiteralOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sorted" => Ok(Self::Sorted),

            "preserved" => Ok(Self::Preserved),

            _unknown_string => Err(()),
        }
    }
}
