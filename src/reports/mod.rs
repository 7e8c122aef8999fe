/*!
Reports from a refutation.
*/

pub mod trace;

/// The verdict of a refutation.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The empty clause was derived, and so the knowledge base entails the goal.
    Entailed,

    /// No new clause could be derived without deriving the empty clause, and so the knowledge base does not entail the goal.
    NotEntailed,
}

impl Report {
    /// Whether the report is of entailment.
    pub fn is_entailed(&self) -> bool {
        matches!(self, Self::Entailed)
    }
}

/// Reports are written as the verdict tokens of the output artifact.
impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entailed => write!(f, "YES"),
            Self::NotEntailed => write!(f, "NO"),
        }
    }
}
