/*!
Methods for building a context from text.

# Syntax

- A literal is a [symbol](crate::db::atom), optionally prefixed by `-` for negation, e.g. `A` or `-B`.
- A clause is literals separated by the keyword `OR`, e.g. `A OR -B`, or `{}` for the empty clause.
  A clause may not contain both polarities of an atom, e.g. `A OR -A`.
- A formula is clauses separated by the keyword `AND`, e.g. `A OR -B AND C`.
  Each clause of a formula is added to the knowledge base as a clause of its own.

The empty clause is read by [clause_from_str](Context::clause_from_str), though not as part of a formula or a goal.

Keywords and literals are separated by whitespace.

# Problems

A problem is read by [read_problem](Context::read_problem), and has:
1. A goal clause, on the first line.
2. A count *n* of knowledge base lines, on the second line.
3. *n* lines, each a formula.

The first clause of each formula is added to the knowledge base in the order read.
Any further clauses of a formula are added after the last line, in the order read.
So, the lines `A AND B` and `C` give the knowledge base `A`, `C`, `B`.

```rust
# use otter_resolve::context::Context;
let mut the_context = Context::default();

let problem = b"-A OR B
2
-A OR -B AND C
A
";

let goal = the_context.read_problem(problem.as_slice()).unwrap();
assert_eq!(the_context.clause_string(&goal), "-A OR B");

let knowledge_base = the_context
    .knowledge_base()
    .iter()
    .map(|clause| the_context.clause_string(clause))
    .collect::<Vec<_>>();
assert_eq!(knowledge_base, vec!["-A OR -B", "A", "C"]);
```
*/

use std::io::BufRead;

use crate::{
    config::LiteralOrder,
    context::Context,
    db::atom::{CONJUNCTION, DISJUNCTION, EMPTY_CLAUSE, NEGATION},
    misc::log::targets::{self},
    structures::{
        clause::Clause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

impl Context {
    /// The literal of a token, e.g. `-A`.
    pub fn literal_from_str(&mut self, token: &str) -> Result<CLiteral, ErrorKind> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ErrorKind::from(err::ParseError::Empty));
        }

        let (symbol, polarity) = match token.strip_prefix(NEGATION) {
            Some("") => return Err(ErrorKind::from(err::ParseError::Negation)),
            Some(symbol) => (symbol, false),
            None => (token, true),
        };

        let atom = self.atom_db.atom_of(symbol)?;
        Ok(CLiteral::new(atom, polarity))
    }

    /// The clause of a disjunction of literals, e.g. `A OR -B`.
    ///
    /// Literals are ordered as set by the [literal_order](crate::config::Config::literal_order) of the context.
    pub fn clause_from_str(&mut self, text: &str) -> Result<Clause, ErrorKind> {
        let text = text.trim();
        if text == EMPTY_CLAUSE {
            return Ok(Clause::empty());
        }
        if text.is_empty() {
            return Err(ErrorKind::from(err::ParseError::Empty));
        }

        let mut literals = Vec::default();
        for part in split_on_keyword(text, DISJUNCTION)? {
            match part.as_slice() {
                [token] => literals.push(self.literal_from_str(token)?),
                _ => return Err(ErrorKind::from(err::ParseError::Separator)),
            }
        }

        let clause = match self.config.literal_order.value {
            LiteralOrder::Sorted => Clause::new(literals)?,
            LiteralOrder::Preserved => Clause::from_sequence(literals)?,
        };
        Ok(clause)
    }

    /// Adds each clause of a conjunction of clauses to the knowledge base, e.g. `A OR B AND -C`.
    ///
    /// Returns the count of clauses added.
    pub fn add_formula(&mut self, line: &str) -> Result<usize, ErrorKind> {
        let clauses = self.formula_clauses(line)?;
        let count = clauses.len();
        for clause in clauses {
            self.add_clause(clause);
        }
        Ok(count)
    }

    /// The clauses of a conjunction of clauses, in order.
    fn formula_clauses(&mut self, line: &str) -> Result<Vec<Clause>, ErrorKind> {
        if line.trim().is_empty() {
            return Err(ErrorKind::from(err::ParseError::Empty));
        }

        let mut clauses = Vec::default();
        for part in split_on_keyword(line, CONJUNCTION)? {
            if part.as_slice() == [EMPTY_CLAUSE] {
                return Err(ErrorKind::from(err::ParseError::EmptyClause));
            }
            clauses.push(self.clause_from_str(&part.join(" "))?);
        }
        Ok(clauses)
    }

    /// The clause of a goal, which may not be a conjunction.
    pub fn goal_from_str(&mut self, line: &str) -> Result<Clause, ErrorKind> {
        if line.trim().is_empty() {
            return Err(ErrorKind::from(err::ParseError::MissingGoal));
        }
        if line.split_whitespace().any(|token| token == CONJUNCTION) {
            return Err(ErrorKind::from(err::ParseError::ConjunctiveGoal));
        }
        if line.trim() == EMPTY_CLAUSE {
            return Err(ErrorKind::from(err::ParseError::EmptyClause));
        }
        self.clause_from_str(line)
    }

    /// Reads a problem into the context, adding the knowledge base and returning the goal.
    ///
    /// Lines after the knowledge base are ignored.
    pub fn read_problem(&mut self, reader: impl BufRead) -> Result<Clause, ErrorKind> {
        let mut lines = reader.lines().enumerate().map(|(index, line)| (index + 1, line));

        let goal = match lines.next() {
            None => return Err(ErrorKind::from(err::ParseError::MissingGoal)),
            Some((number, Err(_))) => return Err(ErrorKind::from(err::ParseError::Read(number))),
            Some((number, Ok(line))) => self
                .goal_from_str(&line)
                .map_err(|e| at_line(number, e))?,
        };

        let expected = match lines.next() {
            None => return Err(ErrorKind::from(err::ParseError::ClauseCount(String::default()))),
            Some((number, Err(_))) => return Err(ErrorKind::from(err::ParseError::Read(number))),
            Some((number, Ok(line))) => match line.trim().parse::<usize>() {
                Ok(count) => count,
                Err(_) => {
                    let e = ErrorKind::from(err::ParseError::ClauseCount(line.trim().to_string()));
                    return Err(at_line(number, e));
                }
            },
        };

        let mut clause_count = 0;
        let mut deferred = Vec::default();
        for found in 0..expected {
            match lines.next() {
                None => {
                    return Err(ErrorKind::from(err::ParseError::MissingClauses {
                        expected,
                        found,
                    }))
                }
                Some((number, Err(_))) => {
                    return Err(ErrorKind::from(err::ParseError::Read(number)))
                }
                Some((number, Ok(line))) => {
                    let clauses = self
                        .formula_clauses(&line)
                        .map_err(|e| at_line(number, e))?;
                    clause_count += clauses.len();

                    let mut clauses = clauses.into_iter();
                    if let Some(clause) = clauses.next() {
                        self.add_clause(clause);
                    }
                    deferred.extend(clauses);
                }
            }
        }

        for clause in deferred {
            self.add_clause(clause);
        }

        log::info!(target: targets::PARSER, "Read {expected} lines of {clause_count} clauses");
        Ok(goal)
    }
}

/// Groups of whitespace separated tokens, split on `keyword`.
///
/// Every group is non-empty, as otherwise some keyword does not separate two things.
fn split_on_keyword<'s>(text: &'s str, keyword: &str) -> Result<Vec<Vec<&'s str>>, ErrorKind> {
    let mut groups = vec![Vec::default()];
    for token in text.split_whitespace() {
        if token == keyword {
            groups.push(Vec::default());
        } else if let Some(group) = groups.last_mut() {
            group.push(token);
        }
    }

    match groups.iter().any(|group| group.is_empty()) {
        true => Err(ErrorKind::from(err::ParseError::Separator)),
        false => Ok(groups),
    }
}

/// Notes the line of a parse error.
fn at_line(number: usize, e: ErrorKind) -> ErrorKind {
    match e {
        ErrorKind::Parse(parse_error) => {
            ErrorKind::Parse(err::ParseError::Line(number, Box::new(parse_error)))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn literals() {
        let mut ctx = Context::default();
        assert_eq!(ctx.literal_from_str(" A "), Ok(65));
        assert_eq!(ctx.literal_from_str("-B"), Ok(-66));
        assert_eq!(
            ctx.literal_from_str("-"),
            Err(ErrorKind::Parse(err::ParseError::Negation))
        );
        assert_eq!(
            ctx.literal_from_str(""),
            Err(ErrorKind::Parse(err::ParseError::Empty))
        );
        assert!(matches!(
            ctx.literal_from_str("--A"),
            Err(ErrorKind::Parse(err::ParseError::UnsupportedSymbol(_)))
        ));
    }

    #[test]
    fn clauses_are_sorted() {
        let mut ctx = Context::default();
        let clause = ctx.clause_from_str("C OR -A OR B OR C").unwrap();
        assert_eq!(clause.as_slice(), &[-65, 66, 67]);
        assert_eq!(ctx.clause_string(&clause), "-A OR B OR C");
    }

    #[test]
    fn clauses_in_order_read() {
        let mut config = Config::default();
        config.literal_order.value = LiteralOrder::Preserved;
        let mut ctx = Context::from_config(config);

        let clause = ctx.clause_from_str("C OR -A OR C").unwrap();
        assert_eq!(clause.as_slice(), &[67, -65]);
    }

    #[test]
    fn separators() {
        let mut ctx = Context::default();
        for malformed in ["A B", "A OR", "OR A", "A OR OR B"] {
            assert_eq!(
                ctx.clause_from_str(malformed),
                Err(ErrorKind::Parse(err::ParseError::Separator)),
                "{malformed}"
            );
        }
        assert_eq!(ctx.clause_from_str("{}"), Ok(Clause::empty()));
    }

    #[test]
    fn formulas_are_flattened() {
        let mut ctx = Context::default();
        assert_eq!(ctx.add_formula("A OR B AND -C AND D"), Ok(3));
        let strings = ctx
            .knowledge_base()
            .iter()
            .map(|clause| ctx.clause_string(clause))
            .collect::<Vec<_>>();
        assert_eq!(strings, vec!["A OR B", "-C", "D"]);

        assert!(ctx.add_formula("A AND").is_err());
    }

    #[test]
    fn conjunctions_are_deferred_when_reading() {
        let mut ctx = Context::default();
        let problem = b"E\n3\nA AND B OR C AND D\n-A\nC\n";
        assert!(ctx.read_problem(problem.as_slice()).is_ok());

        let strings = ctx
            .knowledge_base()
            .iter()
            .map(|clause| ctx.clause_string(clause))
            .collect::<Vec<_>>();
        assert_eq!(strings, vec!["A", "-A", "C", "B OR C", "D"]);
    }

    #[test]
    fn goals() {
        let mut ctx = Context::default();
        assert_eq!(
            ctx.goal_from_str("A AND B"),
            Err(ErrorKind::Parse(err::ParseError::ConjunctiveGoal))
        );
        assert_eq!(
            ctx.goal_from_str("  "),
            Err(ErrorKind::Parse(err::ParseError::MissingGoal))
        );
        assert_eq!(ctx.goal_from_str("-A OR B").map(|g| g.size()), Ok(2));
        assert_eq!(
            ctx.goal_from_str(" {} "),
            Err(ErrorKind::Parse(err::ParseError::EmptyClause))
        );
    }

    #[test]
    fn empty_clause_is_not_a_formula() {
        let mut ctx = Context::default();
        for formula in ["{}", "A AND {}", "{} AND -B"] {
            assert_eq!(
                ctx.add_formula(formula),
                Err(ErrorKind::Parse(err::ParseError::EmptyClause)),
                "{formula}"
            );
        }
        assert!(ctx.knowledge_base().is_empty());

        assert_eq!(
            ctx.read_problem(b"A\n2\nA\n{}\n".as_slice()),
            Err(ErrorKind::Parse(err::ParseError::Line(
                4,
                Box::new(err::ParseError::EmptyClause)
            )))
        );
    }

    #[test]
    fn complementary_literals_are_an_error() {
        let mut ctx = Context::default();
        assert_eq!(
            ctx.clause_from_str("A OR B OR -A"),
            Err(ErrorKind::Clause(err::ClauseError::ComplementaryLiterals(65)))
        );
        assert_eq!(
            ctx.goal_from_str("-B OR B"),
            Err(ErrorKind::Clause(err::ClauseError::ComplementaryLiterals(66)))
        );
        assert_eq!(
            ctx.read_problem(b"A\n1\nC OR -C\n".as_slice()),
            Err(ErrorKind::Clause(err::ClauseError::ComplementaryLiterals(67)))
        );
    }

    #[test]
    fn problem_errors_are_located() {
        let mut ctx = Context::default();
        let problem = b"A\n2\nA OR B\nA OR OR C\n";
        assert_eq!(
            ctx.read_problem(problem.as_slice()),
            Err(ErrorKind::Parse(err::ParseError::Line(
                4,
                Box::new(err::ParseError::Separator)
            )))
        );

        let mut ctx = Context::default();
        assert_eq!(
            ctx.read_problem(b"A\nmany\n".as_slice()),
            Err(ErrorKind::Parse(err::ParseError::Line(
                2,
                Box::new(err::ParseError::ClauseCount("many".to_string()))
            )))
        );

        let mut ctx = Context::default();
        assert_eq!(
            ctx.read_problem(b"A\n3\nB\n".as_slice()),
            Err(ErrorKind::Parse(err::ParseError::MissingClauses {
                expected: 3,
                found: 1
            }))
        );
    }

    #[test]
    fn empty_knowledge_base() {
        let mut ctx = Context::default();
        let goal = ctx.read_problem(b"A\n0\n".as_slice()).unwrap();
        assert_eq!(goal.as_slice(), &[65]);
        assert!(ctx.knowledge_base().is_empty());
    }
}
