//! # Simplification / preprocessing
//!
//! Unit propagation: if there is a clause with just one literal, it must be
//! true.  So every other clause containing that literal is satisfied and can
//! be removed, and the negation of the literal can be deleted from every
//! clause it appears in.  This is done to a fixpoint, since deleting literals
//! makes new unit clauses.
//!
//! Example: `(x) and (-x + y) and (y + z)` becomes `(x) and (y)`.
//!
//! The unit clauses themselves are kept, so the formula stays equivalent.  If
//! a clause loses all of its literals it's kept too, as the empty clause, and
//! the resolution engine picks it up from there.
//!
//! This isn't run automatically before resolution; see `Config::unit_propagation`.

use crate::data::{Literal, SymbolId};
use crate::formula::Formula;
use indexmap::IndexMap;

/// What unit propagation did to a formula
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Propagation {
    /// The symbols forced by unit clauses, in the order they were found, and
    /// whether they were forced true
    pub assigned: IndexMap<SymbolId, bool>,
    pub clauses_removed: usize,
    pub literals_removed: usize,
    /// Either two unit clauses disagree, or a clause was emptied
    pub conflict: bool,
}

/// Run unit propagation on `formula` until nothing changes
///
/// Clause order isn't preserved.
pub fn unit_propagation(formula: &mut Formula) -> Propagation {
    let nclauses = formula.len();
    log::info!(
        "Propagating units through {} clauses over {} symbols",
        nclauses,
        formula.symbols().len()
    );

    let mut pass = Propagator {
        formula,
        report: Propagation::default(),
        at_fixpoint: false,
    };
    while !pass.at_fixpoint {
        pass.at_fixpoint = true;
        pass.unit_clauses();
    }

    let report = pass.report;
    log::info!(
        "Unit propagation assigned {} symbols and removed {} clauses and {} literals{}",
        report.assigned.len(),
        report.clauses_removed,
        report.literals_removed,
        if report.conflict { " (conflict)" } else { "" },
    );
    report
}

struct Propagator<'a> {
    formula: &'a mut Formula,
    report: Propagation,
    at_fixpoint: bool,
}

impl Propagator<'_> {
    /// One scan over the formula, propagating each unit clause it finds
    fn unit_clauses(&mut self) {
        let mut i = 0;
        while i < self.formula.len() {
            if let [unit] = *self.formula.clauses()[i].literals() {
                log::debug!("Processing unit clause {:?}", unit);
                self.assign(unit);
                i = self.one_unit(i, unit);
            }
            i += 1;
        }
    }

    fn assign(&mut self, lit: Literal) {
        let value = !lit.is_negated();
        if let Some(old_value) = self.report.assigned.insert(lit.symbol(), value) {
            if old_value != value {
                log::debug!("{:?} is forced both ways", lit.symbol());
                self.report.conflict = true;
            }
        }
    }

    /// Propagate the unit clause at `unit_index` through every other clause
    ///
    /// Returns where the unit clause ended up, since removing clauses moves
    /// the last one around.
    fn one_unit(&mut self, mut unit_index: usize, lit: Literal) -> usize {
        let mut j = 0;
        while j < self.formula.len() {
            if j == unit_index {
                j += 1;
                continue;
            }

            if self.formula.clauses()[j].contains(lit) {
                // The clause contains lit so it's trivially true
                let last = self.formula.len() - 1;
                let removed = self.formula.remove_clause(j);
                self.report.clauses_removed += 1;
                self.report.literals_removed += removed.len();
                self.at_fixpoint = false;
                if unit_index == last {
                    unit_index = j;
                }
                // j now holds what used to be the last clause
                continue;
            }

            let clause = self.formula.clause_mut(j);
            let n = clause.remove_all(!lit);
            if n > 0 {
                self.report.literals_removed += n;
                self.at_fixpoint = false;
                if clause.is_empty() {
                    log::debug!("Clause {} emptied by {:?}", j, lit);
                    self.report.conflict = true;
                }
            }
            j += 1;
        }
        unit_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cnf_reader::parse_str;
    use crate::config::LoaderConfig;

    fn load(text: &str) -> Formula {
        parse_str(text, &LoaderConfig::default()).unwrap()
    }

    fn lines(formula: &Formula) -> Vec<String> {
        let mut lines: Vec<_> = formula
            .clauses()
            .iter()
            .map(|c| c.display(formula.symbols()).to_string())
            .collect();
        lines.sort();
        lines
    }

    #[test]
    fn satisfied_clauses_are_removed() {
        let mut formula = load("p\np q\nr p\nq r\n");
        let report = unit_propagation(&mut formula);
        assert_eq!(lines(&formula), ["p", "q r"]);
        assert_eq!(report.clauses_removed, 2);
        assert!(!report.conflict);
    }

    #[test]
    fn opposite_literals_are_removed() {
        let mut formula = load("p\n!p q r\n");
        let report = unit_propagation(&mut formula);
        assert_eq!(lines(&formula), ["p", "q r"]);
        assert_eq!(report.literals_removed, 1);
    }

    #[test]
    fn chains_to_a_conflict() {
        let mut formula = load("p\n!p q\n!q\n");
        let report = unit_propagation(&mut formula);

        let p = formula.symbols().get("p").unwrap();
        let others_with_p = formula
            .clauses()
            .iter()
            .filter(|c| c.len() != 1 && c.iter().any(|l| l.symbol() == p))
            .count();
        assert_eq!(others_with_p, 0);
        assert!(report.conflict);
        assert!(formula.clauses().iter().any(|c| c.is_empty()));
        assert_eq!(report.assigned.get(&p), Some(&true));
    }

    #[test]
    fn new_units_keep_propagating() {
        let mut formula = load("a\n!a b\n!b c\n!c d e\n");
        let report = unit_propagation(&mut formula);
        assert_eq!(lines(&formula), ["a", "b", "c", "d e"]);
        let order: Vec<_> = report
            .assigned
            .keys()
            .map(|&s| formula.symbols().name(s).to_owned())
            .collect();
        assert_eq!(order, ["a", "b", "c"]);
        assert!(!report.conflict);
    }

    #[test]
    fn cyclic_units_terminate() {
        let mut formula = load("p\n!p q\n!q p\nq\n");
        let report = unit_propagation(&mut formula);
        assert_eq!(lines(&formula), ["p", "q"]);
        assert!(!report.conflict);
    }

    #[test]
    fn contradictory_units() {
        let mut formula = load("p\n!p\n");
        let report = unit_propagation(&mut formula);
        assert!(report.conflict);
        assert_eq!(lines(&formula), ["[]", "p"]);
    }

    #[test]
    fn nothing_to_do() {
        let mut formula = load("p q\n!p !q\n");
        let report = unit_propagation(&mut formula);
        assert_eq!(report, Propagation::default());
        assert_eq!(formula.len(), 2);
    }
}
