//! A CNF formula: a list of clauses plus the names of its symbols

use crate::clause::Clause;
use crate::data::Literal;
use crate::error::Result;
use crate::symbols::SymbolTable;
use crate::vec_map::grow;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Default)]
pub struct Formula {
    clauses: Vec<Clause>,
    symbols: SymbolTable,
}

impl Formula {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the literal for `name`, interning it if it's new
    pub fn literal(&mut self, name: &str, negated: bool) -> Literal {
        Literal::new(self.symbols.intern(name), negated)
    }

    /// Add a copy of `clause`
    ///
    /// Doesn't check for duplicates; use `contains` first if that matters.
    /// If growing the clause list fails, the formula is left unchanged.
    pub fn add_clause(&mut self, clause: &Clause) -> Result<()> {
        debug_assert!(!clause.is_tautology());
        grow(&mut self.clauses)?;
        self.clauses.push(clause.clone());
        Ok(())
    }

    /// True if an equal clause is already in the formula
    pub fn contains(&self, clause: &Clause) -> bool {
        self.clauses.iter().any(|c| c == clause)
    }

    /// Remove a clause, moving the last clause into its place
    pub fn remove_clause(&mut self, index: usize) -> Clause {
        self.clauses.swap_remove(index)
    }

    pub fn clause_mut(&mut self, index: usize) -> &mut Clause {
        &mut self.clauses[index]
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// One clause per line, in the same format the loader reads
impl Display for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for clause in &self.clauses {
            writeln!(f, "{}", clause.display(&self.symbols))?;
        }
        Ok(())
    }
}
