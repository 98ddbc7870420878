//! Clauses: the disjunction (OR) of a bunch of literals

use crate::data::Literal;
use crate::symbols::SymbolTable;
use std::fmt::{self, Display, Formatter};
use tinyvec::TinyVec;

/// A clause is the disjunction (OR) of a bunch of literals
///
/// Literals are kept in the order they were added, duplicates included.  The
/// empty clause is a contradiction.
// 6 inline literals fit in 32 bytes (Literal is 4 bytes)
#[derive(Debug, Clone, Default)]
pub struct Clause {
    literals: TinyVec<[Literal; 6]>,
}

impl Clause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_term(&mut self, lit: Literal) {
        self.literals.push(lit);
    }

    pub fn contains(&self, lit: Literal) -> bool {
        self.literals.contains(&lit)
    }

    /// True if some symbol appears both positively and negatively
    pub fn is_tautology(&self) -> bool {
        self.literals.iter().any(|&l| self.contains(!l))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals[..]
    }

    pub fn iter(&self) -> impl Iterator<Item = Literal> + '_ {
        self.literals.iter().copied()
    }

    /// Remove every occurrence of `lit`, returning how many there were
    pub fn remove_all(&mut self, lit: Literal) -> usize {
        let before = self.literals.len();
        self.literals.retain(|l| *l != lit);
        before - self.literals.len()
    }

    /// Resolve `self` (which contains `lit`) against `other` (which contains
    /// `!lit`): `(self - lit) ++ (other - !lit)`
    ///
    /// Each literal is kept once, so repeated resolution can't build ever
    /// longer copies of the same clause.  If the result contains both `x` and
    /// `!x` for some `x`, it's useless -- return `None`.
    pub fn resolve(&self, lit: Literal, other: &Clause) -> Option<Clause> {
        debug_assert!(self.contains(lit) && other.contains(!lit));

        let mut result = Clause::new();
        let rest = self.iter().filter(|&l| l != lit);
        for l in rest.chain(other.iter().filter(|&l| l != !lit)) {
            if result.contains(!l) {
                return None;
            } else if !result.contains(l) {
                result.add_term(l);
            }
        }
        Some(result)
    }

    /// Display this clause in the input format, looking names up in `symbols`
    pub fn display<'a>(&'a self, symbols: &'a SymbolTable) -> DisplayClause<'a> {
        DisplayClause {
            clause: self,
            symbols,
        }
    }
}

/// Clauses are equal when they have the same length and each one contains
/// every literal of the other.
///
/// This is set equality gated on the raw literal count, so `p p q` and `p q q`
/// are equal but `p q` and `p p q` are not.
impl PartialEq for Clause {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|l| other.contains(l))
            && other.iter().all(|l| self.contains(l))
    }
}

impl Eq for Clause {}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Self {
            literals: iter.into_iter().collect(),
        }
    }
}

pub struct DisplayClause<'a> {
    clause: &'a Clause,
    symbols: &'a SymbolTable,
}

impl Display for DisplayClause<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.clause.is_empty() {
            return write!(f, "[]");
        }
        for (i, lit) in self.clause.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            if lit.is_negated() {
                write!(f, "!")?;
            }
            write!(f, "{}", self.symbols.name(lit.symbol()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SymbolId;

    fn lit(id: u32) -> Literal {
        Literal::new(SymbolId(id), false)
    }

    fn clause(lits: &[Literal]) -> Clause {
        lits.iter().copied().collect()
    }

    #[test]
    fn tautology() {
        let (p, q) = (lit(0), lit(1));
        assert!(clause(&[p, q, !p]).is_tautology());
        assert!(!clause(&[p, q, p]).is_tautology());
        assert!(!clause(&[]).is_tautology());
    }

    #[test]
    fn equality_ignores_order() {
        let (p, q, r) = (lit(0), lit(1), lit(2));
        let a = clause(&[p, !q, r]);
        let b = clause(&[r, p, !q]);
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, clause(&[p, q, r]));
    }

    #[test]
    fn equality_is_gated_on_count() {
        let (p, q) = (lit(0), lit(1));
        assert_ne!(clause(&[p, q]), clause(&[p, p, q]));
        assert_ne!(clause(&[p, p, q]), clause(&[p, q]));
        assert_eq!(clause(&[p, p, q]), clause(&[p, q, q]));
    }

    #[test]
    fn copies_are_independent() {
        let (p, q) = (lit(0), lit(1));
        let original = clause(&[p]);
        let mut copy = original.clone();
        copy.add_term(q);
        assert_eq!(original.len(), 1);
        assert!(!original.contains(q));
        assert!(copy.contains(q));
    }

    #[test]
    fn grows_past_inline_storage() {
        let mut c = Clause::new();
        for i in 0..250 {
            c.add_term(lit(i));
        }
        assert_eq!(c.len(), 250);
        assert!(c.contains(lit(249)));
    }

    #[test]
    fn resolve_merges_duplicates() {
        let (p, q, r) = (lit(0), lit(1), lit(2));
        let a = clause(&[p, q, q]);
        let b = clause(&[!p, q, r]);
        let res = a.resolve(p, &b).unwrap();
        assert_eq!(res.literals(), &[q, r]);
    }

    #[test]
    fn resolve_drops_tautologies() {
        let (p, q) = (lit(0), lit(1));
        let a = clause(&[p, q]);
        let b = clause(&[!p, !q]);
        assert_eq!(a.resolve(p, &b), None);
    }

    #[test]
    fn resolve_complementary_units_is_empty() {
        let p = lit(0);
        let res = clause(&[p]).resolve(p, &clause(&[!p])).unwrap();
        assert!(res.is_empty());
    }

    #[test]
    fn remove_all_occurrences() {
        let (p, q) = (lit(0), lit(1));
        let mut c = clause(&[p, q, p]);
        assert_eq!(c.remove_all(p), 2);
        assert_eq!(c.literals(), &[q]);
        assert_eq!(c.remove_all(p), 0);
    }

    #[test]
    fn display_uses_names() {
        let mut symbols = SymbolTable::new();
        let p = Literal::new(symbols.intern("p"), false);
        let q = Literal::new(symbols.intern("q"), false);
        assert_eq!(clause(&[p, !q]).display(&symbols).to_string(), "p !q");
        assert_eq!(Clause::new().display(&symbols).to_string(), "[]");
    }
}
