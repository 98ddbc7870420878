//! Knobs for the loader, the preprocessor and the resolution engine

/// Initial capacity of the clause lists, which then double as they fill up
pub const BASE_CAPACITY: usize = 100;

/// Symbol names longer than this are rejected by the loader
pub const MAX_SYMBOL_LEN: usize = 63;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Skip the `c ...` / `p cnf <vars> <clauses>` header block written by
    /// the random formula generator.
    ///
    /// Only lines before the first clause count as header, so `c` and `p`
    /// are still fine as symbol names further down.
    pub dimacs_header: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub loader: LoaderConfig,

    /// Run unit propagation on the formula before resolution
    pub unit_propagation: bool,

    /// Give up (and assume SAT) once the resolution working set would grow
    /// past this many clauses
    pub clause_limit: Option<usize>,
}
