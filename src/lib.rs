pub mod clause;
pub mod cnf_reader;
pub mod config;
pub mod data;
pub mod error;
pub mod formula;
pub mod resolution;
pub mod simplify;
pub mod symbols;
pub mod vec_map;

pub use self::clause::Clause;
pub use self::config::{Config, LoaderConfig};
pub use self::data::{Literal, SymbolId, Verdict};
pub use self::error::{Error, Result};
pub use self::formula::Formula;
pub use self::resolution::{resolve, Resolution, Resolver};
pub use self::simplify::{unit_propagation, Propagation};

/// Everything `solve` found out about a formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Only there if unit propagation ran
    pub propagation: Option<Propagation>,
    pub resolution: Resolution,
}

/// Decide `formula`, running unit propagation on it first if `config` asks
/// for that
pub fn solve(formula: &mut Formula, config: &Config) -> Outcome {
    let propagation = if config.unit_propagation {
        Some(unit_propagation(formula))
    } else {
        None
    };
    Outcome {
        propagation,
        resolution: resolve(formula, config),
    }
}
