//! Resolution refutation by saturation
//!
//! Starting from the clauses of the formula, keep resolving pairs of clauses
//! on complementary literals.  Deriving the empty clause means the formula is
//! UNSAT.  If a whole level goes by without producing anything new, the set is
//! saturated and the formula is SAT.
//!
//! The working set is grown level by level: a level only resolves clauses
//! that were there when it started, and the new resolvents wait for the next
//! level.

use crate::clause::Clause;
use crate::config::Config;
use crate::data::*;
use crate::formula::Formula;
use crate::vec_map::VecMap;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum State {
    Running,
    Terminated(Verdict),
}

/// The result of a run, plus some statistics
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Resolution {
    pub verdict: Verdict,
    /// False if the engine gave up early (out of memory, or past the clause
    /// limit) and assumed SAT without saturating
    pub saturated: bool,
    pub levels: usize,
    pub resolvents_added: usize,
    pub tautologies: usize,
    pub duplicates: usize,
    pub working_set: usize,
}

/// The main state for the resolution engine
#[derive(Debug, Clone)]
pub struct Resolver {
    clauses: VecMap<ClauseId, Clause>,
    /// Everything below this index has already been resolved against
    /// everything else below it
    start: usize,
    state: State,
    saturated: bool,
    clause_limit: Option<usize>,

    levels: usize,
    resolvents_added: usize,
    tautologies: usize,
    duplicates: usize,
}

/// Why a level stopped early
enum Stop {
    Refuted(Unsat),
    GaveUp,
}

impl From<Unsat> for Stop {
    fn from(unsat: Unsat) -> Self {
        Stop::Refuted(unsat)
    }
}

impl Resolver {
    /// Set up a working set holding a copy of every clause in `formula`
    pub fn new(formula: &Formula, config: &Config) -> Self {
        let mut this = Self {
            clauses: VecMap::new(Vec::new()),
            start: 0,
            state: State::Running,
            saturated: true,
            clause_limit: config.clause_limit,
            levels: 0,
            resolvents_added: 0,
            tautologies: 0,
            duplicates: 0,
        };

        for clause in formula.clauses() {
            if clause.is_empty() {
                log::debug!("Input already contains the empty clause");
                this.state = State::Terminated(Verdict::Unsat);
                break;
            }
            if this.clauses.try_push(clause.clone()).is_err() {
                this.give_up("copying the input clauses");
                break;
            }
        }
        this
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses.inner
    }

    /// Run levels until a verdict is reached
    pub fn solve(&mut self) -> Resolution {
        log::info!("Resolving {} clauses", self.clauses.len());

        while self.state == State::Running {
            self.step();
        }

        let result = self.result();
        log::info!(
            "{:?} after {} levels: {} resolvents added, {} tautologies and {} duplicates discarded",
            result.verdict,
            result.levels,
            result.resolvents_added,
            result.tautologies,
            result.duplicates,
        );
        result
    }

    /// Run one level of resolution
    ///
    /// Does nothing once terminated.
    pub fn step(&mut self) -> State {
        if self.state != State::Running {
            return self.state;
        }

        let end = self.clauses.len();
        self.levels += 1;
        log::debug!("Level {}: {} clauses", self.levels, end);

        match self.level(end) {
            Ok(()) if self.clauses.len() == end => {
                log::debug!("Saturated");
                self.state = State::Terminated(Verdict::Sat);
            }
            Ok(()) => self.start = end,
            Err(Stop::Refuted(Unsat)) => {
                log::debug!("Derived the empty clause");
                self.state = State::Terminated(Verdict::Unsat);
            }
            Err(Stop::GaveUp) => (),
        }
        self.state
    }

    /// Resolve every pair of clauses below `end`
    ///
    /// Pairs where both clauses are below `start` were already resolved by an
    /// earlier level, and everything they produce is either in the working
    /// set or was thrown away, so they're skipped.
    fn level(&mut self, end: usize) -> Result<(), Stop> {
        for i in 0..end {
            for j in (i + 1).max(self.start)..end {
                let ci = ClauseId::new(i as u32);
                let cj = ClauseId::new(j as u32);
                for k in 0..self.clauses[ci].len() {
                    let lit = self.clauses[ci].literals()[k];
                    if !self.clauses[cj].contains(!lit) {
                        continue;
                    }
                    let resolvent = self.clauses[ci].resolve(lit, &self.clauses[cj]);
                    self.add_resolvent(resolvent)?;
                }
            }
        }
        Ok(())
    }

    fn add_resolvent(&mut self, resolvent: Option<Clause>) -> Result<(), Stop> {
        let resolvent = match resolvent {
            Some(r) => r,
            None => {
                self.tautologies += 1;
                return Ok(());
            }
        };

        if resolvent.is_empty() {
            return Err(Unsat.into());
        }

        if self.clauses.iter().any(|c| *c == resolvent) {
            self.duplicates += 1;
            return Ok(());
        }

        if let Some(limit) = self.clause_limit {
            if self.clauses.len() >= limit {
                self.give_up("hitting the clause limit");
                return Err(Stop::GaveUp);
            }
        }
        if self.clauses.try_push(resolvent).is_err() {
            self.give_up("running out of memory");
            return Err(Stop::GaveUp);
        }
        self.resolvents_added += 1;
        Ok(())
    }

    /// Stop without saturating, and assume it's SAT
    fn give_up(&mut self, reason: &str) {
        log::warn!(
            "Stopped resolution after {}, with {} clauses; assuming SAT",
            reason,
            self.clauses.len()
        );
        self.saturated = false;
        self.state = State::Terminated(Verdict::Sat);
    }

    fn result(&self) -> Resolution {
        let verdict = match self.state {
            State::Terminated(verdict) => verdict,
            State::Running => unreachable!("no verdict yet"),
        };
        Resolution {
            verdict,
            saturated: self.saturated || verdict == Verdict::Unsat,
            levels: self.levels,
            resolvents_added: self.resolvents_added,
            tautologies: self.tautologies,
            duplicates: self.duplicates,
            working_set: self.clauses.len(),
        }
    }
}

/// Decide `formula` by resolution refutation
pub fn resolve(formula: &Formula, config: &Config) -> Resolution {
    Resolver::new(formula, config).solve()
}
