//! Read a formula from the plain-text clause format
//!
//! One clause per line, literals separated by whitespace:
//!
//! ```text
//! # comments start with a hash
//! p !q r
//! !p
//! ```
//!
//! A literal is a symbol name (`[A-Za-z_][A-Za-z0-9_]*`, at most 63
//! characters), with a leading `!` if it's negated.
//!
//! Longer names are a format error rather than being cut down to 63
//! characters, so a file that leans on truncation to make two spellings name
//! the same symbol won't load.
//!
//! Input is read as raw bytes.  Comment and blank lines may hold anything,
//! while a token with bytes outside ASCII is a format error.

use crate::clause::Clause;
use crate::config::{LoaderConfig, MAX_SYMBOL_LEN};
use crate::error::{Error, Result};
use crate::formula::Formula;

use std::fs::File;
use std::io::{self, prelude::*, BufReader};
use std::path::Path;

pub fn read_from_file(filename: impl AsRef<Path>, config: &LoaderConfig) -> Result<Formula> {
    let path = filename.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;

    read(BufReader::new(file), config).map_err(|e| match e {
        Error::Io { source, .. } => Error::Io {
            path: path.to_owned(),
            source,
        },
        e => e,
    })
}

pub fn parse_str(text: &str, config: &LoaderConfig) -> Result<Formula> {
    read(text.as_bytes(), config)
}

/// Read a whole formula, one clause per line
///
/// Tautologies and clauses the formula already contains are skipped.  On
/// error nothing is returned; the partially built formula is dropped.
pub fn read(mut reader: impl BufRead, config: &LoaderConfig) -> Result<Formula> {
    let mut formula = Formula::new();
    let mut in_header = config.dimacs_header;
    let mut skipped = 0;

    let mut buf = Vec::new();
    let mut line_num = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(io_error)? == 0 {
            break;
        }
        line_num += 1;
        let line = trim_end(&buf);

        if line.is_empty() || line[0] == b'#' {
            continue;
        }

        if in_header {
            if is_header_line(&String::from_utf8_lossy(line), line_num)? {
                continue;
            }
            in_header = false;
        }

        let mut clause = Clause::new();
        let tokens = line.split(u8::is_ascii_whitespace).filter(|t| !t.is_empty());
        for token in tokens {
            let token = String::from_utf8_lossy(token);
            let (negated, name) = match token.strip_prefix('!') {
                Some(name) => (true, name),
                None => (false, &*token),
            };
            if let Err(reason) = check_symbol(name) {
                return Err(Error::Format {
                    line: line_num,
                    token: token.into_owned(),
                    reason,
                });
            }
            clause.add_term(formula.literal(name, negated));
        }

        if clause.is_empty() || clause.is_tautology() {
            log::debug!("Line {}: dropping degenerate clause", line_num);
            skipped += 1;
        } else if formula.contains(&clause) {
            log::debug!("Line {}: dropping duplicate clause", line_num);
            skipped += 1;
        } else {
            formula.add_clause(&clause)?;
        }
    }

    log::info!(
        "Read {} clauses over {} symbols ({} skipped)",
        formula.len(),
        formula.symbols().len(),
        skipped
    );
    Ok(formula)
}

/// Strip trailing whitespace, `\r\n` included
fn trim_end(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |i| i + 1);
    &line[..end]
}

fn io_error(source: io::Error) -> Error {
    Error::Io {
        path: "<input>".into(),
        source,
    }
}

/// Is this line part of a `c ...` / `p cnf <vars> <clauses>` header?
fn is_header_line(line: &str, line_num: usize) -> Result<bool> {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some("c") => Ok(true),
        Some("p") if parts.next() == Some("cnf") => {
            // example line:
            // p cnf 5 3
            let counts: Vec<_> = parts.collect();
            if counts.len() == 2 && counts.iter().all(|n| n.parse::<u32>().is_ok()) {
                Ok(true)
            } else {
                Err(Error::Format {
                    line: line_num,
                    token: line.to_owned(),
                    reason: "expected \"p cnf <vars> <clauses>\"",
                })
            }
        }
        _ => Ok(false),
    }
}

fn check_symbol(name: &str) -> std::result::Result<(), &'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Err("empty symbol name"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => (),
        Some(_) => return Err("symbol must start with a letter or underscore"),
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err("symbol may only contain letters, digits and underscores");
    }
    if name.len() > MAX_SYMBOL_LEN {
        return Err("symbol name is too long");
    }
    Ok(())
}
