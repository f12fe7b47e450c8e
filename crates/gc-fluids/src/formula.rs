//! Molecular formula and SMILES helpers.

use crate::error::{FluidError, FluidResult};
use std::collections::BTreeMap;

/// Element symbol -> atom count.
pub type ElementCounts = BTreeMap<String, u32>;

/// Parse a Hill-style molecular formula (`"C7H8"`, `"C6H5Cl"`, `"CH3COOH"`).
///
/// Repeated symbols are summed. Anything other than element symbols and
/// counts (charges, dots, brackets) is rejected.
pub fn parse_formula(formula: &str) -> FluidResult<ElementCounts> {
    let malformed = || FluidError::MalformedFormula {
        formula: formula.to_string(),
    };

    let mut counts = ElementCounts::new();
    let mut chars = formula.trim().chars().peekable();
    if chars.peek().is_none() {
        return Err(malformed());
    }

    while let Some(c) = chars.next() {
        if !c.is_ascii_uppercase() {
            return Err(malformed());
        }
        let mut symbol = c.to_string();
        while let Some(&lc) = chars.peek() {
            if !lc.is_ascii_lowercase() {
                break;
            }
            symbol.push(lc);
            chars.next();
        }

        let mut digits = String::new();
        while let Some(&d) = chars.peek() {
            if !d.is_ascii_digit() {
                break;
            }
            digits.push(d);
            chars.next();
        }
        let n: u32 = if digits.is_empty() {
            1
        } else {
            digits.parse().map_err(|_| malformed())?
        };

        *counts.entry(symbol).or_insert(0) += n;
    }

    Ok(counts)
}

/// Ring count estimated from a SMILES string.
///
/// Takes the largest single digit in the string, i.e. the highest ring-closure
/// label. Only valid for molecules whose ring-closure labels stay below 10;
/// `%nn` labels are read digit by digit.
pub fn ring_count(smiles: &str) -> u32 {
    smiles.chars().filter_map(|c| c.to_digit(10)).max().unwrap_or(0)
}
