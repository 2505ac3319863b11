//! Generic closed-set audits
//!
//! Each audit checks one property of an enumeration and reports the first
//! member that violates it.

use std::collections::HashSet;

use thiserror::Error;

use bibo_core::ClosedSet;

/// A violated closed-set property
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuditFailure {
    #[error("{kind}: registry is empty")]
    EmptyRegistry { kind: &'static str },

    #[error("{kind}: duplicate member {name}")]
    DuplicateMember { kind: &'static str, name: &'static str },

    #[error("{kind}: duplicate wire value {value}")]
    DuplicateWire { kind: &'static str, value: String },

    #[error("{kind}: wire lookup of {name} returned {found}")]
    WireLookup {
        kind: &'static str,
        name: &'static str,
        found: String,
    },

    #[error("{kind}: {name} does not round-trip through {input:?}")]
    RoundTrip {
        kind: &'static str,
        name: &'static str,
        input: String,
    },

    #[error("{kind}: validity disagrees with parse for {input:?}")]
    ValidityMismatch { kind: &'static str, input: String },
}

pub type AuditResult = Result<(), AuditFailure>;

/// Registry shape: non-empty, no repeated member, pairwise distinct wire
/// values, and exact wire lookup returns the member itself.
pub fn audit_registry<T: ClosedSet>(kind: &'static str) -> AuditResult {
    let all = T::all();
    if all.is_empty() {
        return Err(AuditFailure::EmptyRegistry { kind });
    }

    let mut names = HashSet::new();
    let mut wires: Vec<T::Wire> = Vec::with_capacity(all.len());
    for member in all {
        if !names.insert(member.name()) {
            return Err(AuditFailure::DuplicateMember {
                kind,
                name: member.name(),
            });
        }
        let wire = member.wire();
        if wires.contains(&wire) {
            return Err(AuditFailure::DuplicateWire {
                kind,
                value: format!("{wire:?}"),
            });
        }
        wires.push(wire);

        let found = T::from_wire(wire);
        if found != Some(*member) {
            return Err(AuditFailure::WireLookup {
                kind,
                name: member.name(),
                found: format!("{found:?}"),
            });
        }
    }
    Ok(())
}

/// Every member parses back from its wire value as declared, lowercased and
/// uppercased.
pub fn audit_round_trip<T, P>(kind: &'static str, parse: P) -> AuditResult
where
    T: ClosedSet<Wire = &'static str>,
    P: Fn(&str) -> Option<T>,
{
    for member in T::all() {
        let wire = member.wire();
        for input in [
            wire.to_string(),
            wire.to_ascii_lowercase(),
            wire.to_ascii_uppercase(),
        ] {
            if parse(&input) != Some(*member) {
                return Err(AuditFailure::RoundTrip {
                    kind,
                    name: member.name(),
                    input,
                });
            }
        }
    }
    Ok(())
}

/// `is_valid` agrees with `parse` on every input
pub fn audit_validity<T, P, V>(
    kind: &'static str,
    parse: P,
    is_valid: V,
    inputs: &[&str],
) -> AuditResult
where
    P: Fn(&str) -> Option<T>,
    V: Fn(&str) -> bool,
{
    for &input in inputs {
        if is_valid(input) != parse(input).is_some() {
            return Err(AuditFailure::ValidityMismatch {
                kind,
                input: input.to_string(),
            });
        }
    }
    Ok(())
}
