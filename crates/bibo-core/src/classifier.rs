//! Closed-set classifier contract
//!
//! Every enumeration in the workspace is a fixed set of `(name, wire value)`
//! pairs. Members are declared once as a Rust `enum`; the registry below is
//! the declaration-ordered view of that set:
//! - `ALL`: every member, declaration order, no duplicates
//! - `name`: the symbolic name (`"APCU"`, `"ImATeapot"`)
//! - `wire`: the primitive value exchanged with other systems

use std::fmt;

use serde::Serialize;

/// A fixed, enumerable set of named wire values
pub trait ClosedSet: Copy + Eq + fmt::Debug + 'static {
    /// Primitive wire representation (`&'static str` or an integer)
    type Wire: Copy + PartialEq + fmt::Debug + Serialize + 'static;

    /// Every member in declaration order
    const ALL: &'static [Self];

    /// Symbolic name of the member
    fn name(self) -> &'static str;

    /// Wire value of the member
    fn wire(self) -> Self::Wire;

    /// Every member in declaration order
    #[inline]
    fn all() -> &'static [Self] {
        Self::ALL
    }

    /// Exact (un-normalized) lookup by wire value
    fn from_wire(wire: Self::Wire) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.wire() == wire)
    }

    /// Wire values of every member in declaration order
    fn wires() -> Vec<Self::Wire> {
        Self::ALL.iter().map(|m| m.wire()).collect()
    }

    /// Structural projection for interchange
    fn to_record(self) -> Record<Self::Wire> {
        Record {
            name: self.name(),
            value: self.wire(),
        }
    }
}

/// `{name, value}` interchange record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Record<V> {
    pub name: &'static str,
    pub value: V,
}
