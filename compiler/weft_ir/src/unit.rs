//! Compilation units.

use crate::Name;

/// One compilation unit (source file).
///
/// `path` is the unit's canonical path, forward-slash separated regardless
/// of host platform; reference lowering computes relative import specifiers
/// from these strings.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourceUnit {
    pub path: Name,
}

impl SourceUnit {
    pub fn new(path: Name) -> Self {
        SourceUnit { path }
    }
}
