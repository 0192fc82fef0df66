//! Menu description consumed by the navbar.
//!
//! These are passive data shapes: the only rule enforced is the
//! leaf-vs-group classification, and malformed entries degrade to inert
//! labels instead of failing.

mod model;
mod nesting;

pub use model::{ButtonSpec, CtaToggle, EntryKind, GroupId, Justify, MenuEntry, NavbarConfig};
pub use nesting::{flatten_sub_links, MenuDiagnostic};
