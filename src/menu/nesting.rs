//! Nesting rules for `sub_links`.
//!
//! One level of nesting is supported. Groups found deeper are flattened into
//! their parent group, depth-first: the nested group stays as a header row
//! followed by its own links, so no entry is ever dropped.

use std::fmt;

use super::model::{EntryKind, MenuEntry, NavbarConfig};

/// Flattens a group's `sub_links` into one list. Nested groups keep their
/// position as a header entry, even when they have no links.
pub fn flatten_sub_links(links: &[MenuEntry]) -> Vec<&MenuEntry> {
    let mut out = Vec::with_capacity(links.len());
    collect(links, &mut out);
    out
}

fn collect<'a>(links: &'a [MenuEntry], out: &mut Vec<&'a MenuEntry>) {
    for link in links {
        match link.kind() {
            EntryKind::Group { links: nested } => {
                out.push(link);
                collect(nested, out);
            }
            EntryKind::Leaf { .. } | EntryKind::Inert => out.push(link),
        }
    }
}

/// A malformed spot in the menu description. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuDiagnostic {
    /// Entry has neither `href` nor `subLinks`.
    Inert { path: Vec<usize>, title: String },
    /// Group nested below the first level; its links get flattened.
    DeepNesting { path: Vec<usize>, title: String },
}

impl MenuDiagnostic {
    pub fn path(&self) -> &[usize] {
        match self {
            Self::Inert { path, .. } | Self::DeepNesting { path, .. } => path,
        }
    }
}

impl fmt::Display for MenuDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self
            .path()
            .iter()
            .map(|idx| idx.to_string())
            .collect::<Vec<_>>()
            .join(".");
        match self {
            Self::Inert { title, .. } => {
                write!(f, "menu[{path}] '{title}' has neither href nor subLinks")
            }
            Self::DeepNesting { title, .. } => {
                write!(f, "menu[{path}] '{title}' nests a group too deep, links are flattened")
            }
        }
    }
}

impl NavbarConfig {
    /// Reports inert entries and over-deep groups, in menu order.
    pub fn diagnostics(&self) -> Vec<MenuDiagnostic> {
        let mut found = Vec::new();
        walk(&self.menu_list, &mut Vec::new(), &mut found);
        found
    }
}

fn walk(entries: &[MenuEntry], path: &mut Vec<usize>, found: &mut Vec<MenuDiagnostic>) {
    for (idx, entry) in entries.iter().enumerate() {
        path.push(idx);
        match entry.kind() {
            EntryKind::Inert => found.push(MenuDiagnostic::Inert {
                path: path.clone(),
                title: entry.title.clone(),
            }),
            EntryKind::Group { links } => {
                if path.len() > 1 {
                    found.push(MenuDiagnostic::DeepNesting {
                        path: path.clone(),
                        title: entry.title.clone(),
                    });
                }
                walk(links, path, found);
            }
            EntryKind::Leaf { .. } => {}
        }
        path.pop();
    }
}
