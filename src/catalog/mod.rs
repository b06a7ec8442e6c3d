//! Static jammer and fitting catalogs.
//!
//! Each catalog is a `'static` table plus a code index built once on first
//! use. Lookups hand out `&'static` records so parsed instances can borrow
//! them for the whole run.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::{FittingKind, JammerKind};
use crate::error::DescriptorKind;

pub mod tables;

/// Every catalog code is exactly this many ASCII characters.
pub const CODE_LEN: usize = 2;

/// A record that can be looked up by its short code.
pub trait CatalogEntry: 'static {
    const KIND: DescriptorKind;

    fn code(&self) -> &'static str;
}

impl CatalogEntry for JammerKind {
    const KIND: DescriptorKind = DescriptorKind::Jammer;

    fn code(&self) -> &'static str {
        self.code
    }
}

impl CatalogEntry for FittingKind {
    const KIND: DescriptorKind = DescriptorKind::Fitting;

    fn code(&self) -> &'static str {
        self.code
    }
}

#[derive(Debug)]
pub struct Catalog<T: CatalogEntry> {
    entries: &'static [T],
    index: HashMap<&'static str, usize>,
}

impl<T: CatalogEntry> Catalog<T> {
    pub fn new(entries: &'static [T]) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.code(), i))
            .collect();
        Self { entries, index }
    }

    pub fn get(&self, code: &str) -> Option<&'static T> {
        let entries = self.entries;
        self.index.get(code).map(|&i| &entries[i])
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'static, T> {
        self.entries.iter()
    }

    pub fn codes(&self) -> Vec<&'static str> {
        self.entries.iter().map(CatalogEntry::code).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static JAMMER_CATALOG: LazyLock<Catalog<JammerKind>> =
    LazyLock::new(|| Catalog::new(&tables::JAMMERS));

static FITTING_CATALOG: LazyLock<Catalog<FittingKind>> =
    LazyLock::new(|| Catalog::new(&tables::FITTINGS));

pub fn jammers() -> &'static Catalog<JammerKind> {
    &JAMMER_CATALOG
}

pub fn fittings() -> &'static Catalog<FittingKind> {
    &FITTING_CATALOG
}
