//! Table Catalog
//!
//! Read-only registry of dining tables. The engine always reads one immutable
//! snapshot per query or admission attempt, so no locking is needed here.

use shared::models::DiningTable;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;

/// Catalog errors (construction only; reads cannot fail)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Table {code} has non-positive capacity {capacity}")]
    InvalidCapacity { code: String, capacity: i32 },

    #[error("Duplicate table id: {0}")]
    DuplicateId(i64),

    #[error("Duplicate table code: {0}")]
    DuplicateCode(String),
}

pub trait TableCatalog: Send + Sync {
    /// All tables in catalog order (ascending code, then id)
    fn list_tables(&self) -> Arc<[DiningTable]>;

    fn get_table(&self, id: i64) -> Option<DiningTable>;
}

/// In-process catalog snapshot
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    tables: Arc<[DiningTable]>,
    /// id → position in `tables`
    index: Arc<HashMap<i64, usize>>,
}

impl MemoryCatalog {
    pub fn new(mut tables: Vec<DiningTable>) -> Result<Self, CatalogError> {
        let mut codes = HashSet::new();
        for table in &tables {
            if table.capacity <= 0 {
                return Err(CatalogError::InvalidCapacity {
                    code: table.code.clone(),
                    capacity: table.capacity,
                });
            }
            if !codes.insert(table.code.as_str()) {
                return Err(CatalogError::DuplicateCode(table.code.clone()));
            }
        }

        tables.sort_by(|a, b| a.code.cmp(&b.code).then(a.id.cmp(&b.id)));

        let mut index = HashMap::with_capacity(tables.len());
        for (pos, table) in tables.iter().enumerate() {
            if index.insert(table.id, pos).is_some() {
                return Err(CatalogError::DuplicateId(table.id));
            }
        }

        Ok(Self {
            tables: tables.into(),
            index: Arc::new(index),
        })
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl TableCatalog for MemoryCatalog {
    fn list_tables(&self) -> Arc<[DiningTable]> {
        Arc::clone(&self.tables)
    }

    fn get_table(&self, id: i64) -> Option<DiningTable> {
        self.index.get(&id).map(|&pos| self.tables[pos].clone())
    }
}
