use std::cell::Cell;

use uuid::Uuid;

use crate::entities::IdSupplier;

/// Random v4 UUIDs. Default supplier.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdSupplier;

impl IdSupplier for UuidIdSupplier {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `{prefix}-{n}` identifiers, counting from 1.
#[derive(Debug)]
pub struct SequentialIdSupplier {
    prefix: String,
    counter: Cell<u64>,
}

impl SequentialIdSupplier {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Cell::new(0),
        }
    }
}

impl IdSupplier for SequentialIdSupplier {
    fn next_id(&self) -> String {
        let n = self.counter.get() + 1;
        self.counter.set(n);
        format!("{}-{}", self.prefix, n)
    }
}
