//! A synchronous key/value store capability.
//!
//! The consensus write path (spec §5) is single-writer and synchronous: disk
//! I/O and shared-memory application are the only blocking points, and both
//! happen once per `Accept`. This module models the underlying store the way
//! `avalanche_types::subnet::rpc::database` models it for the async gRPC
//! plugin boundary, but without the tokio/tonic machinery that boundary
//! needs -- the Relay VM core never crosses a process boundary to reach its
//! own database.
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::errors::{Error, Result};

/// A transactional byte store with batched commit.
///
/// Implementations are expected to be cheaply `Clone`-able handles onto
/// shared state (the in-memory implementation below uses `Arc<RwLock<..>>`,
/// the same shape the teacher's `memdb::Database` uses with a tokio lock).
pub trait Database: Send + Sync {
    fn has(&self, key: &[u8]) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;
    fn put(&self, key: &[u8], value: &[u8]) -> Result<()>;
    fn delete(&self, key: &[u8]) -> Result<()>;
    fn new_batch(&self) -> Batch;
    /// Iterates all keys with the given prefix in ascending byte order.
    fn iter_prefix(&self, prefix: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)>;
}

/// A single put or delete, queued up for atomic application.
#[derive(Debug, Clone)]
pub enum Op {
    Put(Vec<u8>, Vec<u8>),
    Delete(Vec<u8>),
}

/// A write-only buffer of operations, applied to its host database in one
/// shot via `write`. Mirrors `subnet::rpc::database::batch::Batch`, minus
/// the async/`Arc<Mutex<..>>` plumbing that only the gRPC boundary needs.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    ops: Vec<Op>,
}

impl Batch {
    pub fn put(&mut self, key: &[u8], value: &[u8]) {
        self.ops.push(Op::Put(key.to_vec(), value.to_vec()));
    }

    pub fn delete(&mut self, key: &[u8]) {
        self.ops.push(Op::Delete(key.to_vec()));
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Appends another batch's operations onto this one, preserving order.
    pub fn extend(&mut self, other: Batch) {
        self.ops.extend(other.ops);
    }
}

/// An in-memory database useful for tests and for a from-genesis base state.
/// Grounded on `subnet::rpc::database::memdb::Database`: a mutex/lock guarded
/// `BTreeMap` (ordered, so prefix iteration returns sorted keys without an
/// explicit sort step).
#[derive(Clone, Default)]
pub struct MemoryDatabase {
    state: Arc<RwLock<BTreeMap<Vec<u8>, Vec<u8>>>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_read(&self) -> Result<std::sync::RwLockReadGuard<'_, BTreeMap<Vec<u8>, Vec<u8>>>> {
        self.state
            .read()
            .map_err(|_| Error::Database {
                message: "database lock poisoned".to_string(),
            })
    }

    fn lock_write(&self) -> Result<std::sync::RwLockWriteGuard<'_, BTreeMap<Vec<u8>, Vec<u8>>>> {
        self.state
            .write()
            .map_err(|_| Error::Database {
                message: "database lock poisoned".to_string(),
            })
    }

    /// Applies a batch's operations atomically with respect to other
    /// `MemoryDatabase` readers/writers (single lock acquisition).
    pub fn write(&self, batch: &Batch) -> Result<()> {
        let mut db = self.lock_write()?;
        for op in batch.ops() {
            match op {
                Op::Put(k, v) => {
                    db.insert(k.clone(), v.clone());
                }
                Op::Delete(k) => {
                    db.remove(k);
                }
            }
        }
        Ok(())
    }
}

impl Database for MemoryDatabase {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.lock_read()?.get(key).cloned())
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.lock_write()?.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &[u8]) -> Result<()> {
        self.lock_write()?.remove(key);
        Ok(())
    }

    fn new_batch(&self) -> Batch {
        Batch::default()
    }

    fn iter_prefix(&self, prefix: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)> {
        match self.lock_read() {
            Ok(db) => db
                .range(prefix.to_vec()..)
                .take_while(|(k, _)| k.starts_with(prefix))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            Err(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_get_delete() {
        let db = MemoryDatabase::new();
        assert!(db.get(b"foo").unwrap().is_none());
        db.put(b"foo", b"bar").unwrap();
        assert_eq!(db.get(b"foo").unwrap().unwrap(), b"bar");
        assert!(db.has(b"foo").unwrap());
        db.delete(b"foo").unwrap();
        assert!(db.get(b"foo").unwrap().is_none());
    }

    #[test]
    fn batch_write_is_atomic_in_order() {
        let db = MemoryDatabase::new();
        db.put(b"a", b"1").unwrap();
        let mut batch = db.new_batch();
        batch.put(b"a", b"2");
        batch.delete(b"b");
        batch.put(b"c", b"3");
        db.write(&batch).unwrap();
        assert_eq!(db.get(b"a").unwrap().unwrap(), b"2");
        assert!(db.get(b"b").unwrap().is_none());
        assert_eq!(db.get(b"c").unwrap().unwrap(), b"3");
    }

    #[test]
    fn iter_prefix_is_sorted() {
        let db = MemoryDatabase::new();
        db.put(b"stakers/b", b"1").unwrap();
        db.put(b"stakers/a", b"2").unwrap();
        db.put(b"other/a", b"3").unwrap();
        let got = db.iter_prefix(b"stakers/");
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].0, b"stakers/a");
        assert_eq!(got[1].0, b"stakers/b");
    }
}
