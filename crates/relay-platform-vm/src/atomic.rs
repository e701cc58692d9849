//! Component I: the shared-memory capability used for atomic cross-chain
//! UTXO transfers (spec.md §6 "Atomic shared-memory interface").
//!
//! Grounded on `avalanche_types::subnet::rpc::database::manager`'s
//! batch-of-keyed-operations shape, adapted from its async gRPC form to a
//! synchronous trait: the Relay VM core never crosses a process boundary to
//! reach its own shared-memory collaborator (spec §5 resource policy), so
//! there is no tonic/tokio machinery to carry over here.
use std::collections::HashMap;

use avalanche_types::ids::{short, Id};

use crate::database::Batch;
use crate::errors::{Error, Result};

/// One value to make visible to a peer chain, plus the owner addresses that
/// index it for that peer's "find everything I can spend" queries.
#[derive(Debug, Clone)]
pub struct Element {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
    pub traits: Vec<short::Id>,
}

/// One peer chain's batch of puts and removes, requested atomically.
#[derive(Debug, Clone, Default)]
pub struct Requests {
    pub puts: Vec<Element>,
    pub removes: Vec<Vec<u8>>,
}

impl Requests {
    pub fn is_empty(&self) -> bool {
        self.puts.is_empty() && self.removes.is_empty()
    }
}

/// The atomic collaborator every accepted block's batch commits alongside:
/// `Apply` must make every requested chain's puts/removes visible together,
/// in the same atomic unit as `batch`'s database writes, or not at all.
pub trait SharedMemory: Send + Sync {
    fn apply(&self, requests: &HashMap<Id, Requests>, batch: &Batch) -> Result<()>;
    /// Fetches values previously put for `chain_id` (this chain's own ID,
    /// i.e. keys some peer put addressed to us) under the given keys.
    /// Returns `NotFound` if any key is absent.
    fn get(&self, chain_id: &Id, keys: &[Vec<u8>]) -> Result<Vec<Vec<u8>>>;
}

/// An in-process shared-memory collaborator, useful for tests and for a
/// single-VM deployment where every chain this one imports from/exports to
/// lives in the same process. Grounded on `database::MemoryDatabase`'s
/// lock-guarded map shape.
#[derive(Default)]
pub struct MemorySharedMemory {
    state: std::sync::RwLock<HashMap<(Id, Vec<u8>), Vec<u8>>>,
}

impl MemorySharedMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SharedMemory for MemorySharedMemory {
    fn apply(&self, requests: &HashMap<Id, Requests>, _batch: &Batch) -> Result<()> {
        let mut state = self.state.write().map_err(|_| Error::Database {
            message: "shared memory lock poisoned".to_string(),
        })?;
        for (chain_id, req) in requests {
            for key in &req.removes {
                state.remove(&(*chain_id, key.clone()));
            }
            for element in &req.puts {
                state.insert((*chain_id, element.key.clone()), element.value.clone());
            }
        }
        Ok(())
    }

    fn get(&self, chain_id: &Id, keys: &[Vec<u8>]) -> Result<Vec<Vec<u8>>> {
        let state = self.state.read().map_err(|_| Error::Database {
            message: "shared memory lock poisoned".to_string(),
        })?;
        let mut out = Vec::with_capacity(keys.len());
        for key in keys {
            let value = state
                .get(&(*chain_id, key.clone()))
                .cloned()
                .ok_or_else(|| Error::AtomicMemoryMissing {
                    utxo_id: format!("{:?}", key),
                    source_chain_id: format!("{:?}", chain_id),
                })?;
            out.push(value);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_get_round_trips() {
        let shared = MemorySharedMemory::new();
        let chain_id = Id::from_slice(&[9u8; 32]);
        let mut requests = HashMap::new();
        requests.insert(
            chain_id,
            Requests {
                puts: vec![Element {
                    key: b"utxo-1".to_vec(),
                    value: b"payload".to_vec(),
                    traits: vec![],
                }],
                removes: vec![],
            },
        );
        let batch = Batch::default();
        shared.apply(&requests, &batch).unwrap();

        let got = shared.get(&chain_id, &[b"utxo-1".to_vec()]).unwrap();
        assert_eq!(got, vec![b"payload".to_vec()]);
    }

    #[test]
    fn remove_then_get_is_not_found() {
        let shared = MemorySharedMemory::new();
        let chain_id = Id::from_slice(&[9u8; 32]);
        let mut puts = HashMap::new();
        puts.insert(
            chain_id,
            Requests {
                puts: vec![Element {
                    key: b"utxo-1".to_vec(),
                    value: b"payload".to_vec(),
                    traits: vec![],
                }],
                removes: vec![],
            },
        );
        shared.apply(&puts, &Batch::default()).unwrap();

        let mut removes = HashMap::new();
        removes.insert(
            chain_id,
            Requests {
                puts: vec![],
                removes: vec![b"utxo-1".to_vec()],
            },
        );
        shared.apply(&removes, &Batch::default()).unwrap();

        let err = shared.get(&chain_id, &[b"utxo-1".to_vec()]).unwrap_err();
        assert!(matches!(err, Error::AtomicMemoryMissing { .. }));
    }

    #[test]
    fn requests_is_empty_when_no_puts_or_removes() {
        assert!(Requests::default().is_empty());
        let non_empty = Requests {
            puts: vec![],
            removes: vec![b"x".to_vec()],
        };
        assert!(!non_empty.is_empty());
    }
}
