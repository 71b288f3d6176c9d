/*!
Générateurs d'opérations reproductibles

Chaque générateur prend une graine : un échec se rejoue à l'identique.
Les fonctions `replay_*` appliquent la séquence au moteur et à un modèle
de référence de la std, et comparent après chaque pas.
*/

use anyhow::{ensure, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, VecDeque};

use fleet_kernel::{HealthQueue, HealthStatus, LoadIndex, RegistryError, ServerId, TaskScheduler};

use crate::fixtures::report;
use crate::invariants::heap_violation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOp {
    Upsert(ServerId, u8),
    Delete(ServerId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapOp {
    Insert(i32),
    Extract,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueOp {
    Enqueue(ServerId),
    Dequeue,
}

/// Ids tirés dans `0..key_space` pour provoquer collisions et suppressions utiles
pub fn load_ops(seed: u64, count: usize, key_space: ServerId) -> Vec<LoadOp> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let id = rng.gen_range(0..key_space);
            if rng.gen_bool(0.65) {
                LoadOp::Upsert(id, rng.gen_range(0..=100))
            } else {
                LoadOp::Delete(id)
            }
        })
        .collect()
}

pub fn heap_ops(seed: u64, count: usize) -> Vec<HeapOp> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            if rng.gen_bool(0.6) {
                HeapOp::Insert(rng.gen_range(-20..20))
            } else {
                HeapOp::Extract
            }
        })
        .collect()
}

pub fn queue_ops(seed: u64, count: usize) -> Vec<QueueOp> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            if rng.gen_bool(0.55) {
                QueueOp::Enqueue(i as ServerId)
            } else {
                QueueOp::Dequeue
            }
        })
        .collect()
}

/// Rejoue contre un `BTreeMap` ; vérifie ordre, taille et contenu à chaque pas
pub fn replay_load_ops(index: &mut LoadIndex, ops: &[LoadOp]) -> Result<()> {
    let mut model = BTreeMap::new();
    for (step, op) in ops.iter().enumerate() {
        match *op {
            LoadOp::Upsert(id, load) => {
                index.upsert(id, load)?;
                model.insert(id, load);
            }
            LoadOp::Delete(id) => {
                let removed = index.delete(id);
                ensure!(
                    removed == model.remove(&id).is_some(),
                    "step {step}: delete({id}) returned {removed}"
                );
            }
        }
        let actual: Vec<(ServerId, u8)> = index.iter_sorted().map(|e| (e.id, e.load)).collect();
        let expected: Vec<(ServerId, u8)> = model.iter().map(|(&k, &v)| (k, v)).collect();
        ensure!(actual == expected, "step {step} ({op:?}): tree {actual:?} != model {expected:?}");
        ensure!(index.len() == model.len(), "step {step}: len {} != {}", index.len(), model.len());
    }
    log::debug!("replayed {} load ops, {} servers left", ops.len(), model.len());
    Ok(())
}

/// Vérifie la propriété de tas après chaque pas et que chaque extraction
/// rend bien le minimum courant
pub fn replay_heap_ops(scheduler: &mut TaskScheduler, ops: &[HeapOp]) -> Result<()> {
    let mut model: Vec<i32> = scheduler.snapshot().iter().map(|t| t.priority).collect();
    for (step, op) in ops.iter().enumerate() {
        match *op {
            HeapOp::Insert(priority) => match scheduler.insert(step as i64, "op", priority) {
                Ok(()) => model.push(priority),
                Err(RegistryError::CapacityExceeded { .. }) => {
                    ensure!(model.len() == scheduler.capacity(), "step {step}: spurious full")
                }
                Err(e) => return Err(e.into()),
            },
            HeapOp::Extract => {
                let expected = model.iter().copied().min();
                let got = scheduler.extract_min().map(|t| t.priority);
                ensure!(got == expected, "step {step}: extracted {got:?}, expected {expected:?}");
                if let Some(min) = expected {
                    if let Some(pos) = model.iter().position(|&p| p == min) {
                        model.swap_remove(pos);
                    }
                }
            }
        }
        ensure!(
            heap_violation(scheduler.snapshot()).is_none(),
            "step {step} ({op:?}): heap property broken"
        );
        ensure!(scheduler.len() == model.len(), "step {step}: size drifted");
    }
    Ok(())
}

/// Rejoue contre un `VecDeque` borné
pub fn replay_queue_ops(queue: &mut HealthQueue, ops: &[QueueOp]) -> Result<()> {
    let mut model: VecDeque<ServerId> = queue.snapshot().iter().map(|r| r.server_id).collect();
    for (step, op) in ops.iter().enumerate() {
        match *op {
            QueueOp::Enqueue(id) => {
                let result = queue.enqueue(report(id, HealthStatus::Healthy));
                if model.len() == queue.capacity() {
                    ensure!(
                        result == Err(RegistryError::CapacityExceeded { capacity: queue.capacity() }),
                        "step {step}: full queue accepted {id}"
                    );
                } else {
                    result?;
                    model.push_back(id);
                }
            }
            QueueOp::Dequeue => {
                let got = queue.dequeue().map(|r| r.server_id);
                let expected = model.pop_front();
                ensure!(got == expected, "step {step}: dequeued {got:?}, expected {expected:?}");
            }
        }
        let actual: Vec<ServerId> = queue.snapshot().iter().map(|r| r.server_id).collect();
        ensure!(
            actual == model.iter().copied().collect::<Vec<_>>(),
            "step {step}: snapshot {actual:?} != model {model:?}"
        );
        ensure!(queue.len() <= queue.capacity(), "step {step}: count above capacity");
    }
    Ok(())
}
