/**
 * PLANIFICATEUR DE MAINTENANCE - Tas binaire min sur tableau dense
 *
 * RÔLE : insertion avec remontée (sift-up), extraction du minimum avec
 * descente (sift-down), instantané dans l'ordre interne du tableau.
 *
 * Parent en `i`, enfants en `2i+1` et `2i+2`. Priorité basse = plus urgente.
 * Entre priorités égales l'ordre relatif n'est pas déterministe.
 */

use tracing::{debug, warn};

use crate::errors::RegistryError;
use crate::models::{normalize_name, SchedulerTask, TaskId, TASK_NAME_MAX};

#[derive(Debug, Clone)]
pub struct TaskScheduler {
    heap: Vec<SchedulerTask>,
    capacity: usize,
}

impl TaskScheduler {
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn insert(&mut self, id: TaskId, name: &str, priority: i32) -> Result<(), RegistryError> {
        if self.heap.len() >= self.capacity {
            let e = RegistryError::CapacityExceeded { capacity: self.capacity };
            warn!(task_id = id, error = %e, "task insert rejected");
            return Err(e);
        }
        let name = normalize_name(name, TASK_NAME_MAX).inspect_err(|e| {
            warn!(task_id = id, error = %e, "task insert rejected");
        })?;

        self.heap.push(SchedulerTask { id, name, priority });
        self.sift_up(self.heap.len() - 1);
        debug!(task_id = id, priority, pending = self.heap.len(), "task scheduled");
        Ok(())
    }

    /// Retire la tâche la plus urgente ; `None` si rien n'est planifié.
    pub fn extract_min(&mut self) -> Option<SchedulerTask> {
        if self.heap.is_empty() {
            return None;
        }
        // swap_remove place le dernier élément à la racine
        let root = self.heap.swap_remove(0);
        self.sift_down(0);
        debug!(task_id = root.id, priority = root.priority, pending = self.heap.len(), "task extracted");
        Some(root)
    }

    pub fn peek(&self) -> Option<&SchedulerTask> {
        self.heap.first()
    }

    /// Ordre interne du tableau, pas un ordre trié
    pub fn snapshot(&self) -> &[SchedulerTask] {
        &self.heap
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[parent].priority <= self.heap[i].priority {
                break;
            }
            self.heap.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;

            if left < len && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }
            if right < len && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.heap.swap(i, smallest);
            i = smallest;
        }
    }
}
