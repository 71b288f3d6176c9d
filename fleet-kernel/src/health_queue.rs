/**
 * FILE DE SANTÉ - Tampon circulaire borné de rapports serveur
 *
 * RÔLE : enfilage, défilage FIFO, instantané front -> rear sans mutation.
 *
 * `rear` part de `capacity - 1` pour que le premier enfilage écrive en 0 ;
 * `front`/`rear` avancent modulo la capacité, `count` ne dépasse jamais celle-ci.
 */

use tracing::{debug, warn};

use crate::errors::RegistryError;
use crate::models::HealthReport;

#[derive(Debug, Clone)]
pub struct HealthQueue {
    slots: Box<[Option<HealthReport>]>,
    front: usize,
    rear: usize,
    count: usize,
}

impl HealthQueue {
    pub fn new(capacity: usize) -> Result<Self, RegistryError> {
        if capacity == 0 {
            return Err(RegistryError::invalid("health queue capacity must be at least 1"));
        }
        Ok(Self {
            slots: vec![None; capacity].into_boxed_slice(),
            front: 0,
            rear: capacity - 1,
            count: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    pub fn enqueue(&mut self, report: HealthReport) -> Result<(), RegistryError> {
        if self.is_full() {
            let e = RegistryError::CapacityExceeded { capacity: self.capacity() };
            warn!(server_id = report.server_id, error = %e, "health report refused");
            return Err(e);
        }
        if let Err(e) = report.validate() {
            warn!(server_id = report.server_id, error = %e, "health report refused");
            return Err(e);
        }

        self.rear = (self.rear + 1) % self.capacity();
        debug!(server_id = report.server_id, status = %report.status, slot = self.rear, "health report queued");
        self.slots[self.rear] = Some(report);
        self.count += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Option<HealthReport> {
        if self.is_empty() {
            return None;
        }
        let report = self.slots[self.front].take();
        self.front = (self.front + 1) % self.capacity();
        self.count -= 1;
        if let Some(r) = &report {
            debug!(server_id = r.server_id, remaining = self.count, "health report processed");
        }
        report
    }

    pub fn peek_front(&self) -> Option<&HealthReport> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    /// Parcourt `count` cases depuis `front` en bouclant modulo la capacité
    pub fn snapshot(&self) -> Vec<HealthReport> {
        (0..self.count)
            .filter_map(|i| self.slots[(self.front + i) % self.capacity()].clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HealthStatus;

    fn report(server_id: i64) -> HealthReport {
        HealthReport::new(server_id, HealthStatus::Healthy, 12.5, 40.0)
    }

    fn server_ids(reports: &[HealthReport]) -> Vec<i64> {
        reports.iter().map(|r| r.server_id).collect()
    }

    #[test]
    fn test_full_queue_rejects_and_keeps_fifo() {
        let mut q = HealthQueue::new(3).unwrap();
        for id in [101, 102, 103] {
            q.enqueue(report(id)).unwrap();
        }
        assert_eq!(q.enqueue(report(104)), Err(RegistryError::CapacityExceeded { capacity: 3 }));
        assert_eq!(q.len(), 3);
        assert_eq!(q.dequeue().map(|r| r.server_id), Some(101));
    }

    #[test]
    fn test_wraparound_snapshot() {
        let mut q = HealthQueue::new(3).unwrap();
        for id in [1, 2, 3] {
            q.enqueue(report(id)).unwrap();
        }
        q.dequeue();
        q.dequeue();
        q.enqueue(report(4)).unwrap();
        q.enqueue(report(5)).unwrap();
        assert!(q.is_full());
        assert_eq!(server_ids(&q.snapshot()), vec![3, 4, 5]);
        // l'instantané ne consomme rien
        assert_eq!(q.len(), 3);
        assert_eq!(q.peek_front().map(|r| r.server_id), Some(3));
    }

    #[test]
    fn test_dequeue_empty() {
        let mut q = HealthQueue::new(1).unwrap();
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.peek_front(), None);
        assert!(q.snapshot().is_empty());
    }

    #[test]
    fn test_invalid_report_rejected() {
        let mut q = HealthQueue::new(2).unwrap();
        let bad = HealthReport::new(7, HealthStatus::Critical, 130.0, 10.0);
        assert!(matches!(q.enqueue(bad), Err(RegistryError::InvalidAttribute(_))));
        assert!(q.is_empty());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(HealthQueue::new(0), Err(RegistryError::InvalidAttribute(_))));
    }

    #[test]
    fn test_capacity_one_cycles() {
        let mut q = HealthQueue::new(1).unwrap();
        for id in 0..5 {
            q.enqueue(report(id)).unwrap();
            assert!(q.enqueue(report(99)).is_err());
            assert_eq!(q.dequeue().map(|r| r.server_id), Some(id));
        }
    }
}
