/*!
Vérificateurs d'invariants structurels

Utilisables après n'importe quelle séquence d'opérations.
*/

use fleet_kernel::{LoadIndex, SchedulerTask, TaskScheduler};

/// Propriété de tas : priorité[i] <= priorité des enfants 2i+1 et 2i+2
pub fn heap_violation(heap: &[SchedulerTask]) -> Option<(usize, usize)> {
    (0..heap.len()).find_map(|i| {
        [2 * i + 1, 2 * i + 2]
            .into_iter()
            .filter(|&child| child < heap.len())
            .find(|&child| heap[i].priority > heap[child].priority)
            .map(|child| (i, child))
    })
}

pub fn assert_heap_property(heap: &[SchedulerTask]) {
    if let Some((parent, child)) = heap_violation(heap) {
        panic!(
            "heap property broken: slot {parent} (priority {}) > slot {child} (priority {})",
            heap[parent].priority, heap[child].priority
        );
    }
}

/// Le parcours infixe doit produire des ids strictement croissants
pub fn assert_strictly_ascending(index: &LoadIndex) {
    let ids: Vec<_> = index.iter_sorted().map(|e| e.id).collect();
    assert!(
        ids.windows(2).all(|w| w[0] < w[1]),
        "in-order traversal not strictly ascending: {ids:?}"
    );
    assert_eq!(ids.len(), index.len(), "node count drifted from traversal length");
}

/// Vide le planificateur et renvoie les priorités dans l'ordre d'extraction
pub fn drain_priorities(scheduler: &mut TaskScheduler) -> Vec<i32> {
    std::iter::from_fn(|| scheduler.extract_min()).map(|t| t.priority).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::task;

    #[test]
    fn test_detects_heap_violation() {
        let ok = vec![task(1, 1), task(2, 3), task(3, 2)];
        assert_eq!(heap_violation(&ok), None);
        let broken = vec![task(1, 1), task(2, 3), task(3, 2), task(4, 0)];
        assert_eq!(heap_violation(&broken), Some((1, 3)));
    }

    #[test]
    #[should_panic(expected = "heap property broken")]
    fn test_assert_heap_property_panics() {
        assert_heap_property(&[task(1, 5), task(2, 1)]);
    }
}
