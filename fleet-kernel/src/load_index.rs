/**
 * INDEX DE CHARGE - Arbre binaire de recherche (non équilibré) indexé par serveur
 *
 * RÔLE : upsert, suppression avec promotion du successeur, recherche exacte,
 * parcours trié paresseux, recherche des charges extrêmes.
 *
 * ARCHITECTURE : chaque sous-arbre est possédé exclusivement par son parent
 * (`Option<Box<LoadNode>>`) ; la suppression réaffecte la possession, aucun
 * lien brut. Pas de rééquilibrage : un ordre d'insertion trié dégrade en O(n).
 */

use std::cmp::Ordering;
use tracing::{debug, warn};

use crate::errors::RegistryError;
use crate::models::{LoadEntry, ServerId, LOAD_MAX};

type Link = Option<Box<LoadNode>>;

#[derive(Debug)]
struct LoadNode {
    id: ServerId,
    load: u8,
    left: Link,
    right: Link,
}

impl LoadNode {
    fn leaf(id: ServerId, load: u8) -> Box<Self> {
        Box::new(Self { id, load, left: None, right: None })
    }

    fn entry(&self) -> LoadEntry {
        LoadEntry { id: self.id, load: self.load }
    }
}

/// Résultat d'un upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Updated { previous: u8 },
}

#[derive(Debug, Default)]
pub struct LoadIndex {
    root: Link,
    len: usize,
}

impl LoadIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insère le serveur, ou écrase sa charge s'il existe déjà (pas de
    /// changement structurel dans ce cas).
    pub fn upsert(&mut self, id: ServerId, load: u8) -> Result<Upsert, RegistryError> {
        if load > LOAD_MAX {
            let e = RegistryError::invalid(format!("load {load} outside [0,{LOAD_MAX}]"));
            warn!(server_id = id, error = %e, "load upsert rejected");
            return Err(e);
        }
        let outcome = upsert_at(&mut self.root, id, load);
        if outcome == Upsert::Inserted {
            self.len += 1;
        }
        debug!(server_id = id, load, ?outcome, "load upserted");
        Ok(outcome)
    }

    /// Supprime le serveur. Id absent : no-op, renvoie `false`.
    pub fn delete(&mut self, id: ServerId) -> bool {
        let removed = delete_at(&mut self.root, id);
        if removed {
            self.len -= 1;
            debug!(server_id = id, "server removed from load index");
        }
        removed
    }

    pub fn find(&self, id: ServerId) -> Option<u8> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match id.cmp(&node.id) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node.load),
            };
        }
        None
    }

    /// Parcours infixe paresseux, ids croissants. Chaque appel repart de zéro.
    pub fn iter_sorted(&self) -> SortedIter<'_> {
        let mut iter = SortedIter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Charge minimale, premier rencontré en ordre infixe en cas d'égalité.
    /// Ce départage infixe est voulu : à charge égale, le plus petit id gagne,
    /// même face à la racine.
    ///
    /// Parcours complet : l'arbre est ordonné par id, pas par charge.
    pub fn min_load(&self) -> Option<LoadEntry> {
        self.extremal(|candidate, best| candidate < best)
    }

    /// Charge maximale, mêmes règles que [`LoadIndex::min_load`].
    pub fn max_load(&self) -> Option<LoadEntry> {
        self.extremal(|candidate, best| candidate > best)
    }

    fn extremal(&self, beats: impl Fn(u8, u8) -> bool) -> Option<LoadEntry> {
        self.iter_sorted().fold(None, |best: Option<LoadEntry>, entry| match best {
            Some(b) if !beats(entry.load, b.load) => Some(b),
            _ => Some(entry),
        })
    }

    /// Hauteur de l'arbre (0 si vide), pour diagnostic
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(&LoadNode, usize)> = self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        max
    }
}

fn upsert_at(mut link: &mut Link, id: ServerId, load: u8) -> Upsert {
    while let Some(node) = link {
        match id.cmp(&node.id) {
            Ordering::Less => link = &mut node.left,
            Ordering::Greater => link = &mut node.right,
            Ordering::Equal => {
                let previous = node.load;
                node.load = load;
                return Upsert::Updated { previous };
            }
        }
    }
    *link = Some(LoadNode::leaf(id, load));
    Upsert::Inserted
}

/// Descente itérative jusqu'au lien qui porte `id`, puis détachement.
fn delete_at(mut link: &mut Link, id: ServerId) -> bool {
    loop {
        let ord = match link.as_deref() {
            Some(node) => id.cmp(&node.id),
            None => return false,
        };
        // le curseur est déplacé dans le tuple pour pouvoir être réaffecté
        link = match (ord, link) {
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, slot) => return unlink(slot),
        };
    }
}

fn unlink(slot: &mut Link) -> bool {
    let Some(node) = slot else {
        return false;
    };
    if node.left.is_some() {
        if let Some(successor) = detach_leftmost(&mut node.right) {
            // deux enfants : le successeur prend la place du nœud retiré
            node.id = successor.id;
            node.load = successor.load;
            return true;
        }
    }
    let child = node.left.take().or_else(|| node.right.take());
    *slot = child;
    true
}

/// Retire le nœud le plus à gauche du sous-arbre ; son fils droit remonte.
fn detach_leftmost(mut link: &mut Link) -> Option<LoadEntry> {
    loop {
        let has_left = link.as_ref()?.left.is_some();
        link = match (has_left, link) {
            (true, Some(node)) => &mut node.left,
            (_, slot) => {
                let mut node = slot.take()?;
                *slot = node.right.take();
                return Some(node.entry());
            }
        };
    }
}

impl Drop for LoadIndex {
    // démontage itératif : un arbre dégénéré ne doit pas épuiser la pile
    fn drop(&mut self) {
        let mut stack: Vec<Box<LoadNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Itérateur infixe sur l'index de charge
pub struct SortedIter<'a> {
    stack: Vec<&'a LoadNode>,
}

impl<'a> SortedIter<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a LoadNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl Iterator for SortedIter<'_> {
    type Item = LoadEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.entry())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(pairs: &[(ServerId, u8)]) -> LoadIndex {
        let mut index = LoadIndex::new();
        for &(id, load) in pairs {
            index.upsert(id, load).unwrap();
        }
        index
    }

    fn ids(index: &LoadIndex) -> Vec<ServerId> {
        index.iter_sorted().map(|e| e.id).collect()
    }

    #[test]
    fn test_sorted_traversal_and_extremes() {
        let index = index_of(&[(5, 10), (3, 50), (8, 20)]);
        let sorted: Vec<LoadEntry> = index.iter_sorted().collect();
        let expected: Vec<LoadEntry> = vec![(3, 50).into(), (5, 10).into(), (8, 20).into()];
        assert_eq!(sorted, expected);
        assert_eq!(index.min_load(), Some(LoadEntry { id: 5, load: 10 }));
        assert_eq!(index.max_load(), Some(LoadEntry { id: 3, load: 50 }));
    }

    #[test]
    fn test_upsert_existing_only_changes_load() {
        let mut index = index_of(&[(5, 10), (3, 50)]);
        let height = index.height();
        assert_eq!(index.upsert(3, 70).unwrap(), Upsert::Updated { previous: 50 });
        assert_eq!(index.len(), 2);
        assert_eq!(index.height(), height);
        assert_eq!(index.find(3), Some(70));
    }

    #[test]
    fn test_out_of_range_load_rejected() {
        let mut index = index_of(&[(1, 1)]);
        assert!(matches!(index.upsert(2, 101), Err(RegistryError::InvalidAttribute(_))));
        assert!(matches!(index.upsert(1, 200), Err(RegistryError::InvalidAttribute(_))));
        assert_eq!(index.len(), 1);
        assert_eq!(index.find(1), Some(1));
    }

    #[test]
    fn test_delete_leaf_one_child_two_children() {
        //        50
        //      /    \
        //    30      70
        //   /  \    /
        //  20  40  60
        let mut index = index_of(&[(50, 1), (30, 2), (70, 3), (20, 4), (40, 5), (60, 6)]);

        assert!(index.delete(20)); // feuille
        assert_eq!(ids(&index), vec![30, 40, 50, 60, 70]);

        assert!(index.delete(70)); // un enfant
        assert_eq!(ids(&index), vec![30, 40, 50, 60]);

        assert!(index.delete(50)); // deux enfants : 60 promu
        assert_eq!(ids(&index), vec![30, 40, 60]);
        assert_eq!(index.find(60), Some(6));
        assert_eq!(index.find(50), None);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_two_child_delete_with_deep_successor() {
        let mut index = index_of(&[(10, 0), (5, 0), (20, 0), (15, 9), (25, 0), (17, 0)]);
        assert!(index.delete(10));
        assert_eq!(ids(&index), vec![5, 15, 17, 20, 25]);
        assert_eq!(index.find(15), Some(9));
        assert_eq!(index.len(), 5);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut index = index_of(&[(2, 1), (1, 1), (3, 1)]);
        let height = index.height();
        assert!(!index.delete(42));
        assert_eq!(index.len(), 3);
        assert_eq!(index.height(), height);
        assert_eq!(ids(&index), vec![1, 2, 3]);

        let mut empty = LoadIndex::new();
        assert!(!empty.delete(1));
    }

    #[test]
    fn test_delete_root_until_empty() {
        let mut index = index_of(&[(2, 1), (1, 1), (3, 1)]);
        for id in [2, 3, 1] {
            assert!(index.delete(id));
        }
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.min_load(), None);
        assert_eq!(index.max_load(), None);
    }

    #[test]
    fn test_extremal_ties_prefer_first_in_order() {
        // root 5 et son fils gauche 3 ont la même charge : 3 vient en premier
        let index = index_of(&[(5, 40), (3, 40), (8, 40)]);
        assert_eq!(index.min_load(), Some(LoadEntry { id: 3, load: 40 }));
        assert_eq!(index.max_load(), Some(LoadEntry { id: 3, load: 40 }));
    }

    #[test]
    fn test_traversal_is_restartable() {
        let index = index_of(&[(4, 0), (2, 0), (6, 0)]);
        let mut first = index.iter_sorted();
        assert_eq!(first.next().map(|e| e.id), Some(2));
        assert_eq!(ids(&index), vec![2, 4, 6]);
    }

    #[test]
    fn test_degenerate_tree_drops_without_overflow() {
        let mut index = LoadIndex::new();
        for id in 0..10_000 {
            index.upsert(id, (id % 101) as u8).unwrap();
        }
        assert_eq!(index.height(), 10_000);
        assert_eq!(index.find(9_999), Some((9_999 % 101) as u8));

        // feuille la plus profonde, puis la racine à un seul enfant
        assert!(index.delete(9_999));
        assert!(index.delete(0));
        assert_eq!(index.len(), 9_998);
        assert_eq!(index.find(9_999), None);
        assert_eq!(index.iter_sorted().next().map(|e| e.id), Some(1));
        drop(index);
    }

    #[test]
    fn test_two_child_delete_with_long_successor_spine() {
        // racine 5000, sous-arbre droit en peigne gauche 10_000 -> 5_001
        let mut index = LoadIndex::new();
        index.upsert(5_000, 1).unwrap();
        index.upsert(0, 2).unwrap();
        for id in (5_001..=10_000).rev() {
            index.upsert(id, 3).unwrap();
        }
        assert!(index.delete(5_000));
        assert_eq!(index.len(), 5_001);
        assert_eq!(index.find(5_000), None);
        assert_eq!(index.find(5_001), Some(3));
        let ids: Vec<ServerId> = index.iter_sorted().map(|e| e.id).take(3).collect();
        assert_eq!(ids, vec![0, 5_001, 5_002]);
    }
}
