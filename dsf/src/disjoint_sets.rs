//! `DisjointSets` partitions a universe of element ids into disjoint subsets.
use crate::{DsfError, Stats};
use std::{cmp::Ordering, collections::BTreeMap, fmt, num::NonZeroU32};

#[cfg(test)]
#[path = "tests/test_disjoint_sets.rs"]
mod test_disjoint_sets;

/// Largest supported universe size. Parent links are stored as `u32`.
pub const MAX_UNIVERSE_SIZE: usize = u32::MAX as usize;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Node {
    // Stores `parent + 1`, which leaves a niche for `Option<Node>`.
    parent_plus_one: NonZeroU32,
    // Upper bound on the height of the tree below this node, only maintained for roots.
    rank: u8,
}

impl Node {
    fn singleton(elem: usize) -> Self {
        let mut node = Node {
            parent_plus_one: NonZeroU32::MIN,
            rank: 0,
        };
        node.set_parent(elem);
        node
    }

    fn parent(&self) -> usize {
        self.parent_plus_one.get() as usize - 1
    }

    // Element ids are below `MAX_UNIVERSE_SIZE`, so `elem + 1` fits into a `u32`.
    fn set_parent(&mut self, elem: usize) {
        self.parent_plus_one = NonZeroU32::MIN.saturating_add(elem as u32);
    }
}

/// `DisjointSets` partitions a universe of element ids into disjoint subsets.
///
/// Elements are plain ids in `0..universe_size()`. Each element belongs to exactly one set, and
/// each set is identified by one of its members, the *representative*. The method `find` returns
/// the representative of an element, so two elements are in the same set iff `find` returns the
/// same id for both. Sets are merged with `union` and can never be split again.
///
/// A slot of the universe has to be initialized before it can be used, either by `make_set`, by
/// `grow` or by constructing the structure with [`singletons`](Self::singletons).
///
/// Internally every set is a tree of parent links rooted at its representative. `find` compresses
/// the path it walks and `union` links by rank, which together keep the amortised time complexity
/// of both operations at **O**(α(N)).
///
/// ## Example ##
/// ```
/// use dsf::DisjointSets;
///
/// let mut sets = DisjointSets::singletons(4).unwrap();
/// assert_eq!(sets.set_count(), 4);
///
/// assert!(sets.union(0, 1).unwrap());
/// assert!(sets.union(2, 3).unwrap());
/// assert!(!sets.same_set(1, 2).unwrap());
///
/// assert!(sets.union(1, 3).unwrap());
/// assert_eq!(sets.find(3).unwrap(), sets.find(0).unwrap());
/// assert_eq!(sets.set_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct DisjointSets {
    nodes: Vec<Option<Node>>,
    set_count: usize,
    stats: Stats,
}

impl DisjointSets {
    /// Constructs an empty `DisjointSets` with a universe of size 0.
    pub fn new() -> Self {
        DisjointSets::default()
    }

    /// Constructs a `DisjointSets` with `size` slots, none of which are initialized.
    ///
    /// Use `make_set` to turn slots into singleton sets.
    pub fn with_universe_size(size: usize) -> Result<Self, DsfError> {
        check_universe_size(size, 0)?;
        Ok(DisjointSets {
            nodes: vec![None; size],
            ..Default::default()
        })
    }

    /// Constructs a `DisjointSets` where each element of `0..size` is its own singleton set.
    pub fn singletons(size: usize) -> Result<Self, DsfError> {
        check_universe_size(size, 0)?;
        Ok(DisjointSets {
            nodes: (0..size).map(|elem| Some(Node::singleton(elem))).collect(),
            set_count: size,
            stats: Stats::default(),
        })
    }

    /// Returns the number of slots, initialized or not.
    pub fn universe_size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether `elem` is a valid argument for `find` and `union`.
    pub fn is_initialized(&self, elem: usize) -> bool {
        matches!(self.nodes.get(elem), Some(Some(_)))
    }

    /// Returns the number of distinct sets among initialized elements.
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Returns the operation counters accumulated since construction or the last `reset_stats`.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Resets all operation counters to zero.
    pub fn reset_stats(&mut self) {
        self.stats = Stats::default();
    }

    /// Removes all slots, but retains any allocated memory.
    ///
    /// The operation counters are reset as well.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.set_count = 0;
        self.stats = Stats::default();
    }

    /// Initializes `elem` as a singleton set.
    ///
    /// Calling this again on an element that is still a singleton does nothing. If `elem` is
    /// already part of a larger set, [`DsfError::ElementInUse`] is returned and the structure is
    /// left unchanged.
    pub fn make_set(&mut self, elem: usize) -> Result<(), DsfError> {
        let universe_size = self.universe_size();
        let slot = self
            .nodes
            .get_mut(elem)
            .ok_or(DsfError::InvalidElement {
                element: elem,
                universe_size,
            })?;
        match *slot {
            None => {
                *slot = Some(Node::singleton(elem));
                self.set_count += 1;
                Ok(())
            }
            // A root of rank 0 cannot have any children.
            Some(node) if node.parent() == elem && node.rank == 0 => Ok(()),
            Some(_) => Err(DsfError::ElementInUse { element: elem }),
        }
    }

    /// Extends the universe to `new_size`, initializing every new element as a singleton set.
    ///
    /// The representatives of existing elements are not affected.
    pub fn grow(&mut self, new_size: usize) -> Result<(), DsfError> {
        let current = self.universe_size();
        if new_size <= current {
            return Err(DsfError::InvalidUniverseSize {
                requested: new_size,
                current,
            });
        }
        check_universe_size(new_size, current)?;
        self.nodes
            .extend((current..new_size).map(|elem| Some(Node::singleton(elem))));
        self.set_count += new_size - current;
        log::debug!("grew universe from {current} to {new_size}");
        Ok(())
    }

    /// Returns the representative of the set containing `elem`.
    ///
    /// Every element on the path from `elem` to the representative is relinked to point directly
    /// at it.
    ///
    /// The amortised time complexity of this operation is **O**(α(N)).
    pub fn find(&mut self, elem: usize) -> Result<usize, DsfError> {
        self.check_elem(elem)?;
        let (root, steps) = self.find_root(elem);
        let compressions = self.update_root(elem, root);
        self.stats.finds += 1;
        self.stats.parent_steps += steps;
        self.stats.compressions += compressions;
        Ok(root)
    }

    /// Returns whether `a` and `b` belong to the same set.
    pub fn same_set(&mut self, a: usize, b: usize) -> Result<bool, DsfError> {
        self.check_elem(a)?;
        self.check_elem(b)?;
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `false` without making any changes if both are already in the same set, otherwise
    /// returns `true`. In both cases it also returns the original representatives of both
    /// arguments.
    ///
    /// The root of lower rank is linked below the root of higher rank. When both ranks are equal,
    /// the representative of `a` becomes the new representative and its rank is incremented.
    ///
    /// The amortised time complexity of this operation is **O**(α(N)).
    pub fn union_full(&mut self, a: usize, b: usize) -> Result<(bool, [usize; 2]), DsfError> {
        self.check_elem(a)?;
        self.check_elem(b)?;
        self.stats.unions += 1;

        let ra = self.find(a)?;
        let rb = self.find(b)?;
        if ra == rb {
            return Ok((false, [ra, rb]));
        }

        match self.node(ra).rank.cmp(&self.node(rb).rank) {
            Ordering::Less => self.node_mut(ra).set_parent(rb),
            Ordering::Greater => self.node_mut(rb).set_parent(ra),
            Ordering::Equal => {
                self.node_mut(rb).set_parent(ra);
                self.node_mut(ra).rank += 1;
            }
        }
        self.set_count -= 1;
        self.stats.merges += 1;
        log::trace!("merged sets of {ra} and {rb}");
        Ok((true, [ra, rb]))
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `false` without making any changes if both are already in the same set, otherwise
    /// returns `true`. See [`union_full`](Self::union_full) for details.
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool, DsfError> {
        Ok(self.union_full(a, b)?.0)
    }

    fn check_elem(&self, elem: usize) -> Result<(), DsfError> {
        if self.is_initialized(elem) {
            Ok(())
        } else {
            Err(DsfError::InvalidElement {
                element: elem,
                universe_size: self.universe_size(),
            })
        }
    }

    // Only call these for initialized elements. Parent links never lead to uninitialized slots.
    fn node(&self, elem: usize) -> Node {
        match self.nodes[elem] {
            Some(node) => node,
            None => panic!("shouldn't happen: uninitialized element {elem} in the forest"),
        }
    }

    fn node_mut(&mut self, elem: usize) -> &mut Node {
        match &mut self.nodes[elem] {
            Some(node) => node,
            None => panic!("shouldn't happen: uninitialized element {elem} in the forest"),
        }
    }

    // Returns the root and the number of parent links followed to reach it.
    fn find_root(&self, mut elem: usize) -> (usize, u64) {
        let mut steps = 0;
        loop {
            let parent = self.node(elem).parent();
            if parent == elem {
                return (elem, steps);
            }
            steps += 1;
            elem = parent;
        }
    }

    // Second pass of `find`: links every element on the path from `elem` directly to `root`.
    // Returns the number of rewritten links.
    fn update_root(&mut self, mut elem: usize, root: usize) -> u64 {
        let mut rewritten = 0;
        while elem != root {
            let node = self.node_mut(elem);
            let parent = node.parent();
            if parent != root {
                node.set_parent(root);
                rewritten += 1;
            }
            elem = parent;
        }
        rewritten
    }
}

fn check_universe_size(requested: usize, current: usize) -> Result<(), DsfError> {
    if requested > MAX_UNIVERSE_SIZE {
        Err(DsfError::InvalidUniverseSize { requested, current })
    } else {
        Ok(())
    }
}

impl fmt::Debug for DisjointSets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // prints non-trivial sets, always printing the representative first
        let mut sets = BTreeMap::<usize, Vec<usize>>::new();
        for (elem, node) in self.nodes.iter().enumerate() {
            if node.is_none() {
                continue;
            }
            let (root, _) = self.find_root(elem);
            if root != elem {
                sets.entry(root).or_insert_with(|| vec![root]).push(elem);
            }
        }
        f.debug_struct("DisjointSets")
            .field("universe_size", &self.universe_size())
            .field("set_count", &self.set_count)
            .field("sets", &sets.values().collect::<Vec<_>>())
            .finish()
    }
}
