//! Order-statistic priority queue
//!
//! Items carry a priority in [0.0, 1.0]; lower priority means higher
//! exploration precedence. An ordered set keyed by (priority, item) provides
//! O(log n) enqueue, dequeue-min/max and arbitrary removal; an item→priority
//! map alongside provides O(1) contains and priority lookup. Exact priority
//! ties break on the item's own ordering, so the queue is deterministic.

use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;

/// Error type for queue operations
#[derive(Debug, Clone, PartialEq)]
pub enum QueueError {
    Empty,
    DuplicateItem,
    MissingItem,
    PriorityOutOfRange(f64),
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Queue is empty"),
            Self::DuplicateItem => write!(f, "Item is already queued"),
            Self::MissingItem => write!(f, "Item is not in the queue"),
            Self::PriorityOutOfRange(p) => {
                write!(f, "Priority {p} is outside the range [0.0, 1.0]")
            }
        }
    }
}

impl std::error::Error for QueueError {}

/// Priority wrapper with a total order
///
/// Only range-checked values enter the queue, so `total_cmp` agrees with
/// numeric ordering (no NaN).
#[derive(Debug, Clone, Copy, PartialEq)]
struct OrderedPriority(f64);

impl Eq for OrderedPriority {}

impl PartialOrd for OrderedPriority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedPriority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// A priority queue over unique items
///
/// # Examples
/// ```
/// use word_ladder::queue::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.enqueue("tame", 0.4).unwrap();
/// queue.enqueue("lime", 0.2).unwrap();
///
/// assert_eq!(queue.dequeue_min().unwrap(), "lime");
/// assert_eq!(queue.dequeue_min().unwrap(), "tame");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PriorityQueue<T> {
    ordered: BTreeSet<(OrderedPriority, T)>,
    priorities: FxHashMap<T, OrderedPriority>,
}

impl<T> PriorityQueue<T>
where
    T: Ord + Hash + Clone,
{
    /// Create an empty queue
    #[must_use]
    pub fn new() -> Self {
        Self {
            ordered: BTreeSet::new(),
            priorities: FxHashMap::default(),
        }
    }

    /// Number of queued items
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.priorities.len()
    }

    /// Whether the queue holds no items
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
    }

    /// Whether the item is currently queued
    #[inline]
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.priorities.contains_key(item)
    }

    /// Current priority of a queued item
    ///
    /// # Errors
    /// Returns `QueueError::MissingItem` if the item is not queued.
    pub fn priority_of(&self, item: &T) -> Result<f64, QueueError> {
        self.priorities
            .get(item)
            .map(|p| p.0)
            .ok_or(QueueError::MissingItem)
    }

    /// Add an item with the given priority
    ///
    /// # Errors
    /// Returns `QueueError::PriorityOutOfRange` if `priority` is outside
    /// [0.0, 1.0], or `QueueError::DuplicateItem` if the item is queued.
    pub fn enqueue(&mut self, item: T, priority: f64) -> Result<(), QueueError> {
        if !(0.0..=1.0).contains(&priority) {
            return Err(QueueError::PriorityOutOfRange(priority));
        }
        if self.priorities.contains_key(&item) {
            return Err(QueueError::DuplicateItem);
        }

        let priority = OrderedPriority(priority);
        self.priorities.insert(item.clone(), priority);
        self.ordered.insert((priority, item));
        Ok(())
    }

    /// Remove and return the lowest-priority item (ties break on item order)
    ///
    /// # Errors
    /// Returns `QueueError::Empty` if the queue holds no items.
    pub fn dequeue_min(&mut self) -> Result<T, QueueError> {
        let (_, item) = self.ordered.pop_first().ok_or(QueueError::Empty)?;
        self.priorities.remove(&item);
        Ok(item)
    }

    /// Remove and return the highest-priority item (ties break on item order)
    ///
    /// # Errors
    /// Returns `QueueError::Empty` if the queue holds no items.
    pub fn dequeue_max(&mut self) -> Result<T, QueueError> {
        let (_, item) = self.ordered.pop_last().ok_or(QueueError::Empty)?;
        self.priorities.remove(&item);
        Ok(item)
    }

    /// Remove an arbitrary item
    ///
    /// # Errors
    /// Returns `QueueError::MissingItem` if the item is not queued.
    pub fn remove(&mut self, item: &T) -> Result<(), QueueError> {
        let priority = self
            .priorities
            .remove(item)
            .ok_or(QueueError::MissingItem)?;
        let removed = self.ordered.remove(&(priority, item.clone()));
        debug_assert!(removed, "ordered set and lookup map diverged");
        Ok(())
    }
}
