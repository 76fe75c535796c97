use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::common::{PageNumber, Result, SimError};

/// Outcome of a single `touch` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchResult {
    /// The page was already resident; it was moved to the MRU position.
    Hit,
    /// The page was admitted. `evicted` carries the page that was pushed
    /// out of the LRU position, if the cache was full.
    Miss { evicted: Option<PageNumber> },
}

impl TouchResult {
    pub fn is_hit(&self) -> bool {
        matches!(self, TouchResult::Hit)
    }

    pub fn is_miss(&self) -> bool {
        !self.is_hit()
    }

    /// The page evicted by this touch, if any.
    pub fn evicted(&self) -> Option<PageNumber> {
        match self {
            TouchResult::Hit => None,
            TouchResult::Miss { evicted } => *evicted,
        }
    }
}

/// A resident page entry, owned exclusively by the recency list.
#[derive(Debug)]
struct Frame {
    page_number: PageNumber,
}

/// LRU Page Cache
///
/// A fixed-capacity set of resident pages ordered by recency of use,
/// front = MRU, back = LRU. Touching a resident page moves it to the
/// front; touching a new page while full evicts the page at the back.
///
/// Membership is a linear scan over the current occupancy, which is the
/// right trade-off at the small frame counts this simulator targets.
/// The whole recency structure sits behind a single lock, so a touch is
/// atomic with respect to concurrent touches on the same page.
pub struct LruPageCache {
    /// Maximum number of resident pages, fixed at construction
    capacity: usize,
    /// Resident frames ordered MRU (front) to LRU (back)
    order: Mutex<VecDeque<Frame>>,
}

impl LruPageCache {
    /// Creates a new cache with the given frame capacity.
    /// Fails with `SimError::InvalidCapacity` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(SimError::InvalidCapacity(capacity));
        }
        Ok(Self {
            capacity,
            order: Mutex::new(VecDeque::with_capacity(capacity)),
        })
    }

    /// Records a reference to `page_number`.
    ///
    /// A resident page is moved to the MRU position and `Hit` is
    /// returned. A non-resident page is inserted at the MRU position;
    /// if the cache was already at capacity, the page at the LRU
    /// position is evicted first and reported in the result. After the
    /// call the touched page is always resident and at the MRU position.
    pub fn touch(&self, page_number: PageNumber) -> TouchResult {
        let mut order = self.order.lock();

        if let Some(pos) = order.iter().position(|f| f.page_number == page_number) {
            if let Some(frame) = order.remove(pos) {
                order.push_front(frame);
            }
            return TouchResult::Hit;
        }

        let evicted = if order.len() == self.capacity {
            order.pop_back().map(|f| f.page_number)
        } else {
            None
        };

        order.push_front(Frame { page_number });
        TouchResult::Miss { evicted }
    }

    /// Returns the resident page numbers in recency order, MRU first.
    pub fn snapshot(&self) -> Vec<PageNumber> {
        self.order.lock().iter().map(|f| f.page_number).collect()
    }

    /// Returns whether the given page is currently resident.
    pub fn is_resident(&self, page_number: PageNumber) -> bool {
        self.order
            .lock()
            .iter()
            .any(|f| f.page_number == page_number)
    }

    /// Returns the number of currently resident pages.
    pub fn len(&self) -> usize {
        self.order.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.lock().is_empty()
    }

    /// Returns the frame capacity of this cache.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
