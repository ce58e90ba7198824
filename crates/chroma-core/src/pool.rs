use std::collections::VecDeque;

/// Fixed-capacity FIFO of live effects.
///
/// Items iterate oldest first. Pushing into a full pool evicts the oldest
/// item in O(1); the backing buffer is allocated once at `N`.
#[derive(Clone, Debug)]
pub struct EffectPool<T, const N: usize> {
    items: VecDeque<T>,
}

impl<T, const N: usize> EffectPool<T, N> {
    pub const CAPACITY: usize = N;

    pub fn new() -> Self {
        Self {
            items: VecDeque::with_capacity(N),
        }
    }

    /// Append `item`, returning the evicted oldest item on overflow.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() >= N {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    /// Visit items oldest first, dropping those for which `keep` returns false.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.items.retain(keep);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn newest(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn oldest(&self) -> Option<&T> {
        self.items.front()
    }
}

impl<T, const N: usize> Default for EffectPool<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
