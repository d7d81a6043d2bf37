//! # Gallery Lightbox Carousel
//!
//! Index stepping over a fixed-size image list. Stepping past either end wraps.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Step `index` one place in `direction` over a list of `len` items.
///
/// An empty list has no valid index, so `index` is returned as is.
///
/// ```rust
/// use shared::carousel::{step, Direction};
///
/// assert_eq!(step(0, Direction::Prev, 6), 5);
/// assert_eq!(step(5, Direction::Next, 6), 0);
/// ```
pub fn step(index: usize, direction: Direction, len: usize) -> usize {
    if len == 0 {
        return index;
    }
    match direction {
        Direction::Next => (index % len + 1) % len,
        Direction::Prev => (index % len + len - 1) % len,
    }
}

/// Lightbox state: closed, or open on one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    selected: Option<usize>,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, selected: None }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Open on `index`. Out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) {
        if index < self.len {
            self.selected = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Move the open lightbox one image. Does nothing while closed.
    pub fn step(&mut self, direction: Direction) {
        if let Some(index) = self.selected {
            self.selected = Some(step(index, direction, self.len));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle_returns_to_start() {
        let len = 6;
        let mut index = 0;
        for _ in 0..len {
            index = step(index, Direction::Next, len);
        }
        assert_eq!(index, 0);

        for _ in 0..len {
            index = step(index, Direction::Prev, len);
        }
        assert_eq!(index, 0);
    }

    #[test]
    fn test_prev_from_first_wraps_to_last() {
        assert_eq!(step(0, Direction::Prev, 6), 5);
        assert_eq!(step(0, Direction::Prev, 1), 0);
    }

    #[test]
    fn test_empty_list_is_a_no_op() {
        assert_eq!(step(0, Direction::Next, 0), 0);
        assert_eq!(step(3, Direction::Prev, 0), 3);
    }

    #[test]
    fn test_lightbox_lifecycle() {
        let mut lightbox = Carousel::new(6);
        lightbox.step(Direction::Next);
        assert_eq!(lightbox.selected(), None);

        lightbox.open(9);
        assert!(!lightbox.is_open());

        lightbox.open(5);
        lightbox.step(Direction::Next);
        assert_eq!(lightbox.selected(), Some(0));
        lightbox.step(Direction::Prev);
        lightbox.step(Direction::Prev);
        assert_eq!(lightbox.selected(), Some(4));

        lightbox.close();
        assert!(!lightbox.is_open());
    }
}
