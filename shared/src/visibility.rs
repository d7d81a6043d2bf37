//! # Entrance Visibility
//!
//! Sections animate in the first time they scroll into view and never animate
//! again while mounted. [`Visibility`] is that one-way switch.

/// Observer root margin: a section counts as visible once it is 100px inside
/// the viewport.
pub const REVEAL_ROOT_MARGIN: &str = "-100px";

/// Per-item stagger for entrance transitions.
pub const STAGGER_MS: u32 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    /// Flip to visible. Returns `true` only on the first call.
    pub fn reveal(&mut self) -> bool {
        match self {
            Visibility::Hidden => {
                *self = Visibility::Visible;
                true
            }
            Visibility::Visible => false,
        }
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

/// Transition delay for the `index`th item of a section, after `base_ms`.
pub fn stagger_delay_ms(base_ms: u32, index: usize) -> u32 {
    base_ms + STAGGER_MS * index as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_one_shot() {
        let mut visibility = Visibility::default();
        assert!(!visibility.is_visible());
        assert!(visibility.reveal());
        assert!(visibility.is_visible());
        assert!(!visibility.reveal());
        assert!(visibility.is_visible());
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger_delay_ms(0, 0), 0);
        assert_eq!(stagger_delay_ms(300, 2), 500);
    }
}
