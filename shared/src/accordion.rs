//! Single, collapsible accordion: at most one item open, clicking the open
//! item closes it.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut accordion = Accordion::default();
        assert_eq!(accordion.open_item(), None);

        accordion.toggle(2);
        assert!(accordion.is_open(2));

        accordion.toggle(0);
        assert!(accordion.is_open(0));
        assert!(!accordion.is_open(2));

        accordion.toggle(0);
        assert_eq!(accordion.open_item(), None);
    }
}
