/// Ascending, duplicate-free line numbers recorded for one word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccurrenceList {
    lines: Vec<usize>,
}

impl OccurrenceList {
    pub fn new() -> Self {
        Self::default()
    }

    /// List holding a single line number
    pub fn with_line(line_number: usize) -> Self {
        Self {
            lines: vec![line_number],
        }
    }

    /// Record `line_number`, keeping the list strictly ascending.
    /// Returns `false` when the line was already present.
    pub fn add(&mut self, line_number: usize) -> bool {
        match self.lines.last() {
            None => {
                self.lines.push(line_number);
                true
            }
            // Top-to-bottom parsing always lands here or on the duplicate check
            Some(&last) if line_number > last => {
                self.lines.push(line_number);
                true
            }
            Some(&last) if line_number == last => false,
            Some(_) => match self.lines.binary_search(&line_number) {
                Ok(_) => false,
                Err(pos) => {
                    self.lines.insert(pos, line_number);
                    true
                }
            },
        }
    }

    pub fn contains(&self, line_number: usize) -> bool {
        self.lines.binary_search(&line_number).is_ok()
    }

    /// Read-only view used by the serializer
    pub fn to_sequence(&self) -> &[usize] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.lines.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_in_order() {
        let mut list = OccurrenceList::new();
        assert!(list.add(1));
        assert!(list.add(3));
        assert!(list.add(7));
        assert_eq!(list.to_sequence(), &[1, 3, 7]);
    }

    #[test]
    fn test_add_same_line_twice() {
        let mut list = OccurrenceList::with_line(4);
        assert!(!list.add(4));
        assert!(!list.add(4));
        assert_eq!(list.to_sequence(), &[4]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_out_of_order_keeps_ascending() {
        let mut list = OccurrenceList::new();
        for line in [10, 2, 8, 2, 5, 10, 1] {
            list.add(line);
        }
        assert_eq!(list.to_sequence(), &[1, 2, 5, 8, 10]);
        assert!(list.to_sequence().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_reprocessing_earlier_line_is_ignored() {
        let mut list = OccurrenceList::new();
        list.add(1);
        list.add(2);
        list.add(3);
        assert!(!list.add(2));
        assert_eq!(list.to_sequence(), &[1, 2, 3]);
    }

    #[test]
    fn test_contains_and_iter() {
        let mut list = OccurrenceList::new();
        list.add(2);
        list.add(9);
        assert!(list.contains(9));
        assert!(!list.contains(3));
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![2, 9]);
        assert!(!list.is_empty());
        assert!(OccurrenceList::new().is_empty());
    }
}
