/// Position of a material in its topic's flattened sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialSequence {
  index: usize,
  len: usize,
}

impl MaterialSequence {
  /// None when `index` is outside a sequence of `len` materials
  pub fn new(index: usize, len: usize) -> Option<Self> {
    (index < len).then_some(Self { index, len })
  }

  pub fn index(&self) -> usize {
    self.index
  }

  /// Number of materials in the topic; never zero
  pub fn total(&self) -> usize {
    self.len
  }

  pub fn has_prev(&self) -> bool {
    self.index > 0
  }

  pub fn has_next(&self) -> bool {
    self.index + 1 < self.len
  }

  pub fn prev_index(&self) -> Option<usize> {
    self.has_prev().then(|| self.index - 1)
  }

  pub fn next_index(&self) -> Option<usize> {
    self.has_next().then(|| self.index + 1)
  }

  /// Percentage of the topic reached, counting the current material
  pub fn completion_percent(&self) -> u8 {
    ((self.index + 1) * 100 / self.len) as u8
  }

  /// "2 of 5"
  pub fn position_label(&self) -> String {
    format!("{} of {}", self.index + 1, self.len)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_out_of_range_index() {
    assert!(MaterialSequence::new(3, 3).is_none());
    assert!(MaterialSequence::new(0, 0).is_none());
  }

  #[test]
  fn test_total_counts_whole_topic() {
    let seq = MaterialSequence::new(1, 4).unwrap();
    assert_eq!(seq.index(), 1);
    assert_eq!(seq.total(), 4);
  }

  #[test]
  fn test_single_material_has_no_neighbours() {
    let seq = MaterialSequence::new(0, 1).unwrap();
    assert!(!seq.has_prev());
    assert!(!seq.has_next());
    assert_eq!(seq.completion_percent(), 100);
  }

  #[test]
  fn test_ends_of_sequence() {
    for n in 2..8 {
      for i in 0..n {
        let seq = MaterialSequence::new(i, n).unwrap();
        assert_eq!(seq.has_next(), i != n - 1, "next at {} of {}", i, n);
        assert_eq!(seq.has_prev(), i != 0, "prev at {} of {}", i, n);
      }
    }
  }

  #[test]
  fn test_neighbour_indices() {
    let seq = MaterialSequence::new(1, 3).unwrap();
    assert_eq!(seq.prev_index(), Some(0));
    assert_eq!(seq.next_index(), Some(2));
    let last = MaterialSequence::new(2, 3).unwrap();
    assert_eq!(last.next_index(), None);
  }

  #[test]
  fn test_completion_and_label() {
    let seq = MaterialSequence::new(0, 3).unwrap();
    assert_eq!(seq.completion_percent(), 33);
    assert_eq!(seq.position_label(), "1 of 3");
    assert_eq!(MaterialSequence::new(2, 3).unwrap().completion_percent(), 100);
  }
}
