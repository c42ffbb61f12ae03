//! Navigation state for a slide carousel.
use crate::types::Slide;

/// Cursor over a slide sequence.
///
/// Slide sequences always hold at least the cover, so a carousel never has
/// zero slides. Movement is clamped at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
  len:   usize,
  index: usize,
}

impl Carousel {
  #[must_use]
  pub const fn new(len: usize) -> Self {
    Self {
      len:   if len == 0 { 1 } else { len },
      index: 0,
    }
  }

  #[must_use]
  pub const fn for_slides(slides: &[Slide]) -> Self {
    Self::new(slides.len())
  }

  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  #[must_use]
  pub const fn is_empty(&self) -> bool {
    false
  }

  /// Index of the slide currently shown.
  #[must_use]
  pub const fn current(&self) -> usize {
    self.index
  }

  #[must_use]
  pub const fn is_cover(&self) -> bool {
    self.index == 0
  }

  /// Advance one slide. Returns `false` when already on the last slide.
  pub const fn next_slide(&mut self) -> bool {
    if self.index + 1 < self.len {
      self.index += 1;
      true
    } else {
      false
    }
  }

  /// Go back one slide. Returns `false` when already on the cover.
  pub const fn prev_slide(&mut self) -> bool {
    if self.index > 0 {
      self.index -= 1;
      true
    } else {
      false
    }
  }

  /// Jump to a slide by index. Out-of-range indices are ignored.
  pub const fn select(&mut self, index: usize) -> bool {
    if index < self.len {
      self.index = index;
      true
    } else {
      false
    }
  }

  /// Return to the cover, e.g. after the post is regenerated.
  pub const fn reset(&mut self) {
    self.index = 0;
  }

  /// Header shown on content slides: `"{topic} • {current}/{last}"`, where
  /// the cover is slide 0 and `last` is the index of the final slide.
  #[must_use]
  pub fn page_label(&self, topic: &str) -> String {
    format!("{topic} • {}/{}", self.index, self.len - 1)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_navigation_is_clamped() {
    let mut carousel = Carousel::new(3);
    assert!(carousel.is_cover());
    assert!(!carousel.prev_slide());
    assert!(carousel.next_slide());
    assert!(carousel.next_slide());
    assert!(!carousel.next_slide());
    assert_eq!(carousel.current(), 2);
    assert!(carousel.prev_slide());
    assert_eq!(carousel.current(), 1);
  }

  #[test]
  fn test_empty_carousel_still_has_a_cover() {
    let mut carousel = Carousel::new(0);
    assert_eq!(carousel.len(), 1);
    assert!(!carousel.is_empty());
    assert!(!carousel.next_slide());
    assert_eq!(carousel.page_label("x"), "x • 0/0");
  }

  #[test]
  fn test_select_and_reset() {
    let mut carousel = Carousel::new(4);
    assert!(carousel.select(3));
    assert!(!carousel.select(4));
    assert_eq!(carousel.current(), 3);
    carousel.reset();
    assert!(carousel.is_cover());
  }

  #[test]
  fn test_page_label() {
    let mut carousel = Carousel::new(5);
    carousel.next_slide();
    carousel.next_slide();
    assert_eq!(carousel.page_label("咖啡"), "咖啡 • 2/4");
  }
}
