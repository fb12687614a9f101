//! Page-window generation for pagination controls.
//!
//! A window is the left-to-right list of page links and ellipsis gaps a
//! pagination control renders: the first page, a contiguous run of pages
//! around the current one, the last page, and a gap marker wherever pages
//! were left out.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Numeric stand-in for [`Marker::Ellipsis`] in the flat encoding.
pub const ELLIPSIS_SENTINEL: i64 = 0;

/// Filler for unused trailing positions of a fixed-slot array.
pub const SLOT_PAD: i64 = -1;

/// Largest neighbor offset accepted from user input.
pub const MAX_NEIGHBOR_OFFSET: u32 = 10_000;

/// Pages always shown besides the neighbor run: first, last, the current
/// page and the two positions an ellipsis may occupy.
const BASE_WINDOW_SIZE: i64 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum Marker {
    Page(i64),
    Ellipsis,
}

impl Marker {
    pub fn page(&self) -> Option<i64> {
        match self {
            Marker::Page(n) => Some(*n),
            Marker::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Marker::Ellipsis)
    }

    fn sentinel(&self) -> i64 {
        self.page().unwrap_or(ELLIPSIS_SENTINEL)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Page(n) => write!(f, "{n}"),
            Marker::Ellipsis => f.write_str("..."),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Window {
    markers: Vec<Marker>,
}

impl Window {
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Marker> {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Page numbers in display order, gaps skipped.
    pub fn pages(&self) -> impl Iterator<Item = i64> + '_ {
        self.markers.iter().filter_map(Marker::page)
    }

    pub fn contains_page(&self, page: i64) -> bool {
        self.pages().any(|p| p == page)
    }

    pub fn has_ellipsis(&self) -> bool {
        self.markers.iter().any(Marker::is_ellipsis)
    }

    /// Flat encoding with gaps written as [`ELLIPSIS_SENTINEL`].
    pub fn to_sentinels(&self) -> Vec<i64> {
        self.markers.iter().map(Marker::sentinel).collect()
    }

    /// Fixed-size encoding, gaps as [`ELLIPSIS_SENTINEL`] and unused tail
    /// positions as [`SLOT_PAD`]. Returns `None` when the window is longer
    /// than `N`.
    pub fn to_slots<const N: usize>(&self) -> Option<[i64; N]> {
        if self.markers.len() > N {
            return None;
        }
        let mut slots = [SLOT_PAD; N];
        for (slot, marker) in slots.iter_mut().zip(self.markers.iter()) {
            *slot = marker.sentinel();
        }
        Some(slots)
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.markers.iter().join(" "))
    }
}

impl<'a> IntoIterator for &'a Window {
    type Item = &'a Marker;
    type IntoIter = std::slice::Iter<'a, Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}

impl From<Window> for Vec<Marker> {
    fn from(window: Window) -> Self {
        window.markers
    }
}

/// Upper bound on the number of markers [`generate`] returns for a given
/// neighbor offset.
pub fn max_len(neighbor_offset: u32) -> usize {
    (BASE_WINDOW_SIZE + i64::from(neighbor_offset) * 2) as usize
}

/// Builds the window for `current_page` out of `total_pages`, showing
/// `neighbor_offset` pages on each side of the current one.
///
/// `current_page` is not validated: values below 1 collapse onto the left
/// edge and values past `total_pages` onto the right edge. A non-positive
/// `total_pages` yields an empty window.
pub fn generate(current_page: i64, total_pages: i64, neighbor_offset: u32) -> Window {
    let offset = i64::from(neighbor_offset);
    let window_size = BASE_WINDOW_SIZE + offset * 2;

    if window_size >= total_pages {
        return Window {
            markers: (1..=total_pages).map(Marker::Page).collect(),
        };
    }

    let mut markers = Vec::with_capacity(window_size as usize);
    markers.push(Marker::Page(1));

    let mut start = current_page.saturating_sub(offset);
    let mut end = current_page.saturating_add(offset);
    let mut leading_gap = true;
    let mut trailing_gap = true;

    if start <= 3 {
        start = 2;
        end = 3 + offset * 2;
        leading_gap = false;
    }

    if end >= total_pages - 2 {
        if leading_gap {
            start = total_pages - (2 + offset * 2);
        }
        end = total_pages - 1;
        trailing_gap = false;
    }

    // the right-edge shift above can drag start back onto the left edge
    if start <= 3 {
        start = 2;
        leading_gap = false;
    }

    if leading_gap {
        markers.push(Marker::Ellipsis);
    }
    markers.extend((start..=end).map(Marker::Page));
    if trailing_gap {
        markers.push(Marker::Ellipsis);
    }
    markers.push(Marker::Page(total_pages));

    Window { markers }
}

/// Seven-slot window with one neighbor on each side.
pub fn one_offset_slots(current_page: i64, total_pages: i64) -> [i64; 7] {
    generate(current_page, total_pages, 1)
        .to_slots()
        .unwrap_or([SLOT_PAD; 7])
}

/// Nine-slot window with two neighbors on each side.
pub fn two_offset_slots(current_page: i64, total_pages: i64) -> [i64; 9] {
    generate(current_page, total_pages, 2)
        .to_slots()
        .unwrap_or([SLOT_PAD; 9])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gv(page: i64, total: i64, offset: u32) -> Vec<i64> {
        generate(page, total, offset).to_sentinels()
    }

    #[test]
    fn short_list_enumerates_every_page() {
        assert_eq!(gv(-11, 5, 1), vec![1, 2, 3, 4, 5]);
        assert_eq!(gv(3, 7, 1), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(gv(1, 1, 0), vec![1]);
    }

    #[test]
    fn one_offset_window_over_ten_pages() {
        assert_eq!(gv(-111, 10, 1), vec![1, 2, 3, 4, 5, 0, 10]);
        assert_eq!(gv(4, 10, 1), vec![1, 2, 3, 4, 5, 0, 10]);
        assert_eq!(gv(5, 10, 1), vec![1, 0, 4, 5, 6, 0, 10]);
        assert_eq!(gv(6, 10, 1), vec![1, 0, 5, 6, 7, 0, 10]);
        assert_eq!(gv(7, 10, 1), vec![1, 0, 6, 7, 8, 9, 10]);
        assert_eq!(gv(111, 10, 1), vec![1, 0, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn two_offset_window_over_twenty_pages() {
        assert_eq!(gv(-222, 20, 2), vec![1, 2, 3, 4, 5, 6, 7, 0, 20]);
        assert_eq!(gv(5, 20, 2), vec![1, 2, 3, 4, 5, 6, 7, 0, 20]);
        assert_eq!(gv(6, 20, 2), vec![1, 0, 4, 5, 6, 7, 8, 0, 20]);
        assert_eq!(gv(10, 20, 2), vec![1, 0, 8, 9, 10, 11, 12, 0, 20]);
        assert_eq!(gv(15, 20, 2), vec![1, 0, 13, 14, 15, 16, 17, 0, 20]);
        assert_eq!(gv(16, 20, 2), vec![1, 0, 14, 15, 16, 17, 18, 19, 20]);
        assert_eq!(gv(222, 20, 2), vec![1, 0, 14, 15, 16, 17, 18, 19, 20]);
    }

    #[test]
    fn zero_offset_keeps_single_current_page() {
        assert_eq!(gv(1, 6, 0), vec![1, 2, 3, 0, 6]);
        assert_eq!(gv(6, 12, 0), vec![1, 0, 6, 0, 12]);
        assert_eq!(gv(12, 12, 0), vec![1, 0, 10, 11, 12]);
    }

    #[test]
    fn large_offset_takes_fast_path() {
        let expected: Vec<i64> = (1..=100).collect();
        assert_eq!(gv(1, 100, 100), expected);
    }

    #[test]
    fn non_positive_total_gives_empty_window() {
        assert!(generate(1, 0, 1).is_empty());
        assert!(generate(3, -4, 2).is_empty());
    }

    #[test]
    fn extreme_current_page_does_not_overflow() {
        assert_eq!(gv(i64::MIN, 10, 1), vec![1, 2, 3, 4, 5, 0, 10]);
        assert_eq!(gv(i64::MAX, 10, 1), vec![1, 0, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn ellipsis_is_a_distinct_variant() {
        let window = generate(5, 10, 1);
        assert_eq!(window.markers()[1], Marker::Ellipsis);
        assert_eq!(window.markers()[0], Marker::Page(1));
        assert!(window.has_ellipsis());
        assert!(!window.contains_page(0));
        assert_eq!(window.pages().collect::<Vec<_>>(), vec![1, 4, 5, 6, 10]);
    }

    #[test]
    fn fixed_slots_pad_short_windows() {
        assert_eq!(one_offset_slots(-11, 5), [1, 2, 3, 4, 5, -1, -1]);
        assert_eq!(one_offset_slots(5, 10), [1, 0, 4, 5, 6, 0, 10]);
        assert_eq!(
            two_offset_slots(10, 20),
            [1, 0, 8, 9, 10, 11, 12, 0, 20]
        );
        assert_eq!(generate(5, 10, 1).to_slots::<5>(), None);
    }

    #[test]
    fn length_is_bounded_by_max_len() {
        for offset in 0..4 {
            for total in 1..30 {
                for page in -2..total + 3 {
                    assert!(generate(page, total, offset).len() <= max_len(offset));
                }
            }
        }
    }

    #[test]
    fn display_uses_dots_for_gaps() {
        assert_eq!(generate(5, 10, 1).to_string(), "1 ... 4 5 6 ... 10");
    }

    #[test]
    fn markers_serialize_with_kind_tag() {
        let json = serde_json::to_string(&generate(5, 10, 1)).unwrap();
        assert!(json.starts_with(r#"[{"kind":"page","page":1},{"kind":"ellipsis"}"#));
        let back: Window = serde_json::from_str(&json).unwrap();
        assert_eq!(back, generate(5, 10, 1));
    }
}
