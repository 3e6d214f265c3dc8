// Hit regions recorded while drawing.
// Translates mouse coordinates back into page indices and controls.

use ratatui::layout::{Position, Rect};

/// Something clickable or droppable on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Page tab at this index. Drop zone.
    Tab(usize),
    /// Menu handle nested inside the tab at this index. Drop zone.
    TabHandle(usize),
    /// Add button inserting a page at this index.
    AddPage(usize),
    /// Previous page control.
    Previous,
    /// Next page control.
    Next,
    /// Entry of the open context menu.
    MenuItem(usize),
}

impl HitTarget {
    /// Page slot this target accepts drops for, if it is a drop zone.
    pub fn drop_index(&self) -> Option<usize> {
        match self {
            HitTarget::Tab(index) | HitTarget::TabHandle(index) => Some(*index),
            _ => None,
        }
    }
}

/// Regions in draw order; later regions sit on top of earlier ones.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget last frame's regions.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if !area.is_empty() {
            self.regions.push((area, target));
        }
    }

    /// Topmost target at `pos`.
    pub fn at(&self, pos: Position) -> Option<HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, target)| *target)
    }

    /// Every drop zone containing `pos`, outermost first.
    pub fn drop_zones(&self, pos: Position) -> Vec<HitTarget> {
        self.regions
            .iter()
            .filter(|(area, target)| target.drop_index().is_some() && area.contains(pos))
            .map(|(_, target)| *target)
            .collect()
    }

    /// Where `target` was drawn.
    pub fn area_of(&self, target: HitTarget) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, t)| *t == target)
            .map(|(area, _)| *area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HitMap {
        let mut map = HitMap::new();
        map.push(Rect::new(0, 0, 10, 1), HitTarget::Tab(0));
        map.push(Rect::new(8, 0, 2, 1), HitTarget::TabHandle(0));
        map.push(Rect::new(10, 0, 3, 1), HitTarget::AddPage(1));
        map.push(Rect::new(13, 0, 8, 1), HitTarget::Tab(1));
        map
    }

    #[test]
    fn test_topmost_wins() {
        let map = sample();
        assert_eq!(map.at(Position::new(2, 0)), Some(HitTarget::Tab(0)));
        assert_eq!(map.at(Position::new(9, 0)), Some(HitTarget::TabHandle(0)));
        assert_eq!(map.at(Position::new(11, 0)), Some(HitTarget::AddPage(1)));
        assert_eq!(map.at(Position::new(30, 0)), None);
    }

    #[test]
    fn test_nested_drop_zones() {
        let map = sample();
        assert_eq!(map.drop_zones(Position::new(2, 0)), vec![HitTarget::Tab(0)]);
        assert_eq!(
            map.drop_zones(Position::new(9, 0)),
            vec![HitTarget::Tab(0), HitTarget::TabHandle(0)]
        );
        assert!(map.drop_zones(Position::new(11, 0)).is_empty());
    }

    #[test]
    fn test_empty_regions_are_skipped() {
        let mut map = HitMap::new();
        map.push(Rect::new(5, 5, 0, 1), HitTarget::Next);
        assert_eq!(map.area_of(HitTarget::Next), None);

        map.push(Rect::new(5, 5, 4, 1), HitTarget::Next);
        assert_eq!(map.area_of(HitTarget::Next), Some(Rect::new(5, 5, 4, 1)));
        map.clear();
        assert_eq!(map.at(Position::new(6, 5)), None);
    }
}
