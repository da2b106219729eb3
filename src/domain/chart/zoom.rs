use crate::domain::config::GridOptions;
use crate::domain::errors::{ChartError, ChartResult};

use super::scale::ZoomTransform;

/// Wheel direction. Positive deltas step toward finer detail (shorter
/// visible duration), negative toward coarser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    Finer,
    Coarser,
}

impl ZoomDirection {
    pub fn from_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(ZoomDirection::Finer)
        } else if delta < 0.0 {
            Some(ZoomDirection::Coarser)
        } else {
            None
        }
    }
}

/// Discrete level-of-detail selector.
///
/// Zoom gestures are consumed for their sign only; the transform's scale
/// factor is pinned to 1 and only the gesture translation is carried.
#[derive(Debug, Clone)]
pub struct ZoomController {
    levels: Vec<f64>,
    interval_index: usize,
    transform: ZoomTransform,
}

impl ZoomController {
    pub fn new(levels: Vec<f64>, interval_index: usize) -> ChartResult<Self> {
        if interval_index >= levels.len() {
            return Err(ChartError::LevelOutOfRange { index: interval_index, levels: levels.len() });
        }
        Ok(Self { levels, interval_index, transform: ZoomTransform::identity() })
    }

    pub fn level_index(&self) -> usize {
        self.interval_index
    }

    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    pub fn display_duration(&self) -> f64 {
        self.levels[self.interval_index]
    }

    pub fn transform(&self) -> ZoomTransform {
        self.transform
    }

    pub fn set_transform(&mut self, transform: ZoomTransform) {
        self.transform = transform;
    }

    /// Step one level in `direction`. Boundary steps are no-ops and report
    /// whether the index changed.
    pub fn step(&mut self, direction: ZoomDirection) -> bool {
        match direction {
            ZoomDirection::Finer => {
                if self.interval_index == 0 {
                    return false;
                }
                self.interval_index -= 1;
            }
            ZoomDirection::Coarser => {
                if self.interval_index + 1 == self.levels.len() {
                    return false;
                }
                self.interval_index += 1;
            }
        }
        true
    }

    /// Jump to an explicit level. Out-of-range requests are reported, not
    /// clamped.
    pub fn set_level(&mut self, index: usize) -> ChartResult<()> {
        if index >= self.levels.len() {
            return Err(ChartError::LevelOutOfRange { index, levels: self.levels.len() });
        }
        self.interval_index = index;
        Ok(())
    }
}

/// Pixel size of one grid column: scan `[min, max]` ascending and take the
/// first candidate that does not evenly divide the viewport width,
/// otherwise keep the minimum.
pub fn grid_cell_px(width: u32, grid: &GridOptions) -> u32 {
    let mut size = grid.cell_min_width;
    for i in grid.cell_min_width..=grid.cell_max_width {
        if i != 0 && width % i != 0 {
            size = i;
            break;
        }
    }
    size
}

/// Time span represented by one grid column, never below 2.
pub fn cell_duration(display_duration: f64, width: u32, grid: &GridOptions) -> f64 {
    let size = grid_cell_px(width, grid);
    let columns = width as f64 / size as f64;
    (display_duration / columns).ceil().max(2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_from_delta_sign() {
        assert_eq!(ZoomDirection::from_delta(120.0), Some(ZoomDirection::Finer));
        assert_eq!(ZoomDirection::from_delta(-120.0), Some(ZoomDirection::Coarser));
        assert_eq!(ZoomDirection::from_delta(0.0), None);
    }

    #[test]
    fn constructor_rejects_bad_index() {
        let err = ZoomController::new(vec![50.0, 60.0], 2).unwrap_err();
        assert_eq!(err, ChartError::LevelOutOfRange { index: 2, levels: 2 });
    }
}
