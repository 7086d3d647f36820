//! Sprite sheet layout for the player.
//!
//! Both player sheets share one layout: fixed-size frames, one row per
//! movement status. The animator picks a row from the status and a column
//! from the frame counter.

use crate::resources::player::MoveStatus;
use crate::surface::Region;

/// A horizontal strip of frames inside a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationRow {
    /// Vertical offset of the row in pixels.
    pub offset_y: i32,
    /// Number of frames in the row.
    pub frame_count: u32,
}

/// Frame geometry and animation rows shared by the directional sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSheetLayout {
    /// Horizontal offset of the first frame.
    pub offset_x: i32,
    pub frame_width: i32,
    pub frame_height: i32,
    pub stand: AnimationRow,
    pub run: AnimationRow,
    /// Ticks each frame stays on screen.
    pub frames_per_step: u32,
}

impl Default for SpriteSheetLayout {
    fn default() -> Self {
        Self {
            offset_x: 0,
            frame_width: 32,
            frame_height: 32,
            stand: AnimationRow {
                offset_y: 0,
                frame_count: 5,
            },
            run: AnimationRow {
                offset_y: 32,
                frame_count: 8,
            },
            frames_per_step: 5,
        }
    }
}

impl SpriteSheetLayout {
    pub fn with_frames_per_step(mut self, frames_per_step: u32) -> Self {
        self.frames_per_step = frames_per_step.max(1);
        self
    }

    pub fn row(&self, status: MoveStatus) -> AnimationRow {
        match status {
            MoveStatus::Standing => self.stand,
            MoveStatus::Running => self.run,
        }
    }

    /// Frame shown for `status` once `frame_counter` ticks have elapsed.
    pub fn frame_index(&self, status: MoveStatus, frame_counter: u64) -> u32 {
        let count = u64::from(self.row(status).frame_count.max(1));
        let step = u64::from(self.frames_per_step.max(1));
        ((frame_counter / step) % count) as u32
    }

    /// Source rectangle of frame `index` in the row for `status`.
    pub fn frame_region(&self, status: MoveStatus, index: u32) -> Region {
        Region::new(
            self.offset_x + index as i32 * self.frame_width,
            self.row(status).offset_y,
            self.frame_width,
            self.frame_height,
        )
    }

    /// Smallest sheet size that holds every frame of both rows.
    pub fn required_size(&self) -> (i32, i32) {
        let widest = self.stand.frame_count.max(self.run.frame_count) as i32;
        let lowest = self.stand.offset_y.max(self.run.offset_y);
        (
            self.offset_x + widest * self.frame_width,
            lowest + self.frame_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_index_stays_in_range() {
        let layout = SpriteSheetLayout::default();
        for counter in 0..500u64 {
            assert!(layout.frame_index(MoveStatus::Standing, counter) < 5);
            assert!(layout.frame_index(MoveStatus::Running, counter) < 8);
        }
        assert!(layout.frame_index(MoveStatus::Running, u64::MAX) < 8);
    }

    #[test]
    fn test_frame_index_advances_every_step() {
        let layout = SpriteSheetLayout::default();
        assert_eq!(layout.frame_index(MoveStatus::Running, 4), 0);
        assert_eq!(layout.frame_index(MoveStatus::Running, 5), 1);
        assert_eq!(layout.frame_index(MoveStatus::Running, 39), 7);
        assert_eq!(layout.frame_index(MoveStatus::Running, 40), 0);
        assert_eq!(layout.frame_index(MoveStatus::Standing, 25), 0);
    }

    #[test]
    fn test_frame_region_uses_status_row() {
        let layout = SpriteSheetLayout::default();
        assert_eq!(
            layout.frame_region(MoveStatus::Standing, 2),
            Region::new(64, 0, 32, 32)
        );
        assert_eq!(
            layout.frame_region(MoveStatus::Running, 7),
            Region::new(224, 32, 32, 32)
        );
    }

    #[test]
    fn test_zero_step_is_clamped() {
        let layout = SpriteSheetLayout::default().with_frames_per_step(0);
        assert_eq!(layout.frames_per_step, 1);
        assert_eq!(layout.frame_index(MoveStatus::Running, 3), 3);
    }

    #[test]
    fn test_required_size_covers_run_row() {
        assert_eq!(SpriteSheetLayout::default().required_size(), (256, 64));
    }
}
