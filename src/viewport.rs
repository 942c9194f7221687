//! Visible area and orientation of the panel

use crate::flag::Flag;
use crate::{HEIGHT, WIDTH};

/// Display rotation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayRotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate by 90 degrees clockwise
    Rotate90,
    /// Rotate by 180 degrees clockwise
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl DisplayRotation {
    /// Rotation from a quarter-turn count, reduced modulo 4.
    pub const fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => DisplayRotation::Rotate0,
            1 => DisplayRotation::Rotate90,
            2 => DisplayRotation::Rotate180,
            _ => DisplayRotation::Rotate270,
        }
    }

    /// Quarter-turn count in `0..4`.
    pub const fn quarter_turns(self) -> u8 {
        match self {
            DisplayRotation::Rotate0 => 0,
            DisplayRotation::Rotate90 => 1,
            DisplayRotation::Rotate180 => 2,
            DisplayRotation::Rotate270 => 3,
        }
    }

    /// Whether rows and columns are exchanged.
    pub const fn is_swapped(self) -> bool {
        matches!(self, DisplayRotation::Rotate90 | DisplayRotation::Rotate270)
    }

    /// MADCTL argument selecting the mirror axes for this rotation.
    pub const fn madctl(self) -> u8 {
        match self {
            DisplayRotation::Rotate0 => Flag::MADCTL_MX | Flag::MADCTL_MY | Flag::MADCTL_RGB,
            DisplayRotation::Rotate90 => Flag::MADCTL_MY | Flag::MADCTL_MV | Flag::MADCTL_RGB,
            DisplayRotation::Rotate180 => Flag::MADCTL_RGB,
            DisplayRotation::Rotate270 => Flag::MADCTL_MX | Flag::MADCTL_MV | Flag::MADCTL_RGB,
        }
    }
}

impl From<u8> for DisplayRotation {
    fn from(turns: u8) -> Self {
        DisplayRotation::from_quarter_turns(turns)
    }
}

/// Current width, height, RAM origin offsets and rotation of the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    width: u8,
    height: u8,
    col_offset: u8,
    row_offset: u8,
    rotation: DisplayRotation,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: WIDTH,
            height: HEIGHT,
            col_offset: 0,
            row_offset: 0,
            rotation: DisplayRotation::Rotate0,
        }
    }
}

impl Viewport {
    /// Visible width for the current rotation
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Visible height for the current rotation
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Column offset added to every window coordinate
    pub fn col_offset(&self) -> u8 {
        self.col_offset
    }

    /// Row offset added to every window coordinate
    pub fn row_offset(&self) -> u8 {
        self.row_offset
    }

    /// Current rotation
    pub fn rotation(&self) -> DisplayRotation {
        self.rotation
    }

    pub(crate) fn set_offset(&mut self, col: u8, row: u8) {
        self.col_offset = col;
        self.row_offset = row;
    }

    pub(crate) fn set_rotation(&mut self, rotation: DisplayRotation) {
        self.rotation = rotation;
        if rotation.is_swapped() {
            self.width = HEIGHT;
            self.height = WIDTH;
        } else {
            self.width = WIDTH;
            self.height = HEIGHT;
        }
    }

    /// Whether `(x, y)` is a visible pixel.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < i32::from(self.width) && y < i32::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_reduces_modulo_four() {
        assert_eq!(DisplayRotation::from(4u8), DisplayRotation::Rotate0);
        assert_eq!(DisplayRotation::from(7u8), DisplayRotation::Rotate270);
        assert_eq!(DisplayRotation::from(255u8), DisplayRotation::Rotate270);
        for turns in 0..4u8 {
            assert_eq!(DisplayRotation::from(turns).quarter_turns(), turns);
        }
    }

    #[test]
    fn dimensions_follow_rotation() {
        let mut viewport = Viewport::default();
        assert_eq!((viewport.width(), viewport.height()), (97, 69));
        for turns in 0..8u8 {
            viewport.set_rotation(turns.into());
            let expected = if turns % 2 == 0 { (97, 69) } else { (69, 97) };
            assert_eq!((viewport.width(), viewport.height()), expected);
        }
    }

    #[test]
    fn madctl_mirror_axes() {
        assert_eq!(DisplayRotation::Rotate0.madctl(), 0xC0);
        assert_eq!(DisplayRotation::Rotate90.madctl(), 0xA0);
        assert_eq!(DisplayRotation::Rotate180.madctl(), 0x00);
        assert_eq!(DisplayRotation::Rotate270.madctl(), 0x60);
    }

    #[test]
    fn contains_rejects_edges() {
        let viewport = Viewport::default();
        assert!(viewport.contains(0, 0));
        assert!(viewport.contains(96, 68));
        assert!(!viewport.contains(97, 0));
        assert!(!viewport.contains(0, 69));
        assert!(!viewport.contains(-1, 0));
        assert!(!viewport.contains(0, -1));
    }
}
