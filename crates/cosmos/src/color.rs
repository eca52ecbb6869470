use serde::{Deserialize, Serialize};

/// Named colors the universe paints bodies with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyColor {
    Yellow,
    Blue,
    White,
    Black,
    Red,
    Cyan,
}

impl BodyColor {
    /// Resting color of a star
    pub const STAR: BodyColor = BodyColor::Yellow;
    /// A star after it has gone supernova
    pub const SUPERNOVA: BodyColor = BodyColor::Red;
    pub const PLANET: BodyColor = BodyColor::Blue;
    pub const MOON: BodyColor = BodyColor::White;
    /// A quiet black hole
    pub const BLACK_HOLE: BodyColor = BodyColor::Black;
    /// A black hole after a flare or merger
    pub const ACTIVE_BLACK_HOLE: BodyColor = BodyColor::White;
    pub const GALAXY_STAR: BodyColor = BodyColor::Yellow;
    pub const COMET: BodyColor = BodyColor::White;
    pub const NEUTRON_STAR: BodyColor = BodyColor::Cyan;
    pub const STAR_LIGHT: BodyColor = BodyColor::White;
    pub const BACKGROUND: BodyColor = BodyColor::Black;

    pub fn rgb(&self) -> Rgb {
        match self {
            BodyColor::Yellow => Rgb::new(255, 255, 0),
            BodyColor::Blue => Rgb::new(0, 0, 255),
            BodyColor::White => Rgb::new(255, 255, 255),
            BodyColor::Black => Rgb::new(0, 0, 0),
            BodyColor::Red => Rgb::new(255, 0, 0),
            BodyColor::Cyan => Rgb::new(0, 255, 255),
        }
    }
}

/// 8-bit RGB triple handed to renderers that want raw channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to [0, 1]
    pub fn to_unit(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flared_colors_differ_from_resting_colors() {
        assert_ne!(BodyColor::STAR, BodyColor::SUPERNOVA);
        assert_ne!(BodyColor::BLACK_HOLE, BodyColor::ACTIVE_BLACK_HOLE);
    }

    #[test]
    fn rgb_channels() {
        assert_eq!(BodyColor::Cyan.rgb(), Rgb::new(0, 255, 255));
        assert_eq!(BodyColor::Black.rgb().to_unit(), [0.0, 0.0, 0.0]);
        assert_eq!(BodyColor::White.rgb().to_unit(), [1.0, 1.0, 1.0]);
    }
}
