use embedded_graphics::pixelcolor::Rgb888;

use crate::konst;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Light {
    Red,
    Yellow,
    Green,
}

impl Light {
    /// Top-to-bottom slot order in the housing.
    pub const ALL: [Light; 3] = [Light::Red, Light::Yellow, Light::Green];

    pub fn next(self) -> Self {
        match self {
            Light::Red => Light::Yellow,
            Light::Yellow => Light::Green,
            Light::Green => Light::Red,
        }
    }

    pub(crate) fn on_color(self) -> Rgb888 {
        match self {
            Light::Red => konst::RED_ON,
            Light::Yellow => konst::YELLOW_ON,
            Light::Green => konst::GREEN_ON,
        }
    }

    pub(crate) fn off_color(self) -> Rgb888 {
        match self {
            Light::Red => konst::RED_OFF,
            Light::Yellow => konst::YELLOW_OFF,
            Light::Green => konst::GREEN_OFF,
        }
    }
}
