use embedded_graphics::pixelcolor::Rgb888;

pub(crate) const WINDOW_TITLE: &str = "Traffic Light Simulator";

pub(crate) const WINDOW_WIDTH: u32 = 200;

pub(crate) const WINDOW_HEIGHT: u32 = 400;

pub(crate) const WINDOW_SCALE: u32 = 1;

pub(crate) const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_millis(100);

pub(crate) const DWELL_RED: std::time::Duration = std::time::Duration::from_secs(1);

pub(crate) const DWELL_YELLOW: std::time::Duration = std::time::Duration::from_secs(1);

pub(crate) const DWELL_GREEN: std::time::Duration = std::time::Duration::from_millis(5250);

pub(crate) const BACKGROUND: Rgb888 = Rgb888::new(0, 0, 0);

pub(crate) const RED_ON: Rgb888 = Rgb888::new(255, 0, 0);

pub(crate) const RED_OFF: Rgb888 = Rgb888::new(100, 0, 0);

pub(crate) const YELLOW_ON: Rgb888 = Rgb888::new(255, 255, 0);

pub(crate) const YELLOW_OFF: Rgb888 = Rgb888::new(100, 100, 0);

pub(crate) const GREEN_ON: Rgb888 = Rgb888::new(0, 255, 0);

pub(crate) const GREEN_OFF: Rgb888 = Rgb888::new(0, 100, 0);
