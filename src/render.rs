use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Circle;
use embedded_graphics::primitives::PrimitiveStyle;

use crate::konst;
use crate::light::Light;

/// Paint the three lamps onto `display`, the current one bright, the other
/// two dimmed.
///
/// Geometry is derived from the bounding box of the display that is actually
/// being painted, on every call, so the discs stay proportional to whatever
/// surface is handed in: the disc diameter is a quarter of the surface
/// height, the gap between discs a quarter of the diameter, and the column
/// is centered horizontally.
pub fn draw_traffic_light<D>(display: &mut D, current: Light) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let bbox = display.bounding_box();

    let diameter = bbox.size.height / 4;
    let spacing = diameter / 4;

    display.clear(konst::BACKGROUND)?;

    let mut center = Point::new(
        bbox.top_left.x + bbox.size.width as i32 / 2,
        bbox.top_left.y + diameter as i32 / 2,
    );

    for slot in Light::ALL {
        let color = if slot == current {
            slot.on_color()
        } else {
            slot.off_color()
        };

        Circle::with_center(center, diameter)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)?;

        center.y += (diameter + spacing) as i32;
    }

    Ok(())
}
