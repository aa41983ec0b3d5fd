//! # Display Compositor
//!
//! Builds each OLED frame from scratch: clear, marker, border, flush. There is
//! no partial update; every call redraws the whole surface.

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
};

use crate::constants::display;
use crate::mode::BorderStyle;

/// A monochrome framebuffer that can push its contents to the glass
pub trait Panel: DrawTarget<Color = BinaryColor> {
    fn flush_frame(&mut self) -> Result<(), Self::Error>;
}

/// Compose and flush one frame
pub fn compose<P: Panel>(
    panel: &mut P,
    marker: Point,
    marker_size: u32,
    border: BorderStyle,
) -> Result<(), P::Error> {
    let surface = panel.bounding_box();

    panel.clear(BinaryColor::Off)?;

    Rectangle::new(marker, Size::new_equal(marker_size))
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(panel)?;

    draw_border(panel, surface, border)?;

    panel.flush_frame()
}

/// Overlay the border decoration for `style` on `surface`
pub fn draw_border<D>(target: &mut D, surface: Rectangle, style: BorderStyle) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let outline = PrimitiveStyleBuilder::new()
        .stroke_color(BinaryColor::On)
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();

    match style {
        BorderStyle::None => Ok(()),
        BorderStyle::Simple => surface.into_styled(outline).draw(target),
        BorderStyle::Corners => {
            let corner = Size::new_equal(display::CORNER_SIZE);
            let right = surface.size.width.saturating_sub(display::CORNER_SIZE) as i32;
            let bottom = surface.size.height.saturating_sub(display::CORNER_SIZE) as i32;

            for offset in [
                Point::new(0, 0),
                Point::new(right, 0),
                Point::new(0, bottom),
                Point::new(right, bottom),
            ] {
                Rectangle::new(surface.top_left + offset, corner)
                    .into_styled(outline)
                    .draw(target)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    const W: usize = display::WIDTH as usize;
    const H: usize = display::HEIGHT as usize;

    struct FrameBuffer {
        pixels: [[bool; W]; H],
        flushes: u32,
    }

    impl FrameBuffer {
        fn new() -> Self {
            Self {
                pixels: [[false; W]; H],
                flushes: 0,
            }
        }

        fn at(&self, x: usize, y: usize) -> bool {
            self.pixels[y][x]
        }

        fn lit(&self) -> usize {
            self.pixels.iter().flatten().filter(|p| **p).count()
        }
    }

    impl OriginDimensions for FrameBuffer {
        fn size(&self) -> Size {
            Size::new(display::WIDTH, display::HEIGHT)
        }
    }

    impl DrawTarget for FrameBuffer {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(p, color) in pixels {
                if (0..W as i32).contains(&p.x) && (0..H as i32).contains(&p.y) {
                    self.pixels[p.y as usize][p.x as usize] = color.is_on();
                }
            }
            Ok(())
        }
    }

    impl Panel for FrameBuffer {
        fn flush_frame(&mut self) -> Result<(), Self::Error> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn marker_only_without_border() {
        let mut fb = FrameBuffer::new();
        compose(&mut fb, Point::new(60, 28), 8, BorderStyle::None).unwrap();

        assert_eq!(fb.lit(), 64);
        assert!(fb.at(60, 28));
        assert!(fb.at(67, 35));
        assert!(!fb.at(68, 35));
        assert!(!fb.at(0, 0));
        assert_eq!(fb.flushes, 1);
    }

    #[test]
    fn each_frame_starts_clean() {
        let mut fb = FrameBuffer::new();
        compose(&mut fb, Point::new(0, 0), 8, BorderStyle::Simple).unwrap();
        compose(&mut fb, Point::new(60, 28), 8, BorderStyle::None).unwrap();

        assert!(!fb.at(0, 0));
        assert!(!fb.at(3, 3));
        assert_eq!(fb.lit(), 64);
        assert_eq!(fb.flushes, 2);
    }

    #[test]
    fn simple_border_outlines_surface() {
        let mut fb = FrameBuffer::new();
        compose(&mut fb, Point::new(60, 28), 8, BorderStyle::Simple).unwrap();

        for x in 0..W {
            assert!(fb.at(x, 0) && fb.at(x, H - 1));
        }
        for y in 0..H {
            assert!(fb.at(0, y) && fb.at(W - 1, y));
        }
        assert!(!fb.at(1, 1));
        assert_eq!(fb.lit(), 64 + 2 * W + 2 * (H - 2));
    }

    #[test]
    fn corner_border_draws_four_outlined_squares() {
        let mut fb = FrameBuffer::new();
        compose(&mut fb, Point::new(60, 28), 8, BorderStyle::Corners).unwrap();

        for (x0, y0) in [(0, 0), (W - 10, 0), (0, H - 10), (W - 10, H - 10)] {
            assert!(fb.at(x0, y0));
            assert!(fb.at(x0 + 9, y0 + 9));
            assert!(fb.at(x0 + 9, y0));
            assert!(!fb.at(x0 + 4, y0 + 4), "corner at ({}, {}) is filled", x0, y0);
        }
        assert!(!fb.at(10, 0));
        assert!(!fb.at(64, 0));
        // Four 10x10 outlines of 36 pixels each, plus the marker
        assert_eq!(fb.lit(), 64 + 4 * 36);
    }
}
