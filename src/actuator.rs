//! # Actuator Mapper
//!
//! Turns one joystick sample plus the current mode into LED levels and a marker
//! position. Two independent policies:
//!
//! - LED intensity is computed from the *raw* deviation around the midpoint,
//!   with a dead zone and a clamp at `level_max`.
//! - The marker position is computed from the *normalized* position and clamped
//!   to the drawable surface.
//!
//! ## Axis LED mutual exclusion
//!
//! The X LED (red) and Y LED (blue) never light together. Axes are evaluated X
//! then Y and lighting an axis LED forces the other one off, so when both axes
//! leave the dead zone the Y LED wins and the X LED stays dark for that cycle.

use embedded_graphics::prelude::{Point, Size};

use crate::constants::{adc, display, joystick, pwm};
use crate::joystick::{AxisPosition, AxisSample};
use crate::mode::ModeSnapshot;

/// Mapping parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapperConfig {
    pub midpoint: u16,     // Raw reading at rest
    pub neutral_zone: u16, // Deviation at or below this keeps the LED dark
    pub level_max: u16,    // Full LED brightness
    pub marker_size: u32,  // Marker side length in pixels
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            midpoint: adc::MIDPOINT,
            neutral_zone: joystick::NEUTRAL_ZONE,
            level_max: pwm::LEVEL_MAX,
            marker_size: display::MARKER_SIZE,
        }
    }
}

/// Brightness of the three status LEDs, each in `0..=level_max`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct LedLevels {
    pub x_axis: u16,    // red
    pub y_axis: u16,    // blue
    pub indicator: u16, // green
}

impl LedLevels {
    pub const OFF: Self = Self {
        x_axis: 0,
        y_axis: 0,
        indicator: 0,
    };
}

/// Everything the loop drives in one cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActuatorState {
    pub leds: LedLevels,
    /// Top-left corner of the marker square
    pub marker: Point,
}

impl MapperConfig {
    /// LED level for one raw axis reading
    pub fn axis_intensity(&self, raw: u16) -> u16 {
        let deviation = (raw as i32 - self.midpoint as i32).unsigned_abs();
        if deviation <= self.neutral_zone as u32 {
            return 0;
        }

        let span = self.midpoint.saturating_sub(self.neutral_zone).max(1) as u32;
        let level = deviation * self.level_max as u32 / span;
        level.min(self.level_max as u32) as u16
    }

    /// LED levels for a sample under the given mode
    pub fn led_levels(&self, sample: AxisSample, mode: &ModeSnapshot) -> LedLevels {
        let mut levels = LedLevels {
            indicator: if mode.indicator_on { self.level_max } else { 0 },
            ..LedLevels::OFF
        };

        if !mode.leds_enabled {
            return levels;
        }

        let x_level = self.axis_intensity(sample.x);
        if x_level > 0 {
            levels.x_axis = x_level;
            levels.y_axis = 0;
        }

        let y_level = self.axis_intensity(sample.y);
        if y_level > 0 {
            levels.y_axis = y_level;
            levels.x_axis = 0;
        }

        levels
    }

    /// Top-left marker pixel for a position on a surface of the given size
    ///
    /// The clamp is the only guard against positions outside the unit square.
    pub fn marker_position(&self, position: AxisPosition, surface: Size) -> Point {
        let travel_x = surface.width.saturating_sub(self.marker_size);
        let travel_y = surface.height.saturating_sub(self.marker_size);

        let px = ((position.x + 1.0) * travel_x as f32 / 2.0) as i32;
        let py = ((position.y + 1.0) * travel_y as f32 / 2.0) as i32;

        Point::new(px.clamp(0, travel_x as i32), py.clamp(0, travel_y as i32))
    }

    /// Full mapping for one cycle
    pub fn map(&self, sample: AxisSample, mode: &ModeSnapshot, surface: Size) -> ActuatorState {
        ActuatorState {
            leds: self.led_levels(sample, mode),
            marker: self.marker_position(sample.normalize(), surface),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::BorderStyle;

    const SURFACE: Size = Size::new(display::WIDTH, display::HEIGHT);

    fn mode(leds_enabled: bool, indicator_on: bool) -> ModeSnapshot {
        ModeSnapshot {
            leds_enabled,
            indicator_on,
            border_style: BorderStyle::None,
        }
    }

    #[test]
    fn dead_zone_is_dark() {
        let cfg = MapperConfig::default();
        for raw in (adc::MIDPOINT - joystick::NEUTRAL_ZONE)..=(adc::MIDPOINT + joystick::NEUTRAL_ZONE) {
            assert_eq!(cfg.axis_intensity(raw), 0, "raw {}", raw);
        }
        assert!(cfg.axis_intensity(adc::MIDPOINT + joystick::NEUTRAL_ZONE + 1) > 0);
        assert!(cfg.axis_intensity(adc::MIDPOINT - joystick::NEUTRAL_ZONE - 1) > 0);
    }

    #[test]
    fn intensity_is_monotonic_and_saturates() {
        let cfg = MapperConfig::default();
        let mut previous = 0;
        for deviation in (joystick::NEUTRAL_ZONE + 1)..=adc::MIDPOINT {
            let level = cfg.axis_intensity(adc::MIDPOINT - deviation);
            assert!(level >= previous, "deviation {}", deviation);
            assert!(level <= pwm::LEVEL_MAX);
            previous = level;
        }
        assert_eq!(cfg.axis_intensity(0), pwm::LEVEL_MAX);
    }

    #[test]
    fn intensity_uses_integer_ratio() {
        let cfg = MapperConfig::default();
        // 201 * 255 / 1848
        assert_eq!(cfg.axis_intensity(adc::MIDPOINT + 201), 27);
        // 1000 * 255 / 1848
        assert_eq!(cfg.axis_intensity(adc::MIDPOINT - 1000), 137);
    }

    #[test]
    fn full_right_lights_x_only() {
        let cfg = MapperConfig::default();
        let leds = cfg.led_levels(AxisSample::new(4095, 2048), &mode(true, false));
        assert_eq!(leds, LedLevels { x_axis: 255, y_axis: 0, indicator: 0 });
    }

    #[test]
    fn y_wins_when_both_axes_deflect() {
        let cfg = MapperConfig::default();
        let leds = cfg.led_levels(AxisSample::new(4095, 0), &mode(true, false));
        assert_eq!(leds.x_axis, 0);
        assert_eq!(leds.y_axis, 255);
    }

    #[test]
    fn disabled_leds_stay_dark_but_indicator_follows_mode() {
        let cfg = MapperConfig::default();
        for sample in [AxisSample::new(0, 0), AxisSample::new(4095, 2048), AxisSample::new(2048, 4095)] {
            let off = cfg.led_levels(sample, &mode(false, false));
            assert_eq!(off, LedLevels::OFF);

            let indicator = cfg.led_levels(sample, &mode(false, true));
            assert_eq!(indicator.x_axis, 0);
            assert_eq!(indicator.y_axis, 0);
            assert_eq!(indicator.indicator, pwm::LEVEL_MAX);
        }
    }

    #[test]
    fn center_sample_centers_marker() {
        let cfg = MapperConfig::default();
        let state = cfg.map(AxisSample::centered(), &mode(true, false), SURFACE);
        assert_eq!(state.marker, Point::new(60, 28));
        assert_eq!(state.leds, LedLevels::OFF);

        // Marker center coincides with the surface center
        let half = cfg.marker_size as i32 / 2;
        assert_eq!(state.marker + Point::new(half, half), Point::new(64, 32));
    }

    #[test]
    fn marker_stays_on_surface_for_unit_square() {
        let cfg = MapperConfig::default();
        let max_x = (display::WIDTH - display::MARKER_SIZE) as i32;
        let max_y = (display::HEIGHT - display::MARKER_SIZE) as i32;
        for i in 0..=40 {
            for j in 0..=40 {
                let position = AxisPosition {
                    x: -1.0 + i as f32 / 20.0,
                    y: -1.0 + j as f32 / 20.0,
                };
                let p = cfg.marker_position(position, SURFACE);
                assert!((0..=max_x).contains(&p.x), "{:?}", p);
                assert!((0..=max_y).contains(&p.y), "{:?}", p);
            }
        }
    }

    #[test]
    fn marker_clamps_overshoot() {
        let cfg = MapperConfig::default();
        let far = cfg.marker_position(AxisPosition { x: 1.3, y: -1.4 }, SURFACE);
        assert_eq!(far, Point::new(120, 0));

        let corner = cfg.marker_position(AxisPosition { x: -1.0, y: 1.0 }, SURFACE);
        assert_eq!(corner, Point::new(0, 56));
    }
}
