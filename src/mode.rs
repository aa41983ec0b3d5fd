//! # Mode Controller
//!
//! Shared mode flags toggled by the two push buttons and read by the control
//! loop once per cycle.
//!
//! Each field has exactly one writer:
//!
//! | Field          | Writer          |
//! |----------------|-----------------|
//! | `leds_enabled` | Button A        |
//! | `indicator_on` | Joystick button |
//! | `border_style` | Joystick button |
//!
//! Because no field is written from two contexts, toggles are a plain atomic
//! load followed by a store. No compare-and-swap is needed, and the loop can
//! never observe a torn value.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::debouncer::Debouncer;

/// Border decoration drawn over every frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum BorderStyle {
    #[default]
    None,
    Simple,
    Corners,
}

impl BorderStyle {
    /// Cyclic successor: None -> Simple -> Corners -> None
    pub const fn next(self) -> Self {
        match self {
            BorderStyle::None => BorderStyle::Simple,
            BorderStyle::Simple => BorderStyle::Corners,
            BorderStyle::Corners => BorderStyle::None,
        }
    }

    const fn to_bits(self) -> u8 {
        match self {
            BorderStyle::None => 0,
            BorderStyle::Simple => 1,
            BorderStyle::Corners => 2,
        }
    }

    const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => BorderStyle::Simple,
            2 => BorderStyle::Corners,
            _ => BorderStyle::None,
        }
    }
}

/// Mode as seen by one control loop cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct ModeSnapshot {
    pub leds_enabled: bool,
    pub indicator_on: bool,
    pub border_style: BorderStyle,
}

impl Default for ModeSnapshot {
    fn default() -> Self {
        Self {
            leds_enabled: true,
            indicator_on: false,
            border_style: BorderStyle::None,
        }
    }
}

/// Process-wide mode state, shared by reference between the loop and the
/// button handlers
pub struct ModeState {
    leds_enabled: AtomicBool,
    indicator_on: AtomicBool,
    border_style: AtomicU8,
}

impl ModeState {
    pub const fn new() -> Self {
        Self {
            leds_enabled: AtomicBool::new(true),
            indicator_on: AtomicBool::new(false),
            border_style: AtomicU8::new(BorderStyle::None.to_bits()),
        }
    }

    pub fn snapshot(&self) -> ModeSnapshot {
        ModeSnapshot {
            leds_enabled: self.leds_enabled.load(Ordering::Acquire),
            indicator_on: self.indicator_on.load(Ordering::Acquire),
            border_style: BorderStyle::from_bits(self.border_style.load(Ordering::Acquire)),
        }
    }

    /// Invert `leds_enabled`. Only button A may call this.
    fn toggle_leds(&self) {
        let enabled = !self.leds_enabled.load(Ordering::Relaxed);
        self.leds_enabled.store(enabled, Ordering::Release);
    }

    /// Invert `indicator_on` and advance the border. Only the joystick button
    /// may call this.
    fn toggle_indicator_and_border(&self) {
        let on = !self.indicator_on.load(Ordering::Relaxed);
        self.indicator_on.store(on, Ordering::Release);

        let style = BorderStyle::from_bits(self.border_style.load(Ordering::Relaxed)).next();
        self.border_style.store(style.to_bits(), Ordering::Release);
    }
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new()
    }
}

/// The two mode buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Button {
    /// Enables/disables the axis LEDs
    A,
    /// Toggles the indicator LED and cycles the border style
    Joystick,
}

/// Per-button edge handler: debounce, then apply the button's toggle
pub struct ButtonController {
    button: Button,
    debouncer: Debouncer,
}

impl ButtonController {
    pub fn new(button: Button) -> Self {
        Self::with_debouncer(button, Debouncer::default())
    }

    pub const fn with_debouncer(button: Button, debouncer: Debouncer) -> Self {
        Self { button, debouncer }
    }

    pub const fn button(&self) -> Button {
        self.button
    }

    /// Handle a falling edge seen at `now_us`.
    ///
    /// Returns the mode after the toggle, or `None` if the edge was a bounce.
    pub fn on_falling_edge(&mut self, now_us: u64, mode: &ModeState) -> Option<ModeSnapshot> {
        if !self.debouncer.accept(now_us) {
            return None;
        }

        match self.button {
            Button::A => mode.toggle_leds(),
            Button::Joystick => mode.toggle_indicator_and_border(),
        }
        Some(mode.snapshot())
    }
}
