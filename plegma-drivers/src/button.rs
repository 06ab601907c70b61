//! Polled button input
//!
//! Thin helper over an input pin with a configurable active level. There
//! is no background scheduler in this stack, so waiting is plain blocking
//! polling on the caller's delay provider.

use embedded_hal::delay::DelayNs;
use plegma_hal::gpio::InputPin;

/// A momentary button on a GPIO input
pub struct Button<P> {
    pin: P,
    /// If true, pressed = pin LOW (pull-up wiring)
    active_low: bool,
}

impl<P: InputPin> Button<P> {
    /// Button that reads high when pressed (pull-down wiring)
    pub fn new_active_high(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    /// Button that reads low when pressed (pull-up wiring)
    pub fn new_active_low(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }

    /// Check whether the button is currently pressed
    pub fn is_pressed(&self) -> bool {
        self.pin.is_high() != self.active_low
    }

    /// Block until the button is pressed, polling every `poll_us`
    pub fn wait_pressed(&self, poll_us: u32, delay: &mut impl DelayNs) {
        while !self.is_pressed() {
            delay.delay_us(poll_us);
        }
    }

    /// Run `action` repeatedly until the button is pressed
    pub fn run_until_pressed<F: FnMut()>(&self, mut action: F) {
        while !self.is_pressed() {
            action();
        }
    }
}
