//! Geteilter LED-Zustand (Helligkeit + Ein/Aus)
//!
//! Wird vom Konsolen-Task und vom Button-Interrupt gleichzeitig benutzt.
//! Beide Werte liegen gepackt in einem `AtomicU8`:
//!
//! ```text
//! Bit 7    : 1 = aus, 0 = an
//! Bit 0..6 : Helligkeit in Prozent (0..=99)
//! ```
//!
//! Jede Änderung ist damit genau ein atomarer Schreibzugriff, und jeder
//! Lesezugriff liefert einen konsistenten Snapshot beider Werte.
//! Alle Änderungen laufen über `set_brightness()` / `toggle_power()`.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::logic::effective_duty;
use crate::traits::DutyOutput;
use crate::types::{Brightness, PowerState};

const OFF_FLAG: u8 = 0x80;
const LEVEL_MASK: u8 = 0x7F;

pub struct LedState {
    packed: AtomicU8,
}

impl LedState {
    /// Neuer Zustand: eingeschaltet mit der angegebenen Helligkeit
    pub const fn new(brightness: Brightness) -> Self {
        Self {
            packed: AtomicU8::new(brightness.percent()),
        }
    }

    /// Liest Ein/Aus und Helligkeit in einem Zugriff
    pub fn snapshot(&self) -> (PowerState, Brightness) {
        decode(self.packed.load(Ordering::Acquire))
    }

    pub fn brightness(&self) -> Brightness {
        self.snapshot().1
    }

    pub fn power(&self) -> PowerState {
        self.snapshot().0
    }

    /// Aktueller Duty-Wert, abgeleitet aus einem Snapshot
    pub fn effective_duty(&self) -> u16 {
        let (power, brightness) = self.snapshot();
        effective_duty(power, brightness)
    }

    /// Setzt eine neue Helligkeit
    ///
    /// Der Ein/Aus-Zustand bleibt erhalten. Ist die LED aus, wird die
    /// Hardware nicht angefasst, der Wert gilt dann beim nächsten Einschalten.
    pub fn set_brightness<O: DutyOutput>(&self, brightness: Brightness, out: &O) {
        let level = brightness.percent() & LEVEL_MASK;
        let (Ok(previous) | Err(previous)) =
            self.packed
                .fetch_update(Ordering::AcqRel, Ordering::Acquire, |packed| {
                    Some((packed & OFF_FLAG) | level)
                });

        if previous & OFF_FLAG == 0 {
            self.apply(out);
        }
    }

    /// Schaltet die LED um und schreibt den neuen Duty-Wert sofort
    ///
    /// Gibt den neuen Zustand zurück.
    pub fn toggle_power<O: DutyOutput>(&self, out: &O) -> PowerState {
        let previous = self.packed.fetch_xor(OFF_FLAG, Ordering::AcqRel);
        self.apply(out);
        decode(previous ^ OFF_FLAG).0
    }

    /// Schreibt den aktuellen Duty-Wert auf die Hardware
    ///
    /// Genau ein Snapshot, genau ein Register-Write. Darf aus dem
    /// Interrupt heraus laufen, während der Hauptkontext mitten im Parsen ist.
    pub fn apply<O: DutyOutput>(&self, out: &O) {
        out.set_duty(self.effective_duty());
    }
}

impl Default for LedState {
    fn default() -> Self {
        Self::new(Brightness::DEFAULT)
    }
}

/// Einstiegspunkt für den Button-Interrupt (fallende Flanke)
///
/// Kein Blockieren, kein Zugriff auf Konsolen-Puffer: nur Umschalten
/// und ein Register-Write.
pub fn on_button_press<O: DutyOutput>(state: &LedState, out: &O) -> PowerState {
    state.toggle_power(out)
}

fn decode(packed: u8) -> (PowerState, Brightness) {
    let power = if packed & OFF_FLAG == 0 {
        PowerState::On
    } else {
        PowerState::Off
    };
    (power, Brightness::saturating(packed & LEVEL_MASK))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct RecordingOutput {
        last: Cell<Option<u16>>,
        writes: Cell<usize>,
    }

    impl RecordingOutput {
        fn new() -> Self {
            Self {
                last: Cell::new(None),
                writes: Cell::new(0),
            }
        }
    }

    impl DutyOutput for RecordingOutput {
        fn set_duty(&self, duty: u16) {
            self.last.set(Some(duty));
            self.writes.set(self.writes.get() + 1);
        }
    }

    #[test]
    fn test_initial_state_is_on() {
        let state = LedState::default();
        assert_eq!(state.snapshot(), (PowerState::On, Brightness::DEFAULT));
        assert_eq!(state.effective_duty(), 500);
    }

    #[test]
    fn test_set_brightness_while_on_writes_duty() {
        let state = LedState::default();
        let out = RecordingOutput::new();

        state.set_brightness(Brightness::saturating(30), &out);

        assert_eq!(out.last.get(), Some(300));
        assert_eq!(out.writes.get(), 1);
    }

    #[test]
    fn test_set_brightness_while_off_keeps_hardware_untouched() {
        let state = LedState::default();
        let out = RecordingOutput::new();
        state.toggle_power(&out);
        assert_eq!(out.writes.get(), 1);

        state.set_brightness(Brightness::saturating(80), &out);

        assert_eq!(out.writes.get(), 1);
        assert_eq!(out.last.get(), Some(0));
        assert_eq!(state.snapshot(), (PowerState::Off, Brightness::saturating(80)));
    }

    #[test]
    fn test_toggle_restores_brightness() {
        let state = LedState::new(Brightness::saturating(64));
        let out = RecordingOutput::new();

        assert_eq!(state.toggle_power(&out), PowerState::Off);
        assert_eq!(out.last.get(), Some(0));

        assert_eq!(state.toggle_power(&out), PowerState::On);
        assert_eq!(out.last.get(), Some(640));
    }

    #[test]
    fn test_brightness_zero_and_max_packing() {
        let state = LedState::new(Brightness::saturating(0));
        let out = RecordingOutput::new();

        state.toggle_power(&out);
        assert_eq!(state.snapshot(), (PowerState::Off, Brightness::saturating(0)));

        state.set_brightness(Brightness::saturating(99), &out);
        state.toggle_power(&out);
        assert_eq!(state.snapshot(), (PowerState::On, Brightness::saturating(99)));
        assert_eq!(out.last.get(), Some(990));
    }

    #[test]
    fn test_on_button_press_toggles() {
        let state = LedState::default();
        let out = RecordingOutput::new();

        assert_eq!(on_button_press(&state, &out), PowerState::Off);
        assert_eq!(state.power(), PowerState::Off);
    }
}
