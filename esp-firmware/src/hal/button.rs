// Taster mit GPIO-Interrupt (fallende Flanke)
//
// Der Interrupt-Handler schaltet die LED direkt um. Er läuft im
// Interrupt-Kontext und darf den Konsolen-Task an jeder Stelle unterbrechen.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};
use esp_hal::gpio::{Event, Input, InputConfig, InputPin, Io, Pull};
use esp_hal::{handler, peripherals, ram};

use crate::LED_STATE;
use crate::hal::pwm::LedcPwm;
use esp_core::on_button_press;

/// Eingangs-Pin des Tasters (für Interrupt-Flag)
static BUTTON: Mutex<CriticalSectionRawMutex, RefCell<Option<Input<'static>>>> =
    Mutex::new(RefCell::new(None));

/// Registriert den Interrupt-Handler und aktiviert den Taster
///
/// Interner Pull-Up, Taster zieht nach GND (active low).
///
/// # Parameter
/// - `mux`: IO_MUX Peripheral (Interrupt-Handler gilt für alle GPIOs)
/// - `pin`: GPIO des Tasters
pub fn bind_button(mux: peripherals::IO_MUX<'static>, pin: impl InputPin + 'static) {
    let mut io = Io::new(mux);
    io.set_interrupt_handler(handle_button_interrupt);

    let config = InputConfig::default().with_pull(Pull::Up);
    let mut button = Input::new(pin, config);
    button.listen(Event::FallingEdge);

    BUTTON.lock(|cell| {
        *cell.borrow_mut() = Some(button);
    });
}

/// GPIO-Interrupt: eine fallende Flanke = ein Umschalten
///
/// Kein Logging, kein Blockieren: Flag löschen, toggeln, ein Register-Write.
#[handler]
#[ram]
fn handle_button_interrupt() {
    let is_button_interrupt = BUTTON.lock(|cell| {
        let mut cell = cell.borrow_mut();
        match cell.as_mut() {
            Some(button) => {
                let is_set = button.is_interrupt_set();
                button.clear_interrupt();
                is_set
            }
            None => false,
        }
    });

    if is_button_interrupt {
        on_button_press(&LED_STATE, &LedcPwm::new());
    }
}
