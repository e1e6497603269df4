// LEDC PWM-Ausgang für die LED
//
// Der LEDC-Kanal liegt in einem statischen Critical-Section-Mutex, damit
// Konsolen-Task und Button-Interrupt denselben Duty-Wert schreiben können.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};
use esp_hal::gpio::DriveMode;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::ledc::channel::{self, ChannelHW, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::time::Rate;
use static_cell::StaticCell;

use crate::DutyOutput;
use crate::config::PWM_FREQUENCY_KHZ;

/// Fehler beim Einrichten des LEDC-Peripherals
#[derive(Debug)]
pub enum PwmError {
    Timer(timer::Error),
    Channel(channel::Error),
}

struct PwmChannel(channel::Channel<'static, LowSpeed>);

// SAFETY: ESP32-C6 ist Single-Core und der Kanal wird nur innerhalb
// von PWM_CHANNEL.lock() (Interrupts gesperrt) angefasst.
unsafe impl Send for PwmChannel {}

static PWM_CHANNEL: Mutex<CriticalSectionRawMutex, RefCell<Option<PwmChannel>>> =
    Mutex::new(RefCell::new(None));

/// Handle auf den LEDC-Kanal der LED
///
/// Kostet nichts beim Kopieren, alle Instanzen schreiben in denselben Kanal.
/// Vor `init_pwm()` ist `set_duty()` wirkungslos.
#[derive(Clone, Copy)]
pub struct LedcPwm(());

impl LedcPwm {
    pub(crate) const fn new() -> Self {
        Self(())
    }
}

impl DutyOutput for LedcPwm {
    fn set_duty(&self, duty: u16) {
        PWM_CHANNEL.lock(|cell| {
            if let Some(PwmChannel(channel)) = cell.borrow().as_ref() {
                channel.set_duty_hw(u32::from(duty));
            }
        });
    }
}

/// Richtet LEDC Timer0 + Channel0 auf dem LED-Pin ein
///
/// 10 Bit Auflösung (0..1023) bei `PWM_FREQUENCY_KHZ`, Start mit Duty 0.
///
/// # Parameter
/// - `ledc_peripheral`: LEDC Peripheral
/// - `led_pin`: GPIO für die LED
pub fn init_pwm(
    ledc_peripheral: esp_hal::peripherals::LEDC<'static>,
    led_pin: impl PeripheralOutput<'static>,
) -> Result<LedcPwm, PwmError> {
    // Ledc und Timer müssen so lange leben wie der Kanal
    static LEDC: StaticCell<Ledc<'static>> = StaticCell::new();
    static TIMER: StaticCell<timer::Timer<'static, LowSpeed>> = StaticCell::new();

    let ledc = LEDC.init(Ledc::new(ledc_peripheral));
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

    let timer = TIMER.init(ledc.timer::<LowSpeed>(timer::Number::Timer0));
    timer
        .configure(timer::config::Config {
            duty: timer::config::Duty::Duty10Bit,
            clock_source: timer::LSClockSource::APBClk,
            frequency: Rate::from_khz(PWM_FREQUENCY_KHZ),
        })
        .map_err(PwmError::Timer)?;
    let timer: &'static timer::Timer<'static, LowSpeed> = timer;

    let mut led_channel = ledc.channel(channel::Number::Channel0, led_pin);
    led_channel
        .configure(channel::config::Config {
            timer,
            duty_pct: 0,
            drive_mode: DriveMode::PushPull,
        })
        .map_err(PwmError::Channel)?;

    PWM_CHANNEL.lock(|cell| {
        *cell.borrow_mut() = Some(PwmChannel(led_channel));
    });

    Ok(LedcPwm::new())
}
