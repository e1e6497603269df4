// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;
use esp_hal::uart::{Config as UartConfig, Uart};

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_led_dimmer::LED_STATE;
use esp_led_dimmer::config::{IDLE_INTERVAL_SECS, UART_BAUD_RATE};
use esp_led_dimmer::hal::{bind_button, init_pwm};
use esp_led_dimmer::tasks::serial_console_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert PWM, Taster-Interrupt und UART, startet den Konsolen-Task.
/// Danach schläft main() - die Arbeit läuft im Task und im GPIO-Interrupt.
///
/// Fehler beim Hardware-Setup sind nicht behebbar: `expect()` führt in den
/// Panic-Handler von esp-backtrace, das Gerät bleibt stehen.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // PWM auf GPIO10 (config::LED_GPIO_PIN) und Starthelligkeit setzen
    let pwm =
        init_pwm(peripherals.LEDC, peripherals.GPIO10).expect("Failed to initialize LEDC PWM");
    LED_STATE.apply(&pwm);
    info!(
        "PWM ready, brightness {}% (duty {})",
        LED_STATE.brightness().percent(),
        LED_STATE.effective_duty()
    );

    // Taster auf GPIO9 (config::BUTTON_GPIO_PIN), Interrupt auf fallende Flanke
    bind_button(peripherals.IO_MUX, peripherals.GPIO9);
    info!("Button interrupt armed");

    // UART1: TX GPIO4, RX GPIO5 (config::UART_TX_GPIO_PIN / UART_RX_GPIO_PIN)
    let uart = Uart::new(
        peripherals.UART1,
        UartConfig::default().with_baudrate(UART_BAUD_RATE),
    )
    .expect("Failed to initialize UART1")
    .with_tx(peripherals.GPIO4)
    .with_rx(peripherals.GPIO5)
    .into_async();
    info!("UART ready ({} baud)", UART_BAUD_RATE);

    // Spawn Konsolen-Task (sendet Banner, dann Kommando-Schleife)
    spawner.spawn(serial_console_task(uart, pwm)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Task bzw. Interrupt)
    loop {
        Timer::after(Duration::from_secs(IDLE_INTERVAL_SECS)).await;
    }
}
