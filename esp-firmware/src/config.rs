// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// LED / PWM Konfiguration
// ============================================================================

/// GPIO-Pin für die LED (LEDC PWM-Ausgang, externe LED mit Vorwiderstand)
pub const LED_GPIO_PIN: u8 = 10;

/// Helligkeit nach dem Einschalten in Prozent (0-99)
pub const INITIAL_BRIGHTNESS: u8 = 50;

/// PWM-Frequenz in kHz
/// 1 kHz ist flackerfrei fürs Auge
pub const PWM_FREQUENCY_KHZ: u32 = 1;

// PWM-Auflösung: 10 Bit (0..1023), Duty-Werte liegen in 0..=990
// Siehe hal::pwm::init_pwm()

// ============================================================================
// Button Konfiguration
// ============================================================================

/// GPIO-Pin für den Taster (BOOT-Taste auf dem DevKit, active low)
/// Interrupt auf fallende Flanke, interner Pull-Up
pub const BUTTON_GPIO_PIN: u8 = 9;

// ============================================================================
// UART Konfiguration
// ============================================================================

/// Baudrate der Kommando-Konsole (8N1, keine Flusskontrolle)
pub const UART_BAUD_RATE: u32 = 9600;

/// UART1 TX-Pin (zum RX des USB-Seriell-Adapters)
/// UART0 / USB-JTAG bleibt für defmt-Logs reserviert
pub const UART_TX_GPIO_PIN: u8 = 4;

/// UART1 RX-Pin (vom TX des USB-Seriell-Adapters)
pub const UART_RX_GPIO_PIN: u8 = 5;

// ============================================================================
// Main-Loop
// ============================================================================

/// Schlafintervall der main()-Schleife in Sekunden
/// main() hat nach dem Setup nichts mehr zu tun
pub const IDLE_INTERVAL_SECS: u64 = 3600;
