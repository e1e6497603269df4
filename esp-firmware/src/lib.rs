// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{
    BANNER, Brightness, CommandError, Console, DutyOutput, LINE_ENDING, LedState, PowerState,
    Response, on_button_press,
};

use crate::config::INITIAL_BRIGHTNESS;

// ============================================================================
// Geteilter Zustand
// ============================================================================

/// Helligkeit + Ein/Aus der LED
///
/// Einziger Zustand, den Konsolen-Task und Button-Interrupt teilen.
/// Lock-frei (ein `AtomicU8`), daher direkt als `static` nutzbar.
pub static LED_STATE: LedState = LedState::new(Brightness::saturating(INITIAL_BRIGHTNESS));
