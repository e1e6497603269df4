//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

/// Trait für den PWM-Ausgang der LED
///
/// Abstrahiert das Schreiben des Duty-Cycle-Registers (Compare-Wert).
/// Wird sowohl aus dem Hauptkontext als auch aus dem Button-Interrupt
/// aufgerufen, deshalb `&self` statt `&mut self`.
///
/// # Implementierungen
/// - **Production:** LedcPwm (ESP32 LEDC Peripheral)
/// - **Testing:** MockDutyOutput (in-memory Mock)
///
/// # Wertebereich
/// `duty` liegt immer in 0..=990 (Helligkeit * 10), die Implementierung
/// muss nicht begrenzen und kann nicht fehlschlagen.
pub trait DutyOutput {
    /// Schreibt den Roh-Duty-Wert in das Compare-Register
    fn set_duty(&self, duty: u16);
}

