//! Core Types für die Helligkeitssteuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::fmt::{self, Write};

use heapless::String;

/// Zeilenende für alle Ausgaben auf der seriellen Konsole
pub const LINE_ENDING: &str = "\r\n";

/// Puffergröße für eine formatierte Antwortzeile (inkl. Zeilenende)
///
/// Längste Antwort: "Error: Command too long\r\n" (25 Bytes)
pub const RESPONSE_CAPACITY: usize = 32;

/// Helligkeit in Prozent
///
/// Gültiger Bereich ist 0..=99. Ein `Brightness`-Wert außerhalb davon
/// kann nicht konstruiert werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u8);

impl Brightness {
    /// Größter erlaubter Prozentwert
    pub const MAX: u8 = 99;

    /// Helligkeit nach dem Einschalten des Geräts
    pub const DEFAULT: Self = Self(50);

    /// Erstellt eine Helligkeit, `None` wenn `percent > 99`
    pub const fn new(percent: u8) -> Option<Self> {
        if percent <= Self::MAX {
            Some(Self(percent))
        } else {
            None
        }
    }

    /// Wie `new()`, begrenzt aber auf 99 statt zu scheitern
    ///
    /// Für Konstanten und `static`-Initialisierer gedacht.
    pub const fn saturating(percent: u8) -> Self {
        if percent <= Self::MAX {
            Self(percent)
        } else {
            Self(Self::MAX)
        }
    }

    pub const fn percent(self) -> u8 {
        self.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Fehler beim Konvertieren eines Zahlenwerts in `Brightness`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BrightnessOutOfRange;

impl TryFrom<i32> for Brightness {
    type Error = BrightnessOutOfRange;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(BrightnessOutOfRange)
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ein/Aus-Zustand der LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    #[default]
    On,
    Off,
}

impl PowerState {
    pub const fn is_on(self) -> bool {
        matches!(self, PowerState::On)
    }

    /// Liefert den jeweils anderen Zustand
    pub const fn toggled(self) -> Self {
        match self {
            PowerState::On => PowerState::Off,
            PowerState::Off => PowerState::On,
        }
    }
}

/// Fehlerklassen der Kommandozeile
///
/// Alle Fehler sind lokal und behebbar: eine Antwortzeile, kein
/// Zustandswechsel, danach wird wieder Eingabe angenommen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Falscher Buchstabe, fehlendes `=` oder Zeile zu kurz
    InvalidCommand,
    /// Zahl nicht lesbar oder außerhalb 0..=99
    InvalidValue,
    /// Mehr als 99 Zeichen ohne Zeilenende
    CommandTooLong,
}

impl CommandError {
    pub const fn message(self) -> &'static str {
        match self {
            CommandError::InvalidCommand => "Invalid command",
            CommandError::InvalidValue => "Invalid value",
            CommandError::CommandTooLong => "Command too long",
        }
    }
}

/// Antwortzeile an den Bediener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// `L=<n>` wurde übernommen
    BrightnessSet(Brightness),
    /// Zeile wurde abgelehnt
    Error(CommandError),
}

impl Response {
    /// Formatiert die Antwort inkl. `\r\n` für den UART
    pub fn to_line(&self) -> String<RESPONSE_CAPACITY> {
        let mut line = String::new();
        // Kapazität reicht für jede Variante, siehe RESPONSE_CAPACITY
        let _ = write!(line, "{}{}", self, LINE_ENDING);
        line
    }
}

impl From<CommandError> for Response {
    fn from(error: CommandError) -> Self {
        Response::Error(error)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::BrightnessSet(level) => write!(f, "Brightness set to {}", level),
            Response::Error(error) => write!(f, "Error: {}", error.message()),
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Response {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Response::BrightnessSet(level) => {
                defmt::write!(fmt, "BrightnessSet {{ percent: {} }}", level.percent())
            }
            Response::Error(error) => {
                defmt::write!(fmt, "Error {{ {} }}", error.message())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_range() {
        assert_eq!(Brightness::new(0).map(Brightness::percent), Some(0));
        assert_eq!(Brightness::new(99).map(Brightness::percent), Some(99));
        assert_eq!(Brightness::new(100), None);
    }

    #[test]
    fn test_brightness_saturating() {
        assert_eq!(Brightness::saturating(42).percent(), 42);
        assert_eq!(Brightness::saturating(250).percent(), 99);
    }

    #[test]
    fn test_brightness_try_from_i32() {
        assert_eq!(Brightness::try_from(7).map(Brightness::percent), Ok(7));
        assert_eq!(Brightness::try_from(-1), Err(BrightnessOutOfRange));
        assert_eq!(Brightness::try_from(100), Err(BrightnessOutOfRange));
        assert_eq!(Brightness::try_from(256 + 5), Err(BrightnessOutOfRange));
    }

    #[test]
    fn test_power_state_toggled() {
        assert_eq!(PowerState::default(), PowerState::On);
        assert_eq!(PowerState::On.toggled(), PowerState::Off);
        assert_eq!(PowerState::Off.toggled(), PowerState::On);
    }

    #[test]
    fn test_response_lines() {
        let level = Brightness::saturating(73);
        assert_eq!(
            Response::BrightnessSet(level).to_line().as_str(),
            "Brightness set to 73\r\n"
        );
        assert_eq!(
            Response::from(CommandError::InvalidValue).to_line().as_str(),
            "Error: Invalid value\r\n"
        );
        assert_eq!(
            Response::from(CommandError::InvalidCommand).to_line().as_str(),
            "Error: Invalid command\r\n"
        );
        assert_eq!(
            Response::from(CommandError::CommandTooLong).to_line().as_str(),
            "Error: Command too long\r\n"
        );
    }
}
