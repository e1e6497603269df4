//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::types::{Brightness, CommandError, PowerState};

/// Faktor zwischen Prozent und Roh-Duty (99 % → 990)
pub const DUTY_SCALE: u16 = 10;

/// Kürzeste gültige Kommandozeile: Buchstabe, `=`, eine Ziffer
const MIN_COMMAND_LEN: usize = 3;

/// Berechnet den Duty-Wert, der ins PWM-Register geschrieben wird
///
/// # Beispiele
///
/// ```
/// # use esp_core::{Brightness, PowerState, effective_duty};
/// let level = Brightness::saturating(42);
/// assert_eq!(effective_duty(PowerState::On, level), 420);
/// assert_eq!(effective_duty(PowerState::Off, level), 0);
/// ```
pub fn effective_duty(power: PowerState, brightness: Brightness) -> u16 {
    match power {
        PowerState::On => u16::from(brightness.percent()) * DUTY_SCALE,
        PowerState::Off => 0,
    }
}

/// Parst eine Kommandozeile der Form `L=<zahl>` (ohne Zeilenende)
///
/// Der Buchstabe ist case-insensitive, `=` muss direkt folgen.
/// Die Zahl wird wie mit `%d` gelesen und erst danach auf 0..=99 geprüft,
/// `L=-1` ist also ein `InvalidValue` und kein `InvalidCommand`.
pub fn parse_command(line: &[u8]) -> Result<Brightness, CommandError> {
    if line.len() < MIN_COMMAND_LEN {
        return Err(CommandError::InvalidCommand);
    }

    let [letter, b'=', value @ ..] = line else {
        return Err(CommandError::InvalidCommand);
    };
    if !letter.eq_ignore_ascii_case(&b'l') {
        return Err(CommandError::InvalidCommand);
    }

    let number = parse_decimal(value).ok_or(CommandError::InvalidValue)?;
    Brightness::try_from(number).map_err(|_| CommandError::InvalidValue)
}

/// Liest eine Dezimalzahl vom Anfang von `input`
///
/// Verhalten wie `%d`:
/// - führender Whitespace wird übersprungen
/// - optionales `+` oder `-`
/// - mindestens eine Ziffer, sonst `None`
/// - alles nach der letzten Ziffer wird ignoriert
///
/// Zu große Beträge sättigen bei `i32::MAX` bzw. `i32::MIN`.
pub fn parse_decimal(input: &[u8]) -> Option<i32> {
    let mut rest = input;
    while let [first, tail @ ..] = rest {
        if !is_c_space(*first) {
            break;
        }
        rest = tail;
    }

    let negative = match rest {
        [b'-', tail @ ..] => {
            rest = tail;
            true
        }
        [b'+', tail @ ..] => {
            rest = tail;
            false
        }
        _ => false,
    };

    let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    let value = rest[..digits].iter().fold(0i32, |acc, digit| {
        let digit = i32::from(digit - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    });
    Some(value)
}

/// Whitespace im Sinne von C `isspace()`
fn is_c_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(percent: u8) -> Brightness {
        Brightness::saturating(percent)
    }

    #[test]
    fn test_effective_duty_scales_by_ten() {
        assert_eq!(effective_duty(PowerState::On, level(0)), 0);
        assert_eq!(effective_duty(PowerState::On, level(1)), 10);
        assert_eq!(effective_duty(PowerState::On, level(99)), 990);
    }

    #[test]
    fn test_effective_duty_off_is_zero() {
        assert_eq!(effective_duty(PowerState::Off, level(99)), 0);
    }

    #[test]
    fn test_parse_command_upper_and_lower_case() {
        assert_eq!(parse_command(b"L=50"), Ok(level(50)));
        assert_eq!(parse_command(b"l=7"), Ok(level(7)));
    }

    #[test]
    fn test_parse_command_bounds() {
        assert_eq!(parse_command(b"L=0"), Ok(level(0)));
        assert_eq!(parse_command(b"L=99"), Ok(level(99)));
        assert_eq!(parse_command(b"L=100"), Err(CommandError::InvalidValue));
        assert_eq!(parse_command(b"L=-1"), Err(CommandError::InvalidValue));
    }

    #[test]
    fn test_parse_command_wrong_letter() {
        assert_eq!(parse_command(b"X=5"), Err(CommandError::InvalidCommand));
    }

    #[test]
    fn test_parse_command_missing_equals() {
        assert_eq!(parse_command(b"L5"), Err(CommandError::InvalidCommand));
        assert_eq!(parse_command(b"L 5"), Err(CommandError::InvalidCommand));
    }

    #[test]
    fn test_parse_command_too_short() {
        assert_eq!(parse_command(b"L"), Err(CommandError::InvalidCommand));
        assert_eq!(parse_command(b"L="), Err(CommandError::InvalidCommand));
    }

    #[test]
    fn test_parse_command_unparsable_value() {
        assert_eq!(parse_command(b"L=abc"), Err(CommandError::InvalidValue));
        assert_eq!(parse_command(b"L=-"), Err(CommandError::InvalidValue));
        assert_eq!(parse_command(b"L=   "), Err(CommandError::InvalidValue));
    }

    #[test]
    fn test_parse_command_trailing_garbage_accepted() {
        assert_eq!(parse_command(b"L=5x"), Ok(level(5)));
        assert_eq!(parse_command(b"L=12 34"), Ok(level(12)));
    }

    #[test]
    fn test_parse_decimal_whitespace_and_sign() {
        assert_eq!(parse_decimal(b"  42"), Some(42));
        assert_eq!(parse_decimal(b"\t+8"), Some(8));
        assert_eq!(parse_decimal(b"-15"), Some(-15));
        assert_eq!(parse_decimal(b"007"), Some(7));
    }

    #[test]
    fn test_parse_decimal_no_digits() {
        assert_eq!(parse_decimal(b""), None);
        assert_eq!(parse_decimal(b"+"), None);
        assert_eq!(parse_decimal(b"- 5"), None);
    }

    #[test]
    fn test_parse_decimal_saturates() {
        assert_eq!(parse_decimal(b"99999999999"), Some(i32::MAX));
        assert_eq!(parse_decimal(b"-99999999999"), Some(i32::MIN));
        assert_eq!(parse_command(b"L=4294967346"), Err(CommandError::InvalidValue));
    }
}
