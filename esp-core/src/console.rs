//! Serielle Kommandokonsole
//!
//! `LineReader` sammelt Bytes zu Zeilen, `Console` wertet fertige Zeilen
//! als `L=<n>` Kommando aus und liefert die Antwortzeile.
//! Beide sind reine Zustandsmaschinen, das Lesen vom UART passiert im Firmware-Task.

use crate::line_buffer::LineBuffer;
use crate::logic::parse_command;
use crate::state::LedState;
use crate::traits::DutyOutput;
use crate::types::{CommandError, Response};

/// Begrüßung, wird einmal vor der ersten Eingabe gesendet
pub const BANNER: &str = "Brightness control is active";

/// Zustand des Zeilen-Lesers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReaderState {
    #[default]
    Accumulating,
    /// Eine vollständige Zeile liegt in `line()`, bis `finish_line()` aufgerufen wird
    LineReady,
}

/// Ergebnis von `LineReader::feed()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadOutcome {
    /// Byte wurde gepuffert
    Pending,
    /// Zeilenende ohne vorherige Zeichen (Keep-Alive), keine Antwort
    EmptyLine,
    /// Zeile ist fertig, siehe `LineReader::line()`
    LineReady,
    /// Puffer war voll: Byte verworfen, Puffer geleert
    Overflow,
}

#[derive(Debug, Default)]
pub struct LineReader {
    buffer: LineBuffer,
    state: ReaderState,
}

impl LineReader {
    pub const fn new() -> Self {
        Self {
            buffer: LineBuffer::new(),
            state: ReaderState::Accumulating,
        }
    }

    pub fn state(&self) -> ReaderState {
        self.state
    }

    /// Verarbeitet ein empfangenes Byte
    ///
    /// `\n` und `\r` beenden eine Zeile (jeweils einzeln, kein CRLF-Pairing).
    pub fn feed(&mut self, byte: u8) -> ReadOutcome {
        // Vorherige Zeile wurde nicht abgeholt
        if self.state == ReaderState::LineReady {
            self.finish_line();
        }

        if is_line_terminator(byte) {
            if self.buffer.is_empty() {
                return ReadOutcome::EmptyLine;
            }
            self.state = ReaderState::LineReady;
            return ReadOutcome::LineReady;
        }

        match self.buffer.push(byte) {
            Ok(()) => ReadOutcome::Pending,
            Err(_) => {
                // Auslösendes Byte wird nicht gepuffert
                self.buffer.clear();
                ReadOutcome::Overflow
            }
        }
    }

    /// Inhalt der fertigen Zeile (ohne Zeilenende)
    pub fn line(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Leert den Puffer und kehrt zu `Accumulating` zurück
    pub fn finish_line(&mut self) {
        self.buffer.clear();
        self.state = ReaderState::Accumulating;
    }
}

/// Konsole: Zeilen-Leser + Kommando-Interpreter
#[derive(Debug, Default)]
pub struct Console {
    reader: LineReader,
}

impl Console {
    pub const fn new() -> Self {
        Self {
            reader: LineReader::new(),
        }
    }

    /// Verarbeitet ein Byte vom UART
    ///
    /// Gibt die zu sendende Antwort zurück, `None` wenn nichts zu senden ist.
    pub fn feed<O: DutyOutput>(
        &mut self,
        byte: u8,
        state: &LedState,
        out: &O,
    ) -> Option<Response> {
        match self.reader.feed(byte) {
            ReadOutcome::Pending | ReadOutcome::EmptyLine => None,
            ReadOutcome::Overflow => Some(CommandError::CommandTooLong.into()),
            ReadOutcome::LineReady => {
                let response = interpret(self.reader.line(), state, out);
                self.reader.finish_line();
                Some(response)
            }
        }
    }
}

/// Wertet eine Kommandozeile aus
///
/// Bei Erfolg wird die Helligkeit gesetzt, bei Fehler bleibt der Zustand unverändert.
pub fn interpret<O: DutyOutput>(line: &[u8], state: &LedState, out: &O) -> Response {
    match parse_command(line) {
        Ok(level) => {
            state.set_brightness(level, out);
            Response::BrightnessSet(level)
        }
        Err(error) => Response::Error(error),
    }
}

fn is_line_terminator(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}
