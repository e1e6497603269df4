//! Begrenzter Zeilenpuffer für die serielle Konsole

use heapless::Vec;

/// Maximale Zeichen pro Kommandozeile (ohne Zeilenende)
pub const LINE_CAPACITY: usize = 99;

/// Puffer ist voll, Byte wurde nicht übernommen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CapacityExceeded;

/// Bytes einer Zeile zwischen zwei Zeilenenden
///
/// Gehört ausschließlich dem Konsolen-Kontext, der Interrupt fasst ihn nie an.
#[derive(Debug, Default)]
pub struct LineBuffer {
    bytes: Vec<u8, LINE_CAPACITY>,
}

impl LineBuffer {
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Hängt ein Byte an, schlägt fehl wenn schon `LINE_CAPACITY` Bytes drin sind
    pub fn push(&mut self, byte: u8) -> Result<(), CapacityExceeded> {
        self.bytes.push(byte).map_err(|_| CapacityExceeded)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.bytes.is_full()
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}
