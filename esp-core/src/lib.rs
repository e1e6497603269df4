//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, den geteilten LED-Zustand und Pure Functions
//! für die serielle Helligkeitssteuerung.

#![no_std]

pub mod console;
pub mod line_buffer;
pub mod logic;
pub mod state;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use console::{BANNER, Console, LineReader, ReadOutcome, ReaderState, interpret};
pub use line_buffer::{CapacityExceeded, LINE_CAPACITY, LineBuffer};
pub use logic::{DUTY_SCALE, effective_duty, parse_command, parse_decimal};
pub use state::{LedState, on_button_press};
pub use traits::DutyOutput;
pub use types::{
    Brightness, BrightnessOutOfRange, CommandError, LINE_ENDING, PowerState, RESPONSE_CAPACITY,
    Response,
};
