// Task-Modul: Enthält alle Embassy Tasks
//
// Der Button läuft nicht als Task, sondern direkt im GPIO-Interrupt (siehe hal::button).

pub mod console;

// Re-export Tasks für einfachen Import
pub use console::serial_console_task;
