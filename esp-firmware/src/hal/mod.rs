// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe (LEDC, GPIO-Interrupt)
// hinter den Traits aus esp-core.

pub mod button;
pub mod pwm;

pub use button::bind_button;
pub use pwm::{LedcPwm, PwmError, init_pwm};
