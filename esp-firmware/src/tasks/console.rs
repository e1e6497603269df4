// Serial Console Task - Helligkeit per UART setzen (L=<0-99>)
use defmt::{Debug2Format, info, warn};
use esp_hal::Async;
use esp_hal::uart::{TxError, Uart, UartTx};

use crate::hal::LedcPwm;
use crate::{BANNER, Console, LED_STATE, LINE_ENDING, Response};

/// Serial Console Task - Embassy Task für die Kommandozeile
///
/// Ablauf:
/// - Sendet einmal das Banner
/// - Liest Byte für Byte vom UART (einziger Wartepunkt)
/// - Gibt jedes Byte an die `Console` Zustandsmaschine aus esp-core
/// - Sendet die Antwortzeile, falls eine entsteht
///
/// UART-Fehler werden geloggt, das betroffene Byte bzw. die Antwort
/// geht verloren, der Task läuft weiter.
///
/// # Parameter
/// - `uart`: UART im Async-Modus (RX + TX)
/// - `pwm`: Handle auf den LEDC-Kanal der LED
#[embassy_executor::task]
pub async fn serial_console_task(uart: Uart<'static, Async>, pwm: LedcPwm) {
    let (mut rx, mut tx) = uart.split();
    let mut console = Console::new();

    if let Err(e) = send_line(&mut tx, BANNER.as_bytes()).await {
        warn!("Console: Banner not sent: {}", Debug2Format(&e));
    }
    info!("Console: Ready, waiting for commands");

    let mut byte = [0u8; 1];
    loop {
        match rx.read_async(&mut byte).await {
            Ok(0) => continue,
            Ok(_) => {}
            Err(e) => {
                warn!("Console: RX error: {}", Debug2Format(&e));
                continue;
            }
        }

        let Some(response) = console.feed(byte[0], &LED_STATE, &pwm) else {
            continue;
        };

        match response {
            Response::BrightnessSet(level) => {
                info!(
                    "Console: Brightness {}% (duty {})",
                    level.percent(),
                    LED_STATE.effective_duty()
                )
            }
            Response::Error(error) => warn!("Console: Rejected line: {}", error),
        }

        if let Err(e) = write_all(&mut tx, response.to_line().as_bytes()).await {
            warn!("Console: TX error: {}", Debug2Format(&e));
        }
    }
}

/// Sendet `text` gefolgt von `\r\n`
async fn send_line(tx: &mut UartTx<'static, Async>, text: &[u8]) -> Result<(), TxError> {
    write_all(tx, text).await?;
    write_all(tx, LINE_ENDING.as_bytes()).await
}

/// Schreibt alle Bytes und wartet bis sie gesendet sind
async fn write_all(tx: &mut UartTx<'static, Async>, mut bytes: &[u8]) -> Result<(), TxError> {
    while !bytes.is_empty() {
        let written = tx.write_async(bytes).await?;
        bytes = &bytes[written..];
    }
    tx.flush_async().await
}
