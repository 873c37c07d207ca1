// Payload actions. Each one opens its own connection, writes, reports a status line to `out`
// and closes. Failures are printed as `Error: <message>` and handed back to the caller,
// which is free to ignore them and carry on.

use std::io::Write;
use std::time::Duration;

use tokio::io::AsyncWrite;
use tracing::{debug, warn};

use crate::core::error::ErrorRegistry;
use crate::core::network::{close, connect, send_bytes, write_chunk};
use crate::core::types::{NetworkResult, Target};
use crate::modules::payloads::{
    large_message, FAKE_TLS_HELLO, PARTIAL_DELAY, PARTIAL_FIRST, PARTIAL_SECOND, RAPID_PAYLOAD,
};
use crate::utils::helpers::{escape_newlines, hex_string};

/// ErrorRegistry category for failed rapid open/close attempts
pub const RAPID_CATEGORY: &str = "rapid_open_close";

/// Result of a rapid open/close run. `requested` is the count as entered, even when negative.
#[derive(Debug)]
pub struct RapidReport {
    pub requested: i32,
    pub attempted: usize,
    pub failures: ErrorRegistry,
}

impl RapidReport {
    pub fn failed(&self) -> usize {
        self.failures.total()
    }

    pub fn succeeded(&self) -> usize {
        self.attempted - self.failed()
    }
}

fn report<W: Write, T>(out: &mut W, result: NetworkResult<T>) -> NetworkResult<T> {
    if let Err(e) = &result {
        warn!("action failed: {}", e);
        if let Err(write_err) = writeln!(out, "Error: {}", e.message()) {
            debug!("could not print action error: {}", write_err);
        }
    }
    result
}

/// Sends a text message as UTF-8
pub async fn send_message<W: Write>(target: &Target, message: &str, out: &mut W) -> NetworkResult<usize> {
    let result: NetworkResult<usize> = async {
        let written = send_bytes(target, message.as_bytes()).await?;
        writeln!(out, "Sent: {}", escape_newlines(message))?;
        Ok(written)
    }
    .await;
    report(out, result)
}

/// Sends bytes exactly as given and prints them as hex
pub async fn send_raw_bytes<W: Write>(target: &Target, data: &[u8], out: &mut W) -> NetworkResult<usize> {
    let result: NetworkResult<usize> = async {
        let written = send_bytes(target, data).await?;
        writeln!(out, "Sent raw bytes: {}", hex_string(data))?;
        Ok(written)
    }
    .await;
    report(out, result)
}

/// Writes the two halves of the split message as separate writes, `delay` apart
pub async fn write_partial<S, W>(stream: &mut S, delay: Duration, out: &mut W) -> NetworkResult<usize>
where
    S: AsyncWrite + Unpin,
    W: Write,
{
    let mut written = write_chunk(stream, PARTIAL_FIRST.as_bytes()).await?;
    writeln!(out, "Sent first half")?;

    tokio::time::sleep(delay).await;

    written += write_chunk(stream, PARTIAL_SECOND.as_bytes()).await?;
    writeln!(out, "Sent second half")?;
    Ok(written)
}

/// Simulates a slow client: "partial-", a one second pause, then "message\n"
pub async fn send_partial_message<W: Write>(target: &Target, out: &mut W) -> NetworkResult<usize> {
    let result: NetworkResult<usize> = async {
        let mut stream = connect(target).await?;
        let written = write_partial(&mut stream, PARTIAL_DELAY, &mut *out).await?;
        close(stream).await;
        Ok(written)
    }
    .await;
    report(out, result)
}

/// Sends 8192 'A's and a newline in one write
pub async fn send_large_message<W: Write>(target: &Target, out: &mut W) -> NetworkResult<usize> {
    let result: NetworkResult<usize> = async {
        let buffer = large_message();
        let written = send_bytes(target, &buffer).await?;
        writeln!(out, "Sent large message ({} bytes)", written)?;
        Ok(written)
    }
    .await;
    report(out, result)
}

/// Connects `count` times in a row, writing a single newline each time.
/// A failed attempt is printed and recorded, never retried, and never stops the run.
/// Zero or a negative count makes no attempts but still reports the count given.
pub async fn rapid_open_close<W: Write>(target: &Target, count: i32, out: &mut W) -> NetworkResult<RapidReport> {
    let mut failures = ErrorRegistry::new();
    let attempts = usize::try_from(count).unwrap_or(0);

    for attempt in 1..=attempts {
        let result: NetworkResult<()> = async {
            let mut stream = connect(target).await?;
            write_chunk(&mut stream, RAPID_PAYLOAD).await?;
            close(stream).await;
            Ok(())
        }
        .await;

        if let Err(e) = result {
            let message = e.message();
            warn!(attempt, "rapid connection failed: {}", message);
            writeln!(out, "[Attempt {}] Error: {}", attempt, message)?;
            failures.record_error(RAPID_CATEGORY, format!("[Attempt {}] {}", attempt, message));
        }
    }

    writeln!(out, "Completed {} rapid connections.", count)?;
    Ok(RapidReport {
        requested: count,
        attempted: attempts,
        failures,
    })
}

/// Sends the truncated ClientHello to a plain socket
pub async fn send_fake_tls_handshake<W: Write>(target: &Target, out: &mut W) -> NetworkResult<usize> {
    let result: NetworkResult<usize> = async {
        let written = send_bytes(target, &FAKE_TLS_HELLO).await?;
        writeln!(out, "Sent fake TLS handshake")?;
        Ok(written)
    }
    .await;
    report(out, result)
}
