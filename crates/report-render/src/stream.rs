//! Asynchronous document finalization
//!
//! Rendering is CPU-bound and writes its output incrementally, so it runs
//! on a blocking thread that feeds a bounded single-producer channel. The
//! async caller drains the channel until the stream ends, then resolves
//! with the concatenated buffer, or with the stream's error.

use crate::renderer::{register_fonts, ReportRenderer};
use crate::schema::NormalizedReport;
use crate::{ReportError, Result};
use std::io;
use tokio::sync::mpsc;

/// Chunks in flight before the producer blocks
const CHANNEL_CAPACITY: usize = 8;

/// Writer that forwards every produced chunk into the channel
struct ChunkWriter {
    tx: mpsc::Sender<Vec<u8>>,
}

impl io::Write for ChunkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.tx.blocking_send(buf.to_vec()).map_err(|_| {
            io::Error::new(io::ErrorKind::BrokenPipe, "chunk receiver dropped")
        })?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Render a report and resolve with the complete document buffer
///
/// Suspends until the byte stream signals completion or error. There is no
/// cancellation and no timeout; the full output is buffered in memory.
pub async fn render_to_buffer(report: NormalizedReport) -> Result<Vec<u8>> {
    register_fonts();

    let (tx, mut rx) = mpsc::channel::<Vec<u8>>(CHANNEL_CAPACITY);
    let handle = tokio::task::spawn_blocking(move || {
        let mut writer = ChunkWriter { tx };
        ReportRenderer::new().render_into(&report, &mut writer)
    });

    let mut buffer = Vec::new();
    while let Some(chunk) = rx.recv().await {
        buffer.extend_from_slice(&chunk);
    }

    match handle.await {
        Ok(render_result) => render_result?,
        Err(e) => {
            return Err(ReportError::RenderError(format!(
                "render task failed: {e}"
            )))
        }
    }

    Ok(buffer)
}
