use crate::core::controller::LookupController;
use crate::domain::ports::{OrderSource, OutputSurface};
use std::borrow::Cow;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const PROMPT: &str = "OrderUID> ";

/// Reads one OrderUID per line and runs one activation for each until EOF.
///
/// Lines are decoded lossily: invalid UTF-8 becomes U+FFFD and the line is
/// still looked up. Returns the number of activations.
pub async fn run_interactive<R, W, S, O>(
    controller: &LookupController<S, O>,
    mut input: R,
    mut prompt_out: W,
) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: OrderSource,
    O: OutputSurface,
{
    let mut buf = Vec::new();
    let mut activations = 0;

    loop {
        prompt_out.write_all(PROMPT.as_bytes()).await?;
        prompt_out.flush().await?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            tracing::warn!("Input line was not valid UTF-8, invalid bytes replaced");
        }

        controller.perform_lookup(&line).await;
        activations += 1;
    }

    tracing::info!("Input closed after {} lookups", activations);
    Ok(activations)
}
