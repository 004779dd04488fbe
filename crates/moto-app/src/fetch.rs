// ABOUTME: Background fetch feeding the results pane.
// ABOUTME: Streams tab-separated rows from a file into the event channel.

use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedSender;

use crate::app::AppEvent;
use crate::panes::PaneUpdate;

/// Send up to `limit` rows from `path`, returning how many were sent
async fn stream_rows(
    path: &Path,
    limit: usize,
    tx: &UnboundedSender<AppEvent>,
) -> std::io::Result<usize> {
    let file = File::open(path).await?;
    let mut lines = BufReader::new(file).lines();
    let mut sent = 0;
    while sent < limit {
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let row = line.split('\t').map(str::to_string).collect();
        if tx.send(AppEvent::Results(PaneUpdate::Row(row))).is_err() {
            // UI is gone
            break;
        }
        sent += 1;
    }
    Ok(sent)
}

/// Stream the results file, then report completion or failure
pub async fn fetch_results(path: PathBuf, limit: usize, tx: UnboundedSender<AppEvent>) {
    let update = match stream_rows(&path, limit, &tx).await {
        Ok(rows) => {
            tracing::info!("Fetched {} rows from {}", rows, path.display());
            PaneUpdate::Finished
        }
        Err(e) => {
            tracing::error!("Failed to read results from {}: {}", path.display(), e);
            PaneUpdate::Failed(e.to_string())
        }
    };
    let _ = tx.send(AppEvent::Results(update));
}
