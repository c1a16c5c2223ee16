use crate::domain::{GeoLocation, GeoLocationError};
use std::num::ParseFloatError;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::Sender;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::SplitStream;
use tracing::{debug, info, instrument, warn};

/// Reads point selections, one `<lat>,<lng>` per line, and forwards them until the input ends.
/// Lines that are not valid UTF-8 are decoded lossily and end up skipped like any other malformed
/// selection, only a failing reader stops the surface.
#[instrument(skip_all)]
pub async fn listen<R>(reader: R, tx: Sender<GeoLocation>) -> Result<(), SurfaceError>
where
    R: AsyncBufRead + Unpin,
{
    info!("🗺️ Waiting for point selections...");
    let mut lines = SplitStream::new(reader.split(b'\n'));

    while let Some(bytes) = lines.next().await {
        let bytes = bytes?;
        let line = String::from_utf8_lossy(&bytes);
        match parse_point(&line) {
            Ok(Some(location)) => {
                debug!("🗺️ Point selected: {}", location);
                if tx.send(location).await.is_err() {
                    warn!("⚠️ Nobody is handling point selections anymore");
                    return Ok(());
                }
            }
            Ok(None) => {}
            Err(e) => warn!("⚠️ Ignoring selection '{}': {}", line.trim(), e),
        }
    }

    info!("🗺️ Input closed");
    Ok(())
}

/// Parses a selection line. Blank lines and `#` comments are not selections.
pub fn parse_point(line: &str) -> Result<Option<GeoLocation>, SurfaceError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>();

    let [latitude, longitude] = parts.as_slice() else {
        return Err(SurfaceError::InvalidFormat(line.to_string()));
    };

    let location = GeoLocation::new(latitude.parse::<f64>()?, longitude.parse::<f64>()?)?;
    Ok(Some(location))
}

#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("expected '<latitude>,<longitude>', found '{0}'")]
    InvalidFormat(String),
    #[error("invalid coordinate: {0}")]
    InvalidNumber(#[from] ParseFloatError),
    #[error(transparent)]
    InvalidLocation(#[from] GeoLocationError),
    #[error("unable to read selections: {0}")]
    Io(#[from] std::io::Error),
}
