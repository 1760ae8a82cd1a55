pub mod audio;
mod carrier;
pub mod image;
pub mod payload;
mod primitives;
mod types;
pub mod video;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::error;
use tempfile::NamedTempFile;

pub use carrier::*;
pub use primitives::*;
pub use types::*;

use crate::error::CarrierIoError;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}

/// Writes `target` through a temporary file in the same directory that is renamed into place
/// once `write` succeeded and the data reached the disk. On failure `target` is left alone.
pub fn write_atomically<F>(target: &Path, write: F) -> crate::Result<()>
where
    F: FnOnce(&mut BufWriter<&mut File>) -> crate::Result<()>,
{
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_error = |source: std::io::Error| {
        error!("Error writing file {target:?}: {source}");
        CarrierIoError::WriteError { source }
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write(&mut writer)?;
        writer.flush().map_err(write_error)?;
    }
    tmp.as_file().sync_all().map_err(write_error)?;
    tmp.persist(target).map_err(|e| write_error(e.error))?;

    // the rename itself has to reach the disk as well
    #[cfg(unix)]
    File::open(dir)
        .and_then(|d| d.sync_all())
        .map_err(write_error)?;

    Ok(())
}
