use crate::prelude::AirfoilResult;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tempfile::Builder;

/// Lets a path-based writer target an arbitrary stream.
///
/// `save` receives the path of a fresh temporary file. Its contents are then
/// copied into `out`. The file is removed when this returns, whether or not
/// `save` or the copy failed.
pub fn write_through_tempfile<F>(out: &mut dyn Write, suffix: &str, save: F) -> AirfoilResult<()>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    let path = Builder::new()
        .prefix("airfoil-")
        .suffix(suffix)
        .tempfile()?
        .into_temp_path();

    save(&path)?;
    let mut file = File::open(&path)?;
    io::copy(&mut file, out)?;
    out.flush()?;
    Ok(())
}
