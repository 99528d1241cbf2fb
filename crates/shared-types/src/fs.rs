//! Directory and file creation with the permissions every log file uses.

use std::fs::{DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Permissions for directories created under a storage root.
pub const DIR_PERM: u32 = 0o755;
/// Permissions for files created under a storage root.
pub const FILE_PERM: u32 = 0o644;

/// Create `path` and any missing parents with [`DIR_PERM`].
pub fn create_dir_all(path: &Path) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_PERM);
    }
    builder.create(path)
}

/// Write `data` to `path` with [`FILE_PERM`] and sync it.
///
/// With `exclusive` set the call fails with `AlreadyExists` instead of
/// replacing an existing file.
pub fn write_file(path: &Path, data: &[u8], exclusive: bool) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true);
    if exclusive {
        options.create_new(true);
    } else {
        options.create(true).truncate(true);
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_PERM);
    }
    let mut file = options.open(path)?;
    file.write_all(data)?;
    file.sync_all()
}
