//! Shared harness for conversion tests.
//!
//! Real ffmpeg is too heavy (and too absent on CI) to lean on, so these
//! tests drive the pipeline with small shell scripts standing in for the
//! binary. Properties that need a real codec (PNG signatures, output
//! durations) belong to an environment with ffmpeg installed.

use std::path::{Path, PathBuf};

use botmedia::ConverterConfig;

/// Mimics a successful run: copies the file after `-i` to the last
/// argument. Rejects empty input the way ffmpeg rejects garbage.
pub const COPY_STUB: &str = r#"#!/bin/sh
in=""
out=""
prev=""
for a in "$@"; do
  if [ "$prev" = "-i" ]; then in="$a"; fi
  prev="$a"
  out="$a"
done
[ -s "$in" ] || { echo "invalid input" >&2; exit 1; }
cp "$in" "$out"
"#;

/// Fails every run with a diagnostic on stderr.
pub const FAIL_STUB: &str = r#"#!/bin/sh
echo kaboom >&2
exit 3
"#;

/// Hangs long enough to trip any reasonable timeout.
pub const SLEEP_STUB: &str = r#"#!/bin/sh
sleep 30
"#;

/// Claims success without leaving an output file behind.
pub const NO_OUTPUT_STUB: &str = r#"#!/bin/sh
for a in "$@"; do out="$a"; done
rm -f "$out"
exit 0
"#;

/// Records its argv, one argument per line, into the last argument.
pub const ARGV_STUB: &str = r#"#!/bin/sh
for a in "$@"; do out="$a"; done
printf '%s\n' "$@" > "$out"
"#;

/// Install a stub `ffmpeg` script into `dir` and make it executable.
pub fn stub_ffmpeg(dir: &Path, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join("ffmpeg");
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Config pointing at a stub binary and a test-owned scratch directory.
pub fn stub_config(stub: &Path, scratch: &Path) -> ConverterConfig {
    ConverterConfig {
        ffmpeg_path: Some(stub.to_path_buf()),
        scratch_dir: Some(scratch.to_path_buf()),
        ..ConverterConfig::default()
    }
}

/// Names of the entries currently in `dir`, for asserting cleanup.
pub fn scratch_entries(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default()
}
