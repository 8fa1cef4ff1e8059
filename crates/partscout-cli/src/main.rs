//! partscout - partition table inspector
//!
//! Reports whether a disk image uses an MBR or a GPT partition table and
//! prints the decoded structure.

mod cli;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use partscout_core::{Error, Structure};
use partscout_zones::inspect;
use std::fs::File;
use std::io::{self, Write};
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter
const LOG_ENV: &str = "PARTSCOUT_LOG";

fn main() {
    let cli = Cli::parse();

    init_logging(&cli.log_level);

    let stdout = io::stdout();
    let stderr = io::stderr();
    if let Err(e) = run(&cli, &mut stdout.lock(), &mut stderr.lock()) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Open the image named by `cli`, decode it and write the report to `out`
///
/// Only a missing image or an unreadable sector 0 (and a strict-mode
/// signature mismatch) fail the run. A GPT header that cannot be read is
/// reported on `err` and the run still succeeds.
fn run(cli: &Cli, out: &mut dyn Write, err: &mut dyn Write) -> Result<()> {
    let path = cli.image.display().to_string();
    tracing::debug!(image = %path, "opening image");

    let mut file = File::open(&cli.image).map_err(|e| Error::source_unavailable(&path, e))?;

    let layout = match inspect(&mut file, &cli.decode_config()) {
        Ok(layout) => layout,
        Err(e @ Error::Read {
            structure: Structure::GptHeader,
            ..
        }) => {
            writeln!(out, "Detected GPT disk (protective MBR)")?;
            writeln!(err, "Error: {:#}", anyhow::Error::from(e))?;
            return Ok(());
        }
        Err(e) => {
            return Err(anyhow::Error::from(e)
                .context(format!("Failed to decode partition table of {}", path)))
        }
    };

    render::render(&layout, cli.format, out).context("Failed to write report")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cli::OutputFormat;
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn image_file(bytes: &[u8]) -> NamedTempFile {
        let mut tmpfile = NamedTempFile::new().unwrap();
        tmpfile.write_all(bytes).unwrap();
        tmpfile.flush().unwrap();
        tmpfile
    }

    fn cli_for(path: &Path, strict: bool) -> Cli {
        Cli {
            image: path.to_path_buf(),
            format: OutputFormat::Text,
            strict,
            log_level: "warn".to_string(),
        }
    }

    fn protective_disk(signature: &[u8; 8]) -> Vec<u8> {
        let mut disk = vec![0u8; 1024];
        disk[0x1BE + 4] = 0xEE;
        disk[0x1FE] = 0x55;
        disk[0x1FF] = 0xAA;
        disk[512..520].copy_from_slice(signature);
        disk[512 + 80..512 + 84].copy_from_slice(&[0x80, 0x00, 0x00, 0x00]);
        disk
    }

    #[test]
    fn test_run_gpt_image() {
        let tmpfile = image_file(&protective_disk(b"EFI PART"));
        let mut out: Vec<u8> = Vec::new();

        run(&cli_for(tmpfile.path(), false), &mut out, &mut Vec::<u8>::new()).unwrap();

        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("Number Of Partitions: 128"));
    }

    #[test]
    fn test_run_unrecognized_is_success() {
        let tmpfile = image_file(&[0u8; 4096]);
        let mut out: Vec<u8> = Vec::new();

        run(&cli_for(tmpfile.path(), false), &mut out, &mut Vec::<u8>::new()).unwrap();

        assert!(String::from_utf8(out).unwrap().starts_with("Unknown disk format"));
    }

    #[test]
    fn test_run_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.img");
        let mut out: Vec<u8> = Vec::new();

        let err = run(&cli_for(&missing, false), &mut out, &mut Vec::<u8>::new()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::SourceUnavailable { .. })
        ));
        assert!(out.is_empty());

        let message = format!("{:#}", err);
        let cause = err.root_cause().to_string();
        assert_eq!(message.matches(cause.as_str()).count(), 1, "{}", message);
    }

    #[test]
    fn test_run_truncated_image() {
        let tmpfile = image_file(&[0u8; 100]);
        let mut out: Vec<u8> = Vec::new();

        let err =
            run(&cli_for(tmpfile.path(), false), &mut out, &mut Vec::<u8>::new()).unwrap_err();

        assert!(format!("{:#}", err).contains("MBR sector at offset 0x0"));
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Read { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_strict_rejects_bad_signature() {
        let tmpfile = image_file(&protective_disk(b"XXXXXXXX"));

        let mut sink: Vec<u8> = Vec::new();
        assert!(run(&cli_for(tmpfile.path(), false), &mut sink, &mut Vec::<u8>::new()).is_ok());

        let err =
            run(&cli_for(tmpfile.path(), true), &mut sink, &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MalformedStructure { .. })
        ));
    }

    #[test]
    fn test_run_unreadable_gpt_header_is_reported_not_fatal() {
        let mut disk = protective_disk(b"EFI PART");
        disk.truncate(600);
        let tmpfile = image_file(&disk);
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();

        run(&cli_for(tmpfile.path(), false), &mut out, &mut err).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Detected GPT disk (protective MBR)\n");
        let message = String::from_utf8(err).unwrap();
        assert!(message.contains("GPT header at offset 0x200"), "{}", message);
        assert_eq!(message.matches("failed to fill whole buffer").count(), 1, "{}", message);
    }
}
