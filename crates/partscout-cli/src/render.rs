//! Text and JSON reports

use crate::cli::OutputFormat;
use partscout_core::{PartitionTable, SECTOR_SIZE};
use partscout_zones::{DiskLayout, GptHeader, LegacyTable};
use std::io::{self, Write};

/// Write `layout` to `out` in the requested format
pub fn render(layout: &DiskLayout, format: OutputFormat, out: &mut dyn Write) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(layout, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, layout)?;
            writeln!(out)
        }
    }
}

fn render_text(layout: &DiskLayout, out: &mut dyn Write) -> io::Result<()> {
    match layout {
        DiskLayout::Legacy { table } => {
            writeln!(out, "Detected MBR disk")?;
            render_mbr(table, out)
        }
        DiskLayout::Gpt { header, .. } => {
            writeln!(out, "Detected GPT disk (protective MBR)")?;
            render_gpt(header, out)
        }
        DiskLayout::Unrecognized { boot_signature } => writeln!(
            out,
            "Unknown disk format: missing boot signature (found 0x{:04X}, expected 0x{:04X})",
            boot_signature,
            LegacyTable::BOOT_SIGNATURE
        ),
    }
}

fn render_mbr(table: &LegacyTable, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{} at offset 0x{:X}:", table.identify(), table.offset())?;
    writeln!(out, "\tDisk Signature: 0x{:08X}", table.disk_signature())?;

    for (i, p) in table.partitions.iter().enumerate() {
        writeln!(out, "Partition {}:", i + 1)?;
        writeln!(
            out,
            "\tBoot Flag: 0x{:02X}{}",
            p.boot_flag,
            if p.is_bootable() { " (active)" } else { "" }
        )?;
        writeln!(out, "\tType: 0x{:02X} ({})", p.partition_type, p.kind())?;
        writeln!(out, "\tStart LBA: {}", p.start_lba)?;
        writeln!(
            out,
            "\tTotal Sectors: {} ({})",
            p.total_sectors,
            format_bytes(p.total_sectors as u64 * SECTOR_SIZE as u64)
        )?;
    }

    Ok(())
}

fn render_gpt(header: &GptHeader, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{} header at offset 0x{:X}:", header.identify(), header.offset())?;
    writeln!(out, "\tDisk GUID: {}", header.disk_guid_hex())?;
    writeln!(out, "\tPartition Entry LBA: {}", header.partition_entry_lba)?;
    writeln!(out, "\tNumber Of Partitions: {}", header.number_of_partitions)?;
    writeln!(out, "\tPartition Entry Size: {}", header.partition_entry_size)?;
    writeln!(out, "\tRevision: {}", header.revision_string())?;
    writeln!(out, "\tHeader Size: {}", header.header_size)?;
    writeln!(out, "\tCurrent LBA: {}", header.current_lba)?;
    writeln!(out, "\tBackup LBA: {}", header.backup_lba)?;
    writeln!(
        out,
        "\tUsable LBA: {}-{} ({} sectors)",
        header.first_usable_lba,
        header.last_usable_lba,
        header.usable_lba_count()
    )?;
    if !header.has_valid_signature() {
        writeln!(
            out,
            "\tWarning: header signature is {:?}, not \"EFI PART\"",
            String::from_utf8_lossy(&header.signature)
        )?;
    }
    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1_048_576 {
        format!("{:.2} KB", bytes as f64 / 1024.0)
    } else if bytes < 1_073_741_824 {
        format!("{:.2} MB", bytes as f64 / 1_048_576.0)
    } else {
        format!("{:.2} GB", bytes as f64 / 1_073_741_824.0)
    }
}
