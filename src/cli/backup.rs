//! Backup CLI commands
//!
//! Implements CLI commands for backup management.

use clap::Subcommand;
use std::path::PathBuf;

use crate::backup::{load_archive, validate_backup, BackupManager};
use crate::context::AppContext;
use crate::display::notice;
use crate::error::{TabunganError, TabunganResult};

/// Backup subcommands
#[derive(Subcommand, Debug)]
pub enum BackupCommands {
    /// Create a new backup
    Create,

    /// List all available backups
    List {
        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Restore from a backup
    Restore {
        /// Backup filename or path (use 'latest' for most recent)
        backup: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show information about a specific backup
    Info {
        /// Backup filename or path
        backup: String,
    },
}

/// Handle a backup command
pub fn handle_backup_command(ctx: &mut AppContext, cmd: BackupCommands) -> TabunganResult<()> {
    let manager = BackupManager::new(&ctx.paths);

    match cmd {
        BackupCommands::Create => {
            let backup_path =
                manager.create_backup(ctx.store.savings(), ctx.store.expenses(), ctx.now())?;
            let filename = backup_path
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| backup_path.display().to_string());

            notice::success("Backup data berhasil disimpan");
            println!("  File:   {}", filename);
            println!("  Lokasi: {}", backup_path.display());
        }

        BackupCommands::List { verbose } => {
            let backups = manager.list_backups()?;

            if backups.is_empty() {
                println!("Belum ada backup.");
                println!("Buat dengan: tabungan backup create");
                return Ok(());
            }

            println!("Daftar Backup");
            println!("=============");
            println!();

            for (i, backup) in backups.iter().enumerate() {
                let age = ctx.now().signed_duration_since(backup.created_at);
                let age_str = format_duration(age);

                if verbose {
                    println!(
                        "{}. {}\n   Dibuat: {}\n   Ukuran: {}\n   Umur: {}\n",
                        i + 1,
                        backup.filename,
                        backup.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
                        format_size(backup.size_bytes),
                        age_str,
                    );
                } else {
                    println!(
                        "  {}. {} ({} lalu, {})",
                        i + 1,
                        backup.filename,
                        age_str,
                        format_size(backup.size_bytes),
                    );
                }
            }

            println!();
            println!("Total: {} backup", backups.len());
        }

        BackupCommands::Restore { backup, force } => {
            let backup_path = resolve_backup_path(&manager, &backup)?;

            // Validate the backup before touching current data
            let validation = validate_backup(&backup_path)?;

            println!("Informasi Backup");
            println!("================");
            println!("File: {}", backup_path.display());
            match validation.timestamp {
                Some(ts) => println!("Dibuat: {}", ts.format("%Y-%m-%d %H:%M:%S UTC")),
                None => println!("Dibuat: tidak tercatat"),
            }
            println!("Isi: {}", validation.summary());
            println!();

            if !force {
                println!("PERINGATAN: Semua data saat ini akan ditimpa!");
                println!("Untuk melanjutkan, jalankan lagi dengan --force:");
                println!("  tabungan backup restore {} --force", backup);
                return Ok(());
            }

            // Keep a copy of current data before overwriting it
            if !ctx.store.is_empty() {
                let pre_restore =
                    manager.create_backup(ctx.store.savings(), ctx.store.expenses(), ctx.now())?;
                let pre_restore_name = pre_restore
                    .file_name()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_else(|| pre_restore.display().to_string());
                println!("Data saat ini diamankan ke: {}", pre_restore_name);
                println!();
            }

            let archive = load_archive(&backup_path)?;
            let (savings_count, expense_count) =
                (archive.tabungan.len(), archive.pengeluaran.len());
            ctx.records().restore(archive.tabungan, archive.pengeluaran)?;

            notice::success("Data berhasil diimpor dari backup");
            println!(
                "  {} tabungan, {} pengeluaran dimuat",
                savings_count, expense_count
            );
        }

        BackupCommands::Info { backup } => {
            let backup_path = resolve_backup_path(&manager, &backup)?;
            let validation = validate_backup(&backup_path)?;
            let metadata = std::fs::metadata(&backup_path)?;

            println!("Detail Backup");
            println!("=============");
            println!("File: {}", backup_path.display());
            println!("Ukuran: {}", format_size(metadata.len()));
            match validation.timestamp {
                Some(ts) => println!("Dibuat: {}", ts.format("%Y-%m-%d %H:%M:%S UTC")),
                None => println!("Dibuat: tidak tercatat"),
            }
            println!("Versi: {}", validation.version);
            println!();
            println!("Isi:");
            println!("  Tabungan:    {}", validation.savings_count);
            println!("  Pengeluaran: {}", validation.expense_count);
        }
    }

    Ok(())
}

/// Resolve a backup identifier to a full path
fn resolve_backup_path(manager: &BackupManager, backup: &str) -> TabunganResult<PathBuf> {
    // Handle "latest" keyword
    if backup.eq_ignore_ascii_case("latest") {
        return manager
            .get_latest_backup()?
            .map(|b| b.path)
            .ok_or_else(|| TabunganError::backup_not_found("latest"));
    }

    // Check if it's a full path
    let path = PathBuf::from(backup);
    if path.exists() {
        return Ok(path);
    }

    // Check if it's a filename in the backup directory
    if let Some(info) = manager.get_backup(backup)? {
        return Ok(info.path);
    }

    // Try with the .json extension added
    if let Some(info) = manager.get_backup(&format!("{}.json", backup))? {
        return Ok(info.path);
    }

    Err(TabunganError::backup_not_found(backup))
}

/// Format a duration in human-readable form
fn format_duration(duration: chrono::Duration) -> String {
    let total_seconds = duration.num_seconds();

    if total_seconds < 60 {
        return format!("{}s", total_seconds);
    }

    let minutes = total_seconds / 60;
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }

    let days = hours / 24;
    if days < 30 {
        return format!("{}d", days);
    }

    let months = days / 30;
    format!("{}bln", months)
}

/// Format a file size in human-readable form
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
