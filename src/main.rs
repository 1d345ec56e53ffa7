use anyhow::Result;
use clap::{Parser, Subcommand};

use tabungan_cli::cli::{
    handle_backup_command, handle_chart_command, handle_config_command, handle_export_command,
    handle_keluar_command, handle_masuk_command, handle_rekap_command, handle_reset_command,
    BackupCommands, FilterArgs,
};
use tabungan_cli::config::TabunganPaths;
use tabungan_cli::context::AppContext;
use tabungan_cli::display::notice;
use tabungan_cli::storage::LoadOutcome;

#[derive(Parser)]
#[command(
    name = "tabungan",
    version,
    about = "Terminal-based savings and expense tracker for class cohorts",
    long_about = "Tabungan Kelas tracks savings deposits and shared expenses for \
                  classes 7, 8, and 9. All data is stored locally as JSON and can \
                  be recapped, charted, exported to Excel, and backed up from the \
                  command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a savings deposit for a student
    Masuk {
        /// Student name
        nama: String,
        /// Class (7, 8, or 9)
        kelas: String,
        /// Amount in rupiah
        jumlah: String,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        tanggal: Option<String>,
    },

    /// Record a class expense
    Keluar {
        /// Class (7, 8, or 9)
        kelas: String,
        /// Amount in rupiah
        jumlah: String,
        /// Expense description
        keterangan: String,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        tanggal: Option<String>,
    },

    /// Show the per-class savings and expense recap
    Rekap {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show per-class balance charts
    Chart {
        #[command(flatten)]
        filter: FilterArgs,

        /// Chart style (bar or line)
        #[arg(long, alias = "style")]
        gaya: Option<String>,
    },

    /// Export all data to an Excel file
    Export {
        /// Output file path (.xlsx)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Delete all savings and expense data
    Reset {
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let paths = TabunganPaths::new()?;
    let mut ctx = AppContext::new(paths)?;

    if let LoadOutcome::Reset { reason } = ctx.load() {
        notice::error("Gagal memuat data dari penyimpanan lokal");
        tracing::warn!(%reason, "stored data was reset");
    }

    match cli.command {
        Some(Commands::Masuk {
            nama,
            kelas,
            jumlah,
            tanggal,
        }) => {
            handle_masuk_command(&mut ctx, nama, kelas, jumlah, tanggal)?;
        }
        Some(Commands::Keluar {
            kelas,
            jumlah,
            keterangan,
            tanggal,
        }) => {
            handle_keluar_command(&mut ctx, kelas, jumlah, keterangan, tanggal)?;
        }
        Some(Commands::Rekap { filter }) => {
            handle_rekap_command(&ctx, filter)?;
        }
        Some(Commands::Chart { filter, gaya }) => {
            handle_chart_command(&ctx, filter, gaya)?;
        }
        Some(Commands::Export { output }) => {
            handle_export_command(&ctx, output)?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&mut ctx, cmd)?;
        }
        Some(Commands::Reset { force }) => {
            handle_reset_command(&mut ctx, force)?;
        }
        Some(Commands::Config) => {
            handle_config_command(&ctx)?;
        }
        None => {
            println!("Tabungan Kelas - savings and expense tracker for classes 7-9");
            println!();
            println!("Run 'tabungan --help' for usage information.");
            println!("Run 'tabungan rekap' to view this month's recap.");
        }
    }

    Ok(())
}

/// Initialize the global tracing subscriber
///
/// Logs go to stderr so they never mix with report output. The default
/// filter stays quiet below warn; set RUST_LOG to see more.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tabungan_cli=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
