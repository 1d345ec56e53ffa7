use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn tabungan(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tabungan").unwrap();
    cmd.env("TABUNGAN_CLI_DATA_DIR", dir.path());
    cmd
}

#[test]
fn masuk_then_rekap_shows_entry() {
    let dir = TempDir::new().unwrap();

    tabungan(&dir)
        .args(["masuk", "Budi", "7", "5000", "--tanggal", "2024-03-15"])
        .assert()
        .success()
        .stdout(contains("Tabungan berhasil disimpan!"));

    tabungan(&dir)
        .args(["rekap", "--dari", "2024-03-01", "--sampai", "2024-03-31"])
        .assert()
        .success()
        .stdout(contains("Kelas 7"))
        .stdout(contains("+ Budi: Rp 5.000"))
        .stdout(contains("(15/03/2024)"))
        .stdout(contains("Saldo Akhir: Rp 5.000"));
}

#[test]
fn keluar_shows_negative_marker_and_balance() {
    let dir = TempDir::new().unwrap();

    tabungan(&dir)
        .args(["masuk", "Budi", "7", "5000", "--tanggal", "2024-03-15"])
        .assert()
        .success();

    tabungan(&dir)
        .args([
            "keluar",
            "7",
            "2000",
            "Beli spidol",
            "--tanggal",
            "2024-03-20",
        ])
        .assert()
        .success()
        .stdout(contains("Pengeluaran berhasil disimpan!"));

    tabungan(&dir)
        .args(["rekap", "--semua"])
        .assert()
        .success()
        .stdout(contains("- Beli spidol: Rp 2.000"))
        .stdout(contains("Saldo Akhir: Rp 3.000"));
}

#[test]
fn kelas_filter_excludes_other_classes_and_grand_totals() {
    let dir = TempDir::new().unwrap();

    tabungan(&dir)
        .args(["masuk", "Budi", "7", "5000", "--tanggal", "2024-03-15"])
        .assert()
        .success();
    tabungan(&dir)
        .args(["masuk", "Siti", "8", "3000", "--tanggal", "2024-03-16"])
        .assert()
        .success();

    tabungan(&dir)
        .args(["rekap", "--kelas", "8", "--semua"])
        .assert()
        .success()
        .stdout(contains("Kelas 8"))
        .stdout(contains("Kelas 7").not())
        .stdout(contains("Total Semua Kelas").not());

    tabungan(&dir)
        .args(["rekap", "--semua"])
        .assert()
        .success()
        .stdout(contains("Total Semua Kelas"));
}

#[test]
fn rekap_outside_range_shows_placeholder() {
    let dir = TempDir::new().unwrap();

    tabungan(&dir)
        .args(["masuk", "Budi", "7", "5000", "--tanggal", "2024-01-10"])
        .assert()
        .success();

    tabungan(&dir)
        .args(["rekap", "--dari", "2024-02-01", "--sampai", "2024-02-28"])
        .assert()
        .success()
        .stdout(contains("Tidak ada data untuk filter yang dipilih"));
}

#[test]
fn semua_conflicts_with_date_bounds() {
    let dir = TempDir::new().unwrap();

    tabungan(&dir)
        .args(["rekap", "--semua", "--dari", "2024-01-01"])
        .assert()
        .failure()
        .stderr(contains("cannot be used with"));
}

#[test]
fn validation_rejects_small_amount() {
    let dir = TempDir::new().unwrap();

    tabungan(&dir)
        .args(["masuk", "Budi", "7", "500"])
        .assert()
        .failure()
        .stderr(contains("Jumlah minimal"));

    tabungan(&dir)
        .args(["rekap", "--semua"])
        .assert()
        .success()
        .stdout(contains("Tidak ada data untuk filter yang dipilih"));
}

#[test]
fn invalid_date_argument_fails() {
    let dir = TempDir::new().unwrap();

    tabungan(&dir)
        .args(["masuk", "Budi", "7", "5000", "--tanggal", "15-03-2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn backup_create_then_restore_roundtrip() {
    let dir = TempDir::new().unwrap();

    tabungan(&dir)
        .args(["masuk", "Budi", "7", "5000", "--tanggal", "2024-03-15"])
        .assert()
        .success();

    tabungan(&dir)
        .args(["backup", "create"])
        .assert()
        .success()
        .stdout(contains("Backup data berhasil disimpan"));

    tabungan(&dir)
        .args(["masuk", "Siti", "8", "3000", "--tanggal", "2024-03-16"])
        .assert()
        .success();

    tabungan(&dir)
        .args(["backup", "restore", "latest", "--force"])
        .assert()
        .success()
        .stdout(contains("Data berhasil diimpor dari backup"));

    tabungan(&dir)
        .args(["rekap", "--semua"])
        .assert()
        .success()
        .stdout(contains("Budi"))
        .stdout(contains("Siti").not());
}

#[test]
fn restore_missing_collection_key_fails_and_keeps_data() {
    let dir = TempDir::new().unwrap();

    tabungan(&dir)
        .args(["masuk", "Budi", "7", "5000", "--tanggal", "2024-03-15"])
        .assert()
        .success();

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, r#"{"tabungan": []}"#).unwrap();

    tabungan(&dir)
        .args(["backup", "restore", bad.to_str().unwrap(), "--force"])
        .assert()
        .failure()
        .stderr(contains("Format file backup tidak valid"));

    tabungan(&dir)
        .args(["rekap", "--semua"])
        .assert()
        .success()
        .stdout(contains("Budi"));
}

#[test]
fn reset_requires_force() {
    let dir = TempDir::new().unwrap();

    tabungan(&dir)
        .args(["masuk", "Budi", "7", "5000", "--tanggal", "2024-03-15"])
        .assert()
        .success();

    tabungan(&dir)
        .args(["reset"])
        .assert()
        .success()
        .stdout(contains("--force"));

    tabungan(&dir)
        .args(["rekap", "--semua"])
        .assert()
        .success()
        .stdout(contains("Budi"));

    tabungan(&dir)
        .args(["reset", "--force"])
        .assert()
        .success()
        .stdout(contains("Semua data telah direset"));

    tabungan(&dir)
        .args(["rekap", "--semua"])
        .assert()
        .success()
        .stdout(contains("Tidak ada data untuk filter yang dipilih"));
}

#[test]
fn export_writes_xlsx_file() {
    let dir = TempDir::new().unwrap();

    tabungan(&dir)
        .args(["masuk", "Budi", "7", "5000", "--tanggal", "2024-03-15"])
        .assert()
        .success();

    let out = dir.path().join("rekap.xlsx");
    tabungan(&dir)
        .args(["export", "--output", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("Data berhasil diekspor ke Excel"));

    let metadata = std::fs::metadata(&out).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn chart_renders_all_series() {
    let dir = TempDir::new().unwrap();

    tabungan(&dir)
        .args(["masuk", "Budi", "7", "5000", "--tanggal", "2024-03-15"])
        .assert()
        .success();

    tabungan(&dir)
        .args(["chart", "--semua"])
        .assert()
        .success()
        .stdout(contains("Saldo Tabungan per Kelas"))
        .stdout(contains("Saldo Akhir"))
        .stdout(contains("Total Masuk"))
        .stdout(contains("Total Keluar"))
        .stdout(contains("Kelas 7"));

    tabungan(&dir)
        .args(["chart", "--semua", "--gaya", "line"])
        .assert()
        .success()
        .stdout(contains("Saldo Tabungan per Kelas"));
}

#[test]
fn corrupt_data_file_resets_with_notice() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("tabungan.json"), "{ not json").unwrap();

    tabungan(&dir)
        .args(["rekap", "--semua"])
        .assert()
        .success()
        .stderr(contains("Gagal memuat data dari penyimpanan lokal"))
        .stdout(contains("Tidak ada data untuk filter yang dipilih"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    tabungan(&dir)
        .args(["config"])
        .assert()
        .success()
        .stdout(contains("Konfigurasi tabungan-cli"))
        .stdout(contains(dir.path().to_str().unwrap()));
}
