//! Entry CLI commands
//!
//! Implements the add commands for savings and expenses.

use crate::context::AppContext;
use crate::display::notice;
use crate::error::{TabunganError, TabunganResult};
use crate::services::{AddExpenseInput, AddSavingsInput};

use super::{parse_amount, parse_date, parse_kelas};

/// Handle the savings add command
pub fn handle_masuk_command(
    ctx: &mut AppContext,
    nama: String,
    kelas: String,
    jumlah: String,
    tanggal: Option<String>,
) -> TabunganResult<()> {
    let kelas = parse_kelas(&kelas)?;
    let amount = parse_amount(&jumlah)?;
    let date = match tanggal {
        Some(s) => parse_date(&s)?,
        None => ctx.today(),
    };

    let entry = ctx
        .records()
        .add_savings(AddSavingsInput {
            student_name: nama,
            kelas,
            amount,
            date,
        })
        .map_err(|e| match e {
            TabunganError::Storage(msg) => {
                TabunganError::Storage(format!("Gagal menyimpan tabungan: {}", msg))
            }
            other => other,
        })?;

    notice::success("Tabungan berhasil disimpan!");
    println!("  Nama:    {}", entry.student_name);
    println!("  Kelas:   {}", entry.kelas.heading());
    println!("  Jumlah:  {}", entry.amount);
    println!("  Tanggal: {}", entry.date);

    Ok(())
}

/// Handle the expense add command
pub fn handle_keluar_command(
    ctx: &mut AppContext,
    kelas: String,
    jumlah: String,
    keterangan: String,
    tanggal: Option<String>,
) -> TabunganResult<()> {
    let kelas = parse_kelas(&kelas)?;
    let amount = parse_amount(&jumlah)?;
    let date = match tanggal {
        Some(s) => parse_date(&s)?,
        None => ctx.today(),
    };

    let entry = ctx
        .records()
        .add_expense(AddExpenseInput {
            kelas,
            amount,
            note: keterangan,
            date,
        })
        .map_err(|e| match e {
            TabunganError::Storage(msg) => {
                TabunganError::Storage(format!("Gagal menyimpan pengeluaran: {}", msg))
            }
            other => other,
        })?;

    notice::success("Pengeluaran berhasil disimpan!");
    println!("  Keterangan: {}", entry.note);
    println!("  Kelas:      {}", entry.kelas.heading());
    println!("  Jumlah:     {}", entry.amount);
    println!("  Tanggal:    {}", entry.date);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TabunganPaths;
    use crate::models::{FixedClock, FixedIdGenerator};
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn test_context(temp: &TempDir) -> AppContext {
        let paths = TabunganPaths::with_base_dir(temp.path().to_path_buf());
        let clock = FixedClock(chrono::Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap());
        AppContext::with_sources(
            paths,
            Box::new(FixedIdGenerator::new([1, 2, 3, 4])),
            Box::new(clock),
        )
        .unwrap()
    }

    #[test]
    fn test_masuk_defaults_date_to_today() {
        let temp = TempDir::new().unwrap();
        let mut ctx = test_context(&temp);

        handle_masuk_command(&mut ctx, "Budi".into(), "7".into(), "5000".into(), None).unwrap();

        assert_eq!(ctx.store.savings().len(), 1);
        assert_eq!(
            ctx.store.savings()[0].date,
            chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_masuk_rejects_unknown_class() {
        let temp = TempDir::new().unwrap();
        let mut ctx = test_context(&temp);

        let err = handle_masuk_command(&mut ctx, "Budi".into(), "10".into(), "5000".into(), None)
            .unwrap_err();
        assert!(err.is_validation());
        assert!(ctx.store.is_empty());
    }

    #[test]
    fn test_keluar_with_explicit_date() {
        let temp = TempDir::new().unwrap();
        let mut ctx = test_context(&temp);

        handle_keluar_command(
            &mut ctx,
            "8".into(),
            "2500".into(),
            "Beli spidol".into(),
            Some("2024-02-01".into()),
        )
        .unwrap();

        let entry = &ctx.store.expenses()[0];
        assert_eq!(entry.note, "Beli spidol");
        assert_eq!(
            entry.date,
            chrono::NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_below_minimum_amount_is_rejected() {
        let temp = TempDir::new().unwrap();
        let mut ctx = test_context(&temp);

        let err = handle_masuk_command(&mut ctx, "Budi".into(), "7".into(), "500".into(), None)
            .unwrap_err();
        assert!(err.to_string().contains("Jumlah minimal Rp 1.000"));
        assert!(ctx.store.is_empty());
    }
}
