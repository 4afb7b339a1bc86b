//! # Sample Report Generator
//!
//! Builds both report artifacts from synthetic rows so layout changes can
//! be eyeballed without a live API.
//!
//! ## Usage
//! ```bash
//! # Generate 130 rows (three PDF pages) into ./out
//! cargo run -p atlas-export --bin sample_report
//!
//! # Custom row count
//! cargo run -p atlas-export --bin sample_report -- --rows 51
//!
//! # Custom output directory
//! cargo run -p atlas-export --bin sample_report -- --out /tmp/reports
//! ```
//!
//! Rows are deterministic: the same count always produces the same
//! artifacts, which makes diffs meaningful.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use std::env;
use std::path::PathBuf;

use atlas_core::{PaymentType, ReportRow};
use atlas_export::{build_report_pdf, build_report_xlsx, PDF_FILE_NAME, XLSX_FILE_NAME};

const PRODUCTS: &[&str] = &[
    "Basmati Rice 5kg",
    "Sunflower Oil 1L",
    "Wheat Flour 10kg",
    "Green Tea 250g",
    "Masala Chai 500g",
    "Jaggery Block",
    "Toor Dal 2kg",
    "Mustard Seeds 200g",
    "Ghee 1L",
    "Red Chilli Powder 100g",
];

const CUSTOMERS: &[&str] = &[
    "Asha Traders",
    "Bharat Kirana",
    "Chandra Stores",
    "Devi General",
    "Eastside Mart",
    "Field Supplies",
    "Ganga Provision",
];

const PAYMENTS: &[PaymentType] = &[PaymentType::Cash, PaymentType::Card, PaymentType::Upi];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut rows: usize = 130;
    let mut out_dir = PathBuf::from("./out");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rows" | "-r" => {
                if i + 1 < args.len() {
                    rows = args[i + 1].parse().unwrap_or(130);
                    i += 1;
                }
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out_dir = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Atlas Retail Sample Report Generator");
                println!();
                println!("Usage: sample_report [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -r, --rows <N>    Number of report rows to generate (default: 130)");
                println!("  -o, --out <DIR>   Output directory (default: ./out)");
                println!("  -h, --help        Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Atlas Retail Sample Report Generator");
    println!("====================================");
    println!("Rows:   {}", rows);
    println!("Output: {}", out_dir.display());
    println!();

    let report = generate_rows(rows);
    println!("✓ Generated {} rows", report.len());

    std::fs::create_dir_all(&out_dir)?;

    let pdf_path = out_dir.join(PDF_FILE_NAME);
    let pdf_bytes = build_report_pdf(&report)?;
    let pages = (report.len() + 49) / 50;
    std::fs::write(&pdf_path, &pdf_bytes)?;
    println!(
        "✓ Wrote {} ({} pages, {} bytes)",
        pdf_path.display(),
        pages,
        pdf_bytes.len()
    );

    let xlsx_path = out_dir.join(XLSX_FILE_NAME);
    let xlsx_bytes = build_report_xlsx(&report)?;
    std::fs::write(&xlsx_path, &xlsx_bytes)?;
    println!(
        "✓ Wrote {} ({} rows + header, {} bytes)",
        xlsx_path.display(),
        report.len(),
        xlsx_bytes.len()
    );

    println!();
    println!("✓ Done");

    Ok(())
}

/// Generates deterministic report rows spread across March 2026.
fn generate_rows(count: usize) -> Vec<ReportRow> {
    (0..count)
        .map(|i| {
            let day = (i % 28) as u32 + 1;
            let price_cents = 999 + ((i * 37) % 9000) as i64;

            ReportRow {
                sale_date: Utc
                    .with_ymd_and_hms(2026, 3, day, 9 + (i % 9) as u32, (i % 60) as u32, 0)
                    .unwrap(),
                product_name: PRODUCTS[i % PRODUCTS.len()].to_string(),
                customer: CUSTOMERS[i % CUSTOMERS.len()].to_string(),
                price: Decimal::new(price_cents, 2),
                quantity: (i % 6 + 1) as i64,
                payment_type: Some(PAYMENTS[i % PAYMENTS.len()]),
            }
        })
        .collect()
}
