use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::Local;
use csv::{Writer, WriterBuilder};

use crate::error::Result;
use crate::types::{DerivedGift, ExportView, MergedGift};

const EXPORT_VIEW_HEADERS: [&str; 16] = [
    "Last Name",
    "First Name",
    "Banner_ID",
    "Designation Amount",
    "Designation Code",
    "Other Designation",
    "Solicitation Code",
    "Transaction ID",
    "Transaction Number",
    "Anonymous",
    "Gift Matching",
    "Tribute Type",
    "Tribute Occasion",
    "Tribute Notification Name",
    "Tribute Notification Address",
    "Tribute Comments",
];

const GIFT_ADMIN_HEADERS: [&str; 29] = [
    "settle_date",
    "last_name",
    "first_name",
    "c_last_name",
    "c_first_name",
    "banner_id",
    "pledge_number",
    "amount",
    "pay_method",
    "fund",
    "other_designation",
    "description",
    "tribute_type",
    "tribute_occasion",
    "tribute_notification_name",
    "tribute_notification_address",
    "tribute_comments",
    "anonymous",
    "gcls_code_3",
    "memr_in_honor",
    "next_of_Kin",
    "comments",
    "solc_org",
    "solc_code",
    "match_received",
    "gift_matching",
    "tran_type",
    "C_User ID",
    "C_Batch #",
];

const DATA_SERV_HEADERS: [&str; 21] = [
    "Settle Date",
    "Donor ID",
    "Last Name",
    "First Name",
    "C_Last Name",
    "C_First Name",
    "Address 1",
    "Address 2",
    "City",
    "State",
    "Zip",
    "Phone Type",
    "Phone",
    "Email",
    "C_Address 1",
    "C_Address 2",
    "C_City",
    "C_State",
    "C_Zip",
    "C_Phone",
    "C_Email",
];

/// Where one run writes its artifacts: the ExportView report and cleaned
/// settlement copy land at the output root, the two timestamped reports
/// under `reports/`.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
    reports_dir: PathBuf,
    timestamp: String,
}

impl OutputLayout {
    /// Creates the output directories if absent and deletes every CSV left
    /// behind in `reports/`; that directory is scratch space for the
    /// current run only.
    pub fn prepare(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let reports_dir = root.join("reports");
        fs::create_dir_all(&reports_dir)?;
        for entry in fs::read_dir(&reports_dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "csv") {
                fs::remove_file(&path)?;
            }
        }
        let timestamp = Local::now().format("%Y-%m-%d_%I_%M_%S").to_string();
        Ok(Self {
            root,
            reports_dir,
            timestamp,
        })
    }

    pub fn export_view_report(&self) -> PathBuf {
        self.root.join("imod_report.csv")
    }

    /// The cleaned settlement copy sits next to the reports, named after the
    /// source file.
    pub fn cleaned_copy(&self, source: &Path) -> PathBuf {
        let name = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "converge_report.csv".to_string());
        self.root.join(format!("new_{name}"))
    }

    pub fn gift_admin_report(&self) -> PathBuf {
        self.reports_dir
            .join(format!("{}_gift_admin.csv", self.timestamp))
    }

    pub fn data_serv_report(&self) -> PathBuf {
        self.reports_dir
            .join(format!("{}_data_serv.csv", self.timestamp))
    }
}

/// Renders the standalone ExportView report, in join order.
pub fn write_export_view_report(path: &Path, rows: &[ExportView]) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(EXPORT_VIEW_HEADERS)?;
    for row in rows {
        writer.write_record([
            opt(&row.last_name),
            opt(&row.first_name),
            opt(&row.banner_id),
            opt(&row.designation_amount),
            opt(&row.desg_code),
            opt(&row.other_designation),
            opt(&row.solicitation_code),
            row.trans_id.as_str(),
            opt(&row.trans_number),
            opt(&row.anonymous),
            opt(&row.gift_matching),
            opt(&row.tribute_type),
            opt(&row.tribute_occasion),
            opt(&row.tribute_notification_name),
            opt(&row.tribute_notification_address),
            opt(&row.tribute_comments),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the cleaned settlement rows back out in their source column order.
pub fn write_cleaned_copy(path: &Path, rows: &[Vec<String>]) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Streams the primary ledger report: one row per split/parent in sort order
/// (split first), a separator row, then the settlement source's own
/// overall-totals row, verbatim.
pub fn write_gift_admin_report(
    path: &Path,
    gifts: &[DerivedGift],
    overall_totals: &[String],
) -> Result<()> {
    let mut writer = WriterBuilder::new().flexible(true).from_path(path)?;
    writer.write_record(GIFT_ADMIN_HEADERS)?;
    for derived in gifts {
        if let Some(split) = &derived.split {
            write_ledger_row(&mut writer, split)?;
        }
        write_ledger_row(&mut writer, &derived.gift)?;
    }
    writer.write_record([""])?;
    writer.write_record(overall_totals)?;
    writer.flush()?;
    Ok(())
}

// Column positions, not the header names, are the contract with the
// downstream import: the two placeholder columns stay empty and the
// gift_matching/match_received pair keeps its historical order.
fn write_ledger_row(writer: &mut Writer<File>, gift: &MergedGift) -> Result<()> {
    writer.write_record([
        gift.settle_date.as_str(),
        opt(&gift.last_name),
        opt(&gift.first_name),
        opt(&gift.c_last_name),
        opt(&gift.c_first_name),
        opt(&gift.banner_id),
        opt(&gift.pledge_number),
        opt(&gift.designation_amount),
        opt(&gift.card_description),
        opt(&gift.desg_code),
        opt(&gift.other_designation),
        opt(&gift.gift_description),
        opt(&gift.tribute_type),
        opt(&gift.tribute_occasion),
        opt(&gift.tribute_notification_name),
        opt(&gift.tribute_notification_address),
        opt(&gift.tribute_comments),
        opt(&gift.anonymous),
        "",
        opt(&gift.mem_in_honor),
        opt(&gift.next_of_kin),
        opt(&gift.comments),
        "",
        opt(&gift.solicitation_code),
        opt(&gift.gift_matching),
        opt(&gift.match_received),
        opt(&gift.tran_type),
        opt(&gift.user_id),
        opt(&gift.batch_num),
    ])?;
    Ok(())
}

/// Streams the contact report: 21 headers, one row per parent gift with the
/// 14 core values, extended with the payer-contact columns only when the
/// row matched nothing on the CRM side.
pub fn write_data_serv_report(path: &Path, gifts: &[DerivedGift]) -> Result<()> {
    let mut writer = WriterBuilder::new().flexible(true).from_path(path)?;
    writer.write_record(DATA_SERV_HEADERS)?;
    for derived in gifts {
        let gift = &derived.gift;
        let mut row: Vec<&str> = vec![
            gift.settle_date.as_str(),
            opt(&gift.banner_id),
            opt(&gift.last_name),
            opt(&gift.first_name),
            opt(&gift.c_last_name),
            opt(&gift.c_first_name),
            opt(&gift.address_1),
            opt(&gift.address_2),
            opt(&gift.city),
            opt(&gift.state),
            opt(&gift.zip),
            opt(&gift.phone_type),
            opt(&gift.phone_number),
            opt(&gift.email),
        ];
        if gift.last_name.is_none() {
            row.extend([
                opt(&gift.c_address_1),
                opt(&gift.c_address_2),
                opt(&gift.c_city),
                opt(&gift.c_state),
                opt(&gift.c_zip),
                opt(&gift.c_phone_number),
                opt(&gift.c_email),
            ]);
        }
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}
