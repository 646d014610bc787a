use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use giftrecon_parser::{DesignationLoader, ExportLoader, PaymentLoader};

use crate::derive::derive_gifts;
use crate::error::{PipelineError, Result};
use crate::ordering::sort_gifts;
use crate::reports::{
    write_cleaned_copy, write_data_serv_report, write_export_view_report, write_gift_admin_report,
    OutputLayout,
};
use crate::store::StagingStore;

/// One reconciliation run: the three source paths and the output root.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub converge_report: PathBuf,
    pub imod_export: PathBuf,
    pub imod_designations: PathBuf,
    pub output_dir: PathBuf,
}

/// What a completed run produced, printed by the CLI as a JSON receipt.
#[derive(Debug, Serialize)]
pub struct RunReceipt {
    pub designation_records: usize,
    pub export_records: usize,
    pub payment_records: usize,
    pub export_view_rows: usize,
    pub merged_gifts: usize,
    pub split_gifts: usize,
    pub export_view_report: PathBuf,
    pub cleaned_settlement_copy: PathBuf,
    pub gift_admin_report: PathBuf,
    pub data_serv_report: PathBuf,
}

/// Runs the whole batch: directory hygiene, the three loads, the two joins,
/// derivation, ordering, and the four emitted files. All state is threaded
/// through as values. A fatal load error aborts before any report is
/// written; a failure while streaming the two timestamped reports can leave
/// a partial file, which callers must treat as invalid and regenerate.
pub fn run(config: &RunConfig) -> Result<RunReceipt> {
    let layout = OutputLayout::prepare(&config.output_dir)?;

    let designations = DesignationLoader::load(&read_source(&config.imod_designations)?)?;
    let exports = ExportLoader::load(&read_source(&config.imod_export)?)?;
    let batch = PaymentLoader::load(&read_source(&config.converge_report)?)?;

    let designation_records = designations.len();
    let export_records = exports.len();
    let payment_records = batch.records.len();

    let store = StagingStore::new(designations, exports, batch.records);

    let export_view = store.export_view();
    let export_view_report = layout.export_view_report();
    write_export_view_report(&export_view_report, &export_view)?;
    info!(path = %export_view_report.display(), rows = export_view.len(), "export view report written");

    let cleaned_settlement_copy = layout.cleaned_copy(&config.converge_report);
    write_cleaned_copy(&cleaned_settlement_copy, &batch.cleaned_rows)?;
    info!(path = %cleaned_settlement_copy.display(), "cleaned settlement copy written");

    let merged = store.merged_gifts(&export_view);
    let mut derived = derive_gifts(merged);
    sort_gifts(&mut derived);

    let split_gifts = derived.iter().filter(|d| d.split.is_some()).count();

    let gift_admin_report = layout.gift_admin_report();
    write_gift_admin_report(&gift_admin_report, &derived, &batch.overall_totals)?;
    info!(path = %gift_admin_report.display(), rows = derived.len() + split_gifts, "gift admin report written");

    let data_serv_report = layout.data_serv_report();
    write_data_serv_report(&data_serv_report, &derived)?;
    info!(path = %data_serv_report.display(), rows = derived.len(), "data services report written");

    Ok(RunReceipt {
        designation_records,
        export_records,
        payment_records,
        export_view_rows: export_view.len(),
        merged_gifts: derived.len(),
        split_gifts,
        export_view_report,
        cleaned_settlement_copy,
        gift_admin_report,
        data_serv_report,
    })
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })
}
