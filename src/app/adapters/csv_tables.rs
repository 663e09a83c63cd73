//! CSV-backed table providers
//!
//! This module loads the two tabular inputs from CSV files and writes the
//! enriched request table back out. Upstream systems export under varying
//! headers; the configured column mappings translate them. This is one
//! provider implementation; the engine itself only ever sees in-memory
//! row batches.

use crate::app::models::{ApplicationType, ReferenceRow, RequestRow, TargetOrg};
use crate::config::{ReferenceColumns, RequestColumns};
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Header-to-index mapping for one CSV table
#[derive(Debug, Clone)]
struct HeaderIndex {
    file: String,
    name_to_index: HashMap<String, usize>,
}

impl HeaderIndex {
    fn analyze(file: &Path, headers: &StringRecord) -> Self {
        let mut name_to_index = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            name_to_index.insert(header.trim().to_string(), index);
        }
        Self {
            file: file.display().to_string(),
            name_to_index,
        }
    }

    /// Ensure every listed column is present in the header
    fn require(&self, columns: &[&str]) -> Result<()> {
        for column in columns {
            if !self.name_to_index.contains_key(*column) {
                return Err(Error::missing_column(&self.file, *column));
            }
        }
        Ok(())
    }

    /// Get a required field from a record; the header was checked up front
    fn field<'r>(&self, record: &'r StringRecord, column: &str, row: usize) -> Result<&'r str> {
        let index = self
            .name_to_index
            .get(column)
            .copied()
            .ok_or_else(|| Error::missing_column(&self.file, column))?;
        record.get(index).ok_or_else(|| {
            Error::invalid_field(
                &self.file,
                row,
                format!("record has no value at column '{}'", column),
            )
        })
    }
}

/// Load a request table from a CSV file
///
/// An empty `remarks` cell loads as an absent value. Derived columns are
/// optional in the input; when present they are loaded so an already
/// enriched table can round-trip.
pub fn load_request_table(path: &Path, columns: &RequestColumns) -> Result<Vec<RequestRow>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        Error::csv_parsing(path.display().to_string(), "failed to open table", Some(e))
    })?;

    let headers = reader.headers()?.clone();
    let index = HeaderIndex::analyze(path, &headers);
    index.require(&columns.required())?;

    let mut rows = Vec::new();
    for (pos, record) in reader.records().enumerate() {
        // Header is line 1; data rows report their file line
        let row_number = pos + 2;
        let record = record.map_err(|e| {
            Error::csv_parsing(path.display().to_string(), "failed to read record", Some(e))
        })?;

        let application_type: ApplicationType = index
            .field(&record, &columns.application_type, row_number)?
            .parse()
            .map_err(|e: Error| {
                Error::invalid_field(path.display().to_string(), row_number, e.to_string())
            })?;
        let target_org: TargetOrg = index
            .field(&record, &columns.target_org, row_number)?
            .parse()
            .map_err(|e: Error| {
                Error::invalid_field(path.display().to_string(), row_number, e.to_string())
            })?;

        let remarks = index.field(&record, &columns.remarks, row_number)?;

        let mut row = RequestRow::new(
            application_type,
            target_org,
            index.field(&record, &columns.branch_code, row_number)?,
            index.field(&record, &columns.section_gr_code, row_number)?,
            index.field(&record, &columns.area_code, row_number)?,
            index.field(&record, &columns.branch_name, row_number)?,
            if remarks.is_empty() {
                None
            } else {
                Some(remarks.to_string())
            },
        );

        // Optional derived columns from a previous enrichment
        if let Ok(value) = index.field(&record, &columns.internal_sales_dept_code, row_number) {
            if !value.is_empty() {
                row.internal_sales_dept_code = Some(value.to_string());
            }
        }
        if let Ok(value) = index.field(&record, &columns.internal_sales_dept_name, row_number) {
            row.internal_sales_dept_name = value.to_string();
        }
        if let Ok(value) = index.field(&record, &columns.reference_bpr_target_flag, row_number) {
            row.reference_bpr_target_flag = value.to_string();
        }

        rows.push(row);
    }

    info!("loaded {} request rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load a reference snapshot table from a CSV file
pub fn load_reference_table(path: &Path, columns: &ReferenceColumns) -> Result<Vec<ReferenceRow>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        Error::csv_parsing(path.display().to_string(), "failed to open table", Some(e))
    })?;

    let headers = reader.headers()?.clone();
    let index = HeaderIndex::analyze(path, &headers);
    index.require(&columns.all())?;

    let mut rows = Vec::new();
    for (pos, record) in reader.records().enumerate() {
        let row_number = pos + 2;
        let record = record.map_err(|e| {
            Error::csv_parsing(path.display().to_string(), "failed to read record", Some(e))
        })?;

        rows.push(ReferenceRow {
            branch_code_jinji: index
                .field(&record, &columns.branch_code_jinji, row_number)?
                .to_string(),
            section_gr_code_jinji: index
                .field(&record, &columns.section_gr_code_jinji, row_number)?
                .to_string(),
            area_code: index
                .field(&record, &columns.area_code, row_number)?
                .to_string(),
            parent_branch_code: index
                .field(&record, &columns.parent_branch_code, row_number)?
                .to_string(),
            bpr_target_flag: index
                .field(&record, &columns.bpr_target_flag, row_number)?
                .to_string(),
            organization_name_kana: index
                .field(&record, &columns.organization_name_kana, row_number)?
                .to_string(),
        });
    }

    debug!(
        "loaded {} reference rows from {}",
        rows.len(),
        path.display()
    );
    Ok(rows)
}

/// Write a request table, including derived columns, to a CSV file
///
/// Columns are written under the configured names so the output matches
/// whatever header convention the input used. An absent dept code and
/// absent remarks serialize as empty cells.
pub fn write_request_table(
    path: &Path,
    rows: &[RequestRow],
    columns: &RequestColumns,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        Error::csv_parsing(path.display().to_string(), "failed to create table", Some(e))
    })?;

    writer.write_record(columns.all())?;

    for row in rows {
        writer.write_record([
            row.application_type.as_str(),
            row.target_org.as_str(),
            row.branch_code.as_str(),
            row.section_gr_code.as_str(),
            row.area_code.as_str(),
            row.branch_name.as_str(),
            row.remarks.as_deref().unwrap_or(""),
            row.internal_sales_dept_code.as_deref().unwrap_or(""),
            row.internal_sales_dept_name.as_str(),
            row.reference_bpr_target_flag.as_str(),
        ])?;
    }

    writer.flush()?;
    info!("wrote {} request rows to {}", rows.len(), path.display());
    Ok(())
}
