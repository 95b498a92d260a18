//! Excel export functionality

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use pallet_types::{Error, Result};

use crate::app::PlanResult;
use crate::export::cell_map::{parse_cell_ref, CellMap};

/// Export a plan to a report workbook (allocation sheet + summary sheet)
pub fn export_report(plan: &PlanResult, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let allocation_sheet = workbook.add_worksheet();
    write_allocation_sheet(allocation_sheet, plan)?;

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, plan)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Template(e.to_string()))?;

    Ok(())
}

fn write_allocation_sheet(sheet: &mut Worksheet, plan: &PlanResult) -> Result<()> {
    sheet
        .set_name("割付結果")
        .map_err(|e| Error::Template(e.to_string()))?;

    let header_format = Format::new().set_bold();

    let headers = ["パレット", "品名", "数量", "単重(kg)", "重量(kg)"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Template(e.to_string()))?;
    }

    for (row_idx, line) in plan.lines.iter().enumerate() {
        let row = (row_idx + 1) as u32;

        let label = line.assignment.label();
        sheet
            .write_string(row, 0, label.as_str())
            .map_err(|e| Error::Template(e.to_string()))?;
        sheet
            .write_string(row, 1, &line.display_name)
            .map_err(|e| Error::Template(e.to_string()))?;
        sheet
            .write_number(row, 2, line.quantity)
            .map_err(|e| Error::Template(e.to_string()))?;
        if let Some(unit_weight) = line.unit_weight_kg {
            sheet
                .write_number(row, 3, unit_weight)
                .map_err(|e| Error::Template(e.to_string()))?;
        }
        sheet
            .write_number(row, 4, line.total_weight_kg)
            .map_err(|e| Error::Template(e.to_string()))?;
    }

    sheet
        .set_column_width(1, 30)
        .map_err(|e| Error::Template(e.to_string()))?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, plan: &PlanResult) -> Result<()> {
    sheet
        .set_name("集計")
        .map_err(|e| Error::Template(e.to_string()))?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "パレット", &header_format)
        .map_err(|e| Error::Template(e.to_string()))?;
    sheet
        .write_string_with_format(0, 1, "合計重量(kg)", &header_format)
        .map_err(|e| Error::Template(e.to_string()))?;

    let mut row: u32 = 1;
    for summary in &plan.summaries {
        sheet
            .write_number(row, 0, summary.pallet_no as f64)
            .map_err(|e| Error::Template(e.to_string()))?;
        sheet
            .write_number(row, 1, summary.total_weight_kg)
            .map_err(|e| Error::Template(e.to_string()))?;
        row += 1;
    }

    sheet
        .write_string_with_format(row, 0, "総計", &header_format)
        .map_err(|e| Error::Template(e.to_string()))?;
    sheet
        .write_number(row, 1, plan.grand_total_kg)
        .map_err(|e| Error::Template(e.to_string()))?;

    if !plan.unmatched_keys.is_empty() {
        let note_row = row + 2;
        sheet
            .write_string_with_format(note_row, 0, "マスタ未登録", &header_format)
            .map_err(|e| Error::Template(e.to_string()))?;
        for (i, key) in plan.unmatched_keys.iter().enumerate() {
            sheet
                .write_string(note_row + 1 + i as u32, 0, key)
                .map_err(|e| Error::Template(e.to_string()))?;
        }
    }

    Ok(())
}

/// Fill the print template from the plain pallet → weight mapping.
///
/// Takes only the summary map, the grand total, and the date: the template
/// side needs no knowledge of allocation internals, and overflow lines are
/// already excluded from the mapping. Template problems never invalidate
/// the computed plan, which stays available for a retry.
pub fn fill_template(
    summary: &BTreeMap<u32, f64>,
    grand_total_kg: f64,
    cell_map: &CellMap,
    date: NaiveDate,
    output_path: &Path,
) -> Result<()> {
    if let Some((&highest, _)) = summary.iter().next_back() {
        if highest as usize > cell_map.max_pallets() {
            return Err(Error::Template(format!(
                "cell map covers {} pallets, plan uses pallet {}",
                cell_map.max_pallets(),
                highest
            )));
        }
    }

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet
        .set_name("出荷表")
        .map_err(|e| Error::Template(e.to_string()))?;

    for (index, cell) in cell_map.pallet_cells.iter().enumerate() {
        let pallet_no = (index + 1) as u32;
        if let Some(&weight) = summary.get(&pallet_no) {
            let (row, col) = parse_cell_ref(cell)?;
            sheet
                .write_number(row, col, weight)
                .map_err(|e| Error::Template(e.to_string()))?;
        }
    }

    let (row, col) = parse_cell_ref(&cell_map.grand_total_cell)?;
    sheet
        .write_number(row, col, grand_total_kg)
        .map_err(|e| Error::Template(e.to_string()))?;

    let date_cells = [
        (&cell_map.date_cells.year, date.year() as f64),
        (&cell_map.date_cells.month, date.month() as f64),
        (&cell_map.date_cells.day, date.day() as f64),
    ];
    for (cell, value) in date_cells {
        let (row, col) = parse_cell_ref(cell)?;
        sheet
            .write_number(row, col, value)
            .map_err(|e| Error::Template(e.to_string()))?;
    }

    workbook
        .save(output_path)
        .map_err(|e| Error::Template(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::PlanLine;
    use pallet_domain::model::{PalletAssignment, PalletSummary};

    fn sample_plan() -> PlanResult {
        PlanResult {
            lines: vec![
                PlanLine {
                    assignment: PalletAssignment::Assigned(1),
                    display_name: "部品A".to_string(),
                    quantity: 2.0,
                    unit_weight_kg: Some(150.0),
                    total_weight_kg: 300.0,
                },
                PlanLine {
                    assignment: PalletAssignment::Overflow(1),
                    display_name: "部品C".to_string(),
                    quantity: 1.0,
                    unit_weight_kg: Some(600.0),
                    total_weight_kg: 600.0,
                },
            ],
            summaries: vec![PalletSummary {
                pallet_no: 1,
                total_weight_kg: 300.0,
                over_capacity: false,
            }],
            grand_total_kg: 300.0,
            unmatched_keys: vec!["未登録品".to_string()],
            capacity_kg: 500.0,
        }
    }

    #[test]
    fn test_export_report_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");
        export_report(&sample_plan(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_fill_template_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.xlsx");

        let plan = sample_plan();
        let date = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        fill_template(
            &plan.summary_map(),
            plan.grand_total_kg,
            &CellMap::default(),
            date,
            &path,
        )
        .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_fill_template_rejects_too_many_pallets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.xlsx");

        let mut summary = BTreeMap::new();
        summary.insert(7u32, 100.0);

        let err = fill_template(&summary, 100.0, &CellMap::default(), NaiveDate::MIN, &path)
            .unwrap_err();
        assert!(matches!(err, Error::Template(_)));
        assert!(!path.exists());
    }
}
