//! 工作簿扫描的集成测试
//!
//! 用 rust_xlsxwriter 生成真实的 xlsx 夹具再扫描。

use job_filter_rust::scanner;
use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::Path;
use tempfile::tempdir;

fn conds(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// 三个工作表：岗位数据、完全空表、第二份岗位数据
fn create_jobs_workbook(path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();

    let sheet1 = workbook.add_worksheet();
    sheet1.set_name("岗位信息")?;
    sheet1.write_string(0, 0, "岗位名称")?;
    sheet1.write_string(0, 1, "工作地点")?;
    sheet1.write_string(0, 2, "学历要求")?;
    sheet1.write_string(0, 3, "人数")?;
    sheet1.write_string(1, 0, "电气工程师")?;
    sheet1.write_string(1, 1, "江苏省南京市")?;
    sheet1.write_string(1, 2, "本科")?;
    sheet1.write_number(1, 3, 3.0)?;
    sheet1.write_string(2, 0, "机械工程师")?;
    sheet1.write_string(2, 1, "北京市")?;
    sheet1.write_string(2, 2, "硕士")?;
    sheet1.write_number(2, 3, 2.0)?;
    sheet1.write_string(3, 0, "电气工程师(试用)")?;
    sheet1.write_string(3, 1, "江苏省苏州市")?;
    sheet1.write_number(3, 3, 5.0)?;

    let empty = workbook.add_worksheet();
    empty.set_name("空表")?;

    let sheet2 = workbook.add_worksheet();
    sheet2.set_name("备用岗位")?;
    sheet2.write_string(0, 0, "岗位名称")?;
    sheet2.write_string(0, 1, "工作地点")?;
    sheet2.write_string(1, 0, "电气工程助理")?;
    sheet2.write_string(1, 1, "江苏省无锡市")?;

    workbook.save(path)?;
    Ok(())
}

#[test]
fn test_scan_all_sheets_in_order() {
    let dir = tempdir().expect("临时目录创建失败");
    let path = dir.path().join("jobs.xlsx");
    create_jobs_workbook(&path).expect("夹具生成失败");

    let results = scanner::scan_workbook(&path, &conds(&["电气工程", "江苏"])).unwrap();

    // 工作表按工作簿顺序，表内按行顺序，序号跨表统一
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].sheet, "岗位信息");
    assert_eq!(results[0].row_number, 2);
    assert_eq!(results[1].sheet, "岗位信息");
    assert_eq!(results[1].row_number, 4);
    assert_eq!(results[2].sheet, "备用岗位");
    assert_eq!(results[2].row_number, 2);
}

#[test]
fn test_scan_evidence_entries() {
    let dir = tempdir().expect("临时目录创建失败");
    let path = dir.path().join("jobs.xlsx");
    create_jobs_workbook(&path).expect("夹具生成失败");

    let results = scanner::scan_workbook(&path, &conds(&["电气工程", "江苏"])).unwrap();

    assert_eq!(
        results[0].evidence,
        vec![
            "'电气工程' 在列 '岗位名称': 电气工程师",
            "'江苏' 在列 '工作地点': 江苏省南京市",
        ]
    );
}

#[test]
fn test_scan_no_matches() {
    let dir = tempdir().expect("临时目录创建失败");
    let path = dir.path().join("jobs.xlsx");
    create_jobs_workbook(&path).expect("夹具生成失败");

    let results = scanner::scan_workbook(&path, &conds(&["电气工程", "广东"])).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_scan_numeric_cells_searchable() {
    let dir = tempdir().expect("临时目录创建失败");
    let path = dir.path().join("jobs.xlsx");
    create_jobs_workbook(&path).expect("夹具生成失败");

    // 数值 5.0 以 "5" 参与搜索
    let results = scanner::scan_workbook(&path, &conds(&["苏州", "5"])).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].row_number, 4);
    assert!(results[0].evidence.contains(&"'5' 在列 '人数': 5".to_string()));
}

#[test]
fn test_scan_single_column_rows() {
    let dir = tempdir().expect("临时目录创建失败");
    let path = dir.path().join("simple.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Sheet1").unwrap();
    sheet.write_string(0, 0, "岗位描述").unwrap();
    sheet.write_string(1, 0, "Engineer, Jiangsu").unwrap();
    sheet.write_string(2, 0, "Engineer, Beijing").unwrap();
    workbook.save(&path).unwrap();

    let results = scanner::scan_workbook(&path, &conds(&["Engineer", "Jiangsu"])).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].row_number, 2);
}

#[test]
fn test_scan_blank_row_gap_numbering() {
    let dir = tempdir().expect("临时目录创建失败");
    let path = dir.path().join("gaps.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("表一").unwrap();
    sheet.write_string(0, 0, "岗位").unwrap();
    sheet.write_string(1, 0, "工程师A").unwrap();
    // 第3行（数据行下标1）整行留空
    sheet.write_string(3, 0, "工程师B").unwrap();
    workbook.save(&path).unwrap();

    let results = scanner::scan_workbook(&path, &conds(&["工程师"])).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].row_number, 2);
    assert_eq!(results[1].row_number, 4);
}

#[test]
fn test_scan_header_only_sheet_yields_nothing() {
    let dir = tempdir().expect("临时目录创建失败");
    let path = dir.path().join("header_only.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("仅表头").unwrap();
    sheet.write_string(0, 0, "岗位名称").unwrap();
    workbook.save(&path).unwrap();

    let results = scanner::scan_workbook(&path, &conds(&["岗位"])).unwrap();
    // 表头行不参与匹配
    assert!(results.is_empty());
}

#[test]
fn test_scan_monotonic_in_conditions() {
    let dir = tempdir().expect("临时目录创建失败");
    let path = dir.path().join("jobs.xlsx");
    create_jobs_workbook(&path).expect("夹具生成失败");

    let base = scanner::scan_workbook(&path, &conds(&["工程"])).unwrap();
    let narrowed = scanner::scan_workbook(&path, &conds(&["工程", "江苏"])).unwrap();

    // 加条件只会减少匹配
    assert!(narrowed.len() <= base.len());
    for result in &narrowed {
        assert!(base
            .iter()
            .any(|r| r.sheet == result.sheet && r.row_number == result.row_number));
    }
}

#[tokio::test]
async fn test_scan_workbook_task() {
    let dir = tempdir().expect("临时目录创建失败");
    let path = dir.path().join("jobs.xlsx");
    create_jobs_workbook(&path).expect("夹具生成失败");

    let results = scanner::scan_workbook_task(path, conds(&["电气工程", "江苏"]))
        .await
        .unwrap();
    assert_eq!(results.len(), 3);
}
