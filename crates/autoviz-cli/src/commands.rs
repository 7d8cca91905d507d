use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;
use tracing::{info, info_span};

use autoviz_classify::{METRIC_INELIGIBLE, classify, score_as_dimension, score_as_metric};
use autoviz_ingest::{TableData, read_csv_path};
use autoviz_model::{Classification, DatasetProfile};
use autoviz_profile::profile_rows;

use crate::cli::{AnalyzeArgs, ReportFormatArg, RolesArgs};
use crate::report::{print_classification, print_roles};

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let span = info_span!("analyze", file = %args.file.display());
    let _guard = span.enter();

    let (_table, profile, result) = load_and_classify(&args.file)?;
    match args.format {
        ReportFormatArg::Json => {
            let rendered =
                serde_json::to_string_pretty(&result).context("serialize classification")?;
            println!("{rendered}");
        }
        ReportFormatArg::Table => print_classification(&profile, &result),
    }
    Ok(())
}

pub fn run_roles(args: &RolesArgs) -> Result<()> {
    let span = info_span!("roles", file = %args.file.display());
    let _guard = span.enter();

    let (table, profile, result) = load_and_classify(&args.file)?;

    match args.format {
        ReportFormatArg::Json => {
            let columns: Vec<serde_json::Value> = profile
                .columns
                .iter()
                .map(|column| {
                    let metric_score = score_as_metric(column, &profile, &table.rows);
                    let metric_score = (metric_score > METRIC_INELIGIBLE).then_some(metric_score);
                    json!({
                        "name": column.name,
                        "type": column.column_type.as_str(),
                        "unique": column.unique_count,
                        "nulls": column.null_count,
                        "metric_score": metric_score,
                        "dimension_score": score_as_dimension(column, &profile, &table.rows),
                    })
                })
                .collect();
            let rendered = serde_json::to_string_pretty(&json!({
                "columns": columns,
                "roles": result.column_roles,
            }))
            .context("serialize roles")?;
            println!("{rendered}");
        }
        ReportFormatArg::Table => print_roles(&profile, &result, &table.rows),
    }
    Ok(())
}

fn load_and_classify(file: &Path) -> Result<(TableData, DatasetProfile, Classification)> {
    let table = read_csv_path(file).with_context(|| format!("read {}", file.display()))?;
    let profile = profile_rows(&table.headers, &table.rows, table.source.clone());
    info!(
        rows = profile.row_count,
        columns = profile.column_count,
        "profiled dataset"
    );
    let result = classify(&profile, &table.rows);
    Ok((table, profile, result))
}
