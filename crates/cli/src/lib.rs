// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod commands;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

pub(crate) fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub(crate) fn format_ts(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|d| d.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
        .unwrap_or_else(|| ts.to_string())
}
