//! Text and JSON rendering of catalog results.

use std::fmt::Write;

use anyhow::Result;
use serde::Serialize;

use crate::domain::Content;

const TITLE_WIDTH: usize = 40;

/// Render items as a fixed-width table
pub fn table<'a>(items: impl IntoIterator<Item = &'a Content>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6} {:<42} {:<12} {:>6} {:>6} {:>8}",
        "ID", "TITLE", "GENRE", "MIN", "AGE", "VIEWS"
    );
    let _ = writeln!(out, "{}", "-".repeat(85));

    let mut count = 0;
    for item in items {
        let _ = writeln!(
            out,
            "{:<6} {:<42} {:<12} {:>6} {:>6} {:>8}",
            item.id().to_string(),
            truncate(item.title()),
            item.genre().to_string(),
            item.length_minutes(),
            item.age_rating().to_string(),
            item.views()
        );
        count += 1;
    }

    let _ = writeln!(out, "\nTotal: {} items", count);
    out
}

/// Render a single item as a detail block
pub fn detail(item: &Content) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  ID:      {}", item.id());
    let _ = writeln!(out, "  Title:   {}", item.title());
    let _ = writeln!(out, "  Genre:   {}", item.genre());
    let _ = writeln!(out, "  Length:  {} min", item.length_minutes());
    let _ = writeln!(out, "  Rating:  {}", item.age_rating());
    let _ = writeln!(out, "  Views:   {}", item.views());
    let _ = writeln!(out, "  Added:   {}", item.added_at());
    out
}

/// Render any serializable value as pretty JSON
pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn truncate(title: &str) -> String {
    if title.chars().count() > TITLE_WIDTH {
        let head: String = title.chars().take(TITLE_WIDTH - 3).collect();
        format!("{}...", head)
    } else {
        title.to_string()
    }
}
