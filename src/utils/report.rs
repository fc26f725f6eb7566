use crate::domain::model::{CourtDates, PathSet, Person};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Tsv,
}

#[derive(Debug, Serialize)]
struct CourtDateRow<'a> {
    court_id: &'a str,
    date: Option<String>,
}

#[derive(Debug, Serialize)]
struct PersonRow<'a> {
    id: i64,
    name_first: &'a str,
    name_last: &'a str,
    date_dod: Option<String>,
}

#[derive(Debug, Serialize)]
struct PathRow<'a> {
    local_path: &'a str,
}

fn delimited<T: Serialize>(rows: impl IntoIterator<Item = T>, delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn render<T: Serialize, J: Serialize + ?Sized>(
    rows: Vec<T>,
    json: &J,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(json)?),
        OutputFormat::Csv => delimited(rows, b','),
        OutputFormat::Tsv => delimited(rows, b'\t'),
    }
}

pub fn render_court_dates(dates: &CourtDates, format: OutputFormat) -> Result<String> {
    let rows = dates
        .iter()
        .map(|(court_id, date)| CourtDateRow {
            court_id,
            date: date.map(|d| d.to_string()),
        })
        .collect();
    render(rows, dates, format)
}

pub fn render_people(people: &[Person], format: OutputFormat) -> Result<String> {
    let rows = people
        .iter()
        .map(|p| PersonRow {
            id: p.id,
            name_first: &p.name_first,
            name_last: &p.name_last,
            date_dod: p.date_dod.map(|d| d.to_string()),
        })
        .collect();
    render(rows, people, format)
}

pub fn render_paths(paths: &PathSet, format: OutputFormat) -> Result<String> {
    let rows = paths
        .iter()
        .map(|p| PathRow { local_path: p })
        .collect();
    render(rows, paths, format)
}
