use crate::core::domain::Event;
use crate::error::{LoadError, LoadResult};
use crate::parsing::headers::Field;
use crate::parsing::normalize::{
    join_time_range, normalize_date, normalize_status, split_attendees,
};
use crate::parsing::BYTE_ORDER_MARK;

/// Column positions of each logical field within a header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub center: Option<usize>,
    pub date: Option<usize>,
    pub time: Option<usize>,
    pub start_time: Option<usize>,
    pub end_time: Option<usize>,
    pub responsible: Option<usize>,
    pub status: Option<usize>,
    pub shift: Option<usize>,
    pub area: Option<usize>,
    pub attendees: Option<usize>,
}

impl ColumnMap {
    /// Resolve every field against a header row.
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        Self {
            center: Field::Center.locate(headers),
            date: Field::Date.locate(headers),
            time: Field::Time.locate(headers),
            start_time: Field::StartTime.locate(headers),
            end_time: Field::EndTime.locate(headers),
            responsible: Field::Responsible.locate(headers),
            status: Field::Status.locate(headers),
            shift: Field::Shift.locate(headers),
            area: Field::Area.locate(headers),
            attendees: Field::Attendees.locate(headers),
        }
    }

    /// Number of fields found in the header row.
    pub fn resolved(&self) -> usize {
        [
            self.center,
            self.date,
            self.time,
            self.start_time,
            self.end_time,
            self.responsible,
            self.status,
            self.shift,
            self.area,
            self.attendees,
        ]
        .iter()
        .filter(|position| position.is_some())
        .count()
    }
}

/// Parse a tab-separated export into events.
///
/// A leading byte-order mark and surrounding whitespace are stripped, empty
/// lines are skipped, and the first remaining line is the header row.
///
/// # Returns
/// * `Ok(events)` - adapted events in row order (blank rows dropped)
/// * `Err(LoadError::EmptyResult)` - no body, or no data line after the header
pub fn parse_events_tsv(text: &str) -> LoadResult<Vec<Event>> {
    let clean = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text).trim();
    if clean.is_empty() {
        return Err(LoadError::EmptyResult("TSV body is empty".to_string()));
    }

    let lines: Vec<&str> = clean.lines().filter(|line| !line.is_empty()).collect();
    let Some((header_line, data_lines)) = lines.split_first() else {
        return Err(LoadError::EmptyResult("TSV body is empty".to_string()));
    };
    if data_lines.is_empty() {
        return Err(LoadError::EmptyResult(
            "TSV has a header line but no data lines".to_string(),
        ));
    }

    let headers: Vec<&str> = header_line.split('\t').collect();
    let columns = ColumnMap::from_headers(&headers);
    log::debug!(
        "TSV header resolved {}/{} fields: {:?}",
        columns.resolved(),
        Field::ALL.len(),
        columns
    );

    Ok(data_lines
        .iter()
        .filter_map(|line| {
            let cells: Vec<&str> = line.split('\t').collect();
            adapt_tsv_row(&columns, &cells)
        })
        .collect())
}

/// Adapt one data row read by column position.
///
/// Missing positions and short rows read as empty strings. Returns `None`
/// when center, date and time are all empty.
pub fn adapt_tsv_row<S: AsRef<str>>(columns: &ColumnMap, cells: &[S]) -> Option<Event> {
    let cell = |position: Option<usize>| cell_at(cells, position);

    let event = Event {
        center: cell(columns.center).to_string(),
        date: normalize_date(cell(columns.date)),
        time_range: join_time_range(
            cell(columns.time),
            cell(columns.start_time),
            cell(columns.end_time),
        ),
        responsible: cell(columns.responsible).to_string(),
        status: normalize_status(cell(columns.status)),
        shift: cell(columns.shift).to_string(),
        area: cell(columns.area).to_string(),
        attendees: split_attendees(cell(columns.attendees)),
    };

    (!event.is_blank()).then_some(event)
}

/// Trimmed cell text at `position`, empty when absent.
fn cell_at<S: AsRef<str>>(cells: &[S], position: Option<usize>) -> &str {
    position
        .and_then(|i| cells.get(i))
        .map(|c| c.as_ref().trim())
        .unwrap_or("")
}
