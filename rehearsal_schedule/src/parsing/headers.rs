//! Header matching and the shared field schema.
//!
//! Sources name their columns inconsistently ("Centro", "sede", "Área",
//! "fecha evento"). Both adapters resolve logical fields through the single
//! [`Field`] synonym table below, comparing names after [`normalize_header`].

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalizes a header name for comparison.
///
/// Lower-cases, decomposes accented characters and drops the combining marks,
/// then removes all whitespace.
///
/// # Examples
///
/// ```
/// use rehearsal_schedule::parsing::headers::normalize_header;
///
/// assert_eq!(normalize_header("Área"), "area");
/// assert_eq!(normalize_header(" Fecha  Evento "), "fechaevento");
/// assert_eq!(normalize_header("NIÑOS"), "ninos");
/// ```
pub fn normalize_header(raw: &str) -> String {
    raw.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Finds the position of the first header matching any of `names`.
///
/// Synonyms are tried in the order given; the first synonym that matches any
/// header wins, and among several matching headers the earliest position wins.
///
/// # Arguments
/// * `headers` - Raw header strings, as they appear in the header row
/// * `names` - Accepted synonyms for one logical column, in priority order
///
/// # Returns
/// * `Some(index)` - zero-based position of the matching header
/// * `None` - no header matches any synonym
pub fn find_column<S: AsRef<str>>(headers: &[S], names: &[&str]) -> Option<usize> {
    let canon: Vec<String> = headers
        .iter()
        .map(|h| normalize_header(h.as_ref()))
        .collect();

    names
        .iter()
        .map(|name| normalize_header(name))
        .find_map(|name| canon.iter().position(|h| *h == name))
}

/// Logical fields of an event, as named by the sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Center,
    Date,
    Time,
    StartTime,
    EndTime,
    Responsible,
    Status,
    Shift,
    Area,
    Attendees,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Center,
        Field::Date,
        Field::Time,
        Field::StartTime,
        Field::EndTime,
        Field::Responsible,
        Field::Status,
        Field::Shift,
        Field::Area,
        Field::Attendees,
    ];

    /// Accepted source names for this field, in priority order.
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            Field::Center => &["centro", "sede"],
            Field::Date => &["fecha", "date", "fecha_evento", "fechaevento"],
            Field::Time => &["hora", "horario"],
            Field::StartTime => &["hora_inicio", "inicio"],
            Field::EndTime => &["hora_fin", "fin"],
            Field::Responsible => &["responsable", "docente", "lider", "líder"],
            Field::Status => &["estado", "status"],
            Field::Shift => &["jornada", "turno"],
            Field::Area => &["area", "área", "categoria", "categoría"],
            Field::Attendees => &[
                "asistentes",
                "participantes",
                "chicos",
                "alumnos",
                "niños",
                "ninos",
            ],
        }
    }

    /// Position of this field within a header row, if present.
    pub fn locate<S: AsRef<str>>(self, headers: &[S]) -> Option<usize> {
        find_column(headers, self.synonyms())
    }

    /// Priority of `name` among this field's synonyms once normalized.
    ///
    /// `Some(0)` is the preferred name; `None` means the field does not accept it.
    pub fn rank(self, name: &str) -> Option<usize> {
        let name = normalize_header(name);
        self.synonyms()
            .iter()
            .position(|synonym| normalize_header(synonym) == name)
    }
}
