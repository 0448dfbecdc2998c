use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Availability of a book.
///
/// Stored on disk as an integer code (see [`Status::code`]) so that files
/// written by earlier versions keep loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Status {
    #[default]
    InStock,
    Issued,
}

const STATUS_CODES: [(Status, u8); 2] = [(Status::InStock, 0), (Status::Issued, 1)];

impl Status {
    pub fn code(self) -> u8 {
        STATUS_CODES
            .iter()
            .find(|(status, _)| *status == self)
            .map(|(_, code)| *code)
            .unwrap_or_default()
    }

    pub fn from_code(code: u8) -> Option<Self> {
        STATUS_CODES
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(status, _)| *status)
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Status::InStock, Locale::En) => "in stock",
            (Status::Issued, Locale::En) => "issued",
            (Status::InStock, Locale::Ru) => "В наличии",
            (Status::Issued, Locale::Ru) => "Выдана",
        }
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

impl TryFrom<u8> for Status {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Status::from_code(code).ok_or_else(|| format!("unknown status code {}", code))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Locale::En))
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "0" | "in-stock" | "in_stock" | "instock" => Ok(Status::InStock),
            "1" | "issued" => Ok(Status::Issued),
            other => Err(format!("Invalid status: {}", other)),
        }
    }
}

/// Language used for field and status labels when rendering books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            other => Err(format!("Unsupported locale: {}", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        })
    }
}

struct Labels {
    id: &'static str,
    title: &'static str,
    author: &'static str,
    year: &'static str,
    status: &'static str,
}

impl Locale {
    fn labels(self) -> Labels {
        match self {
            Locale::En => Labels {
                id: "ID",
                title: "Title",
                author: "Author",
                year: "Year",
                status: "Status",
            },
            Locale::Ru => Labels {
                id: "ID",
                title: "Название",
                author: "Автор",
                year: "Год издания",
                status: "Статус",
            },
        }
    }
}

/// A single catalog entry.
///
/// Identity fields are fixed at construction; only the status can change.
/// Validation is the store's job, not the constructor's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: u64,
    title: String,
    author: String,
    year: i32,
    status: Status,
}

impl Book {
    pub fn new(id: u64, title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self::with_status(id, title, author, year, Status::InStock)
    }

    pub fn with_status(
        id: u64,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        status: Status,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            status,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Human-readable multi-line block with labels in the given locale.
    pub fn render(&self, locale: Locale) -> String {
        let labels = locale.labels();
        format!(
            "{}: {}\n{}: {}\n{}: {}\n{}: {}\n{}: {}",
            labels.id,
            self.id,
            labels.title,
            self.title,
            labels.author,
            self.author,
            labels.year,
            self.year,
            labels.status,
            self.status.label(locale)
        )
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Locale::En))
    }
}
