use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::{self, Deserializer};
use serde::Deserialize;

/// A stored student as handed to the views. Never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(alias = "student_id")]
    pub student_id: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub address: Option<String>,
    #[serde(default, alias = "birth_date", deserialize_with = "de_birth_date")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub major: Option<String>,
    #[serde(alias = "created_at", deserialize_with = "de_created_at")]
    pub created_at: NaiveDateTime,
}

/// Editable attributes, in form order. `key` is the HTML field name and the
/// key used by error and old-input maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StudentField {
    Name,
    Email,
    StudentId,
    Phone,
    Address,
    BirthDate,
    Major,
}

impl StudentField {
    pub const ALL: [StudentField; 7] = [
        Self::Name,
        Self::Email,
        Self::StudentId,
        Self::Phone,
        Self::Address,
        Self::BirthDate,
        Self::Major,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::StudentId => "student_id",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::BirthDate => "birth_date",
            Self::Major => "major",
        }
    }

    /// Accepts the form key as well as the camelCase wire spelling.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "student_id" | "studentId" => Some(Self::StudentId),
            "phone" => Some(Self::Phone),
            "address" => Some(Self::Address),
            "birth_date" | "birthDate" => Some(Self::BirthDate),
            "major" => Some(Self::Major),
            _ => None,
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::StudentId)
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::BirthDate => "date",
            _ => "text",
        }
    }
}

impl StudentRecord {
    /// Stored value of a form field as it would appear in an input.
    pub fn field_value(&self, field: StudentField) -> Option<String> {
        match field {
            StudentField::Name => Some(self.name.clone()),
            StudentField::Email => Some(self.email.clone()),
            StudentField::StudentId => Some(self.student_id.clone()),
            StudentField::Phone => self.phone.clone(),
            StudentField::Address => self.address.clone(),
            StudentField::BirthDate => self.birth_date_text(),
            StudentField::Major => self.major.clone(),
        }
    }

    pub fn birth_date_text(&self) -> Option<String> {
        self.birth_date.map(|d| d.format("%Y-%m-%d").to_string())
    }

    pub fn created_at_text(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    parse_timestamp(s).map(|t| t.date())
}

/// RFC 3339 keeps the wall-clock time of its own offset.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(t);
        }
    }
    None
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v: Option<String> = Option::deserialize(deserializer)?;
    Ok(v.filter(|s| !s.trim().is_empty()))
}

fn de_birth_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let v: Option<String> = Option::deserialize(deserializer)?;
    match v.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date(s)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid birth date: {s}"))),
    }
}

fn de_created_at<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_timestamp(s.trim())
        .ok_or_else(|| de::Error::custom(format!("invalid created_at: {}", s.trim())))
}
