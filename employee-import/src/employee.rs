use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ImportError;

pub const HEADERS: [&str; 6] = [
    "email",
    "First Name",
    "Last Name",
    "Start Date",
    "Site",
    "Job Title",
];

pub const EMAIL_DOMAIN: &str = "hibob.io";

pub const SITES: [&str; 5] = [
    "Hong Kong (Demo)",
    "London (Demo)",
    "New York (Demo)",
    "Tel Aviv (Demo)",
    "Toronto (Demo)",
];

pub const JOB_TITLES: [&str; 29] = [
    "Account Manager",
    "Business Development Manager",
    "Chief Architect",
    "Chief Engineer",
    "Content Marketing Manager",
    "Content Writer",
    "Designer",
    "Developer",
    "Senior Developer",
    "Junior Developer",
    "Head Of Client Services",
    "HR Manager",
    "HR Administrator",
    "Intern",
    "Marketing Manager",
    "Product Manager",
    "Sales Manager",
    "Social Media Manager",
    "Office Manager",
    "Team Leader",
    "UX",
    "VP Business Development",
    "VP Finance",
    "VP Marketing",
    "VP Operations",
    "VP Product",
    "VP R&D",
    "VP Sales",
    "Web Designer",
];

/// One row of an import file. Field order matches [`HEADERS`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub email: String,
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "Start Date")]
    pub start_date: String,
    #[serde(rename = "Site")]
    pub site: String,
    #[serde(rename = "Job Title")]
    pub job_title: String,
}

impl Employee {
    #[must_use]
    pub fn row(&self) -> [&str; 6] {
        [
            self.email.as_str(),
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.start_date.as_str(),
            self.site.as_str(),
            self.job_title.as_str(),
        ]
    }

    /// Case-insensitive identity used to reject duplicate people within a run.
    #[must_use]
    pub fn uniqueness_key(&self) -> (String, String) {
        uniqueness_key(&self.first_name, &self.last_name)
    }
}

#[must_use]
pub fn uniqueness_key(first: &str, last: &str) -> (String, String) {
    (first.to_lowercase(), last.to_lowercase())
}

#[must_use]
pub fn email_for(first: &str, last: &str, company_id: &str) -> String {
    format!(
        "{}.{}+{}@{}",
        first.to_lowercase(),
        last.to_lowercase(),
        company_id,
        EMAIL_DOMAIN
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFormat {
    #[default]
    DayFirst,
    MonthFirst,
}

impl DateFormat {
    pub const ALL: [DateFormat; 2] = [DateFormat::DayFirst, DateFormat::MonthFirst];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DateFormat::DayFirst => "DD/MM/YYYY",
            DateFormat::MonthFirst => "MM/DD/YYYY",
        }
    }

    /// `chrono` strftime pattern for the preset.
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::DayFirst => "%d/%m/%Y",
            DateFormat::MonthFirst => "%m/%d/%Y",
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DateFormat {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.to_uppercase();
        DateFormat::ALL
            .into_iter()
            .find(|format| format.label() == key)
            .ok_or(ImportError::UnknownDateFormat(key))
    }
}
