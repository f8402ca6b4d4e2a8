use std::collections::BTreeSet;

use url::form_urlencoded;

/// Employment type options in the order they are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Freelance,
    Internship,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 4] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Freelance,
        EmploymentType::Internship,
    ];

    pub fn id(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "FULLTIME",
            EmploymentType::PartTime => "PARTTIME",
            EmploymentType::Freelance => "FREELANCE",
            EmploymentType::Internship => "INTERNSHIP",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full Time",
            EmploymentType::PartTime => "Part Time",
            EmploymentType::Freelance => "Freelance",
            EmploymentType::Internship => "Internship",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(id.trim()))
    }
}

/// Minimum package options, single-select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SalaryRange {
    TenLpa,
    TwentyLpa,
    ThirtyLpa,
    FortyLpa,
}

impl SalaryRange {
    pub const ALL: [SalaryRange; 4] = [
        SalaryRange::TenLpa,
        SalaryRange::TwentyLpa,
        SalaryRange::ThirtyLpa,
        SalaryRange::FortyLpa,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SalaryRange::TenLpa => "1000000",
            SalaryRange::TwentyLpa => "2000000",
            SalaryRange::ThirtyLpa => "3000000",
            SalaryRange::FortyLpa => "4000000",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SalaryRange::TenLpa => "10 LPA and above",
            SalaryRange::TwentyLpa => "20 LPA and above",
            SalaryRange::ThirtyLpa => "30 LPA and above",
            SalaryRange::FortyLpa => "40 LPA and above",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.id() == id.trim())
    }
}

/// Filters as currently edited on the Jobs screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub employment_types: BTreeSet<EmploymentType>,
    pub salary_range: Option<SalaryRange>,
    pub search_text: String,
}

impl FilterState {
    pub fn set_employment_type(&mut self, kind: EmploymentType, checked: bool) {
        if checked {
            self.employment_types.insert(kind);
        } else {
            self.employment_types.remove(&kind);
        }
    }

    pub fn to_query(&self) -> JobsQuery {
        JobsQuery {
            employment_type: self
                .employment_types
                .iter()
                .map(|kind| kind.id())
                .collect::<Vec<_>>()
                .join(","),
            minimum_package: self
                .salary_range
                .map(|range| range.id().to_string())
                .unwrap_or_default(),
            search: self.search_text.clone(),
        }
    }
}

/// Query parameters of one job-list request, exactly as sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobsQuery {
    pub employment_type: String,
    pub minimum_package: String,
    pub search: String,
}

impl JobsQuery {
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("employment_type", self.employment_type.as_str()),
            ("minimum_package", self.minimum_package.as_str()),
            ("search", self.search.as_str()),
        ]
    }

    /// URL-encoded form, every parameter present even when empty.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }
}
