use chrono::NaiveDateTime;
use serde::Serialize;

use super::pricing::OrderSummary;

/// Academic level of the paper. The rate table keys off this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AcademicLevel {
    #[serde(rename = "High School")]
    HighSchool,
    Undergraduate,
    Graduate,
    Postgraduate,
    Professional,
}

impl AcademicLevel {
    pub const ALL: [AcademicLevel; 5] = [
        AcademicLevel::HighSchool,
        AcademicLevel::Undergraduate,
        AcademicLevel::Graduate,
        AcademicLevel::Postgraduate,
        AcademicLevel::Professional,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AcademicLevel::HighSchool => "High School",
            AcademicLevel::Undergraduate => "Undergraduate",
            AcademicLevel::Graduate => "Graduate",
            AcademicLevel::Postgraduate => "Postgraduate",
            AcademicLevel::Professional => "Professional",
        }
    }

    /// Menu text shown in the select; differs from the stored value
    /// only for Professional.
    pub fn display_name(self) -> &'static str {
        match self {
            AcademicLevel::Professional => "Professional Education",
            other => other.as_str(),
        }
    }

    pub fn from_value(value: &str) -> Option<AcademicLevel> {
        AcademicLevel::ALL.into_iter().find(|l| l.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PaperType {
    Argumentative,
    Expository,
    Narrative,
    Descriptive,
    Comparison,
    #[serde(rename = "Cause/Effect")]
    CauseEffect,
    Analytical,
    Persuasive,
    Research,
    Literature,
    Critical,
    Reflective,
    Personal,
    Critique,
    Scholarship,
}

impl PaperType {
    pub const ALL: [PaperType; 15] = [
        PaperType::Argumentative,
        PaperType::Expository,
        PaperType::Narrative,
        PaperType::Descriptive,
        PaperType::Comparison,
        PaperType::CauseEffect,
        PaperType::Analytical,
        PaperType::Persuasive,
        PaperType::Research,
        PaperType::Literature,
        PaperType::Critical,
        PaperType::Reflective,
        PaperType::Personal,
        PaperType::Critique,
        PaperType::Scholarship,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaperType::Argumentative => "Argumentative",
            PaperType::Expository => "Expository",
            PaperType::Narrative => "Narrative",
            PaperType::Descriptive => "Descriptive",
            PaperType::Comparison => "Comparison",
            PaperType::CauseEffect => "Cause/Effect",
            PaperType::Analytical => "Analytical",
            PaperType::Persuasive => "Persuasive",
            PaperType::Research => "Research",
            PaperType::Literature => "Literature",
            PaperType::Critical => "Critical",
            PaperType::Reflective => "Reflective",
            PaperType::Personal => "Personal",
            PaperType::Critique => "Critique",
            PaperType::Scholarship => "Scholarship",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PaperType::Argumentative => "Argumentative essay",
            PaperType::Expository => "Expository essay",
            PaperType::Narrative => "Narrative essay",
            PaperType::Descriptive => "Descriptive essay",
            PaperType::Comparison => "Compare and contrast essay",
            PaperType::CauseEffect => "Cause and effect essay",
            PaperType::Analytical => "Analytical essay",
            PaperType::Persuasive => "Persuasive essay",
            PaperType::Research => "Research paper",
            PaperType::Literature => "Literature review",
            PaperType::Critical => "Critical analysis",
            PaperType::Reflective => "Reflective essay",
            PaperType::Personal => "Personal statement",
            PaperType::Critique => "Article Critique",
            PaperType::Scholarship => "Scholarship essay",
        }
    }

    pub fn from_value(value: &str) -> Option<PaperType> {
        PaperType::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CitationStyle {
    #[serde(rename = "APA")]
    Apa,
    #[serde(rename = "MLA")]
    Mla,
    Chicago,
    Harvard,
    #[serde(rename = "IEEE")]
    Ieee,
}

impl CitationStyle {
    pub const ALL: [CitationStyle; 5] = [
        CitationStyle::Apa,
        CitationStyle::Mla,
        CitationStyle::Chicago,
        CitationStyle::Harvard,
        CitationStyle::Ieee,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CitationStyle::Apa => "APA",
            CitationStyle::Mla => "MLA",
            CitationStyle::Chicago => "Chicago",
            CitationStyle::Harvard => "Harvard",
            CitationStyle::Ieee => "IEEE",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            CitationStyle::Apa => "APA (American Psychological Association)",
            CitationStyle::Mla => "MLA (Modern Language Association)",
            CitationStyle::Chicago => "Chicago/Turabian",
            CitationStyle::Harvard => "Harvard",
            CitationStyle::Ieee => "IEEE (Institute of Electrical and Electronics Engineers)",
        }
    }

    pub fn from_value(value: &str) -> Option<CitationStyle> {
        CitationStyle::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// Descriptor for an uploaded attachment. Only the metadata travels with
/// the draft; the bytes stay in the browser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileMeta {
    pub name: String,
    #[serde(rename = "type")]
    pub mime: String,
    pub size: u64,
}

/// Order data accumulated across the wizard steps. Each step contributes a
/// disjoint set of fields, so merging a step never overwrites an earlier one.
/// `summary` is derived from {academic_level, number_of_pages, deadline} and
/// is recomputed whenever those change, never edited on its own.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub academic_level: Option<AcademicLevel>,
    pub paper_type: Option<PaperType>,
    pub deadline: Option<NaiveDateTime>,
    pub number_of_pages: u32,
    pub number_of_sources: u32,
    pub title: String,
    pub subject: String,
    pub citation_style: Option<CitationStyle>,
    pub additional_instructions: String,
    pub file: Option<FileMeta>,
    #[serde(rename = "orderSummary")]
    pub summary: OrderSummary,
}
