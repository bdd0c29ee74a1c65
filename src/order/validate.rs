use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::draft::{AcademicLevel, CitationStyle, FileMeta, PaperType};

/// Per-field messages produced by a step's rules. A step may only advance
/// when this is empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors {
    fields: Vec<(&'static str, String)>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.push((field, message.into()));
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// Raw strings out of the price-calculation form, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceInput {
    pub academic_level: String,
    pub paper_type: String,
    /// `YYYY-MM-DD`, the value of an `<input type="date">`.
    pub deadline_date: String,
    /// `HH:MM`, the value of an `<input type="time">`.
    pub deadline_time: String,
    pub number_of_pages: String,
    pub number_of_sources: String,
}

/// Validated, typed fields from step 0.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceFields {
    pub academic_level: AcademicLevel,
    pub paper_type: PaperType,
    pub deadline: NaiveDateTime,
    pub number_of_pages: u32,
    pub number_of_sources: u32,
}

/// Raw input out of the paper-details form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailsInput {
    pub title: String,
    pub subject: String,
    pub citation_style: String,
    pub additional_instructions: String,
    pub file: Option<FileMeta>,
}

/// Validated, typed fields from step 1.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailFields {
    pub title: String,
    pub subject: String,
    pub citation_style: CitationStyle,
    pub additional_instructions: String,
    pub file: Option<FileMeta>,
}

fn positive_int(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err("Must be greater than 0".to_string()),
    }
}

pub fn parse_deadline(date: &str, time: &str) -> Result<NaiveDateTime, String> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| "Enter a valid date".to_string())?;
    let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map_err(|_| "Enter a valid time".to_string())?;
    Ok(NaiveDateTime::new(date, time))
}

pub fn validate_price(input: &PriceInput) -> Result<PriceFields, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let academic_level = AcademicLevel::from_value(&input.academic_level);
    if academic_level.is_none() {
        errors.push("academicLevel", "Academic level is required");
    }
    let paper_type = PaperType::from_value(&input.paper_type);
    if paper_type.is_none() {
        errors.push("paperType", "Paper type is required");
    }
    let deadline = match parse_deadline(&input.deadline_date, &input.deadline_time) {
        Ok(d) => Some(d),
        Err(message) => {
            errors.push("deadline", message);
            None
        }
    };
    let number_of_pages = match positive_int(&input.number_of_pages) {
        Ok(n) => Some(n),
        Err(message) => {
            errors.push("numberOfPages", message);
            None
        }
    };
    let number_of_sources = match positive_int(&input.number_of_sources) {
        Ok(n) => Some(n),
        Err(message) => {
            errors.push("numberOfSources", message);
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }
    // The unwraps cannot fire: every None pushed an error above.
    Ok(PriceFields {
        academic_level: academic_level.unwrap(),
        paper_type: paper_type.unwrap(),
        deadline: deadline.unwrap(),
        number_of_pages: number_of_pages.unwrap(),
        number_of_sources: number_of_sources.unwrap(),
    })
}

pub fn validate_details(input: &DetailsInput) -> Result<DetailFields, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if input.title.trim().is_empty() {
        errors.push("title", "Title is required");
    }
    if input.subject.trim().is_empty() {
        errors.push("subject", "Subject is required");
    }
    let citation_style = CitationStyle::from_value(&input.citation_style);
    if citation_style.is_none() {
        errors.push("citationStyle", "Citation style is required");
    }
    if let Some(file) = &input.file {
        if file.name.is_empty() {
            errors.push("file", "File name is required");
        } else if file.mime.is_empty() {
            errors.push("file", "File type is required");
        } else if file.size == 0 {
            errors.push("file", "File is empty");
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(DetailFields {
        title: input.title.trim().to_string(),
        subject: input.subject.trim().to_string(),
        citation_style: citation_style.unwrap(),
        additional_instructions: input.additional_instructions.trim().to_string(),
        file: input.file.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good_price_input() -> PriceInput {
        PriceInput {
            academic_level: "Undergraduate".into(),
            paper_type: "Research".into(),
            deadline_date: "2024-06-14".into(),
            deadline_time: "23:00".into(),
            number_of_pages: "4".into(),
            number_of_sources: "3".into(),
        }
    }

    #[test]
    fn valid_price_input_produces_typed_fields() {
        let fields = validate_price(&good_price_input()).unwrap();
        assert_eq!(fields.academic_level, AcademicLevel::Undergraduate);
        assert_eq!(fields.paper_type, PaperType::Research);
        assert_eq!(fields.number_of_pages, 4);
        assert_eq!(fields.number_of_sources, 3);
        assert_eq!(
            fields.deadline,
            NaiveDate::from_ymd_opt(2024, 6, 14)
                .unwrap()
                .and_hms_opt(23, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn empty_level_is_rejected_with_a_field_message() {
        let mut input = good_price_input();
        input.academic_level.clear();
        let errors = validate_price(&input).unwrap_err();
        assert_eq!(errors.get("academicLevel"), Some("Academic level is required"));
        assert!(errors.get("paperType").is_none());
    }

    #[test]
    fn non_numeric_and_zero_pages_are_rejected() {
        for bad in ["", "abc", "0", "-2", "1.5"] {
            let mut input = good_price_input();
            input.number_of_pages = bad.into();
            let errors = validate_price(&input).unwrap_err();
            assert_eq!(errors.get("numberOfPages"), Some("Must be greater than 0"));
        }
    }

    #[test]
    fn garbage_date_is_rejected() {
        let mut input = good_price_input();
        input.deadline_date = "14/06/2024".into();
        let errors = validate_price(&input).unwrap_err();
        assert_eq!(errors.get("deadline"), Some("Enter a valid date"));
    }

    #[test]
    fn all_failures_are_reported_at_once() {
        let errors = validate_price(&PriceInput::default()).unwrap_err();
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn details_require_title_subject_and_style() {
        let errors = validate_details(&DetailsInput::default()).unwrap_err();
        assert!(errors.get("title").is_some());
        assert!(errors.get("subject").is_some());
        assert!(errors.get("citationStyle").is_some());

        let fields = validate_details(&DetailsInput {
            title: "Macroeconomics 101".into(),
            subject: "Analyze fiscal policy responses to inflation".into(),
            citation_style: "APA".into(),
            additional_instructions: String::new(),
            file: None,
        })
        .unwrap();
        assert_eq!(fields.citation_style, CitationStyle::Apa);
        assert!(fields.file.is_none());
    }

    #[test]
    fn attachment_is_optional_but_must_be_sound_when_present() {
        let mut input = DetailsInput {
            title: "t".into(),
            subject: "s".into(),
            citation_style: "MLA".into(),
            additional_instructions: String::new(),
            file: Some(FileMeta {
                name: "draft.docx".into(),
                mime: "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                    .into(),
                size: 2048,
            }),
        };
        assert!(validate_details(&input).is_ok());

        input.file = Some(FileMeta {
            name: "empty.pdf".into(),
            mime: "application/pdf".into(),
            size: 0,
        });
        let errors = validate_details(&input).unwrap_err();
        assert_eq!(errors.get("file"), Some("File is empty"));
    }
}
