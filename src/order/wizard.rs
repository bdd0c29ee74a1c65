use chrono::NaiveDateTime;

use super::draft::OrderDraft;
use super::pricing;
use super::validate::{self, DetailsInput, PriceInput, ValidationErrors};

/// The linear order-intake flow. Forward transitions only ever move one
/// step, and only through a submit that passed validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    CalculatePrice,
    PaperDetails,
    Review,
    Completed,
}

impl WizardStep {
    pub const LABELS: [&'static str; 3] = ["Calculate Price", "Paper Details", "Review"];

    pub fn index(self) -> usize {
        match self {
            WizardStep::CalculatePrice => 0,
            WizardStep::PaperDetails => 1,
            WizardStep::Review => 2,
            WizardStep::Completed => 3,
        }
    }
}

/// Where a finished draft goes. The shipped implementation acknowledges
/// locally; whether orders persist server-side is a backend concern this
/// frontend does not assume.
pub trait PlaceOrder {
    fn place(&self, draft: &OrderDraft) -> Result<(), String>;
}

pub struct LocalPlaceOrder;

impl PlaceOrder for LocalPlaceOrder {
    fn place(&self, draft: &OrderDraft) -> Result<(), String> {
        log::info!(
            "order placed: {}",
            serde_json::to_string(draft).unwrap_or_default()
        );
        Ok(())
    }
}

/// Owns the only mutable wizard state: the current step and the draft
/// accumulated so far. Step views read the draft to pre-fill their forms
/// and hand raw input back through the submit methods.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wizard {
    step: WizardStep,
    draft: OrderDraft,
}

impl Wizard {
    pub fn new() -> Wizard {
        Wizard::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    /// Step 0 submit: validate, merge, recompute the summary against `now`,
    /// advance. A no-op outside the price step.
    pub fn submit_price(
        &mut self,
        input: &PriceInput,
        now: NaiveDateTime,
    ) -> Result<(), ValidationErrors> {
        if self.step != WizardStep::CalculatePrice {
            return Ok(());
        }
        let fields = validate::validate_price(input)?;
        self.draft.academic_level = Some(fields.academic_level);
        self.draft.paper_type = Some(fields.paper_type);
        self.draft.deadline = Some(fields.deadline);
        self.draft.number_of_pages = fields.number_of_pages;
        self.draft.number_of_sources = fields.number_of_sources;
        self.draft.summary = pricing::calculate(
            Some(fields.academic_level),
            fields.number_of_pages,
            Some(fields.deadline),
            now,
        );
        self.step = WizardStep::PaperDetails;
        Ok(())
    }

    /// Step 1 submit. The detail fields are disjoint from step 0's, so the
    /// merge never touches anything entered earlier.
    pub fn submit_details(&mut self, input: &DetailsInput) -> Result<(), ValidationErrors> {
        if self.step != WizardStep::PaperDetails {
            return Ok(());
        }
        let fields = validate::validate_details(input)?;
        self.draft.title = fields.title;
        self.draft.subject = fields.subject;
        self.draft.citation_style = Some(fields.citation_style);
        self.draft.additional_instructions = fields.additional_instructions;
        self.draft.file = fields.file;
        self.step = WizardStep::Review;
        Ok(())
    }

    /// Terminal submit at Review: hand the draft to the collaborator, then
    /// clear it and land on the acknowledgement screen.
    pub fn place_order(&mut self, sink: &dyn PlaceOrder) -> Result<(), String> {
        if self.step != WizardStep::Review {
            return Ok(());
        }
        sink.place(&self.draft)?;
        self.draft = OrderDraft::default();
        self.step = WizardStep::Completed;
        Ok(())
    }

    /// Backward navigation; keeps every previously entered value.
    pub fn back(&mut self) {
        self.step = match self.step {
            WizardStep::PaperDetails => WizardStep::CalculatePrice,
            WizardStep::Review => WizardStep::PaperDetails,
            other => other,
        };
    }

    pub fn reset(&mut self) {
        *self = Wizard::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::draft::{AcademicLevel, CitationStyle, PaperType};
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn price_input(deadline: NaiveDateTime) -> PriceInput {
        PriceInput {
            academic_level: "Graduate".into(),
            paper_type: "Analytical".into(),
            deadline_date: deadline.format("%Y-%m-%d").to_string(),
            deadline_time: deadline.format("%H:%M").to_string(),
            number_of_pages: "2".into(),
            number_of_sources: "5".into(),
        }
    }

    fn details_input() -> DetailsInput {
        DetailsInput {
            title: "Monetary policy".into(),
            subject: "Compare QE programs of the Fed and the ECB".into(),
            citation_style: "Harvard".into(),
            additional_instructions: "Use primary sources".into(),
            file: None,
        }
    }

    #[test]
    fn full_forward_flow_reaches_completed_with_a_cleared_draft() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.step(), WizardStep::CalculatePrice);

        wizard
            .submit_price(&price_input(now() + Duration::hours(2)), now())
            .unwrap();
        assert_eq!(wizard.step(), WizardStep::PaperDetails);
        assert_eq!(wizard.draft().academic_level, Some(AcademicLevel::Graduate));
        // 2h out: urgent surcharge applies.
        assert_eq!(wizard.draft().summary.additional_charges, 6.0);
        assert_eq!(wizard.draft().summary.total_cost, 26.98);
        assert_eq!(wizard.draft().summary.upfront_payment, 13.49);

        wizard.submit_details(&details_input()).unwrap();
        assert_eq!(wizard.step(), WizardStep::Review);
        assert_eq!(wizard.draft().citation_style, Some(CitationStyle::Harvard));
        // Review still sees everything from step 0.
        assert_eq!(wizard.draft().paper_type, Some(PaperType::Analytical));

        wizard.place_order(&LocalPlaceOrder).unwrap();
        assert_eq!(wizard.step(), WizardStep::Completed);
        assert_eq!(*wizard.draft(), OrderDraft::default());
    }

    #[test]
    fn failing_validation_blocks_advancement() {
        let mut wizard = Wizard::new();
        let mut input = price_input(now() + Duration::days(3));
        input.academic_level.clear();

        let errors = wizard.submit_price(&input, now()).unwrap_err();
        assert!(errors.get("academicLevel").is_some());
        assert_eq!(wizard.step(), WizardStep::CalculatePrice);
        assert_eq!(*wizard.draft(), OrderDraft::default());
    }

    #[test]
    fn back_preserves_previously_entered_values() {
        let mut wizard = Wizard::new();
        let mut input = price_input(now() + Duration::days(3));
        input.number_of_pages = "5".into();
        wizard.submit_price(&input, now()).unwrap();

        wizard.back();
        assert_eq!(wizard.step(), WizardStep::CalculatePrice);
        assert_eq!(wizard.draft().number_of_pages, 5);
        assert_eq!(wizard.draft().academic_level, Some(AcademicLevel::Graduate));
    }

    #[test]
    fn back_from_review_keeps_detail_fields() {
        let mut wizard = Wizard::new();
        wizard
            .submit_price(&price_input(now() + Duration::days(3)), now())
            .unwrap();
        wizard.submit_details(&details_input()).unwrap();

        wizard.back();
        assert_eq!(wizard.step(), WizardStep::PaperDetails);
        assert_eq!(wizard.draft().title, "Monetary policy");
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::CalculatePrice);
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::CalculatePrice);
    }

    #[test]
    fn reset_returns_to_the_first_step_from_anywhere() {
        let mut wizard = Wizard::new();
        wizard
            .submit_price(&price_input(now() + Duration::days(3)), now())
            .unwrap();
        wizard.submit_details(&details_input()).unwrap();
        assert_eq!(wizard.step(), WizardStep::Review);

        wizard.reset();
        assert_eq!(wizard.step(), WizardStep::CalculatePrice);
        assert_eq!(*wizard.draft(), OrderDraft::default());
    }

    #[test]
    fn submits_outside_their_step_change_nothing() {
        let mut wizard = Wizard::new();
        // Details before price: no-op, still on step 0.
        wizard.submit_details(&details_input()).unwrap();
        assert_eq!(wizard.step(), WizardStep::CalculatePrice);
        assert!(wizard.draft().title.is_empty());

        // Place order before review: no-op.
        wizard.place_order(&LocalPlaceOrder).unwrap();
        assert_eq!(wizard.step(), WizardStep::CalculatePrice);
    }

    #[test]
    fn summary_is_recomputed_on_resubmit_after_back() {
        let mut wizard = Wizard::new();
        wizard
            .submit_price(&price_input(now() + Duration::days(3)), now())
            .unwrap();
        assert_eq!(wizard.draft().summary.additional_charges, 0.0);

        wizard.back();
        // Same order, deadline moved inside the urgency window.
        wizard
            .submit_price(&price_input(now() + Duration::hours(3)), now())
            .unwrap();
        assert_eq!(wizard.draft().summary.additional_charges, 6.0);
        assert_eq!(wizard.draft().summary.total_cost, 26.98);
    }

    struct RejectingSink;
    impl PlaceOrder for RejectingSink {
        fn place(&self, _draft: &OrderDraft) -> Result<(), String> {
            Err("backend unavailable".into())
        }
    }

    #[test]
    fn failed_placement_keeps_the_draft_on_review() {
        let mut wizard = Wizard::new();
        wizard
            .submit_price(&price_input(now() + Duration::days(3)), now())
            .unwrap();
        wizard.submit_details(&details_input()).unwrap();

        let err = wizard.place_order(&RejectingSink).unwrap_err();
        assert_eq!(err, "backend unavailable");
        assert_eq!(wizard.step(), WizardStep::Review);
        assert_eq!(wizard.draft().title, "Monetary policy");
    }
}
