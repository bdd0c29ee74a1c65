use chrono::{Duration, Local, NaiveDateTime};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::order::draft::{AcademicLevel, CitationStyle, FileMeta, OrderDraft, PaperType};
use crate::order::pricing::{self, OrderSummary};
use crate::order::validate::{self, DetailsInput, PriceInput, ValidationErrors};
use crate::order::wizard::{LocalPlaceOrder, Wizard, WizardStep};

fn field_error(errors: &ValidationErrors, field: &str) -> Html {
    match errors.get(field) {
        Some(message) => html! { <span class="field-error">{message}</span> },
        None => html! {},
    }
}

fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

// Tomorrow at 11:00 PM, the pre-filled deadline for a fresh order.
fn default_deadline() -> NaiveDateTime {
    let tomorrow = Local::now().date_naive() + Duration::days(1);
    tomorrow.and_hms_opt(23, 0, 0).unwrap()
}

#[derive(Properties, PartialEq)]
struct SummaryPanelProps {
    summary: OrderSummary,
}

#[function_component(SummaryPanel)]
fn summary_panel(props: &SummaryPanelProps) -> Html {
    let s = &props.summary;
    html! {
        <div class="order-summary">
            <h3>{"Order Summary"}</h3>
            <div class="summary-row">
                <span>{"Cost per page:"}</span>
                <span>{money(s.cost_per_page)}</span>
            </div>
            <div class="summary-row">
                <span>{"Total pages:"}</span>
                <span>{s.total_pages}</span>
            </div>
            <div class="summary-row">
                <span>{"Additional charges:"}</span>
                <span>{money(s.additional_charges)}</span>
            </div>
            <div class="summary-row total">
                <span>{"Total cost:"}</span>
                <span>{money(s.total_cost)}</span>
            </div>
            <div class="summary-row upfront">
                <span>{"Upfront payment (50%):"}</span>
                <span>{money(s.upfront_payment)}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PriceFormProps {
    draft: OrderDraft,
    errors: ValidationErrors,
    on_submit: Callback<PriceInput>,
}

#[function_component(PriceCalculationForm)]
fn price_calculation_form(props: &PriceFormProps) -> Html {
    let draft = &props.draft;
    let deadline = draft.deadline.unwrap_or_else(default_deadline);

    let academic_level = use_state(|| {
        draft
            .academic_level
            .map(|l| l.as_str().to_string())
            .unwrap_or_default()
    });
    let paper_type = use_state(|| {
        draft
            .paper_type
            .map(|p| p.as_str().to_string())
            .unwrap_or_default()
    });
    let deadline_date = use_state(|| deadline.format("%Y-%m-%d").to_string());
    let deadline_time = use_state(|| deadline.format("%H:%M").to_string());
    let number_of_pages = use_state(|| {
        if draft.number_of_pages > 0 {
            draft.number_of_pages.to_string()
        } else {
            "1".to_string()
        }
    });
    let number_of_sources = use_state(|| {
        if draft.number_of_sources > 0 {
            draft.number_of_sources.to_string()
        } else {
            "1".to_string()
        }
    });

    // Derived, never cached: recomputed from the live field values on every
    // render, so the panel can never go stale behind an edit.
    let summary = pricing::calculate(
        AcademicLevel::from_value(&academic_level),
        pricing::parse_pages(&number_of_pages),
        validate::parse_deadline(&deadline_date, &deadline_time).ok(),
        Local::now().naive_local(),
    );

    let onsubmit = {
        let academic_level = academic_level.clone();
        let paper_type = paper_type.clone();
        let deadline_date = deadline_date.clone();
        let deadline_time = deadline_time.clone();
        let number_of_pages = number_of_pages.clone();
        let number_of_sources = number_of_sources.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(PriceInput {
                academic_level: (*academic_level).clone(),
                paper_type: (*paper_type).clone(),
                deadline_date: (*deadline_date).clone(),
                deadline_time: (*deadline_time).clone(),
                number_of_pages: (*number_of_pages).clone(),
                number_of_sources: (*number_of_sources).clone(),
            });
        })
    };

    html! {
        <div class="form-with-summary">
            <form class="order-form" onsubmit={onsubmit}>
                <label>{"Academic Level"}</label>
                <select
                    onchange={let academic_level = academic_level.clone(); move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        academic_level.set(select.value());
                    }}
                >
                    <option value="" selected={academic_level.is_empty()}>{"Select level"}</option>
                    {
                        for AcademicLevel::ALL.into_iter().map(|level| html! {
                            <option
                                value={level.as_str()}
                                selected={*academic_level == level.as_str()}
                            >
                                {level.display_name()}
                            </option>
                        })
                    }
                </select>
                { field_error(&props.errors, "academicLevel") }

                <label>{"Paper Type"}</label>
                <select
                    onchange={let paper_type = paper_type.clone(); move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        paper_type.set(select.value());
                    }}
                >
                    <option value="" selected={paper_type.is_empty()}>{"Select paper type"}</option>
                    {
                        for PaperType::ALL.into_iter().map(|paper| html! {
                            <option
                                value={paper.as_str()}
                                selected={*paper_type == paper.as_str()}
                            >
                                {paper.display_name()}
                            </option>
                        })
                    }
                </select>
                { field_error(&props.errors, "paperType") }

                <label>{"Deadline"}</label>
                <div class="deadline-inputs">
                    <input
                        type="date"
                        value={(*deadline_date).clone()}
                        onchange={let deadline_date = deadline_date.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            deadline_date.set(input.value());
                        }}
                    />
                    <input
                        type="time"
                        value={(*deadline_time).clone()}
                        onchange={let deadline_time = deadline_time.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            deadline_time.set(input.value());
                        }}
                    />
                </div>
                { field_error(&props.errors, "deadline") }

                <label>{"Number of pages"}</label>
                <input
                    type="number"
                    min="1"
                    value={(*number_of_pages).clone()}
                    onchange={let number_of_pages = number_of_pages.clone(); move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        number_of_pages.set(input.value());
                    }}
                />
                { field_error(&props.errors, "numberOfPages") }

                <label>{"Number of sources"}</label>
                <input
                    type="number"
                    min="1"
                    value={(*number_of_sources).clone()}
                    onchange={let number_of_sources = number_of_sources.clone(); move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        number_of_sources.set(input.value());
                    }}
                />
                { field_error(&props.errors, "numberOfSources") }

                <button type="submit" class="primary-button">{"Next"}</button>
            </form>
            <SummaryPanel summary={summary} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DetailsFormProps {
    draft: OrderDraft,
    errors: ValidationErrors,
    on_submit: Callback<DetailsInput>,
}

#[function_component(PaperDetailsForm)]
fn paper_details_form(props: &DetailsFormProps) -> Html {
    let draft = &props.draft;
    let title = use_state(|| draft.title.clone());
    let subject = use_state(|| draft.subject.clone());
    let citation_style = use_state(|| {
        draft
            .citation_style
            .map(|c| c.as_str().to_string())
            .unwrap_or_default()
    });
    let additional_instructions = use_state(|| draft.additional_instructions.clone());
    let file = use_state(|| draft.file.clone());

    let onsubmit = {
        let title = title.clone();
        let subject = subject.clone();
        let citation_style = citation_style.clone();
        let additional_instructions = additional_instructions.clone();
        let file = file.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(DetailsInput {
                title: (*title).clone(),
                subject: (*subject).clone(),
                citation_style: (*citation_style).clone(),
                additional_instructions: (*additional_instructions).clone(),
                file: (*file).clone(),
            });
        })
    };

    html! {
        <form class="order-form paper-details" onsubmit={onsubmit}>
            <label>{"Course Title"}</label>
            <input
                type="text"
                value={(*title).clone()}
                onchange={let title = title.clone(); move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    title.set(input.value());
                }}
            />
            { field_error(&props.errors, "title") }

            <label>{"Paper requirements"}</label>
            <textarea
                rows="5"
                value={(*subject).clone()}
                onchange={let subject = subject.clone(); move |e: Event| {
                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                    subject.set(area.value());
                }}
            />
            { field_error(&props.errors, "subject") }

            <label>{"Citation style"}</label>
            <select
                onchange={let citation_style = citation_style.clone(); move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    citation_style.set(select.value());
                }}
            >
                <option value="" selected={citation_style.is_empty()}>{"Select style"}</option>
                {
                    for CitationStyle::ALL.into_iter().map(|style| html! {
                        <option
                            value={style.as_str()}
                            selected={*citation_style == style.as_str()}
                        >
                            {style.display_name()}
                        </option>
                    })
                }
            </select>
            { field_error(&props.errors, "citationStyle") }

            <label>{"Additional Instructions"}</label>
            <textarea
                rows="2"
                value={(*additional_instructions).clone()}
                onchange={let additional_instructions = additional_instructions.clone(); move |e: Event| {
                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                    additional_instructions.set(area.value());
                }}
            />

            <label>{"Attachments"}</label>
            <input
                type="file"
                onchange={let file = file.clone(); move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let selected = input.files().and_then(|list| list.get(0)).map(|f| FileMeta {
                        name: f.name(),
                        mime: f.type_(),
                        size: f.size() as u64,
                    });
                    file.set(selected);
                }}
            />
            {
                if let Some(meta) = (*file).as_ref() {
                    html! { <span class="file-note">{format!("{} ({} bytes)", meta.name, meta.size)}</span> }
                } else {
                    html! { <span class="file-note">{"Optional: upload a file"}</span> }
                }
            }
            { field_error(&props.errors, "file") }

            <button type="submit" class="primary-button">{"Next"}</button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct ReviewProps {
    draft: OrderDraft,
    error: Option<String>,
    on_place: Callback<MouseEvent>,
}

#[function_component(ReviewForm)]
fn review_form(props: &ReviewProps) -> Html {
    let draft = &props.draft;
    let row = |label: &str, value: String| {
        html! {
            <div class="review-row">
                <span class="review-label">{label.to_string()}</span>
                <span>{value}</span>
            </div>
        }
    };

    html! {
        <div class="review-grid">
            <div class="review-column">
                <h3>{"Review Your Order"}</h3>
                { row("Academic Level:", draft.academic_level.map(|l| l.as_str().to_string()).unwrap_or_default()) }
                { row("Paper Type:", draft.paper_type.map(|p| p.display_name().to_string()).unwrap_or_default()) }
                { row("Number of Pages:", draft.number_of_pages.to_string()) }
                { row("Sources:", draft.number_of_sources.to_string()) }
                { row("Deadline:", draft.deadline.map(|d| d.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_default()) }
                { row("Title:", draft.title.clone()) }
                { row("Paper requirements:", draft.subject.clone()) }
                { row("Citation Style:", draft.citation_style.map(|c| c.as_str().to_string()).unwrap_or_default()) }
                { row("Additional Instructions:", draft.additional_instructions.clone()) }
                {
                    if let Some(meta) = draft.file.as_ref() {
                        row("Attachment:", meta.name.clone())
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="review-column">
                <SummaryPanel summary={draft.summary.clone()} />
                {
                    if let Some(message) = props.error.as_ref() {
                        html! { <div class="error-message">{message}</div> }
                    } else {
                        html! {}
                    }
                }
                <button class="primary-button" onclick={props.on_place.clone()}>
                    {"Place Order"}
                </button>
            </div>
        </div>
    }
}

#[function_component(OrderWizard)]
pub fn order_wizard() -> Html {
    let wizard = use_state(Wizard::new);
    let price_errors = use_state(ValidationErrors::default);
    let details_errors = use_state(ValidationErrors::default);
    let place_error = use_state(|| None::<String>);

    let on_price_submit = {
        let wizard = wizard.clone();
        let price_errors = price_errors.clone();
        Callback::from(move |input: PriceInput| {
            let mut next = (*wizard).clone();
            match next.submit_price(&input, Local::now().naive_local()) {
                Ok(()) => {
                    price_errors.set(ValidationErrors::default());
                    wizard.set(next);
                }
                Err(errors) => price_errors.set(errors),
            }
        })
    };

    let on_details_submit = {
        let wizard = wizard.clone();
        let details_errors = details_errors.clone();
        Callback::from(move |input: DetailsInput| {
            let mut next = (*wizard).clone();
            match next.submit_details(&input) {
                Ok(()) => {
                    details_errors.set(ValidationErrors::default());
                    wizard.set(next);
                }
                Err(errors) => details_errors.set(errors),
            }
        })
    };

    let on_place = {
        let wizard = wizard.clone();
        let place_error = place_error.clone();
        Callback::from(move |_e: MouseEvent| {
            let mut next = (*wizard).clone();
            match next.place_order(&LocalPlaceOrder) {
                Ok(()) => {
                    place_error.set(None);
                    wizard.set(next);
                }
                Err(message) => place_error.set(Some(message)),
            }
        })
    };

    let on_back = {
        let wizard = wizard.clone();
        let price_errors = price_errors.clone();
        let details_errors = details_errors.clone();
        Callback::from(move |_e: MouseEvent| {
            let mut next = (*wizard).clone();
            next.back();
            price_errors.set(ValidationErrors::default());
            details_errors.set(ValidationErrors::default());
            wizard.set(next);
        })
    };

    let on_reset = {
        let wizard = wizard.clone();
        let price_errors = price_errors.clone();
        let details_errors = details_errors.clone();
        let place_error = place_error.clone();
        Callback::from(move |_e: MouseEvent| {
            let mut next = (*wizard).clone();
            next.reset();
            price_errors.set(ValidationErrors::default());
            details_errors.set(ValidationErrors::default());
            place_error.set(None);
            wizard.set(next);
        })
    };

    let step = wizard.step();
    let content = match step {
        WizardStep::CalculatePrice => html! {
            <PriceCalculationForm
                draft={wizard.draft().clone()}
                errors={(*price_errors).clone()}
                on_submit={on_price_submit}
            />
        },
        WizardStep::PaperDetails => html! {
            <PaperDetailsForm
                draft={wizard.draft().clone()}
                errors={(*details_errors).clone()}
                on_submit={on_details_submit}
            />
        },
        WizardStep::Review => html! {
            <ReviewForm
                draft={wizard.draft().clone()}
                error={(*place_error).clone()}
                on_place={on_place}
            />
        },
        WizardStep::Completed => html! {
            <div class="wizard-completed">
                <h3>{"Order placed successfully!"}</h3>
                <p>{"All steps completed. Our team will review your order and assign a writer shortly."}</p>
                <button class="primary-button" onclick={on_reset.clone()}>
                    {"Start New Order"}
                </button>
            </div>
        },
    };

    html! {
        <div class="order-wizard">
            <div class="stepper">
                {
                    for WizardStep::LABELS.iter().enumerate().map(|(i, label)| {
                        let class = if i < step.index() {
                            "step done"
                        } else if i == step.index() {
                            "step active"
                        } else {
                            "step"
                        };
                        html! {
                            <div class={class}>
                                <span class="step-number">{i + 1}</span>
                                <span class="step-label">{*label}</span>
                            </div>
                        }
                    })
                }
            </div>
            { content }
            {
                if step != WizardStep::Completed {
                    html! {
                        <div class="wizard-controls">
                            <button
                                class="text-button"
                                disabled={step == WizardStep::CalculatePrice}
                                onclick={on_back}
                            >
                                {"Back"}
                            </button>
                            <button class="text-button" onclick={on_reset}>
                                {"Reset"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
