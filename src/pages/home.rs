use gloo_console::log;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::faq::Faq;
use crate::Route;

pub fn is_logged_in() -> bool {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(_token)) = storage.get_item("token") {
                return true;
            }
        }
    }
    false
}

fn email_looks_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let error = use_state(|| None::<String>);
    let sent = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let error = error.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if name.trim().is_empty() {
                error.set(Some("Please tell us your name".to_string()));
                return;
            }
            if !email_looks_valid(&email) {
                error.set(Some("Enter a valid email address".to_string()));
                return;
            }
            if message.trim().is_empty() {
                error.set(Some("Message cannot be empty".to_string()));
                return;
            }
            log!("contact message from:", (*email).clone());
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
            error.set(None);
            sent.set(true);
        })
    };

    html! {
        <section class="contact-section" id="contact">
            <div class="contact-info">
                <h2>{"Contact us"}</h2>
                <p>{"Leave your message and we will get back to you in 24hrs."}</p>
                <div class="contact-detail">
                    <span class="contact-label">{"Email"}</span>
                    <span>{"support@brilliantessays.com"}</span>
                </div>
                <div class="contact-detail">
                    <span class="contact-label">{"Phone"}</span>
                    <span>{"+1 (555) 014-2890"}</span>
                </div>
            </div>
            <form class="contact-form" onsubmit={onsubmit}>
                {
                    if let Some(message) = (*error).as_ref() {
                        html! { <div class="error-message">{message}</div> }
                    } else if *sent {
                        html! { <div class="success-message">{"Message sent. We'll be in touch!"}</div> }
                    } else {
                        html! {}
                    }
                }
                <input
                    type="text"
                    placeholder="Your name"
                    value={(*name).clone()}
                    onchange={let name = name.clone(); move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        name.set(input.value());
                    }}
                />
                <input
                    type="email"
                    placeholder="Email address"
                    value={(*email).clone()}
                    onchange={let email = email.clone(); move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        email.set(input.value());
                    }}
                />
                <textarea
                    rows="4"
                    placeholder="How can we help?"
                    value={(*message).clone()}
                    onchange={let message = message.clone(); move |e: Event| {
                        let area: HtmlTextAreaElement = e.target_unchecked_into();
                        message.set(area.value());
                    }}
                />
                <button type="submit" class="primary-button">{"Send message"}</button>
            </form>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator().unwrap();

    let go_to_register = {
        let navigator = navigator.clone();
        Callback::from(move |_e: MouseEvent| navigator.push(&Route::Register))
    };
    let go_to_dashboard = {
        let navigator = navigator.clone();
        Callback::from(move |_e: MouseEvent| navigator.push(&Route::Dashboard))
    };

    html! {
        <div class="home-page">
            <section class="hero-section" id="landing">
                <div class="hero-text">
                    <h1>{"Guarantee of high performance"}</h1>
                    <p>
                        {"Join thousands of satisfied students who have improved their grades and \
                          academic performance with our help. Your success story begins here!"}
                    </p>
                    <div class="hero-stats">
                        <div class="stat-card">
                            <span class="stat-number">{"5+"}</span>
                            <span class="stat-text">{"Years of writing experience behind every essay"}</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-number">{"1200+"}</span>
                            <span class="stat-text">{"Orders delivered on schedule"}</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-number">{"98%"}</span>
                            <span class="stat-text">{"Clients who come back for their next paper"}</span>
                        </div>
                    </div>
                    <div class="hero-buttons">
                        <button class="primary-button" onclick={go_to_register.clone()}>
                            {"Get started"}
                        </button>
                        <button class="secondary-button" onclick={go_to_dashboard}>
                            {"Calculate your price"}
                        </button>
                    </div>
                </div>
            </section>

            <section class="services-section" id="services">
                <span class="section-chip">{"Best Writers Ever"}</span>
                <h2>{"Wide Range of Academic Writing Services"}</h2>
                <div class="services-grid">
                    <div class="service-card">
                        <h3>{"Research paper"}</h3>
                        <p>
                            {"Our experienced writers can assist you with comprehensive research \
                              papers that are well-researched and properly formatted."}
                        </p>
                    </div>
                    <div class="service-card">
                        <h3>{"Case Studies"}</h3>
                        <p>
                            {"Thorough examination of real-life scenarios and their implications \
                              for further study."}
                        </p>
                    </div>
                    <div class="service-card">
                        <h3>{"Essay Editing"}</h3>
                        <p>
                            {"Already have an essay written? Our professional editors can review \
                              and polish your work to ensure it meets the highest academic standards."}
                        </p>
                    </div>
                </div>
            </section>

            <section class="testimonial-section">
                <h2>{"Our Clients have rated us 5 stars"}</h2>
                <p class="testimonial-lead">
                    {"When it comes to academic success, our clients speak volumes. We're proud to \
                      have earned a perfect 5-star rating from students and researchers who've \
                      experienced the difference our expert writing services make."}
                </p>
                <div class="testimonial-grid">
                    <div class="testimonial-card">
                        <span class="stars">{"★★★★★"}</span>
                        <p>
                            {"Brilliant Essays saved my academic career! Their expert writers \
                              crafted a dissertation proposal that impressed my advisor. The depth \
                              and quality of their work is outstanding."}
                        </p>
                        <span class="author">{"Elena K."}</span>
                        <span class="author-role">{"Ph.D. Candidate"}</span>
                    </div>
                    <div class="testimonial-card">
                        <span class="stars">{"★★★★★"}</span>
                        <p>
                            {"The price calculator told me exactly what I'd pay before I committed, \
                              and the paper arrived a full day before my deadline. No surprises, \
                              just a solid essay."}
                        </p>
                        <span class="author">{"Marcus T."}</span>
                        <span class="author-role">{"Undergraduate, Economics"}</span>
                    </div>
                    <div class="testimonial-card">
                        <span class="stars">{"★★★★★"}</span>
                        <p>
                            {"I asked for two rounds of revisions on my literature review and both \
                              came back fast and free of charge. That's the kind of support that \
                              keeps me coming back."}
                        </p>
                        <span class="author">{"Priya S."}</span>
                        <span class="author-role">{"Graduate Student"}</span>
                    </div>
                </div>
            </section>

            <ContactSection />
            <Faq />

            <footer class="home-footer">
                <span>{"© 2024 Brilliant Essays. All rights reserved."}</span>
            </footer>

            <style>
                {r#"
                .home-page {
                    background: #16213e;
                    color: #eeeeee;
                    min-height: 100vh;
                }
                .home-page h1, .home-page h2 { color: #ffa500; }
                .hero-section {
                    display: flex;
                    align-items: center;
                    min-height: 90vh;
                    padding: 120px 8% 60px;
                    background: linear-gradient(135deg, #16213e 0%, #0f3460 100%);
                }
                .hero-text { max-width: 720px; }
                .hero-text h1 { font-size: 2.6rem; margin-bottom: 16px; }
                .hero-text p { font-size: 1.1rem; line-height: 1.6; }
                .hero-stats {
                    display: flex;
                    gap: 24px;
                    margin: 32px 0;
                    flex-wrap: wrap;
                }
                .stat-card { max-width: 200px; display: flex; flex-direction: column; }
                .stat-number { color: #ffa500; font-size: 1.6rem; font-weight: 600; }
                .stat-text { font-size: 0.85rem; color: #c9c9d1; }
                .hero-buttons { display: flex; gap: 16px; }
                .primary-button {
                    padding: 12px 28px;
                    background: #ffa500;
                    color: #fff;
                    border: none;
                    border-radius: 4px;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .primary-button:hover { background: #e69500; }
                .secondary-button {
                    padding: 12px 28px;
                    background: transparent;
                    color: #ffa500;
                    border: 1px solid #ffa500;
                    border-radius: 4px;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .services-section, .testimonial-section {
                    padding: 60px 8%;
                    text-align: center;
                }
                .section-chip {
                    display: inline-block;
                    padding: 6px 16px;
                    background: #ffa500;
                    color: #fff;
                    border-radius: 16px;
                    font-size: 0.85rem;
                    margin-bottom: 16px;
                }
                .services-grid, .testimonial-grid {
                    display: flex;
                    gap: 24px;
                    margin-top: 32px;
                    flex-wrap: wrap;
                    justify-content: center;
                }
                .service-card, .testimonial-card {
                    flex: 1;
                    min-width: 260px;
                    max-width: 360px;
                    background: rgba(255, 255, 255, 0.08);
                    border-radius: 8px;
                    padding: 24px;
                    text-align: left;
                }
                .service-card h3 { color: #ffa500; margin-bottom: 12px; }
                .testimonial-card .stars { color: #ffa500; letter-spacing: 2px; }
                .testimonial-card p { margin: 12px 0; line-height: 1.5; }
                .testimonial-lead { max-width: 860px; margin: 0 auto; line-height: 1.6; }
                .author { display: block; font-weight: 600; }
                .author-role { font-size: 0.85rem; color: #aeb0b4; }
                .contact-section {
                    display: flex;
                    gap: 48px;
                    padding: 60px 8%;
                    flex-wrap: wrap;
                }
                .contact-info { flex: 1; min-width: 260px; }
                .contact-detail { margin-top: 16px; display: flex; flex-direction: column; }
                .contact-label { font-size: 0.85rem; color: #aeb0b4; }
                .contact-form {
                    flex: 1;
                    min-width: 280px;
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                }
                .contact-form input, .contact-form textarea {
                    padding: 10px 12px;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    border-radius: 4px;
                    background: rgba(255, 255, 255, 0.06);
                    color: #eeeeee;
                }
                .error-message { color: #ff6b6b; }
                .success-message { color: #51cf66; }
                .faq-section { padding: 60px 8%; max-width: 960px; }
                .faq-subtitle { color: #aeb0b4; margin-bottom: 24px; }
                .faq-item {
                    border-bottom: 1px solid rgba(255, 255, 255, 0.15);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    background: none;
                    border: none;
                    color: #eeeeee;
                    font-size: 1rem;
                    padding: 16px 0;
                    cursor: pointer;
                    text-align: left;
                }
                .faq-item.open .question-text { color: #ffa500; }
                .faq-answer { padding: 0 0 16px; color: #c9c9d1; line-height: 1.6; }
                .toggle-icon { color: #ffa500; }
                .home-footer {
                    padding: 24px 8%;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    font-size: 0.85rem;
                    color: #aeb0b4;
                }
                @media (max-width: 600px) {
                    .hero-section { padding-top: 90px; }
                    .hero-text h1 { font-size: 1.8rem; }
                }
                "#}
            </style>
        </div>
    }
}
