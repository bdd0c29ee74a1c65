use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            {
                if *is_open {
                    html! { <div class="faq-answer">{ for props.children.iter() }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section class="faq-section" id="faq">
            <h2>{"Frequently Asked Questions"}</h2>
            <p class="faq-subtitle">
                {"Find answers to common questions about our company's background and operations."}
            </p>

            <FaqItem question="How do I place an order?">
                <p>
                    {"Simply fill out the order form on your dashboard. Provide all the necessary \
                      details, such as the topic, deadline, and any specific requirements. Once you \
                      submit the form, our team will review it and assign a writer to work on your essay."}
                </p>
            </FaqItem>

            <FaqItem question="What is the pricing?">
                <p>
                    {"Our pricing depends on the type of essay, academic level, and deadline. Rates \
                      start at $8.49 per page for high-school work, and orders due within 24 hours \
                      carry a flat urgency surcharge per page. The price calculator shows the full \
                      breakdown before you commit to anything."}
                </p>
            </FaqItem>

            <FaqItem question="How long does it take to receive the completed essay?">
                <p>
                    {"The turnaround time depends on the length, complexity, and deadline you \
                      specify. Our writers strive to deliver high-quality essays within the \
                      agreed-upon timeframe."}
                </p>
            </FaqItem>

            <FaqItem question="Can I request revisions?">
                <p>
                    {"Yes, we offer free revisions to ensure your satisfaction. If you have any \
                      feedback or require changes to your essay, simply contact our support team \
                      and they will assist you in making the necessary revisions."}
                </p>
            </FaqItem>
        </section>
    }
}
