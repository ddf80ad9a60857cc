use yew::prelude::*;

use crate::components::section_divider::SectionDivider;

/// Single-open accordion: opening one item closes the other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<u32>,
}

impl AccordionState {
    pub fn is_open(&self, id: u32) -> bool {
        self.open == Some(id)
    }

    pub fn toggle(self, id: u32) -> Self {
        Self {
            open: if self.is_open(id) { None } else { Some(id) },
        }
    }
}

struct FaqEntry {
    id: u32,
    question: &'static str,
    answer: &'static str,
}

const FAQS: &[FaqEntry] = &[
    FaqEntry {
        id: 1,
        question: "What services does AL ABABIL provide?",
        answer: "We provide comprehensive document clearing services including visa processing, business license applications, document attestation, PRO services, translation services, and complete business setup solutions across the UAE.",
    },
    FaqEntry {
        id: 2,
        question: "How long does visa processing typically take?",
        answer: "Visa processing times vary depending on the type of visa and current government processing times. Typically, residence visas take 5-10 working days, visit visas can be processed within 2-3 working days, and employment visas take 7-14 working days.",
    },
    FaqEntry {
        id: 4,
        question: "What documents are required for company formation?",
        answer: "Required documents typically include passport copies of shareholders, NOC letters, office lease agreement, memorandum of association, and specific forms depending on the business activity and Emirate. We provide a complete checklist and guide you through each requirement.",
    },
    FaqEntry {
        id: 5,
        question: "How can I track the progress of my application?",
        answer: "We provide regular updates via phone, email, or WhatsApp throughout the process. You can also contact our customer service team anytime for status updates. We maintain complete transparency about your application status.",
    },
    FaqEntry {
        id: 6,
        question: "How much do your services cost?",
        answer: "Our pricing varies depending on the service type and complexity. We offer transparent, competitive pricing with no hidden fees. Contact us for a free consultation and detailed quote based on your specific requirements.",
    },
    FaqEntry {
        id: 7,
        question: "What is document attestation and why is it needed?",
        answer: "Document attestation is the process of verifying the authenticity of documents by authorized government departments. It's required for educational certificates, marriage certificates, and commercial documents to be legally recognized in the UAE.",
    },
    FaqEntry {
        id: 8,
        question: "Can you help with choosing the right business license type?",
        answer: "Absolutely! We provide expert consultation to help you choose the most suitable business license type based on your business activities, target market, and long-term goals. We ensure compliance with all UAE regulations.",
    },
    FaqEntry {
        id: 10,
        question: "Do you offer free consultations?",
        answer: "Yes, we provide free initial consultations to understand your requirements and explain the best approach for your specific needs. This helps you make informed decisions before proceeding with any services.",
    },
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    is_open: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class={classes!("faq-item", props.is_open.then_some("open"))}>
            <button class="faq-question" onclick={props.on_toggle.clone()}>
                <span class="question-text">{ props.question }</span>
                <span class="faq-chevron">{"⌄"}</span>
            </button>
            if props.is_open {
                <div class="faq-answer">
                    <div class="faq-answer-rule"></div>
                    <p>{ props.answer }</p>
                </div>
            }
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let accordion = use_state(AccordionState::default);

    html! {
        <section id="faq" class="section faq-section">
            <div class="container narrow">
                <div class="section-heading">
                    <h2>{"Frequently Asked Questions"}</h2>
                    <SectionDivider />
                    <p>{"Find answers to common questions about our document clearing and business services."}</p>
                </div>
                <div class="faq-list">
                    { for FAQS.iter().map(|faq| {
                        let on_toggle = {
                            let accordion = accordion.clone();
                            let id = faq.id;
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                accordion.set(accordion.toggle(id));
                            })
                        };
                        html! {
                            <FaqItem
                                key={faq.id}
                                question={faq.question}
                                answer={faq.answer}
                                is_open={accordion.is_open(faq.id)}
                                {on_toggle}
                            />
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_and_closes() {
        let state = AccordionState::default();
        assert!(!state.is_open(1));
        let state = state.toggle(1);
        assert!(state.is_open(1));
        let state = state.toggle(1);
        assert!(!state.is_open(1));
    }

    #[test]
    fn test_only_one_item_open() {
        let state = AccordionState::default().toggle(1).toggle(5);
        assert!(!state.is_open(1));
        assert!(state.is_open(5));
    }

    #[test]
    fn test_faq_ids_are_unique() {
        let mut ids: Vec<_> = FAQS.iter().map(|f| f.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FAQS.len());
    }
}
