use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{HERO_AUTOPLAY_MS, WHATSAPP_NUMBER};
use crate::whatsapp::{interest_message, open_chat};

/// Index into a looping set of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    pub fn go_to(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        Self { index, ..self }
    }
}

struct Slide {
    background: &'static str,
    title: &'static str,
    description: &'static str,
    button_text: &'static str,
}

const SLIDES: &[Slide] = &[
    Slide {
        background: "/assets/img/slide1.png",
        title: "Professional Document Clearing Services in UAE",
        description: "Expert assistance for all your government paperwork, visa processing, and business documentation needs across the Emirates.",
        button_text: "Book Free Meeting",
    },
    Slide {
        background: "/assets/img/slide2.JPG",
        title: "Fast & Reliable Business Setup Solutions",
        description: "From company formation to trade license processing, we handle all your business establishment requirements efficiently.",
        button_text: "Book Free Meeting",
    },
    Slide {
        background: "/assets/img/slide3.PNG",
        title: "Complete Immigration & Visa Services",
        description: "Comprehensive support for residency visas, work permits, and all immigration-related documentation in the UAE.",
        button_text: "Book Free Meeting",
    },
];

#[function_component(HeroSlider)]
pub fn hero_slider() -> Html {
    let carousel = use_state(|| CarouselState::new(SLIDES.len()));
    // Any manual navigation stops autoplay for the rest of the visit.
    let autoplay = use_state(|| true);

    {
        let carousel = carousel.clone();
        use_interval(
            move || carousel.set(carousel.next()),
            if *autoplay { HERO_AUTOPLAY_MS } else { 0 },
        );
    }

    let step = |advance: fn(CarouselState) -> CarouselState| {
        let carousel = carousel.clone();
        let autoplay = autoplay.clone();
        Callback::from(move |_: MouseEvent| {
            autoplay.set(false);
            carousel.set(advance(*carousel));
        })
    };
    let on_prev = step(CarouselState::prev);
    let on_next = step(CarouselState::next);

    let current = carousel.index();

    html! {
        <section class="hero">
            <div class="hero-track" style={format!("transform: translateX(-{}%);", current * 100)}>
                { for SLIDES.iter().enumerate().map(|(i, slide)| {
                    let onclick = {
                        let message = interest_message(slide.button_text);
                        Callback::from(move |_: MouseEvent| open_chat(WHATSAPP_NUMBER, &message))
                    };
                    html! {
                        <div class={classes!("hero-slide", (i == current).then_some("current"))}>
                            <div
                                class="hero-slide-bg"
                                style={format!(
                                    "background-image: linear-gradient(rgba(0, 0, 0, 0.4), rgba(0, 0, 0, 0.4)), url({});",
                                    slide.background
                                )}
                            />
                            <div class="hero-slide-content">
                                <h2>{ slide.title }</h2>
                                <p>{ slide.description }</p>
                                <button class="hero-cta" {onclick}>{ slide.button_text }</button>
                            </div>
                        </div>
                    }
                }) }
            </div>

            <button class="hero-arrow prev" onclick={on_prev} aria-label="Previous slide">{"‹"}</button>
            <button class="hero-arrow next" onclick={on_next} aria-label="Next slide">{"›"}</button>

            <div class="hero-dots">
                { for (0..SLIDES.len()).map(|i| {
                    let onclick = {
                        let carousel = carousel.clone();
                        let autoplay = autoplay.clone();
                        Callback::from(move |_: MouseEvent| {
                            autoplay.set(false);
                            carousel.set(carousel.go_to(i));
                        })
                    };
                    html! {
                        <button
                            class={classes!("hero-dot", (i == current).then_some("current"))}
                            aria-label={format!("Go to slide {}", i + 1)}
                            {onclick}
                        />
                    }
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        let c = CarouselState::new(3);
        assert_eq!(c.next().index(), 1);
        assert_eq!(c.next().next().next().index(), 0);
    }

    #[test]
    fn test_prev_wraps() {
        let c = CarouselState::new(3);
        assert_eq!(c.prev().index(), 2);
        assert_eq!(c.prev().prev().index(), 1);
    }

    #[test]
    fn test_go_to_ignores_out_of_range() {
        let c = CarouselState::new(3).go_to(2);
        assert_eq!(c.index(), 2);
        assert_eq!(c.go_to(3).index(), 2);
    }

    #[test]
    fn test_empty_carousel_stays_put() {
        let c = CarouselState::new(0);
        assert_eq!(c.next().index(), 0);
        assert_eq!(c.prev().index(), 0);
        assert_eq!(c.go_to(0).index(), 0);
    }

    #[test]
    fn test_every_slide_has_a_call_to_action() {
        assert_eq!(SLIDES.len(), 3);
        assert!(SLIDES.iter().all(|s| !s.button_text.is_empty()));
    }
}
