use yew::prelude::*;

use crate::config::{COMPANY_NAME, COMPANY_TAGLINE};
use crate::navigation::dom::{use_navigation, UseNavigationHandle};
use crate::navigation::state::SectionId;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <div class="logo-badge" onclick={props.onclick.clone()}>
            <img src="/assets/img/logo.jpg" alt="AL ABABIL Logo" />
        </div>
    }
}

fn desktop_link(nav: &UseNavigationHandle, section: SectionId) -> Html {
    let is_active = nav.state.active_section == Some(section);
    html! {
        <a
            href={section.href()}
            class={classes!("nav-link", is_active.then_some("active"))}
            onclick={nav.navigate_to(section)}
        >
            { section.label() }
            if is_active {
                <div class="nav-link-indicator"></div>
            }
        </a>
    }
}

fn drawer_link(nav: &UseNavigationHandle, section: SectionId) -> Html {
    let is_active = nav.state.active_section == Some(section);
    html! {
        <a
            href={section.href()}
            class={classes!("drawer-link", is_active.then_some("active"))}
            onclick={nav.navigate_to(section)}
        >
            { section.label() }
            if is_active {
                <div class="drawer-link-indicator"></div>
            }
        </a>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let drawer_ref = use_node_ref();
    let overlay_ref = use_node_ref();
    let nav = use_navigation(drawer_ref.clone(), overlay_ref.clone());
    let solid = nav.state.is_header_solid;

    html! {
        <header class={classes!("site-header", solid.then_some("solid"))}>
            <div class="container header-bar">
                <div class="brand" onclick={nav.scroll_to_top()}>
                    <Logo />
                    <div>
                        <h1 class="brand-name">{ COMPANY_NAME }</h1>
                        <p class="brand-tagline">{ COMPANY_TAGLINE }</p>
                    </div>
                </div>

                <nav class="desktop-nav">
                    { for SectionId::MENU.iter().map(|section| desktop_link(&nav, *section)) }
                </nav>

                <button
                    class="menu-button"
                    onclick={nav.open_drawer()}
                    aria-label="Open mobile menu"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            if nav.state.is_drawer_open {
                <>
                <div ref={overlay_ref} class="drawer-overlay"></div>
                <div ref={drawer_ref} class="drawer">
                    <div class="drawer-top">
                        <button
                            class="drawer-close"
                            onclick={nav.close_drawer()}
                            aria-label="Close mobile menu"
                        >
                            {"×"}
                        </button>
                    </div>
                    <nav class="drawer-nav">
                        { for SectionId::MENU.iter().map(|section| drawer_link(&nav, *section)) }
                    </nav>
                </div>
                </>
            }
        </header>
    }
}
