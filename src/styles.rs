use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Site-wide stylesheet. Animations live in `index.html`.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(
            r#"
            * {
                box-sizing: border-box;
            }
            html {
                scroll-behavior: smooth;
            }
            body {
                margin: 0;
                font-family: "Geist", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                color: #1f2937;
                background: #ffffff;
                -webkit-font-smoothing: antialiased;
            }
            img {
                max-width: 100%;
            }
            .container {
                max-width: 1280px;
                margin: 0 auto;
                padding: 0 1rem;
            }
            .container.narrow {
                max-width: 960px;
            }
            .section {
                padding: 5rem 0;
                scroll-margin-top: 80px;
            }
            .section-heading {
                text-align: center;
                margin-bottom: 4rem;
            }
            .section-heading h2 {
                font-size: 2.25rem;
                font-weight: 700;
                margin: 0 0 1.5rem;
            }
            .section-heading p {
                font-size: 1.125rem;
                color: #4b5563;
                max-width: 48rem;
                margin: 0 auto;
            }
            .accent {
                color: #0d9488;
                font-weight: 600;
            }

            .site-header {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 50;
                background: transparent;
                transition: all 0.3s;
                animation: header-drop 0.6s ease-out;
            }
            .site-header.solid {
                background: #ffffff;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
            }
            .header-bar {
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding-top: 0.5rem;
                padding-bottom: 0.5rem;
            }
            .brand {
                display: flex;
                align-items: center;
                gap: 0.75rem;
                cursor: pointer;
            }
            .brand-name {
                margin: 0;
                font-size: 1.25rem;
                font-weight: 700;
                color: #ffffff;
            }
            .brand-tagline {
                margin: 0;
                font-size: 13px;
                letter-spacing: 0.05em;
                color: #e5e7eb;
            }
            .site-header.solid .brand-name {
                color: #1f2937;
            }
            .site-header.solid .brand-tagline {
                color: #4b5563;
            }
            .logo-badge {
                width: 3.5rem;
                height: 3.5rem;
                border-radius: 9999px;
                overflow: hidden;
                background: #ffffff;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                cursor: pointer;
            }
            .logo-badge img {
                width: 100%;
                height: 100%;
                object-fit: cover;
            }
            .desktop-nav {
                display: flex;
                gap: 2rem;
            }
            .nav-link {
                position: relative;
                font-weight: 500;
                color: #ffffff;
                text-decoration: none;
                transition: color 0.3s;
            }
            .site-header.solid .nav-link {
                color: #374151;
            }
            .nav-link:hover,
            .nav-link.active,
            .site-header.solid .nav-link.active {
                color: #14b8a6;
            }
            .nav-link-indicator {
                position: absolute;
                left: 0;
                right: 0;
                bottom: -0.25rem;
                height: 2px;
                border-radius: 9999px;
                background: #14b8a6;
            }
            .menu-button {
                display: none;
                flex-direction: column;
                gap: 4px;
                background: none;
                border: none;
                cursor: pointer;
                padding: 0.25rem;
            }
            .menu-button span {
                display: block;
                width: 24px;
                height: 2px;
                background: #ffffff;
            }
            .site-header.solid .menu-button span {
                background: #1f2937;
            }
            .drawer-overlay {
                position: fixed;
                inset: 0;
                z-index: 50;
                background: rgba(0, 0, 0, 0.4);
                backdrop-filter: blur(4px);
            }
            .drawer {
                position: fixed;
                top: 0;
                right: 0;
                z-index: 51;
                height: 100%;
                width: 90vw;
                max-width: 20rem;
                background: #ffffff;
                padding: 1.5rem;
                display: flex;
                flex-direction: column;
                box-shadow: -10px 0 25px rgba(0, 0, 0, 0.25);
                animation: drawer-in 0.3s ease-out;
            }
            .drawer-top {
                display: flex;
                justify-content: flex-end;
                margin-bottom: 1.5rem;
            }
            .drawer-close {
                background: none;
                border: none;
                font-size: 1.75rem;
                color: #374151;
                cursor: pointer;
            }
            .drawer-nav {
                display: flex;
                flex-direction: column;
                gap: 1rem;
            }
            .drawer-link {
                position: relative;
                display: block;
                padding: 0.75rem 1rem;
                border-radius: 0.5rem;
                font-weight: 600;
                color: #374151;
                text-decoration: none;
            }
            .drawer-link:hover,
            .drawer-link.active {
                color: #14b8a6;
                background: #f0fdfa;
            }
            .drawer-link-indicator {
                position: absolute;
                left: 0;
                top: 0;
                bottom: 0;
                width: 4px;
                background: #14b8a6;
                border-radius: 0 4px 4px 0;
            }

            .cta-button {
                position: relative;
                overflow: hidden;
                border: none;
                cursor: pointer;
                color: #ffffff;
                font-weight: 600;
                padding: 0.75rem 1.5rem;
                border-radius: 9999px;
                background: linear-gradient(to right, #14b8a6, #2563eb);
                transition: transform 0.3s;
            }
            .cta-button:hover {
                transform: scale(1.05);
            }
            .cta-button:active {
                transform: scale(0.95);
            }
            .cta-label {
                position: relative;
                display: flex;
                align-items: center;
                justify-content: center;
                gap: 0.5rem;
            }
            .cta-icon {
                width: 1.25rem;
                height: 1.25rem;
            }
            .wide-cta {
                padding: 1rem 2.5rem;
                font-size: 1.125rem;
            }
            .centered-cta {
                display: flex;
                justify-content: center;
                margin-top: 4rem;
            }

            .hero {
                position: relative;
                height: 100vh;
                overflow: hidden;
                background: #111827;
            }
            .hero-track {
                display: flex;
                height: 100%;
                transition: transform 0.8s ease;
            }
            .hero-slide {
                position: relative;
                flex: 0 0 100%;
                height: 100%;
            }
            .hero-slide-bg {
                position: absolute;
                inset: 0;
                background-size: cover;
                background-position: center;
                background-repeat: no-repeat;
            }
            .hero-slide-content {
                position: relative;
                z-index: 1;
                height: 100%;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                text-align: center;
                color: #ffffff;
                max-width: 64rem;
                margin: 0 auto;
                padding: 0 1rem;
            }
            .hero-slide-content h2 {
                font-size: 3rem;
                font-weight: 700;
                margin: 0 0 1.5rem;
            }
            .hero-slide-content p {
                font-size: 1.25rem;
                line-height: 1.6;
                margin: 0 0 2rem;
            }
            .hero-cta {
                border: none;
                cursor: pointer;
                color: #ffffff;
                font-size: 1.125rem;
                font-weight: 600;
                padding: 1rem 2rem;
                border-radius: 9999px;
                background: linear-gradient(to right, #14b8a6, #2563eb);
            }
            .hero-arrow {
                position: absolute;
                top: 50%;
                z-index: 2;
                transform: translateY(-50%);
                border: none;
                background: rgba(255, 255, 255, 0.2);
                color: #ffffff;
                font-size: 2rem;
                width: 3rem;
                height: 3rem;
                border-radius: 9999px;
                cursor: pointer;
            }
            .hero-arrow.prev {
                left: 1rem;
            }
            .hero-arrow.next {
                right: 1rem;
            }
            .hero-dots {
                position: absolute;
                bottom: 1.5rem;
                left: 0;
                right: 0;
                z-index: 2;
                display: flex;
                justify-content: center;
                gap: 0.5rem;
            }
            .hero-dot {
                width: 0.75rem;
                height: 0.75rem;
                border-radius: 9999px;
                border: none;
                background: rgba(255, 255, 255, 0.5);
                cursor: pointer;
            }
            .hero-dot.current {
                background: #ffffff;
            }

            .services-section {
                background: linear-gradient(to bottom right, #f9fafb, #f0fdfa);
            }
            .services-grid {
                display: grid;
                grid-template-columns: repeat(3, 1fr);
                gap: 2rem;
            }
            .service-card {
                position: relative;
                display: flex;
                flex-direction: column;
                background: #ffffff;
                border-radius: 1.5rem;
                overflow: hidden;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                transition: transform 0.3s;
            }
            .service-card:hover {
                transform: translateY(-0.5rem);
            }
            .service-icon {
                position: absolute;
                top: 1rem;
                left: 1rem;
                z-index: 1;
                font-size: 1.75rem;
                background: #ffffff;
                border-radius: 9999px;
                padding: 0.5rem;
            }
            .service-number {
                position: absolute;
                top: 1rem;
                right: 1rem;
                z-index: 1;
                font-weight: 700;
                color: #ffffff;
            }
            .service-image img {
                width: 100%;
                height: 14rem;
                object-fit: cover;
            }
            .service-body {
                display: flex;
                flex-direction: column;
                flex: 1;
                padding: 1.5rem;
            }
            .service-body h3 {
                margin: 0 0 0.75rem;
                font-size: 1.25rem;
            }
            .service-body p {
                color: #4b5563;
                margin: 0 0 1rem;
            }
            .service-features {
                list-style: none;
                padding: 0;
                margin: 0 0 1.5rem;
                flex: 1;
            }
            .service-features li {
                display: flex;
                align-items: center;
                gap: 0.5rem;
                margin-bottom: 0.5rem;
                color: #374151;
            }
            .feature-dot {
                width: 0.5rem;
                height: 0.5rem;
                border-radius: 9999px;
                background: #14b8a6;
            }

            .about-row {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 3rem;
                align-items: center;
                margin-bottom: 4rem;
            }
            .about-text h3 {
                font-size: 1.75rem;
                margin: 0 0 1.5rem;
            }
            .about-text p {
                font-size: 1.125rem;
                line-height: 1.7;
                color: #374151;
            }
            .about-image {
                width: 100%;
                height: 20rem;
                object-fit: cover;
                border-radius: 1rem;
            }
            .track-record {
                text-align: center;
                padding: 2.5rem;
                border-radius: 1.5rem;
                background: linear-gradient(to right, #14b8a6, #2563eb);
                color: #ffffff;
            }
            .track-record-grid {
                display: grid;
                grid-template-columns: repeat(4, 1fr);
                gap: 1.5rem;
            }
            .track-record-item h4 {
                font-size: 2rem;
                margin: 0;
            }

            .partners-section {
                background: #f9fafb;
            }
            .marquee {
                position: relative;
                overflow: hidden;
            }
            .marquee-track {
                display: flex;
                width: 400%;
                animation: marquee 40s linear infinite;
            }
            .marquee-item {
                flex: 0 0 calc(100% / 24);
                padding: 0 1rem;
            }
            .marquee-item img {
                width: 100%;
                height: 6rem;
                object-fit: contain;
            }
            .marquee-fade {
                position: absolute;
                top: 0;
                bottom: 0;
                width: 6rem;
            }
            .marquee-fade.left {
                left: 0;
                background: linear-gradient(to right, #f9fafb, transparent);
            }
            .marquee-fade.right {
                right: 0;
                background: linear-gradient(to left, #f9fafb, transparent);
            }

            .reasons-grid {
                display: grid;
                grid-template-columns: repeat(3, 1fr);
                gap: 2rem;
            }
            .reason-card {
                position: relative;
                padding: 2rem;
                border-radius: 1.5rem;
                background: #ffffff;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                transition: transform 0.3s;
            }
            .reason-card:hover {
                transform: translateY(-10px);
            }
            .reason-top {
                display: flex;
                justify-content: space-between;
                align-items: flex-start;
                margin-bottom: 1.5rem;
            }
            .reason-icon {
                font-size: 2.5rem;
            }
            .reason-stat {
                text-align: right;
            }
            .reason-stat-value {
                font-size: 1.5rem;
                font-weight: 700;
                color: #0d9488;
            }
            .reason-stat-label {
                font-size: 0.875rem;
                color: #6b7280;
            }
            .reason-accent {
                position: absolute;
                left: 0;
                right: 0;
                bottom: 0;
                height: 4px;
                background: linear-gradient(to right, #14b8a6, #2563eb);
            }

            .faq-section {
                background: #f9fafb;
            }
            .faq-list {
                display: flex;
                flex-direction: column;
                gap: 1rem;
            }
            .faq-item {
                background: #ffffff;
                border-radius: 1rem;
                box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
                overflow: hidden;
            }
            .faq-question {
                width: 100%;
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 1.5rem;
                background: none;
                border: none;
                text-align: left;
                font-size: 1.125rem;
                font-weight: 600;
                color: #1f2937;
                cursor: pointer;
            }
            .faq-chevron {
                color: #6b7280;
                transition: transform 0.3s;
            }
            .faq-item.open .faq-chevron {
                transform: rotate(180deg);
            }
            .faq-answer {
                display: flex;
                gap: 1rem;
                padding: 0 1.5rem 1.5rem;
                animation: faq-open 0.4s ease-in-out;
            }
            .faq-answer-rule {
                flex: 0 0 4px;
                border-radius: 9999px;
                background: linear-gradient(to bottom, #14b8a6, #2563eb);
            }
            .faq-answer p {
                margin: 0;
                line-height: 1.7;
                color: #4b5563;
            }

            .consultation-card {
                max-width: 48rem;
                margin: 0 auto 4rem;
                padding: 2.5rem;
                text-align: center;
                border-radius: 1.5rem;
                background: #ffffff;
                box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
            }
            .consultation-icon {
                font-size: 2.5rem;
            }
            .contact-grid {
                display: grid;
                grid-template-columns: repeat(4, 1fr);
                gap: 1.5rem;
            }
            .contact-card {
                padding: 2rem;
                text-align: center;
                border-radius: 1.5rem;
                background: #ffffff;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
            }
            .contact-card-icon {
                font-size: 2rem;
                margin-bottom: 1rem;
            }
            .contact-strong {
                font-weight: 600;
            }
            .contact-muted {
                color: #6b7280;
                font-size: 0.875rem;
            }
            .map-frame {
                border-radius: 1.5rem;
                overflow: hidden;
                box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
            }

            .site-footer {
                background: #111827;
                color: #d1d5db;
                padding: 4rem 0 2rem;
            }
            .footer-grid {
                display: grid;
                grid-template-columns: 2fr 1fr 1fr 1fr;
                gap: 2rem;
            }
            .footer-brand-row {
                display: flex;
                align-items: center;
                gap: 0.75rem;
            }
            .footer-brand-row h3 {
                margin: 0;
                color: #ffffff;
            }
            .site-footer h4 {
                color: #ffffff;
                margin: 0 0 1rem;
            }
            .site-footer ul {
                list-style: none;
                padding: 0;
                margin: 0;
            }
            .site-footer li {
                margin-bottom: 0.5rem;
            }
            .site-footer a {
                color: #d1d5db;
                text-decoration: none;
            }
            .site-footer a:hover {
                color: #14b8a6;
            }
            .social-links {
                display: flex;
                gap: 1rem;
                font-size: 1.5rem;
                margin-bottom: 1rem;
            }
            .social-link.hover-facebook:hover {
                color: #2563eb;
            }
            .social-link.hover-instagram:hover {
                color: #db2777;
            }
            .social-link.hover-whatsapp:hover {
                color: #22c55e;
            }
            .social-link.hover-email:hover {
                color: #16a34a;
            }
            .footer-contact {
                margin: 0.25rem 0;
            }
            .footer-bottom {
                margin-top: 3rem;
                padding-top: 2rem;
                border-top: 1px solid #374151;
                text-align: center;
                font-size: 0.875rem;
            }

            @media (max-width: 1023px) {
                .services-grid,
                .reasons-grid {
                    grid-template-columns: repeat(2, 1fr);
                }
                .contact-grid,
                .footer-grid {
                    grid-template-columns: repeat(2, 1fr);
                }
            }

            @media (max-width: 767px) {
                .desktop-nav {
                    display: none;
                }
                .menu-button {
                    display: flex;
                }
                .hero-arrow {
                    display: none;
                }
                .hero-slide-content h2 {
                    font-size: 1.75rem;
                }
                .hero-slide-content p {
                    font-size: 1rem;
                }
                .services-grid,
                .reasons-grid,
                .contact-grid,
                .footer-grid,
                .about-row {
                    grid-template-columns: 1fr;
                }
                .track-record-grid {
                    grid-template-columns: repeat(2, 1fr);
                }
                .section-heading h2 {
                    font-size: 1.75rem;
                }
            }
            "#
        )} />
    }
}
