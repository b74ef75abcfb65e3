use chrono::Datelike;
use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::components::contact_form::ContactForm;
use crate::components::launch_panel::LaunchPanel;
use crate::components::nav::Nav;
use crate::components::toast::{ToastAction, ToastList, ToastViewport};
use crate::content::{CONTACT_DETAILS, GALLERY, HIGHLIGHTS, SERVICES, STATS};
use crate::launch::{LaunchSequencer, LaunchState, LaunchTiming};
use crate::page::BrowserPage;
use crate::scroll_spy::{ScrollSpy, ScrollState};
use crate::sections::NAV_ITEMS;
use crate::smooth_nav::SmoothNavigator;
use crate::timers::BrowserScheduler;

#[function_component(Home)]
pub fn home() -> Html {
    let scroll_state = use_state(ScrollState::default);
    let launch_state = use_state(LaunchState::default);
    let menu_open = use_state(|| false);
    let toasts = use_reducer(ToastList::default);
    let sequencer = use_mut_ref(|| None::<LaunchSequencer<BrowserScheduler>>);

    // Controllers live exactly as long as the page is mounted.
    {
        let scroll_state = scroll_state.clone();
        let launch_state = launch_state.clone();
        let toasts = toasts.clone();
        let sequencer = sequencer.clone();
        use_effect_once(move || {
            let mut spy_handle = None;
            let mut navigator_handle = None;
            match BrowserPage::current() {
                Ok(page) => {
                    let on_scroll = Callback::from(move |state| scroll_state.set(state));
                    match ScrollSpy::new(&NAV_ITEMS).start(page.clone(), on_scroll) {
                        Ok(handle) => spy_handle = Some(handle),
                        Err(e) => warn!("Scroll spy unavailable: {}", e),
                    }
                    match SmoothNavigator::new().start(page) {
                        Ok(handle) => navigator_handle = Some(handle),
                        Err(e) => warn!("Smooth navigation unavailable: {}", e),
                    }
                }
                Err(e) => warn!("Page controllers not started: {}", e),
            }

            *sequencer.borrow_mut() = Some(LaunchSequencer::new(
                BrowserScheduler,
                LaunchTiming::default(),
                Callback::from(move |state| launch_state.set(state)),
                Callback::from(move |_| {
                    toasts.dispatch(ToastAction::success(
                        "🚀 Launch Successful!",
                        "Mission parameters nominal. All systems go!",
                    ))
                }),
            ));

            move || {
                if let Some(sequencer) = sequencer.borrow_mut().take() {
                    sequencer.dispose();
                }
                if let Some(mut handle) = spy_handle {
                    handle.dispose();
                }
                if let Some(mut handle) = navigator_handle {
                    handle.dispose();
                }
            }
        });
    }

    let navigate = {
        let menu_open = menu_open.clone();
        Callback::from(move |section_id: &'static str| {
            if let Ok(page) = BrowserPage::current() {
                SmoothNavigator::new().scroll_to_section(section_id, &page);
            }
            menu_open.set(false);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let trigger_launch = {
        let sequencer = sequencer.clone();
        Callback::from(move |_| {
            if let Some(sequencer) = sequencer.borrow().as_ref() {
                sequencer.trigger();
            }
        })
    };

    let dismiss_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let push_toast = {
        let toasts = toasts.clone();
        Callback::from(move |action| toasts.dispatch(action))
    };

    let scroll_to = |section_id: &'static str| {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(section_id))
    };

    let year = chrono::Local::now().year();

    html! {
        <div class="site">
            <Nav
                active_section={scroll_state.active_section}
                menu_open={*menu_open}
                on_toggle_menu={toggle_menu}
                on_navigate={navigate.clone()}
            />

            <section id="home" class="hero">
                <div class="hero-backdrop"></div>
                <div class="hero-content">
                    <h1 class="hero-title">{"Astrellion Tech"}</h1>
                    <h2 class="hero-subtitle">{"Pioneering Rocket Engineering Excellence"}</h2>
                    <p class="hero-text">
                        {"Pushing the boundaries of aerospace technology with cutting-edge rocket engineering solutions. From concept to launch, we deliver precision-engineered systems that reach beyond the stars."}
                    </p>
                    <div class="hero-actions">
                        <button class="primary-button" onclick={scroll_to("services")}>
                            {"Explore Our Technology"}
                        </button>
                        <button class="outline-button" onclick={scroll_to("gallery")}>
                            {"View Mission Gallery"}
                        </button>
                    </div>
                    <LaunchPanel state={*launch_state} on_trigger={trigger_launch} />
                </div>
                <button class="scroll-indicator" onclick={scroll_to("about")} aria-label="Scroll to about">
                    {"⌄"}
                </button>
            </section>

            <section id="about" class="section dark">
                <div class="section-inner">
                    <h2 class="section-title">{"About Astrellion Tech"}</h2>
                    <p class="section-lead">
                        {"Leading the aerospace revolution with innovative rocket engineering solutions and advanced propulsion technologies."}
                    </p>
                    <div class="card-grid">
                        { for HIGHLIGHTS.iter().map(|feature| html! {
                            <div class="card">
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        }) }
                    </div>
                    <h3 class="stats-title">{"Mission Statistics"}</h3>
                    <p class="section-lead">{"Proven excellence in aerospace engineering and space exploration"}</p>
                    <div class="stats-grid">
                        { for STATS.iter().map(|stat| html! {
                            <div class="stat">
                                <div class="stat-value">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="services" class="section">
                <div class="section-inner">
                    <h2 class="section-title">{"Our Services"}</h2>
                    <p class="section-lead">{"Comprehensive rocket engineering solutions from design to deployment"}</p>
                    <div class="card-grid">
                        { for SERVICES.iter().map(|service| html! {
                            <div class="card">
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                                <a class="card-link" href="#contact">{"Learn More"}</a>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="gallery" class="section dark">
                <div class="section-inner">
                    <h2 class="section-title">{"Mission Gallery"}</h2>
                    <p class="section-lead">{"Explore our latest achievements in space technology and rocket engineering"}</p>
                    <div class="gallery-grid">
                        { for GALLERY.iter().map(|image| html! {
                            <figure class="gallery-item">
                                <img src={image.src} alt={image.alt} loading="lazy" />
                                <figcaption>{image.title}</figcaption>
                            </figure>
                        }) }
                    </div>
                </div>
            </section>

            <section id="contact" class="section dark">
                <div class="section-inner">
                    <h2 class="section-title">{"Launch Your Project"}</h2>
                    <p class="section-lead">
                        {"Ready to reach for the stars? Contact our team of rocket engineering experts today."}
                    </p>
                    <div class="contact-grid">
                        <div class="card">
                            <ContactForm on_toast={push_toast} />
                        </div>
                        <div class="contact-details">
                            { for CONTACT_DETAILS.iter().map(|detail| html! {
                                <div class="contact-detail">
                                    <h4>{detail.title}</h4>
                                    <p>{detail.content}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <footer class="footer">
                <div class="section-inner footer-inner">
                    <div>
                        <span class="footer-brand">{"Astrellion Tech"}</span>
                        <p>{"Leading the future of aerospace technology with innovative rocket engineering solutions that push the boundaries of what's possible."}</p>
                    </div>
                    <div class="footer-links">
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <a href={item.href()}>{item.label}</a>
                        }) }
                    </div>
                </div>
                <p class="footer-copy">
                    {format!("© {} Astrellion Tech. All rights reserved. Reaching beyond the stars.", year)}
                </p>
            </footer>

            <ToastViewport toasts={toasts.toasts.clone()} on_dismiss={dismiss_toast} />

            <style>
                {r#"
                body {
                    margin: 0;
                    background: #000;
                    color: #fff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .site { overflow-x: hidden; }
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    overflow: hidden;
                }
                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(ellipse at top, #450a0a 0%, #000 70%);
                    opacity: 0.8;
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 72rem;
                    padding: 6rem 1.5rem 4rem;
                }
                .hero-title {
                    font-size: clamp(3rem, 8vw, 4.5rem);
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(90deg, #fff, #fca5a5, #dc2626);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle { font-size: clamp(1.5rem, 4vw, 2.25rem); font-weight: 300; color: #e5e7eb; }
                .hero-text { font-size: 1.125rem; color: #d1d5db; max-width: 48rem; margin: 0 auto 3rem; line-height: 1.7; }
                .hero-actions { display: flex; flex-wrap: wrap; gap: 1.5rem; justify-content: center; }
                .primary-button, .outline-button {
                    padding: 1rem 2rem;
                    font-size: 1rem;
                    font-weight: 600;
                    border-radius: 0.5rem;
                    cursor: pointer;
                }
                .primary-button { background: linear-gradient(90deg, #dc2626, #ef4444); color: #fff; border: none; }
                .outline-button { background: transparent; color: #dc2626; border: 2px solid #dc2626; }
                .outline-button:hover { background: #dc2626; color: #fff; }
                .scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 2rem;
                    cursor: pointer;
                }
                .section { padding: 5rem 0; background: linear-gradient(to bottom, #000, #111827); }
                .section.dark { background: #111827; }
                .section-inner { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
                .section-title { font-size: 2.5rem; text-align: center; margin-bottom: 1rem; }
                .section-lead { text-align: center; color: #9ca3af; max-width: 48rem; margin: 0 auto 3rem; }
                .card-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2rem; }
                .card {
                    background: rgba(0, 0, 0, 0.6);
                    border: 1px solid rgba(220, 38, 38, 0.2);
                    border-radius: 1rem;
                    padding: 2rem;
                }
                .card h3 { color: #fff; margin-bottom: 0.75rem; }
                .card p { color: #9ca3af; line-height: 1.6; }
                .card-link { color: #dc2626; text-decoration: none; font-weight: 600; }
                .stats-title { text-align: center; font-size: 2rem; margin-top: 5rem; }
                .stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 2rem; text-align: center; }
                .stat-value { font-size: 2.5rem; font-weight: 700; color: #dc2626; }
                .stat-label { color: #9ca3af; }
                .gallery-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 1.5rem; }
                .gallery-item { position: relative; margin: 0; border-radius: 1rem; overflow: hidden; }
                .gallery-item img { width: 100%; height: 16rem; object-fit: cover; display: block; transition: transform 0.5s; }
                .gallery-item:hover img { transform: scale(1.08); }
                .gallery-item figcaption {
                    position: absolute;
                    bottom: 0;
                    width: 100%;
                    padding: 1rem;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.85), transparent);
                    font-weight: 600;
                }
                .contact-grid { display: grid; grid-template-columns: 3fr 2fr; gap: 3rem; }
                .contact-detail h4 { color: #dc2626; margin-bottom: 0.25rem; }
                .contact-detail p { color: #d1d5db; }
                .footer { background: #000; border-top: 1px solid rgba(220, 38, 38, 0.2); padding: 3rem 0 1.5rem; }
                .footer-inner { display: flex; justify-content: space-between; gap: 2rem; flex-wrap: wrap; }
                .footer-brand { font-size: 1.25rem; font-weight: 700; }
                .footer-inner p { color: #9ca3af; max-width: 28rem; }
                .footer-links { display: flex; gap: 1.5rem; }
                .footer-links a { color: #9ca3af; text-decoration: none; }
                .footer-links a:hover { color: #dc2626; }
                .footer-copy { text-align: center; color: #6b7280; margin-top: 2rem; font-size: 0.875rem; }
                @media (max-width: 768px) {
                    .contact-grid { grid-template-columns: 1fr; }
                    .form-row { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}
