use yew::prelude::*;
use web_sys::MouseEvent;

use crate::sections::NAV_ITEMS;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active_section: Option<&'static str>,
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        active_section,
        menu_open,
        on_toggle_menu,
        on_navigate,
    } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let go_home = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit("home"))
    };

    let nav_button = |section_id: &'static str, label: &'static str, class: &'static str| {
        let on_navigate = on_navigate.clone();
        let active = *active_section == Some(section_id);
        html! {
            <button
                key={section_id}
                class={classes!(class, active.then(|| "active"))}
                onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(section_id))}
            >
                {label}
            </button>
        }
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <button class="nav-logo" onclick={go_home}>
                    <span class="nav-logo-mark"></span>
                    <span class="nav-logo-text">{"Astrellion Tech"}</span>
                </button>

                <div class="nav-links">
                    { for NAV_ITEMS.iter().map(|item| nav_button(item.section_id, item.label, "nav-link")) }
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    { for NAV_ITEMS.iter().map(|item| nav_button(item.section_id, item.label, "mobile-nav-link")) }
                </div>
            }
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(0, 0, 0, 0.9);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(220, 38, 38, 0.2);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .nav-logo-mark {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: linear-gradient(90deg, #dc2626, #ef4444);
                }
                .nav-logo-text {
                    font-size: 1.5rem;
                    font-weight: 700;
                    background: linear-gradient(90deg, #fff, #fca5a5);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .nav-links { display: flex; gap: 2rem; }
                .nav-link, .mobile-nav-link {
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: color 0.3s;
                }
                .nav-link:hover, .nav-link.active,
                .mobile-nav-link:hover, .mobile-nav-link.active { color: #dc2626; }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    padding: 0 1.5rem 1rem;
                }
                .mobile-nav-link { text-align: left; }
                @media (max-width: 768px) {
                    .nav-links { display: none; }
                    .burger-menu { display: block; }
                }
                "#}
            </style>
        </nav>
    }
}
