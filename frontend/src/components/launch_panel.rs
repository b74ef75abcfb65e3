use yew::prelude::*;
use web_sys::MouseEvent;

use crate::launch::{LaunchPhase, LaunchState};

#[derive(Properties, PartialEq)]
pub struct LaunchPanelProps {
    pub state: LaunchState,
    pub on_trigger: Callback<()>,
}

#[function_component(LaunchPanel)]
pub fn launch_panel(props: &LaunchPanelProps) -> Html {
    let LaunchState {
        phase,
        remaining_seconds,
    } = props.state;

    let onclick = {
        let on_trigger = props.on_trigger.clone();
        Callback::from(move |_: MouseEvent| on_trigger.emit(()))
    };

    let body = match phase {
        LaunchPhase::Idle => html! {
            <button class="launch-button" {onclick}>
                {"⚡ Initiate Launch Sequence"}
            </button>
        },
        LaunchPhase::Counting => html! {
            <div class="countdown">
                <div class="countdown-number">{remaining_seconds}</div>
                <p class="countdown-label">{"Launch sequence initiated..."}</p>
            </div>
        },
        LaunchPhase::Liftoff => html! {
            <div class="liftoff">{"LIFTOFF! 🚀"}</div>
        },
    };

    html! {
        <div class="launch-panel-wrapper">
            <div class="launch-panel">
                <h3>{"Mission Control"}</h3>
                {body}
            </div>
            if phase == LaunchPhase::Liftoff {
                <div class="launch-effect"></div>
            }
            <style>
                {r#"
                .launch-panel-wrapper {
                    position: relative;
                    margin-top: 4rem;
                    display: inline-block;
                }
                .launch-panel {
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(220, 38, 38, 0.3);
                    border-radius: 1rem;
                    padding: 2rem;
                    text-align: center;
                    position: relative;
                    z-index: 1;
                }
                .launch-panel h3 {
                    font-size: 1.25rem;
                    color: #f87171;
                    margin-bottom: 1rem;
                }
                .launch-button {
                    background: linear-gradient(90deg, #dc2626, #ef4444);
                    color: #fff;
                    font-weight: 700;
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    cursor: pointer;
                }
                .countdown-number { font-size: 3.75rem; font-weight: 700; color: #fff; }
                .countdown-label { color: #f87171; }
                .liftoff { font-size: 1.5rem; font-weight: 700; color: #4ade80; }
                .launch-effect {
                    position: absolute;
                    inset: 0;
                    border-radius: 1rem;
                    background: linear-gradient(90deg, #f97316, #dc2626);
                    animation: launchBurst 2s ease-out forwards;
                }
                @keyframes launchBurst {
                    from { transform: scale(0); opacity: 1; }
                    to { transform: scale(3); opacity: 0; }
                }
                "#}
            </style>
        </div>
    }
}
