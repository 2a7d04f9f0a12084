use yew::prelude::*;

use crate::state::view::View;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: View,
    pub dark: bool,
    pub on_select: Callback<View>,
    pub on_toggle_theme: Callback<MouseEvent>,
}

/// Header with the brand block, one button per section and the theme
/// toggle. The active section is highlighted; clicking any button just
/// reports the selection upward.
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let toggle_label = if props.dark {
        "Switch to light theme"
    } else {
        "Switch to dark theme"
    };

    html! {
        <header class="deck-header">
            <div class="brand">
                <img class="brand-logo" src="/logo.svg" alt="Lumenframe Studio logo" />
                <div>
                    <h1>{"Creative Framer templates & Custom Services"}</h1>
                    <p>{"Premium, conversion-optimized templates for faster launches"}</p>
                </div>
            </div>
            <nav class="deck-nav">
                { for View::ALL.iter().map(|view| {
                    let view = *view;
                    let on_select = props.on_select.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_select.emit(view));
                    html! {
                        <button
                            key={view.id()}
                            class={classes!("nav-button", (view == props.active).then(|| "active"))}
                            onclick={onclick}
                        >
                            { view.label() }
                        </button>
                    }
                }) }
                <button
                    class="theme-toggle"
                    onclick={props.on_toggle_theme.clone()}
                    aria-label={toggle_label}
                    title={toggle_label}
                >
                    { if props.dark { "☀" } else { "☾" } }
                </button>
            </nav>
        </header>
    }
}
