use std::rc::Rc;

use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::motion::MOTION_CSS;
use crate::components::nav::NavBar;
use crate::pages::about::About;
use crate::pages::fundraise::Fundraise;
use crate::pages::market::Market;
use crate::pages::overview::Overview;
use crate::pages::roadmap::Roadmap;
use crate::pages::scale::Scale;
use crate::state::deck::{DeckAction, DeckState};
use crate::state::store::PreferenceStore;
use crate::state::theme::{self, theme_name};
use crate::state::view::View;

const DECK_CSS: &str = r#"
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}

html[data-theme="light"] body { background: #F3F4F6; }
html[data-theme="dark"] body { background: #0B0F14; }

.deck[data-theme="light"] {
    --page-bg: #F3F4F6;
    --card-bg: #FFFFFF;
    --panel-bg: #F9FAFB;
    --panel-line: #F3F4F6;
    --ink: #111827;
    --body-ink: #1F2937;
    --muted: #6B7280;
    --line: #E5E7EB;
    --accent: #059669;
    --btn-bg: #FFFFFF;
    --btn-ink: #1F2937;
    --btn-line: #E5E7EB;
    --active-bg: #000000;
    --active-ink: #FFFFFF;
    --track: #E5E7EB;
    --marker-bg: #4B5563;
    --marker-ink: #FFFFFF;
    --shadow: 0 20px 45px rgba(15, 23, 42, 0.08);
}

.deck[data-theme="dark"] {
    --page-bg: #0B0F14;
    --card-bg: #111827;
    --panel-bg: #1F2937;
    --panel-line: #273244;
    --ink: #F9FAFB;
    --body-ink: #E5E7EB;
    --muted: #9CA3AF;
    --line: #374151;
    --accent: #34D399;
    --btn-bg: #111827;
    --btn-ink: #E5E7EB;
    --btn-line: #374151;
    --active-bg: #F9FAFB;
    --active-ink: #111827;
    --track: #374151;
    --marker-bg: #6B7280;
    --marker-ink: #F9FAFB;
    --shadow: 0 20px 45px rgba(0, 0, 0, 0.45);
}

.deck {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 16px;
    background: var(--page-bg);
    color: var(--body-ink);
}

.deck, .deck-card, .panel, .nav-button, .theme-toggle, .tile, .stat-box,
.table-card, .deck-table th, .carousel-arrow, .milestone {
    transition: background-color 0.25s ease, color 0.25s ease, border-color 0.25s ease;
}

.deck-card {
    width: 100%;
    max-width: 1100px;
    background: var(--card-bg);
    border-radius: 20px;
    box-shadow: var(--shadow);
    overflow: hidden;
}

.deck-header {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
    align-items: center;
    justify-content: space-between;
    padding: 20px 24px 0;
}

.brand {
    display: flex;
    gap: 12px;
    align-items: center;
}

.brand-logo {
    width: 40px;
    height: 40px;
    object-fit: contain;
}

.brand h1 {
    font-size: 1.15rem;
    margin: 0;
    color: var(--ink);
}

.brand p {
    font-size: 0.78rem;
    margin: 2px 0 0;
    color: var(--muted);
}

.deck-nav {
    display: flex;
    gap: 8px;
    flex-wrap: wrap;
    align-items: center;
}

.nav-button {
    padding: 6px 12px;
    border-radius: 12px;
    font-size: 0.8rem;
    font-weight: 500;
    border: 1px solid var(--btn-line);
    background: var(--btn-bg);
    color: var(--btn-ink);
    cursor: pointer;
}

.nav-button:hover { background: var(--panel-bg); }

.nav-button.active {
    background: var(--active-bg);
    color: var(--active-ink);
    border-color: var(--active-bg);
    box-shadow: 0 4px 10px rgba(0, 0, 0, 0.15);
}

.theme-toggle {
    width: 34px;
    height: 34px;
    border-radius: 50%;
    border: 1px solid var(--btn-line);
    background: var(--btn-bg);
    color: var(--ink);
    cursor: pointer;
    font-size: 0.95rem;
    line-height: 1;
}

.theme-toggle:hover { background: var(--panel-bg); }

.deck-body { padding: 20px 24px; }

.deck h2 { font-size: 1.45rem; margin: 0 0 10px; color: var(--ink); }
.deck h3 { font-size: 1.02rem; margin: 16px 0 6px; color: var(--ink); }
.deck h4 { font-size: 0.88rem; margin: 0 0 8px; color: var(--ink); }
.deck p { margin: 0 0 12px; font-size: 0.92rem; }
.deck ul { margin: 0 0 14px; padding-left: 18px; font-size: 0.85rem; }
.deck li { margin: 3px 0; }
.deck a { color: inherit; }

.small { font-size: 0.85rem; }
.muted { color: var(--muted); }
.strong { color: var(--ink); font-weight: 600; }
.accent { color: var(--accent); font-weight: 600; }

.grid-2 {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 22px;
}

.panel {
    background: var(--panel-bg);
    border: 1px solid var(--panel-line);
    border-radius: 16px;
    padding: 16px;
    margin: 12px 0 16px;
}

.panel h3 { margin-top: 0; }

.panel-sub {
    font-size: 0.78rem;
    color: var(--muted);
    margin-bottom: 12px;
}

.tile {
    background: var(--card-bg);
    border: 1px solid var(--line);
    border-radius: 14px;
    padding: 12px;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.04);
}

.tile-title {
    display: flex;
    gap: 8px;
    align-items: center;
    font-weight: 600;
    font-size: 0.85rem;
    color: var(--ink);
}

.tile-text { font-size: 0.8rem; margin: 6px 0 0; }

.stat-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 10px;
    margin-top: 14px;
}

.stat-box {
    text-align: center;
    padding: 12px;
    background: var(--card-bg);
    border: 1px solid var(--panel-line);
    border-radius: 10px;
}

.stat-value { font-weight: 700; color: var(--ink); }
.stat-label { font-size: 0.72rem; color: var(--muted); margin-top: 2px; }

.insights {
    margin-top: 12px;
    display: flex;
    flex-direction: column;
    gap: 6px;
    font-size: 0.78rem;
}

.insight-row { display: flex; gap: 8px; }
.insight-key { color: var(--muted); flex-shrink: 0; }

.chart { display: block; width: 100%; height: auto; }

.chart-legend {
    display: flex;
    gap: 16px;
    align-items: center;
    margin-top: 8px;
    font-size: 0.75rem;
}

.chart-legend-item { display: inline-flex; gap: 6px; align-items: center; }

.source-link { font-size: 0.72rem; color: var(--muted); }
.source-link:hover { color: var(--body-ink); }

.table-card {
    border: 1px solid var(--panel-line);
    border-radius: 14px;
    overflow: hidden;
    margin-bottom: 16px;
    background: var(--card-bg);
}

.deck-table { width: 100%; border-collapse: collapse; font-size: 0.8rem; }

.deck-table th {
    text-align: left;
    padding: 10px 14px;
    background: var(--panel-bg);
    color: var(--ink);
    font-size: 0.78rem;
    border-bottom: 1px solid var(--line);
}

.deck-table td { padding: 10px 14px; border-bottom: 1px solid var(--panel-line); }
.deck-table tr:last-child td { border-bottom: none; }
.deck-table .num { text-align: right; }
.deck-table .center { text-align: center; }

.cell-title { font-weight: 600; color: var(--ink); }
.cell-sub { font-size: 0.72rem; color: var(--muted); margin-top: 2px; }

.button {
    display: inline-flex;
    align-items: center;
    gap: 6px;
    padding: 8px 14px;
    border-radius: 12px;
    background: var(--active-bg);
    color: var(--active-ink);
    border: 1px solid var(--active-bg);
    font-size: 0.8rem;
    font-weight: 500;
    cursor: pointer;
    text-decoration: none;
}

.button.ghost {
    background: transparent;
    color: var(--btn-ink);
    border: 1px solid var(--btn-line);
}

.button:hover { opacity: 0.88; }

.progress-track {
    height: 8px;
    background: var(--track);
    border-radius: 999px;
    overflow: hidden;
}

.progress-track.tall { height: 12px; }

.progress-fill {
    height: 100%;
    background: var(--ink);
    border-radius: 999px;
}

.carousel-stage { display: flex; align-items: stretch; gap: 10px; }

.carousel-arrow {
    align-self: center;
    width: 30px;
    height: 30px;
    flex-shrink: 0;
    border-radius: 50%;
    border: 1px solid var(--btn-line);
    background: var(--card-bg);
    color: var(--ink);
    cursor: pointer;
    font-size: 1rem;
    line-height: 1;
}

.carousel-arrow:hover { background: var(--panel-bg); }

.carousel-frame { flex: 1; min-width: 0; }

.carousel-dots {
    display: flex;
    justify-content: center;
    gap: 8px;
    margin-top: 12px;
}

.carousel-dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    border: none;
    padding: 0;
    background: var(--track);
    cursor: pointer;
}

.carousel-dot.active { background: var(--ink); }

.deck-footer {
    display: flex;
    flex-wrap: wrap;
    gap: 10px;
    align-items: center;
    justify-content: space-between;
    padding: 0 24px 20px;
    font-size: 0.76rem;
    color: var(--muted);
}

.deck-footer p { margin: 0; font-size: 0.76rem; }

.footer-links { display: flex; gap: 8px; align-items: center; }

.footer-link {
    background: none;
    border: none;
    padding: 0;
    font-size: 0.76rem;
    color: var(--muted);
    cursor: pointer;
}

.footer-link:hover { text-decoration: underline; color: var(--body-ink); }

@media (max-width: 860px) {
    .grid-2 { grid-template-columns: 1fr; }
    .deck-header { padding: 16px 16px 0; }
    .deck-body { padding: 16px; }
    .deck-footer { padding: 0 16px 16px; justify-content: center; }
}
"#;

const FOOTER_LINKS: [(View, &str); 4] = [
    (View::Overview, "Overview"),
    (View::Roadmap, "Roadmap"),
    (View::Scale, "Scale"),
    (View::About, "About"),
];

#[derive(Properties)]
pub struct AppProps {
    /// Preference storage injected by the entry point, so the same
    /// root runs against the browser or an in-memory store.
    pub store: Rc<dyn PreferenceStore>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

/// Root of the deck. Owns the active view and the theme flag, hands
/// both down as props, and receives every change request back through
/// callbacks. No child mutates shared state on its own.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = {
        let store = props.store.clone();
        use_reducer(move || DeckState::new(View::default(), theme::initialize(store.as_ref())))
    };

    // The app root carries data-theme itself; this mirrors the flag
    // onto the document element for page chrome outside the root.
    use_effect_with_deps(
        |dark: &bool| {
            theme::apply_root_marker(*dark);
            || ()
        },
        state.dark,
    );

    let on_select = {
        let state = state.clone();
        Callback::from(move |view: View| state.dispatch(DeckAction::Navigate(view)))
    };

    let on_toggle_theme = {
        let state = state.clone();
        let store = props.store.clone();
        Callback::from(move |_: MouseEvent| {
            // Persist first, then flip; the render and the document
            // marker follow from the state change.
            theme::persist(store.as_ref(), !state.dark);
            state.dispatch(DeckAction::ToggleTheme);
        })
    };

    let dark = state.dark;
    let section = match state.view {
        View::Overview => html! { <Overview dark={dark} /> },
        View::Market => html! { <Market dark={dark} /> },
        View::Scale => html! { <Scale dark={dark} on_navigate={on_select.clone()} /> },
        View::Roadmap => html! { <Roadmap dark={dark} /> },
        View::Fundraise => html! { <Fundraise dark={dark} /> },
        View::About => html! { <About dark={dark} /> },
    };

    html! {
        <div class="deck" data-theme={theme_name(dark)}>
            <style>{ DECK_CSS }</style>
            <style>{ MOTION_CSS }</style>
            <div class="deck-card">
                <NavBar
                    active={state.view}
                    dark={dark}
                    on_select={on_select.clone()}
                    on_toggle_theme={on_toggle_theme}
                />
                <main class="deck-body">
                    { section }
                </main>
                <Footer on_select={on_select} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    on_select: Callback<View>,
}

#[function_component(Footer)]
fn footer(props: &FooterProps) -> Html {
    let year = Utc::now().year();
    html! {
        <footer class="deck-footer">
            <p>{ format!("© {year} Lumenframe Studio · Framer Templates for SaaS") }</p>
            <div class="footer-links">
                { for FOOTER_LINKS.iter().enumerate().map(|(i, (view, label))| {
                    let view = *view;
                    let on_select = props.on_select.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_select.emit(view));
                    html! {
                        <>
                            if i > 0 {
                                <span aria-hidden="true">{"·"}</span>
                            }
                            <button class="footer-link" onclick={onclick}>{ *label }</button>
                        </>
                    }
                }) }
            </div>
        </footer>
    }
}
