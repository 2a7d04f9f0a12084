//! Server-side renders of the deck and its sections, asserting on the
//! produced markup. Interaction flows are covered by the state unit
//! tests; these lock down what the first paint of each state looks
//! like.

use std::rc::Rc;

use chrono::{Datelike, Utc};
use yew::{html, BaseComponent, Callback, Children, LocalServerRenderer};

use investor_deck::app::{App, AppProps};
use investor_deck::components::carousel::{Carousel, CarouselProps};
use investor_deck::components::nav::{NavBar, NavBarProps};
use investor_deck::pages::fundraise::{Fundraise, FundraiseProps};
use investor_deck::pages::market::{Market, MarketProps};
use investor_deck::pages::overview::{Overview, OverviewProps};
use investor_deck::pages::scale::{Scale, ScaleProps};
use investor_deck::state::store::{MemoryStore, PreferenceStore};
use investor_deck::state::theme::DARK_MODE_KEY;
use investor_deck::state::view::View;

fn render<COMP>(props: COMP::Properties) -> String
where
    COMP: BaseComponent,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime");
    tokio::task::LocalSet::new().block_on(&runtime, async move {
        LocalServerRenderer::<COMP>::with_props(props)
            .hydratable(false)
            .render()
            .await
    })
}

fn render_app(store: Rc<MemoryStore>) -> String {
    render::<App>(AppProps { store })
}

/// Opening tag of the deck root, the first element of the app render.
/// Theme assertions check inside this slice: it cannot collide with
/// the stylesheet text and does not depend on attribute order.
fn root_tag(html: &str) -> &str {
    let end = html.find('>').expect("app render should start with the deck root");
    &html[..=end]
}

#[test]
fn test_app_opens_on_light_overview_without_stored_preference() {
    let html = render_app(Rc::new(MemoryStore::new()));
    let root = root_tag(&html);
    assert!(root.contains(r#"class="deck""#));
    assert!(root.contains(r#"data-theme="light""#));
    assert!(html.contains("Why Now"));
    for view in View::ALL {
        assert!(html.contains(view.label()), "missing nav label {:?}", view);
    }
    // Exactly one nav button is highlighted, and it is the overview.
    assert_eq!(html.matches("nav-button active").count(), 1);
    assert!(html.contains(r#""nav-button active">Overview<"#));
}

#[test]
fn test_app_restores_dark_preference_on_startup() {
    let store = Rc::new(MemoryStore::new());
    store.write(DARK_MODE_KEY, "true");
    let html = render_app(store);
    assert!(root_tag(&html).contains(r#"data-theme="dark""#));
}

#[test]
fn test_stored_preference_reaches_the_mounted_chart() {
    let store = Rc::new(MemoryStore::new());
    store.write(DARK_MODE_KEY, "true");
    let dark = render_app(store);
    assert!(root_tag(&dark).contains(r#"data-theme="dark""#));
    assert!(dark.contains(r##"fill="#F9FAFB""##), "dark palette should paint the bars");
    assert!(!dark.contains(r##"fill="#111827""##));

    let light = render_app(Rc::new(MemoryStore::new()));
    assert!(light.contains(r##"fill="#111827""##), "light palette should paint the bars");
    assert!(!light.contains(r##"fill="#F9FAFB""##));
}

#[test]
fn test_app_treats_corrupt_preference_as_light() {
    let store = Rc::new(MemoryStore::new());
    store.write(DARK_MODE_KEY, "sometimes");
    let html = render_app(store);
    assert!(root_tag(&html).contains(r#"data-theme="light""#));
}

#[test]
fn test_app_render_is_deterministic() {
    let store = Rc::new(MemoryStore::new());
    let first = render_app(store.clone());
    let second = render_app(store);
    assert_eq!(first, second);
}

#[test]
fn test_app_footer_shows_current_year_and_quick_links() {
    let html = render_app(Rc::new(MemoryStore::new()));
    assert!(html.contains(&format!("© {}", Utc::now().year())));
    assert!(html.contains("Framer Templates for SaaS"));
    assert!(html.contains(r#"class="footer-link""#));
}

#[test]
fn test_nav_highlights_the_active_view() {
    let html = render::<NavBar>(NavBarProps {
        active: View::Scale,
        dark: false,
        on_select: Callback::from(|_| ()),
        on_toggle_theme: Callback::from(|_| ()),
    });
    assert_eq!(html.matches("nav-button active").count(), 1);
    assert!(html.contains(r#""nav-button active">Scale Plan<"#));
}

#[test]
fn test_nav_toggle_reflects_current_theme() {
    let light = render::<NavBar>(NavBarProps {
        active: View::Overview,
        dark: false,
        on_select: Callback::from(|_| ()),
        on_toggle_theme: Callback::from(|_| ()),
    });
    assert!(light.contains("Switch to dark theme"));

    let dark = render::<NavBar>(NavBarProps {
        active: View::Overview,
        dark: true,
        on_select: Callback::from(|_| ()),
        on_toggle_theme: Callback::from(|_| ()),
    });
    assert!(dark.contains("Switch to light theme"));
}

#[test]
fn test_market_charts_recolor_with_theme() {
    let light = render::<Market>(MarketProps { dark: false });
    let dark = render::<Market>(MarketProps { dark: true });
    assert!(light.contains("#111827"), "light chart ink missing");
    assert!(!light.contains("#F9FAFB"));
    assert!(dark.contains("#F9FAFB"), "dark chart ink missing");
    assert!(!dark.contains("#111827"));
    assert_ne!(light, dark);
}

#[test]
fn test_market_carousel_starts_on_the_funnel_slide() {
    let html = render::<Market>(MarketProps { dark: false });
    assert!(html.contains("Demand Funnel"));
    assert!(html.contains("Free template downloads"));
    // Only the first slide is mounted; dot navigation covers the rest.
    assert!(!html.contains("Early catalogue depth compounds"));
    assert_eq!(html.matches(r#"aria-label="Go to slide"#).count(), 5);
    assert_eq!(html.matches(r#"class="carousel-dot active""#).count(), 1);
}

#[test]
fn test_carousel_mounts_first_slide_with_one_dot_per_child() {
    let children = Children::new(vec![
        html! { <p>{"first card"}</p> },
        html! { <p>{"second card"}</p> },
        html! { <p>{"third card"}</p> },
    ]);
    let html = render::<Carousel>(CarouselProps { interval_ms: 6500, children });
    assert!(html.contains("first card"));
    assert!(!html.contains("second card"));
    assert_eq!(html.matches(r#"aria-label="Go to slide"#).count(), 3);
    assert_eq!(html.matches(r#"class="carousel-dot active""#).count(), 1);
    assert!(html.contains(r#"aria-label="Previous slide""#));
    assert!(html.contains(r#"aria-label="Next slide""#));
}

#[test]
fn test_market_cites_both_chart_sources() {
    let html = render::<Market>(MarketProps { dark: false });
    assert!(html.contains("Source: Google Trends"));
    assert!(html.contains("Source: Grand View Research"));
}

#[test]
fn test_overview_chart_carries_revenue_tooltips() {
    let html = render::<Overview>(OverviewProps { dark: false });
    assert!(html.contains("Revenue ($)"));
    assert!(html.contains("Template Sales: $30,000 · 60% of total · ≈$2,500/mo"));
}

#[test]
fn test_scale_offers_pdf_download_and_roadmap_jump() {
    let html = render::<Scale>(ScaleProps {
        dark: false,
        on_navigate: Callback::from(|_| ()),
    });
    assert!(html.contains("Download Full Plan (PDF)"));
    assert!(html.contains("View Roadmap"));
    assert!(html.contains("$3,000–6,000"));
    assert!(html.contains("Founder-led + contractors"));
}

#[test]
fn test_fundraise_reports_progress_against_target() {
    let html = render::<Fundraise>(FundraiseProps { dark: false });
    assert!(html.contains("$0 / $10,000"));
    assert!(html.contains("0% funded"));
    assert!(html.contains(r#"aria-valuemax="10000""#));
    assert!(html.contains("Template Development"));
    assert!(html.contains("Operations Buffer"));
}
