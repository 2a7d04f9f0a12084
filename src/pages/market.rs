use yew::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::charts::{LineChart, LinePoint, LineSeries};

const MARKET_CSS: &str = r#"
.market .funnel-stage {
    margin-bottom: 10px;
}

.market .funnel-label {
    display: flex;
    justify-content: space-between;
    font-size: 0.78rem;
    margin-bottom: 4px;
}

.market .funnel-bar {
    height: 14px;
    border-radius: 7px;
    background: var(--ink);
    min-width: 14px;
}

.market .slide {
    padding: 4px 8px;
}

.market .slide h4 {
    margin: 0 0 6px;
}

.market .slide p {
    font-size: 0.85rem;
    margin: 0;
}

.market .chart-foot {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 12px;
    margin-top: 10px;
    padding-top: 10px;
    border-top: 1px solid var(--line);
}
"#;

fn point(label: &'static str, value: f64, note: Option<&'static str>) -> LinePoint {
    LinePoint { label, value, note }
}

/// Yearly average search interest, Framer templates vs Webflow
/// templates. Notes are year-over-year growth shown in the tooltip.
fn search_series() -> Vec<LineSeries> {
    vec![
        LineSeries {
            name: "Framer Templates",
            points: vec![
                point("2020", 0.0, None),
                point("2021", 0.0, Some("0%")),
                point("2022", 0.06, Some("New")),
                point("2023", 9.8, Some("+16,233%")),
                point("2024", 33.9, Some("+247%")),
                point("2025", 71.2, Some("+110%")),
            ],
            secondary: false,
            dashed: false,
        },
        LineSeries {
            name: "Webflow Templates",
            points: vec![
                point("2020", 10.2, None),
                point("2021", 9.7, Some("-5%")),
                point("2022", 25.7, Some("+166%")),
                point("2023", 32.8, Some("+28%")),
                point("2024", 39.6, Some("+21%")),
                point("2025", 44.0, Some("+11%")),
            ],
            secondary: true,
            dashed: true,
        },
    ]
}

/// Global SaaS market value in billions, 2022 through 2030.
fn saas_series() -> Vec<LineSeries> {
    vec![LineSeries {
        name: "SaaS Market Value",
        points: vec![
            point("2022", 130.0, None),
            point("2023", 145.0, Some("+12%")),
            point("2024", 164.0, Some("+13%")),
            point("2025", 185.0, Some("+13%")),
            point("2026", 208.0, Some("+12%")),
            point("2027", 233.0, Some("+12%")),
            point("2028", 261.0, Some("+12%")),
            point("2029", 292.0, Some("+12%")),
            point("2030", 327.0, Some("+12%")),
        ],
        secondary: false,
        dashed: false,
    }]
}

/// Content funnel from first touch to paying customer, as percent of
/// top-of-funnel visitors.
fn funnel_stages() -> [(&'static str, u8); 4] {
    [
        ("Marketplace & content visitors", 100),
        ("Free template downloads", 38),
        ("Email funnel subscribers", 12),
        ("Paying customers", 3),
    ]
}

fn opportunity_cards() -> [(&'static str, &'static str); 4] {
    [
        (
            "First-mover niche",
            "Few SaaS-focused premium templates exist today. Early catalogue depth compounds \
             into marketplace ranking and brand recall.",
        ),
        (
            "AI-ready positioning",
            "Templates structured for fast copy swaps and AI site builders, so the catalogue \
             stays sellable as tooling shifts.",
        ),
        (
            "Cross-platform expansion",
            "Port proven best sellers to Webflow and WordPress to multiply the return on each \
             design.",
        ),
        (
            "Agency upsell",
            "Template buyers graduate into full SaaS branding packages, turning one-off sales \
             into retainers.",
        ),
    ]
}

#[derive(Properties, PartialEq)]
pub struct MarketProps {
    pub dark: bool,
}

#[function_component(Market)]
pub fn market(props: &MarketProps) -> Html {
    let funnel_slide = html! {
        <div class="slide">
            <h4>{"Demand Funnel"}</h4>
            { for funnel_stages().into_iter().map(|(label, percent)| html! {
                <div class="funnel-stage" key={label}>
                    <div class="funnel-label">
                        <span>{ label }</span>
                        <span class="muted">{ format!("{percent}%") }</span>
                    </div>
                    <div class="funnel-bar" style={format!("width: {percent}%;")}></div>
                </div>
            }) }
        </div>
    };

    html! {
        <section class="deck-section market">
            <style>{ MARKET_CSS }</style>
            <h2>{"📊 Market Research & Analysis"}</h2>
            <div class="grid-2">
                <div>
                    <h3>{"Market Demand"}</h3>
                    <p>
                        {"\"Framer templates\" are searched nearly "}
                        <b>{"2x more"}</b>
                        {" than \"Webflow templates.\" SaaS market projected at "}
                        <b>{"$232B+ by 2028"}</b>
                        {" (CAGR ~12%). Every SaaS needs a fast, credible landing page, which means consistent demand."}
                    </p>
                    <div class="panel">
                        <h4>{"📊 Yearly Average Popularity"}</h4>
                        <LineChart
                            series={search_series()}
                            min={0.0}
                            max={80.0}
                            axis_label="Search Volume"
                            dark={props.dark}
                            height={240}
                        />
                        <div class="insights">
                            <div class="insight-row">
                                <span class="insight-key">{"2020-2021:"}</span>
                                <span>{"Webflow led; Framer non-existent"}</span>
                            </div>
                            <div class="insight-row">
                                <span class="insight-key">{"2024:"}</span>
                                <span>{"Framer +247% growth, closing the gap"}</span>
                            </div>
                            <div class="insight-row">
                                <span class="insight-key">{"2025:"}</span>
                                <span class="strong">{"Framer surged past Webflow (+110% vs +11%)"}</span>
                            </div>
                        </div>
                        <div class="chart-foot">
                            <span class="muted">{"Yearly averages, worldwide"}</span>
                            <a
                                class="source-link"
                                href="https://trends.google.com/trends/explore?date=2020-01-01%202025-01-31&q=framer%20templates,webflow%20templates"
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {"Source: Google Trends"}
                            </a>
                        </div>
                    </div>
                    <h3>{"Competitor Analysis"}</h3>
                    <p class="small">
                        <b>{"Direct:"}</b>{" Framer Marketplace, Gumroad creators."}<br/>
                        <b>{"Indirect:"}</b>{" Webflow sellers, ThemeForest."}<br/>
                        <b>{"Gap:"}</b>{" Few SaaS-focused premium templates, an opportunity to dominate the niche."}
                    </p>
                    <h3>{"Target Audience"}</h3>
                    <ul>
                        <li>{"SaaS founders, indie hackers, startup teams"}</li>
                        <li>{"Agencies & freelancers delivering for clients"}</li>
                        <li>{"Geography: US, Europe, global tech hubs"}</li>
                        <li>{"Behavior: value speed + aesthetics, active on X, LinkedIn, IndieHackers"}</li>
                    </ul>
                </div>
                <div>
                    <h3>{"Marketing & Distribution"}</h3>
                    <ul>
                        <li>{"YouTube tutorials (\"Build SaaS site in Framer\")"}</li>
                        <li>{"SEO blogs & case studies"}</li>
                        <li>{"Free templates → email funnel → upsell"}</li>
                        <li>{"Retargeting ads (Google/Meta)"}</li>
                        <li>{"Community launches: ProductHunt, IndieHackers"}</li>
                    </ul>
                    <h3>{"Monetization Models"}</h3>
                    <ul>
                        <li>{"One-time template sales ($49–$150)"}</li>
                        <li>{"Bundles (SaaS Starter Kit $250+)"}</li>
                        <li>{"Subscription (~$19/mo recurring)"}</li>
                        <li>{"Custom upsells ($500–$2k per project)"}</li>
                    </ul>
                    <div class="panel">
                        <h4>{"💰 Global SaaS Market Value (2022-2030)"}</h4>
                        <LineChart
                            series={saas_series()}
                            min={100.0}
                            max={350.0}
                            axis_label="Value ($B)"
                            dark={props.dark}
                            height={220}
                        />
                        <div class="insights">
                            <div class="insight-row">
                                <span class="insight-key">{"2024-2028:"}</span>
                                <span>{"Expected to grow from $164B to $261B"}</span>
                            </div>
                            <div class="insight-row">
                                <span class="insight-key">{"Growth Rate:"}</span>
                                <span class="accent">{"~12% CAGR (Compound Annual)"}</span>
                            </div>
                            <div class="insight-row">
                                <span class="insight-key">{"By 2030:"}</span>
                                <span class="strong">{"Market reaches $327B+ globally"}</span>
                            </div>
                        </div>
                        <div class="chart-foot">
                            <span class="muted">{"Projected, in billions USD"}</span>
                            <a
                                class="source-link"
                                href="https://www.grandviewresearch.com/industry-analysis/software-as-a-service-market"
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {"Source: Grand View Research"}
                            </a>
                        </div>
                    </div>
                    <h3>{"Opportunities"}</h3>
                    <ul>
                        <li>{"First-mover SaaS template niche"}</li>
                        <li>{"AI-ready template positioning"}</li>
                        <li>{"Cross-platform expansion (Webflow, WP)"}</li>
                        <li>{"Agency upsell: full SaaS branding packages"}</li>
                    </ul>
                </div>
            </div>
            <div class="panel carousel-panel">
                <h3>{"Funnel & Opportunities"}</h3>
                <Carousel>
                    { funnel_slide }
                    { for opportunity_cards().into_iter().map(|(title, text)| html! {
                        <div class="slide" key={title}>
                            <h4>{ title }</h4>
                            <p>{ text }</p>
                        </div>
                    }) }
                </Carousel>
            </div>
            <div class="panel recommendations">
                <h3>{"🔑 Key Recommendations"}</h3>
                <p class="small">
                    {"Launch with 2–3 premium SaaS templates; niche down into SaaS landing pages; \
                      build in public on X & LinkedIn; capture emails via free templates; validate \
                      pricing ($49–$79 each); expand into subscriptions once 10–15 templates exist."}
                </p>
                <p class="small strong">
                    {"✅ Verdict: Low-cost, high-upside. Demand is real, competition unsaturated, \
                      success hinges on consistent content + premium quality."}
                </p>
            </div>
        </section>
    }
}
