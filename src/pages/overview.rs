use yew::prelude::*;

use crate::components::charts::{BarChart, BarDatum};
use crate::components::motion::Reveal;
use crate::utils::format::usd;

const OVERVIEW_CSS: &str = r#"
.overview .tile-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 10px;
    margin-top: 12px;
}

.overview .marketing-line {
    font-size: 0.8rem;
}

@media (max-width: 640px) {
    .overview .tile-grid {
        grid-template-columns: 1fr;
    }
}
"#;

fn revenue_data() -> Vec<BarDatum> {
    let streams = [
        ("Template Sales", 30_000.0),
        ("Subscriptions", 5_000.0),
        ("Custom Services", 15_000.0),
    ];
    let total: f64 = streams.iter().map(|(_, value)| value).sum();
    streams
        .into_iter()
        .map(|(name, value)| BarDatum {
            name,
            value,
            detail: format!(
                "{} · {}% of total · ≈{}/mo",
                usd(value as i64),
                share_of_total(value, total),
                usd(monthly(value)),
            ),
        })
        .collect()
}

/// Percent share of a revenue stream, rounded to whole points.
fn share_of_total(value: f64, total: f64) -> u32 {
    if total <= 0.0 {
        return 0;
    }
    (value / total * 100.0).round() as u32
}

/// Monthly equivalent of an annual figure.
fn monthly(annual: f64) -> i64 {
    (annual / 12.0).round() as i64
}

#[derive(Properties, PartialEq)]
struct InfoTileProps {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

#[function_component(InfoTile)]
fn info_tile(props: &InfoTileProps) -> Html {
    html! {
        <div class="tile">
            <div class="tile-title">
                <span aria-hidden="true">{ props.icon }</span>
                <span>{ props.title }</span>
            </div>
            <p class="tile-text">{ props.text }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct OverviewProps {
    pub dark: bool,
}

#[function_component(Overview)]
pub fn overview(props: &OverviewProps) -> Html {
    html! {
        <section class="deck-section overview">
            <style>{ OVERVIEW_CSS }</style>
            <div class="grid-2">
                <div>
                    <h2>{"Why Now"}</h2>
                    <p>
                        {"We build and sell premium Framer templates tailored to SaaS. Demand is surging: \
                          users search for \"Framer template\" roughly "}
                        <b>{"2x"}</b>
                        {" more than \"Webflow template\", and SaaS teams want design quality without agency \
                          cost or delay. We help them ship credible marketing sites in days, not weeks."}
                    </p>
                    <div class="tile-grid">
                        <Reveal delay_ms={0}>
                            <InfoTile icon="👥" title="ICP" text="SaaS founders, agencies, product marketers" />
                        </Reveal>
                        <Reveal delay_ms={80}>
                            <InfoTile icon="🎯" title="Edge" text="SaaS-specific UX + CRO patterns" />
                        </Reveal>
                        <Reveal delay_ms={160}>
                            <InfoTile icon="🚀" title="Go-to-Market" text="Framer marketplace, trending web design, high speed and low cost" />
                        </Reveal>
                        <Reveal delay_ms={240}>
                            <InfoTile icon="💰" title="Model" text="Templates, subscriptions, custom work" />
                        </Reveal>
                    </div>
                    <h3>{"Marketing System"}</h3>
                    <p class="marketing-line">
                        {"YouTube tutorials • LinkedIn/X tips • SEO blogs • Free templates • Facebook/Google remarketing"}
                    </p>
                </div>
                <div>
                    <div class="panel">
                        <h3>{"💰 Year 1 Revenue Projection"}</h3>
                        <p class="panel-sub">{"Conservative estimates based on market research and competitor analysis"}</p>
                        <BarChart
                            data={revenue_data()}
                            max={40_000.0}
                            axis_label="Revenue ($)"
                            dark={props.dark}
                            height={280}
                        />
                        <div class="stat-grid">
                            <div class="stat-box">
                                <div class="stat-value">{"$50K"}</div>
                                <div class="stat-label">{"Total Revenue"}</div>
                            </div>
                            <div class="stat-box">
                                <div class="stat-value">{"$4.2K"}</div>
                                <div class="stat-label">{"Monthly Average"}</div>
                            </div>
                            <div class="stat-box">
                                <div class="stat-value accent">{"60%"}</div>
                                <div class="stat-label">{"Template Sales"}</div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_of_total_rounds_to_whole_points() {
        assert_eq!(share_of_total(30_000.0, 50_000.0), 60);
        assert_eq!(share_of_total(5_000.0, 50_000.0), 10);
        assert_eq!(share_of_total(15_000.0, 50_000.0), 30);
    }

    #[test]
    fn test_share_of_total_handles_zero_total() {
        assert_eq!(share_of_total(100.0, 0.0), 0);
    }

    #[test]
    fn test_monthly_rounds_annual_figure() {
        assert_eq!(monthly(30_000.0), 2_500);
        assert_eq!(monthly(5_000.0), 417);
    }

    #[test]
    fn test_revenue_streams_total_fifty_thousand() {
        let total: f64 = revenue_data().iter().map(|d| d.value).sum();
        assert_eq!(total, 50_000.0);
    }

    #[test]
    fn test_revenue_tooltip_detail() {
        let data = revenue_data();
        assert_eq!(data[0].name, "Template Sales");
        assert_eq!(data[0].detail, "$30,000 · 60% of total · ≈$2,500/mo");
    }
}
