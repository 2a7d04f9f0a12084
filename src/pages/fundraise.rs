use yew::prelude::*;

use crate::utils::format::usd;

const FUNDRAISE_CSS: &str = r#"
.fundraise .breakdown {
    font-size: 0.8rem;
    margin-top: 12px;
}

.fundraise .breakdown-row {
    display: flex;
    justify-content: space-between;
    padding: 6px 0;
}

.fundraise .breakdown-row.total {
    border-top: 1px solid var(--line);
    font-weight: 700;
    margin-top: 4px;
    padding-top: 10px;
}

.fundraise .progress-head {
    display: flex;
    align-items: flex-end;
    justify-content: space-between;
    font-size: 0.75rem;
    margin-bottom: 6px;
}

.fundraise .progress-card {
    max-width: 340px;
    margin: 0 auto;
    width: 100%;
}

.fundraise .progress-caption {
    font-size: 0.75rem;
    text-align: center;
    margin-top: 8px;
}

.fundraise .progress-wrap {
    display: flex;
    align-items: center;
    justify-content: center;
}

.fundraise .actions {
    display: flex;
    gap: 10px;
    flex-wrap: wrap;
    margin-top: 18px;
}
"#;

pub const TARGET_AMOUNT: i64 = 10_000;
pub const AMOUNT_RAISED: i64 = 0;

/// Percent of the target raised so far, rounded and clamped to 0-100
/// so the progress bar never over- or underflows its track.
fn raised_percent(raised: i64, target: i64) -> u8 {
    if target <= 0 {
        return 0;
    }
    let percent = (raised as f64 / target as f64 * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

fn breakdown() -> [(&'static str, i64); 4] {
    [
        ("Template Development", 4_000),
        ("Marketing & Ads", 3_000),
        ("Tools & Infrastructure", 2_000),
        ("Operations Buffer", 1_000),
    ]
}

#[derive(Properties, PartialEq)]
pub struct FundraiseProps {
    pub dark: bool,
}

#[function_component(Fundraise)]
pub fn fundraise(_props: &FundraiseProps) -> Html {
    let percent = raised_percent(AMOUNT_RAISED, TARGET_AMOUNT);
    let total: i64 = breakdown().iter().map(|(_, amount)| amount).sum();

    html! {
        <section class="deck-section fundraise">
            <style>{ FUNDRAISE_CSS }</style>
            <h2>{"💰 Funding Requirements"}</h2>
            <div class="grid-2">
                <div>
                    <p class="small">
                        {"Seeking "}
                        <b>{ usd(TARGET_AMOUNT) }</b>
                        {" pre-seed to accelerate template production, marketing, and early \
                          subscriptions. Target runway: "}
                        <b>{"12 months"}</b>
                        {"."}
                    </p>
                    <div class="breakdown">
                        { for breakdown().into_iter().map(|(label, amount)| html! {
                            <div class="breakdown-row" key={label}>
                                <span class="muted">{ format!("{label}:") }</span>
                                <span>{ usd(amount) }</span>
                            </div>
                        }) }
                        <div class="breakdown-row total">
                            <span>{"Total:"}</span>
                            <span>{ usd(total) }</span>
                        </div>
                    </div>
                    <div class="actions">
                        <a class="button" href="mailto:hello@lumenframe.studio">{"Email about this round"}</a>
                        <a class="button ghost" href="/proposal.pdf">{"Download Full Plan (PDF)"}</a>
                    </div>
                </div>
                <div class="progress-wrap">
                    <div class="progress-card">
                        <div class="progress-head">
                            <span class="muted">{"Progress"}</span>
                            <span class="strong">{ format!("{} / {}", usd(AMOUNT_RAISED), usd(TARGET_AMOUNT)) }</span>
                        </div>
                        <div
                            class="progress-track tall"
                            role="progressbar"
                            aria-valuemin="0"
                            aria-valuemax={TARGET_AMOUNT.to_string()}
                            aria-valuenow={AMOUNT_RAISED.to_string()}
                        >
                            <div class="progress-fill" style={format!("width: {percent}%;")}></div>
                        </div>
                        <p class="progress-caption muted">{ format!("{percent}% funded") }</p>
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
    fn test_raised_percent_rounds() {
        assert_eq!(raised_percent(0, 10_000), 0);
        assert_eq!(raised_percent(2_500, 10_000), 25);
        assert_eq!(raised_percent(3_333, 10_000), 33);
        assert_eq!(raised_percent(9_999, 10_000), 100);
    }

    #[test]
    fn test_raised_percent_clamps_overfunding() {
        assert_eq!(raised_percent(25_000, 10_000), 100);
    }

    #[test]
    fn test_raised_percent_clamps_negative_and_empty_target() {
        assert_eq!(raised_percent(-500, 10_000), 0);
        assert_eq!(raised_percent(500, 0), 0);
    }

    #[test]
    fn test_breakdown_sums_to_target() {
        let total: i64 = breakdown().iter().map(|(_, amount)| amount).sum();
        assert_eq!(total, TARGET_AMOUNT);
    }
}
