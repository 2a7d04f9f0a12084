use yew::prelude::*;

use crate::state::view::View;

const SCALE_CSS: &str = r#"
.scale .compliance-note {
    font-size: 0.75rem;
    padding: 10px 12px;
    background: var(--panel-bg);
    border: 1px solid var(--panel-line);
    border-radius: 10px;
    margin: 14px 0;
}

.scale .actions {
    display: flex;
    gap: 10px;
    flex-wrap: wrap;
}
"#;

struct Package {
    name: &'static str,
    summary: &'static str,
    price: &'static str,
    timeline: &'static str,
}

fn packages() -> [Package; 4] {
    [
        Package {
            name: "Landing Launch",
            summary: "Basic website setup",
            price: "$3,000–6,000",
            timeline: "1-2 weeks",
        },
        Package {
            name: "Growth Site",
            summary: "Blog + integrations",
            price: "$7,500–15,000",
            timeline: "3-4 weeks",
        },
        Package {
            name: "WaaS Care",
            summary: "Monthly retainers",
            price: "$350–1,200/mo",
            timeline: "Ongoing",
        },
        Package {
            name: "Brand Starter",
            summary: "Identity & systems",
            price: "$2,500–5,000",
            timeline: "2-3 weeks",
        },
    ]
}

fn team_stages() -> [(&'static str, &'static str, &'static str); 3] {
    [
        ("0-6 months", "Founder-led + contractors", "Template production"),
        ("6-12 months", "+ PM + Junior Designer", "Service scaling"),
        ("12-24 months", "+ Full-stack + Content", "Studio operations"),
    ]
}

#[derive(Properties, PartialEq)]
pub struct ScaleProps {
    pub dark: bool,
    pub on_navigate: Callback<View>,
}

#[function_component(Scale)]
pub fn scale(props: &ScaleProps) -> Html {
    let view_roadmap = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(View::Roadmap))
    };

    html! {
        <section class="deck-section scale">
            <style>{ SCALE_CSS }</style>
            <div class="grid-2">
                <div>
                    <h2>{"Scale Plan: Creative Tech Consulting (Sydney)"}</h2>
                    <p>
                        {"Over 24 months, evolve from a template-first engine into a studio serving Sydney \
                          SMEs and startups. Use the in-house template catalogue as IP to accelerate \
                          delivery and margins."}
                    </p>
                    <h3>{"Service Lines"}</h3>
                    <ul class="small">
                        <li>{"Website-as-a-Service (Framer/Next.js), hosting & care plans"}</li>
                        <li>{"Brand & content (identity, systems, photography/video)"}</li>
                        <li>{"Conversion & analytics (CRO, GA4/GSC, experimentation)"}</li>
                        <li>{"Light cyber & compliance (basic hardening, policies, vendor risk); partner for advanced work"}</li>
                        <li>{"Tech consulting (stack selection, integrations, automation prototypes)"}</li>
                    </ul>
                    <h3>{"Sydney Go-to-Market"}</h3>
                    <ul class="small">
                        <li>{"Verticals: hospitality, creative retail, health & wellness, professional services, education"}</li>
                        <li>{"Partnerships: co-works, accelerators, chambers, design schools, community groups"}</li>
                        <li>{"Lead gen: workshop series (Framer for SMEs), local SEO, referral loops"}</li>
                    </ul>
                </div>
                <div>
                    <h3>{"Service Packages (AUD)"}</h3>
                    <div class="table-card">
                        <table class="deck-table">
                            <thead>
                                <tr>
                                    <th>{"Service"}</th>
                                    <th class="num">{"Price Range"}</th>
                                    <th class="center">{"Timeline"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for packages().into_iter().map(|package| html! {
                                    <tr key={package.name}>
                                        <td>
                                            <div class="cell-title">{ package.name }</div>
                                            <div class="cell-sub">{ package.summary }</div>
                                        </td>
                                        <td class="num">{ package.price }</td>
                                        <td class="center muted">{ package.timeline }</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                    <h3>{"Team & Operations"}</h3>
                    <div class="table-card">
                        <table class="deck-table">
                            <thead>
                                <tr>
                                    <th>{"Phase"}</th>
                                    <th>{"Team Structure"}</th>
                                    <th>{"Focus"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for team_stages().into_iter().map(|(phase, team, focus)| html! {
                                    <tr key={phase}>
                                        <td class="cell-title">{ phase }</td>
                                        <td>{ team }</td>
                                        <td class="muted">{ focus }</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                    <div class="compliance-note">
                        <b>{"Compliance:"}</b>
                        {" ABN, GST (when applicable), PI & public liability insurance, privacy policy \
                          & basic data protection, vendor DPA reviews."}
                    </div>
                    <div class="actions">
                        <a class="button" href="/proposal.pdf">{"Download Full Plan (PDF)"}</a>
                        <button class="button ghost" onclick={view_roadmap}>{"View Roadmap"}</button>
                    </div>
                </div>
            </div>
        </section>
    }
}
