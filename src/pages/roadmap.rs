use yew::prelude::*;

use crate::components::motion::Reveal;

const ROADMAP_CSS: &str = r#"
.roadmap .timeline {
    position: relative;
}

.roadmap .timeline::before {
    content: "";
    position: absolute;
    left: 15px;
    top: 0;
    bottom: 0;
    width: 2px;
    background: var(--line);
}

.roadmap .timeline-item {
    position: relative;
    display: flex;
    align-items: flex-start;
    gap: 16px;
    padding-bottom: 28px;
}

.roadmap .timeline-marker {
    flex-shrink: 0;
    width: 32px;
    height: 32px;
    border-radius: 50%;
    background: var(--marker-bg);
    color: var(--marker-ink);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 0.85rem;
    font-weight: 700;
    position: relative;
    z-index: 1;
}

.roadmap .timeline-marker.future {
    background: var(--track);
    color: var(--muted);
}

.roadmap .phase-card {
    flex: 1;
    min-width: 0;
}

.roadmap .phase-card ul {
    margin: 8px 0;
}

.roadmap .phase-progress {
    display: flex;
    align-items: center;
    gap: 10px;
    margin-top: 10px;
}

.roadmap .phase-progress .progress-track {
    flex: 1;
}

.roadmap .milestone {
    background: var(--card-bg);
    border: 1px solid var(--panel-line);
    border-radius: 10px;
    padding: 12px;
    font-size: 0.82rem;
}

.roadmap .milestone-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 12px;
}

@media (max-width: 640px) {
    .roadmap .milestone-grid {
        grid-template-columns: 1fr;
    }
}
"#;

struct Phase {
    number: usize,
    title: &'static str,
    summary: &'static str,
    tasks: [&'static str; 4],
    progress: u8,
    status: &'static str,
    future: bool,
}

fn phases() -> [Phase; 4] {
    [
        Phase {
            number: 1,
            title: "Foundation (0-3 months)",
            summary: "Build core template collection and establish market presence",
            tasks: [
                "Create 5 premium SaaS templates",
                "Launch marketplace presence",
                "Establish brand and website",
                "Initial marketing campaigns",
            ],
            progress: 5,
            status: "Starting",
            future: false,
        },
        Phase {
            number: 2,
            title: "Growth (3-6 months)",
            summary: "Scale template library and introduce subscription model",
            tasks: [
                "Expand to 15+ templates",
                "Launch subscription service",
                "Build email funnel system",
                "Community engagement & partnerships",
            ],
            progress: 0,
            status: "Planned",
            future: false,
        },
        Phase {
            number: 3,
            title: "Expansion (6-12 months)",
            summary: "Introduce custom services and scale operations",
            tasks: [
                "Launch custom design services",
                "Hire junior designer/developer",
                "Diversify revenue streams",
                "International market expansion",
            ],
            progress: 0,
            status: "Future",
            future: true,
        },
        Phase {
            number: 4,
            title: "Studio Evolution (12+ months)",
            summary: "Transform into full-service Creative Tech Consulting",
            tasks: [
                "Establish Sydney-based studio",
                "Full-service design & development",
                "Enterprise client acquisition",
                "Team scaling & process optimization",
            ],
            progress: 0,
            status: "Future",
            future: true,
        },
    ]
}

fn milestones() -> [(&'static str, &'static str); 4] {
    [
        ("Month 3:", "First $1K revenue"),
        ("Month 6:", "$5K monthly recurring"),
        ("Month 9:", "First custom project"),
        ("Month 12:", "$15K monthly revenue"),
    ]
}

#[derive(Properties, PartialEq)]
pub struct RoadmapProps {
    pub dark: bool,
}

#[function_component(Roadmap)]
pub fn roadmap(_props: &RoadmapProps) -> Html {
    html! {
        <section class="deck-section roadmap">
            <style>{ ROADMAP_CSS }</style>
            <h2>{"🗺️ Project Roadmap"}</h2>
            <div class="timeline">
                { for phases().into_iter().enumerate().map(|(i, phase)| html! {
                    <Reveal key={phase.number.to_string()} delay_ms={(i as u32) * 100}>
                        <div class="timeline-item">
                            <div class={classes!("timeline-marker", phase.future.then(|| "future"))}>
                                { phase.number }
                            </div>
                            <div class="panel phase-card">
                                <h3>{ phase.title }</h3>
                                <p class="small">{ phase.summary }</p>
                                <ul class="small">
                                    { for phase.tasks.iter().map(|task| html! { <li>{ *task }</li> }) }
                                </ul>
                                <div class="phase-progress">
                                    <div class="progress-track">
                                        <div
                                            class="progress-fill"
                                            style={format!("width: {}%;", phase.progress)}
                                        ></div>
                                    </div>
                                    <span class="muted small">{ phase.status }</span>
                                </div>
                            </div>
                        </div>
                    </Reveal>
                }) }
            </div>
            <div class="panel">
                <h3>{"🎯 Key Milestones"}</h3>
                <div class="milestone-grid">
                    { for milestones().into_iter().enumerate().map(|(i, (month, goal))| html! {
                        <Reveal key={month} delay_ms={(i as u32) * 100}>
                            <div class="milestone">
                                <b>{ month }</b>
                                {" "}
                                { goal }
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_progress_stays_within_percent_bounds() {
        for phase in phases() {
            assert!(phase.progress <= 100, "{}", phase.title);
        }
    }

    #[test]
    fn test_phases_are_numbered_in_order() {
        let numbers: Vec<usize> = phases().iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }
}
