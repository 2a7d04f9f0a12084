use gloo_timers::callback::Interval;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    /// Delay between automatic advances. Any manual interaction
    /// restarts the countdown.
    #[prop_or(6500)]
    pub interval_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

/// Rotates through its children one at a time, with arrows, dot
/// navigation and a timed auto-advance. The visible slide is keyed by
/// its position so switching slides replays the entry animation.
#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let index = use_state(|| 0usize);
    let count = props.children.len();

    // The interval is rebuilt whenever the slide changes, so the timer
    // captures the index it advances from and a manual jump gets the
    // full delay before the next auto-advance.
    {
        let deps = (*index, count, props.interval_ms);
        let index = index.clone();
        use_effect_with_deps(
            move |deps: &(usize, usize, u32)| {
                let (current, count, interval_ms) = *deps;
                let timer = (count > 1).then(|| {
                    Interval::new(interval_ms, move || index.set((current + 1) % count))
                });
                move || drop(timer)
            },
            deps,
        );
    }

    if count == 0 {
        return html! {};
    }

    let current = (*index).min(count - 1);
    let prev = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set((current + count - 1) % count))
    };
    let next = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set((current + 1) % count))
    };

    html! {
        <div class="carousel">
            <div class="carousel-stage">
                <button class="carousel-arrow" onclick={prev} aria-label="Previous slide">{"‹"}</button>
                <div class="carousel-frame" key={current.to_string()}>
                    { props.children.iter().nth(current).unwrap_or_default() }
                </div>
                <button class="carousel-arrow" onclick={next} aria-label="Next slide">{"›"}</button>
            </div>
            <div class="carousel-dots">
                { for (0..count).map(|i| {
                    let index = index.clone();
                    let onclick = Callback::from(move |_: MouseEvent| index.set(i));
                    html! {
                        <button
                            key={i.to_string()}
                            class={classes!("carousel-dot", (i == current).then(|| "active"))}
                            onclick={onclick}
                            aria-label={format!("Go to slide {}", i + 1)}
                        />
                    }
                }) }
            </div>
        </div>
    }
}
