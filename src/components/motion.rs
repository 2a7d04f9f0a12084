use yew::prelude::*;

/// Keyframes and classes for the deck's entry animations. Sections get
/// `deck-enter` when they mount, smaller pieces opt in with `Reveal`.
/// Animations are purely decorative: state changes apply immediately
/// and the CSS catches up, so nothing waits on an animation to finish.
pub const MOTION_CSS: &str = r#"
@keyframes deck-enter {
    from { opacity: 0; transform: translateY(10px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes deck-rise {
    from { opacity: 0; transform: translateY(8px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes deck-fill {
    from { width: 0; }
}

.deck-section {
    animation: deck-enter 0.5s ease-out both;
}

.reveal {
    animation: deck-rise 0.45s ease-out both;
}

.progress-fill {
    animation: deck-fill 1s ease-out 0.3s both;
}

.carousel-frame {
    animation: deck-enter 0.4s ease-out both;
}

@media (prefers-reduced-motion: reduce) {
    .deck-section, .reveal, .progress-fill, .carousel-frame {
        animation: none;
    }
}
"#;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Stagger offset so sibling blocks land one after another.
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fade-and-rise wrapper around a block of content.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    html! {
        <div
            class={classes!("reveal", props.class.clone())}
            style={format!("animation-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
