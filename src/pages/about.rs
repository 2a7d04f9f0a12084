use yew::prelude::*;

const ABOUT_CSS: &str = r#"
.about .contact-row {
    display: flex;
    gap: 10px;
    flex-wrap: wrap;
    margin-top: 16px;
}

.about p {
    max-width: 70ch;
    line-height: 1.6;
}
"#;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub dark: bool,
}

#[function_component(About)]
pub fn about(_props: &AboutProps) -> Html {
    html! {
        <section class="deck-section about">
            <style>{ ABOUT_CSS }</style>
            <h2>{"Maya Lindholm"}</h2>
            <p>
                {"I am a recent graduate in Information and Communications Technology (Information \
                  Systems) with hands-on experience in front-end development, SaaS concepts, and \
                  digital solutions. Over the past few years I have worked on projects combining \
                  design, coding, and consulting, from Figma-to-code prototypes to web and branding \
                  work for small businesses and community groups in Sydney."}
            </p>
            <h3>{"Vision"}</h3>
            <p>
                {"My vision is to grow this experience into a Framer-driven, no-code, high-speed \
                  production approach that evolves into a Creative Tech Consulting firm. The goal is \
                  to help small and medium-sized businesses improve their digital presence with \
                  accessible web development, design, and scalable SaaS solutions, supporting SMEs \
                  in streamlining operations and building stronger brands."}
            </p>
            <div class="contact-row">
                <a class="button" href="mailto:hello@lumenframe.studio">{"Email"}</a>
                <a
                    class="button ghost"
                    href="https://www.linkedin.com/in/maya-lindholm"
                    target="_blank"
                    rel="noreferrer"
                >
                    {"LinkedIn"}
                </a>
                <a
                    class="button ghost"
                    href="https://lumenframe.studio"
                    target="_blank"
                    rel="noreferrer"
                >
                    {"Portfolio"}
                </a>
            </div>
        </section>
    }
}
