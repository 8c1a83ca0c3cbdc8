use log::{info, warn};
use yew::prelude::*;

use crate::animations::init_entrance_animations;
use crate::components::{header::Header, scroll_top::ScrollTopButton};
use crate::config::PageConfig;
use crate::contact::ContactForm;
use crate::lazy_images::LazyImageLoader;
use crate::navigation::cta_click;
use crate::scroll::{ScrollStateController, ScrollTargets};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub config: PageConfig,
}

struct Program {
    title: &'static str,
    blurb: &'static str,
    image: &'static str,
}

const PROGRAMS: [Program; 3] = [
    Program {
        title: "Strength",
        blurb: "Barbell fundamentals and progressive overload with a coach on the floor.",
        image: "/assets/programs/strength.jpg",
    },
    Program {
        title: "Conditioning",
        blurb: "High intensity circuits that build engine and grit.",
        image: "/assets/programs/conditioning.jpg",
    },
    Program {
        title: "Boxing",
        blurb: "Footwork, bag work and pad rounds for every level.",
        image: "/assets/programs/boxing.jpg",
    },
];

const PLANS: [(&str, &str); 3] = [("Basic", "$29"), ("Pro", "$49"), ("Elite", "$79")];

/// Attaches every page behavior once the markup is in the DOM and tears them
/// down again when the page unmounts.
#[hook]
fn use_page_behaviors(config: &PageConfig) {
    let config = config.clone();
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window();
            let document = window.as_ref().and_then(|w| w.document());

            let controller = match (window, document.as_ref()) {
                (Some(window), Some(document)) => {
                    match ScrollStateController::attach(window, config.scroll(), ScrollTargets::resolve(document)) {
                        Ok(controller) => Some(controller),
                        Err(e) => {
                            warn!("Scroll effects disabled: {:?}", e);
                            None
                        }
                    }
                }
                _ => None,
            };

            init_entrance_animations(&config);

            let lazy_images = document.as_ref().and_then(|document| match LazyImageLoader::observe(document) {
                Ok(loader) => loader,
                Err(e) => {
                    warn!("Lazy image loading disabled: {:?}", e);
                    None
                }
            });

            info!("PowerGym website loaded successfully!");

            move || {
                drop(controller);
                drop(lazy_images);
            }
        },
        (),
    );
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    use_page_behaviors(&props.config);
    let focus_delay = props.config.animation_duration_ms;

    html! {
        <>
            <Header />
            <section id="home" class="hero">
                <div class="hero-bg">
                    <img src="/assets/hero.jpg" alt="Athlete training at PowerGym" />
                </div>
                <div class="hero-content" data-aos="fade-up">
                    <h1>{"Unleash Your "}<span>{"Power"}</span></h1>
                    <p>{"Coached training for people who want to get strong, not just busy."}</p>
                    <button class="hero-cta" onclick={cta_click(focus_delay)}>{"START TODAY"}</button>
                </div>
            </section>

            <section id="programs" class="programs">
                <h2 data-aos="fade-up">{"Programs"}</h2>
                <div class="programs-grid">
                    {
                        for PROGRAMS.iter().map(|program| html! {
                            <div class="program-card" data-aos="fade-up">
                                <img class="lazy" data-src={program.image} alt={program.title} />
                                <h3>{program.title}</h3>
                                <p>{program.blurb}</p>
                                <button class="cta-btn" onclick={cta_click(focus_delay)}>{"TRY A CLASS"}</button>
                            </div>
                        })
                    }
                </div>
            </section>

            <section id="pricing" class="pricing">
                <h2 data-aos="fade-up">{"Membership"}</h2>
                <div class="pricing-grid">
                    {
                        for PLANS.iter().map(|(plan, price)| html! {
                            <div class="pricing-card" data-aos="zoom-in">
                                <h3>{*plan}</h3>
                                <p class="price">{*price}<span>{"/month"}</span></p>
                                <button class="pricing-btn" onclick={cta_click(focus_delay)}>{"CHOOSE PLAN"}</button>
                            </div>
                        })
                    }
                </div>
            </section>

            <section id="contact" class="contact">
                <h2 data-aos="fade-up">{"Claim Your Free Session"}</h2>
                <div class="contact-form" data-aos="fade-up">
                    <ContactForm config={props.config.clone()} />
                </div>
            </section>

            <footer class="footer">
                <p>{"© PowerGym"}</p>
            </footer>

            <ScrollTopButton />
        </>
    }
}
