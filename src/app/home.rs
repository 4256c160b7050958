use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::swap::AnimatedSwap;
use crate::content::{site_content, WorkItem};
use crate::view_state::WorkSelection;

/// Renders the classic single-page portfolio.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Nav />
        <Hero />
        <WorkSection />
        <ExperienceSection />
        <CertificatesSection />
    }
}

#[component]
fn Nav() -> impl IntoView {
    view! {
        <header class="flex items-center justify-between py-6">
            <div class="text-xl font-bold tracking-widest" aria-hidden="true">
                "MH"
            </div>
            <nav class="flex gap-6 text-sm">
                <a class="hover:text-cyan transition-colors duration-200" href="#about">
                    "About"
                </a>
                <a class="hover:text-cyan transition-colors duration-200" href="#work">
                    "Projects"
                </a>
                <a class="hover:text-cyan transition-colors duration-200" href="#experience">
                    "Experience"
                </a>
                <A href="/terminal" attr:class="text-green hover:text-brightGreen transition-colors duration-200">
                    "Terminal"
                </A>
            </nav>
        </header>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let about = &site_content().about;
    view! {
        <section id="about" class="grid lg:grid-cols-2 gap-8 py-12 swap-enter">
            <div>
                <div class="text-muted mb-2">"Hi, I'm " {about.name}</div>
                <h1 class="text-4xl font-bold leading-tight">
                    "Clean " <span class="text-cyan">"analytics"</span> "."
                    <br />
                    "Reliable decisions."
                </h1>
                <div class="text-sm text-muted mt-2">{about.role}</div>
            </div>
            <div>
                <h2 class="text-sm uppercase tracking-widest text-muted mb-2">"About me"</h2>
                <p class="text-lg mb-4 leading-relaxed">{about.summary}</p>
                <ul class="space-y-1 mb-6 list-disc list-inside">
                    {about.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
                </ul>
                <div class="flex gap-3">
                    <a
                        href="mailto:7j.mo7ammed@gmail.com"
                        aria-label="Email"
                        class="text-2xl hover:text-cyan"
                    >
                        <i class="devicon-google-plain"></i>
                    </a>
                    <a
                        href="https://www.linkedin.com/in/mohammed-nasser-hijazi/"
                        target="_blank"
                        rel="noreferrer"
                        aria-label="LinkedIn"
                        class="text-2xl hover:text-cyan"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                    <a
                        href="https://github.com/Mo7j"
                        target="_blank"
                        rel="noreferrer"
                        aria-label="GitHub"
                        class="text-2xl hover:text-cyan"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn WorkSection() -> impl IntoView {
    let selection = RwSignal::new(WorkSelection::new());
    // Key the swap on the resolved id so an unmatched id falls back to the
    // grid instead of rendering an empty detail panel.
    let current_id = Memo::new(move |_| {
        selection.with(|s| s.current(site_content()).map(|w| w.id))
    });

    view! {
        <section id="work" class="py-12">
            <div class="flex items-baseline justify-between mb-6">
                <h2 class="text-sm uppercase tracking-widest text-muted">"Projects"</h2>
                <div class="text-xs text-muted">"Click to Expand"</div>
            </div>
            <AnimatedSwap target=current_id render=move |key: Option<&'static str>| {
                match key.and_then(|id| site_content().work_by_id(id)) {
                    None => view! { <WorkGrid selection /> }.into_any(),
                    Some(work) => view! { <WorkDetail work selection /> }.into_any(),
                }
            } />
        </section>
    }
}

#[component]
fn WorkGrid(selection: RwSignal<WorkSelection>) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-4">
            {site_content()
                .works
                .iter()
                .map(|w| {
                    let id = w.id;
                    view! {
                        <button
                            type="button"
                            class="text-left p-5 rounded-lg border border-muted/30 bg-panel hover:border-cyan/50 hover:-translate-y-1 transition-all duration-200"
                            on:click=move |_| selection.update(|s| s.open_work(id))
                        >
                            <div class="flex items-center justify-between mb-3">
                                <div class="font-bold">{w.title}</div>
                                <span class="text-muted" aria-hidden="true">"»"</span>
                            </div>
                            <div class="flex flex-wrap gap-2 mb-3">
                                {w.tags.iter().map(|t| view! { <Tag text=*t /> }).collect_view()}
                            </div>
                            <div class="text-sm text-muted">{w.blurb}</div>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn WorkDetail(work: &'static WorkItem, selection: RwSignal<WorkSelection>) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-muted/30 bg-panel p-6">
            <div class="flex items-center justify-between mb-4">
                <button
                    type="button"
                    class="text-sm text-cyan hover:text-brightCyan"
                    on:click=move |_| selection.update(|s| s.close_work())
                >
                    "← Back to list"
                </button>
                <span class="text-xs uppercase tracking-widest text-muted">"Case study"</span>
            </div>
            <div class="flex flex-col md:flex-row md:items-baseline gap-3 mb-2">
                <h2 class="text-2xl font-bold">{work.title}</h2>
                <div class="flex flex-wrap gap-2">
                    {work.tags.iter().map(|t| view! { <Tag text=*t /> }).collect_view()}
                </div>
            </div>
            <p class="text-muted mb-6">{work.blurb}</p>
            <div class="grid md:grid-cols-2 gap-8">
                <div>
                    <h3 class="text-xs uppercase tracking-widest text-muted mb-2">"What I did"</h3>
                    <ul class="space-y-2 list-disc list-inside">
                        {work.details.iter().map(|d| view! { <li>{*d}</li> }).collect_view()}
                    </ul>
                </div>
                <div>
                    <h3 class="text-xs uppercase tracking-widest text-muted mb-2">"Stack"</h3>
                    <ul class="space-y-1 list-disc list-inside">
                        {work.stack.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}
                    </ul>
                    <div class="border-t border-muted/30 my-4"></div>
                    <h3 class="text-xs uppercase tracking-widest text-muted mb-2">"Outcome"</h3>
                    <p class="text-sm">
                        "Trusted metrics, consistent definitions, and dashboards built for action -- not vanity charts."
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Tag(text: &'static str) -> impl IntoView {
    view! {
        <span class="text-xs px-2 py-0.5 rounded-full border border-muted/40 text-muted">
            {text}
        </span>
    }
}

#[component]
fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="py-12">
            <div class="flex items-baseline justify-between mb-6">
                <h2 class="text-sm uppercase tracking-widest text-muted">"Experience"</h2>
                <div class="text-xs text-muted">"A quick career snapshot."</div>
            </div>
            <div class="space-y-4">
                {site_content()
                    .experience
                    .iter()
                    .map(|item| {
                        view! {
                            <div class="p-5 rounded-lg border border-muted/30 bg-panel">
                                <div class="flex items-baseline justify-between">
                                    <div class="font-bold">{item.role}</div>
                                    <div class="text-sm text-muted">{item.years}</div>
                                </div>
                                <div class="text-sm text-cyan mb-2">{item.place}</div>
                                <p class="text-sm text-muted">{item.note}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CertificatesSection() -> impl IntoView {
    view! {
        <section id="certificates" class="py-12">
            <div class="flex items-baseline justify-between mb-6">
                <h2 class="text-sm uppercase tracking-widest text-muted">"Certificates"</h2>
                <div class="text-xs text-muted">"Recent credentials."</div>
            </div>
            <div class="grid md:grid-cols-3 gap-4">
                {site_content()
                    .certificates
                    .iter()
                    .map(|cert| {
                        view! {
                            <div class="p-5 rounded-lg border border-muted/30 bg-panel">
                                <div class="font-bold mb-2">{cert.title}</div>
                                <div class="flex items-baseline justify-between text-sm text-muted">
                                    <span>{cert.org}</span>
                                    <span>{cert.year}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
