use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::swap::AnimatedSwap;
use crate::content::site_content;
use crate::view_state::{Pane, PaneNav};

/// Renders the retro terminal variant: same content, styled as a DOS-era
/// file browser with one pane visible at a time.
#[component]
pub fn TerminalPage() -> impl IntoView {
    let nav = RwSignal::new(PaneNav::new());
    let pane = Memo::new(move |_| nav.with(|n| n.pane()));

    view! {
        <Title text="Terminal" />
        <div class="font-mono border border-green/50 rounded-md p-4 my-8 bg-black/80 text-green shadow-[0_0_24px_rgba(0,255,128,0.15)]">
            <StatusLine />
            <div class="mb-4">
                <span class="text-brightGreen">{move || pane.get().prompt_path()}</span>
                <span class="animate-pulse">"_"</span>
            </div>
            <AnimatedSwap target=pane render=move |pane: Pane| {
                match pane {
                    Pane::Home => view! { <HomePane nav /> }.into_any(),
                    Pane::Projects => view! { <ProjectsPane nav /> }.into_any(),
                    Pane::Certificates => view! { <CertificatesPane nav /> }.into_any(),
                    Pane::Experience => view! { <ExperiencePane nav /> }.into_any(),
                }
            } />
        </div>
    }
}

#[component]
fn StatusLine() -> impl IntoView {
    let about = &site_content().about;
    view! {
        <div class="flex justify-between text-xs text-green/60 border-b border-green/30 pb-2 mb-4">
            <span>{about.name} " :: " {about.role}</span>
            <span>"build " {env!("BUILD_TIME")}</span>
        </div>
    }
}

#[component]
fn HomePane(nav: RwSignal<PaneNav>) -> impl IntoView {
    let about = &site_content().about;
    view! {
        <div>
            <p class="mb-4">{about.summary}</p>
            <div class="mb-4">
                {about
                    .bullets
                    .iter()
                    .map(|b| view! { <div>"* " {*b}</div> })
                    .collect_view()}
            </div>
            <div class="text-green/60 mb-2">"Directory of " {Pane::Home.prompt_path()}</div>
            {[Pane::Projects, Pane::Certificates, Pane::Experience]
                .into_iter()
                .map(|target| {
                    view! {
                        <button
                            type="button"
                            class="block w-full text-left hover:bg-green/10 px-1"
                            on:click=move |_| nav.update(|n| n.navigate_to(target))
                        >
                            <span class="text-brightGreen">"<DIR>"</span>
                            "  "
                            {target.label()}
                        </button>
                    }
                })
                .collect_view()}
            <div class="mt-4 text-green/60">
                <A href="/" attr:class="hover:text-brightGreen">
                    "> exit to gui.exe"
                </A>
            </div>
        </div>
    }
}

#[component]
fn BackRow(nav: RwSignal<PaneNav>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="block w-full text-left hover:bg-green/10 px-1 mb-3"
            on:click=move |_| nav.update(|n| n.navigate_home())
        >
            <span class="text-brightGreen">"<DIR>"</span>
            "  .."
        </button>
    }
}

#[component]
fn ProjectsPane(nav: RwSignal<PaneNav>) -> impl IntoView {
    view! {
        <div>
            <BackRow nav />
            {site_content()
                .works
                .iter()
                .map(|w| {
                    view! {
                        <div class="mb-4">
                            <div class="text-brightGreen">{w.title} ".prj"</div>
                            <div class="text-green/60 text-sm">{w.tags.join(" / ")}</div>
                            <div class="text-sm">{w.blurb}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn CertificatesPane(nav: RwSignal<PaneNav>) -> impl IntoView {
    view! {
        <div>
            <BackRow nav />
            {site_content()
                .certificates
                .iter()
                .map(|c| {
                    view! {
                        <div class="mb-2">
                            <span class="text-brightGreen">{c.year}</span>
                            "  "
                            {c.title}
                            <span class="text-green/60">"  [" {c.org} "]"</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ExperiencePane(nav: RwSignal<PaneNav>) -> impl IntoView {
    view! {
        <div>
            <BackRow nav />
            {site_content()
                .experience
                .iter()
                .map(|item| {
                    view! {
                        <div class="mb-4">
                            <div>
                                <span class="text-brightGreen">{item.role}</span>
                                <span class="text-green/60">"  " {item.years}</span>
                            </div>
                            <div class="text-sm">{item.place}</div>
                            <div class="text-sm text-green/60">{item.note}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
