mod home;
mod swap;
mod terminal;

use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::site_content;
use home::HomePage;
use terminal::TerminalPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-ink text-paper">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let name = site_content().about.name;

    view! {
        // sets the document title
        <Title formatter=move |title| format!("{name} - {title}") />

        <Router>
            <main class="flex flex-col flex-grow mx-auto w-full max-w-6xl px-4">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/terminal") view=TerminalPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();
    view! {
        <footer class="mx-auto w-full max-w-6xl px-4 py-8 text-sm text-muted">
            <span>"(c) " {year} " " {site_content().about.name}</span>
        </footer>
    }
}
