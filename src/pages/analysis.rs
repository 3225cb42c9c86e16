//! Analysis screens.
//!
//! Only the semantic-similarity screen talks to the backend; the others are
//! placeholders until their endpoints exist.

use leptos::prelude::*;
use session::{ClientConfig, Route};

use crate::components::nav_bar::NavBar;
use crate::components::sidebar::Sidebar;
use crate::net::api::check_paragraph;
use crate::net::types::{ParagraphCheckRequest, ParagraphReport, format_ratio};

/// Navigation chrome shared by every analysis screen.
#[component]
fn AnalysisShell(route: Route, children: Children) -> impl IntoView {
    view! {
        <div class="sem-wrap">
            <NavBar/>
            <div class="sem-body">
                <Sidebar active=route/>
                <section class="sem-main">
                    <h1 class="sem-title">{route.title()}</h1>
                    {children()}
                </section>
            </div>
        </div>
    }
}

/// Placeholder body for screens without a backend.
#[component]
pub fn PlaceholderPage(route: Route) -> impl IntoView {
    view! {
        <AnalysisShell route=route>
            <p class="sem-placeholder">{format!("Placeholder page for {}.", route.title())}</p>
        </AnalysisShell>
    }
}

/// Single-paragraph check against web search and an optional Google Doc.
#[component]
pub fn SemanticSimilarityPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let paragraph = RwSignal::new(String::new());
    let google_doc_url = RwSignal::new(String::new());
    let use_web_search = RwSignal::new(true);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let report = RwSignal::new(None::<ParagraphReport>);

    let on_check = move |_| {
        if loading.get_untracked() {
            return;
        }
        let Some(request) = ParagraphCheckRequest::new(
            &paragraph.get_untracked(),
            &google_doc_url.get_untracked(),
            use_web_search.get_untracked(),
        ) else {
            error.set(Some("Please paste a paragraph to check".to_owned()));
            return;
        };
        loading.set(true);
        error.set(None);
        report.set(None);
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match check_paragraph(&config, &request).await {
                Ok(result) => report.set(Some(result)),
                Err(e) => {
                    #[cfg(feature = "csr")]
                    log::warn!("paragraph check failed: {e}");
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <AnalysisShell route=Route::SemanticSimilarity>
            <div class="sem-card">
                <div class="web-toggle">
                    <label class="toggle-label">
                        <input
                            type="checkbox"
                            prop:checked=move || use_web_search.get()
                            on:change=move |ev| use_web_search.set(event_target_checked(&ev))
                        />
                        " Enable Web Search (Google)"
                    </label>
                </div>
                <div class="google-doc-box">
                    <label class="lbl-block">"Google Doc URL (optional)"</label>
                    <input
                        type="text"
                        class="google-input"
                        placeholder="https://docs.google.com/document/d/..."
                        prop:value=move || google_doc_url.get()
                        on:input=move |ev| google_doc_url.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="section-title">"Check a Single Paragraph (Web / Google Doc)"</div>
            <div class="sem-card">
                <textarea
                    class="para-box"
                    placeholder="Paste one paragraph here (one idea / one paragraph)..."
                    prop:value=move || paragraph.get()
                    on:input=move |ev| paragraph.set(event_target_value(&ev))
                ></textarea>
                <button class="sem-check" on:click=on_check disabled=move || loading.get()>
                    {move || if loading.get() { "Checking..." } else { "Check Paragraph" }}
                </button>
                <Show when=move || error.get().is_some()>
                    <div class="error-box">{move || error.get().unwrap_or_default()}</div>
                </Show>
                {move || report.get().map(|report| view! { <ParagraphReportView report=report/> })}
            </div>
        </AnalysisShell>
    }
}

#[component]
fn ParagraphReportView(report: ParagraphReport) -> impl IntoView {
    let score = report.paragraph_score.map_or_else(|| "-".to_owned(), |score| format!("{score}%"));
    let matches = if report.matches.is_empty() {
        view! { <div class="match-empty">"No matches found in web/docs."</div> }.into_any()
    } else {
        report
            .matches
            .into_iter()
            .enumerate()
            .map(|(i, m)| {
                view! {
                    <div class="match-box">
                        <div class="match-title">
                            {format!("Match #{}: Combined {}", i + 1, format_ratio(m.combined))}
                        </div>
                        <div class="scores">
                            {format!(
                                "Semantic: {} • Lexical: {} • Stylometric: {}",
                                format_ratio(m.semantic),
                                format_ratio(m.lexical),
                                format_ratio(m.stylometric),
                            )}
                        </div>
                        <div class="match-text">{m.corpus_text}</div>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };
    view! {
        <div class="paragraph-result">
            <div class="primary-result">
                <div class="result-label-large">"Paragraph Combined Score"</div>
                <div class="result-pill-large">{score}</div>
            </div>
            <h4>"Top Matches"</h4>
            {matches}
        </div>
    }
}
