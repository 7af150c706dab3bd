use leptos::prelude::*;

use facts::{FactsResponse, PaginationInfo, Record, filter_records};

mod search;

use search::SearchBar;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    let (page, set_page) = signal(1u32);
    let (per_page, set_per_page) = signal(10u32);
    // Query submitted with the search button; drives the server-side fetch.
    let (query, set_query) = signal(String::new());
    // Live field text; drives the client-side filter and the autocomplete.
    let (field, set_field) = signal(String::new());

    let response = LocalResource::new(move || fetch_facts(page.get(), per_page.get(), query.get()));

    view! {
        <div class="container">
            <header class="list-controls">
                <SearchBar value=field set_value=set_field set_page set_query />
                <select
                    class="per-page-btn"
                    aria-label="facts per page"
                    on:change:target=move |ev| {
                        if let Ok(count) = ev.target().value().parse() {
                            set_per_page.set(count);
                            set_page.set(1);
                            set_query.set(String::new());
                        }
                    }
                >
                    {[5u32, 10, 25, 50]
                        .map(|count| {
                            view! {
                                <option value=count selected=move || per_page.get() == count>
                                    {count}
                                </option>
                            }
                        })}
                </select>
            </header>

            <Suspense fallback=move || view! { <p>"Loading ..."</p> }>
                {move || Suspend::new(async move {
                    match response.await {
                        Ok(FactsResponse { records, pagination }) => {
                            leptos::either::Either::Left(
                                view! {
                                    <FactsList records filter=field />
                                    <PageInfo info=pagination />
                                    <Pagination info=pagination set_page />
                                },
                            )
                        }
                        Err(AppError::FetchError(cause)) => {
                            leptos::either::Either::Right(
                                view! {
                                    <div class="fetch-error">
                                        <h1>"Could not load facts"</h1>
                                        <p>{cause}</p>
                                    </div>
                                },
                            )
                        }
                    }
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn FactsList(records: Vec<Record>, #[prop(into)] filter: Signal<String>) -> impl IntoView {
    let filtered = Signal::derive(move || filter_records(&records, &filter.read()));

    view! {
        <div class="facts-list">
            {move || {
                let records = filtered.get();
                if records.is_empty() {
                    leptos::either::Either::Left(view! { <p>"No matching results found."</p> })
                } else {
                    leptos::either::Either::Right(
                        records
                            .into_iter()
                            .map(|record| view! { <FactItem record /> })
                            .collect_view(),
                    )
                }
            }}
        </div>
    }
}

#[component]
fn FactItem(record: Record) -> impl IntoView {
    view! {
        <div class="facts-list-item">
            <div class="item-content">{record.text.clone()}</div>
            <div class="item-footer">
                <div class="author-name">{record.author()}</div>
                <div class="upvotes">{record.upvotes}</div>
            </div>
        </div>
    }
}

#[component]
fn PageInfo(info: PaginationInfo) -> impl IntoView {
    let (start, end) = info.interval();

    view! {
        <div class="pagination-info">
            "Showing "
            <span class="current-interval-start">{start}</span>
            " - "
            <span class="current-interval-end">{end}</span>
            " of "
            <span class="total-count">{info.total_count}</span>
        </div>
    }
}

#[component]
fn Pagination(info: PaginationInfo, set_page: WriteSignal<u32>) -> impl IntoView {
    let go_to = move |page: u32| {
        set_page.set(page);
        scroll_to_top();
    };

    view! {
        <div class="pagination">
            <button
                type="button"
                class="btn first-page-btn"
                style:visibility=if info.hide_first() { "hidden" } else { "visible" }
                on:click=move |_| go_to(1)
            >
                "First page"
            </button>
            <div class="pages-btns">
                {info
                    .window()
                    .map(|page| {
                        view! {
                            <button
                                type="button"
                                class="btn"
                                class:active=page == info.current_page
                                on:click=move |_| go_to(page)
                            >
                                {page}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <button
                type="button"
                class="btn last-page-btn"
                style:visibility=if info.hide_last() { "hidden" } else { "visible" }
                on:click=move |_| go_to(info.total_pages)
            >
                "Last page"
            </button>
        </div>
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[derive(Debug, Clone)]
enum AppError {
    FetchError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::FetchError(cause) => {
                write!(w, "Failed to load facts due to: {}", cause)
            }
        }
    }
}

impl std::error::Error for AppError {}

async fn fetch_facts(page: u32, per_page: u32, query: String) -> Result<FactsResponse, AppError> {
    let mut params = vec![
        ("page", page.to_string()),
        ("per-page", per_page.to_string()),
    ];
    if !query.is_empty() {
        params.push(("q", query));
    }

    let resp = gloo_net::http::Request::get("/api/facts")
        .query(params)
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|e| AppError::FetchError(e.to_string()))?;

    if !resp.ok() {
        return Err(AppError::FetchError(format!(
            "unexpected status {}",
            resp.status()
        )));
    }

    resp.json()
        .await
        .map_err(|e| AppError::FetchError(e.to_string()))
}
