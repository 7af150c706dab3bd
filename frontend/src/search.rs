use leptos::prelude::*;

#[component]
pub fn SearchBar(
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    set_page: WriteSignal<u32>,
    set_query: WriteSignal<String>,
) -> impl IntoView {
    let (suggestions, set_suggestions) = signal(Vec::<String>::new());

    let submit = move |e: web_sys::SubmitEvent| {
        e.prevent_default();
        set_suggestions.set(Vec::new());
        set_query.set(value.read().trim().to_owned());
        set_page.set(1);
    };

    let on_input = move |text: String| {
        set_value.set(text.clone());

        let trimmed = text.trim().to_owned();
        if trimmed.is_empty() {
            set_suggestions.set(Vec::new());
            return;
        }

        leptos::task::spawn_local(async move {
            match fetch_suggestions(&trimmed).await {
                Ok(items) => {
                    // The field may have moved on while this request was in
                    // flight; a stale response must not replace newer state.
                    if value.read_untracked().trim() == trimmed {
                        set_suggestions.set(items);
                    }
                }
                Err(SearchError::Fetch(cause)) => {
                    leptos::logging::error!("Error fetching suggestions: {}", cause);
                }
            }
        });
    };

    view! {
        <form class="search" on:submit=submit>
            <input
                type="search"
                class="search-field"
                placeholder="Search facts..."
                aria-label="search facts"
                prop:value=value
                on:input:target=move |ev| on_input(ev.target().value())
            />
            <button type="submit" class="search-btn">
                "Search"
            </button>
            <div
                class="autocomplete-items"
                style:display=move || if suggestions.read().is_empty() { "none" } else { "block" }
            >
                {move || {
                    suggestions
                        .get()
                        .into_iter()
                        .map(|suggestion| {
                            let label = suggestion.clone();
                            view! {
                                <div
                                    class="autocomplete-item"
                                    on:click=move |_| {
                                        set_value.set(suggestion.clone());
                                        set_suggestions.set(Vec::new());
                                    }
                                >
                                    {label}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </form>
    }
}

enum SearchError {
    Fetch(String),
}

async fn fetch_suggestions(query: &str) -> Result<Vec<String>, SearchError> {
    let resp = gloo_net::http::Request::get("/api/autocomplete")
        .query([("q", query)])
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|e| SearchError::Fetch(e.to_string()))?;

    if !resp.ok() {
        return Err(SearchError::Fetch(format!("status {}", resp.status())));
    }

    resp.json()
        .await
        .map_err(|e| SearchError::Fetch(e.to_string()))
}
