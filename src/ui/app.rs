/// Bookmark manager page

use patternfly_yew::prelude::*;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::error::StoreError;
use crate::presentation::{rows, FieldMark, Notice};
use crate::storage::LocalStore;
use crate::store::BookmarkStore;
use crate::ui::components::{BookmarkTable, NoticeBanner};

type PageStore = BookmarkStore<LocalStore>;

fn open_page_store() -> Result<PageStore, StoreError> {
    let backend = LocalStore::open()?;
    BookmarkStore::open(backend, &AppConfig::default())
}

#[function_component(App)]
pub fn app() -> Html {
    let store = use_state(open_page_store);
    let site_name = use_state(String::new);
    let site_url = use_state(String::new);
    let name_mark = use_state(FieldMark::default);
    let url_mark = use_state(FieldMark::default);
    let notice = use_state(|| None::<Notice>);

    let on_name_input = {
        let site_name = site_name.clone();
        let name_mark = name_mark.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let value = input.value();
                name_mark.set(FieldMark::for_name(&value));
                site_name.set(value);
            }
        })
    };

    let on_url_input = {
        let site_url = site_url.clone();
        let url_mark = url_mark.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let value = input.value();
                url_mark.set(FieldMark::for_url(&value));
                site_url.set(value);
            }
        })
    };

    // Add bookmark handler
    let on_add = {
        let store = store.clone();
        let site_name = site_name.clone();
        let site_url = site_url.clone();
        let name_mark = name_mark.clone();
        let url_mark = url_mark.clone();
        let notice = notice.clone();

        Callback::from(move |_: MouseEvent| {
            let Ok(current) = &*store else {
                return;
            };

            let mut next = current.clone();
            match next.add(&site_name, &site_url) {
                Ok(_) => {
                    store.set(Ok(next));
                    site_name.set(String::new());
                    site_url.set(String::new());
                    name_mark.set(FieldMark::Pristine);
                    url_mark.set(FieldMark::Pristine);
                    notice.set(Some(Notice::added()));
                }
                Err(StoreError::Validation(err)) => {
                    name_mark.set(FieldMark::for_name(&site_name));
                    url_mark.set(FieldMark::for_url(&site_url));
                    notice.set(Some(Notice::from(&err)));
                }
                Err(err) => {
                    notice.set(Some(Notice::error("Could not save", err.to_string())));
                }
            }
        })
    };

    // Delete bookmark handler
    let on_delete = {
        let store = store.clone();
        let notice = notice.clone();

        Callback::from(move |index: usize| {
            let Ok(current) = &*store else {
                return;
            };

            let mut next = current.clone();
            match next.remove_at(index) {
                Ok(_) => store.set(Ok(next)),
                Err(err) => notice.set(Some(Notice::error("Could not delete", err.to_string()))),
            }
        })
    };

    html! {
        <div class="container">
            <h1 class="main-title">{"Bookmarker"}</h1>

            if let Some(current) = (*notice).clone() {
                <NoticeBanner notice={current} />
            }

            {match &*store {
                Ok(current) => html! {
                    <>
                        <div class="site-form">
                            <label for="siteName">{"Site Name"}</label>
                            <input
                                type="text"
                                id="siteName"
                                placeholder="Bookmark Name"
                                class={name_mark.css_class()}
                                value={(*site_name).clone()}
                                oninput={on_name_input}
                            />
                            <label for="SiteURL">{"Site URL"}</label>
                            <input
                                type="text"
                                id="SiteURL"
                                placeholder="Website URL"
                                class={url_mark.css_class()}
                                value={(*site_url).clone()}
                                oninput={on_url_input}
                            />
                            <Button onclick={on_add} variant={ButtonVariant::Primary}>
                                {"Submit"}
                            </Button>
                        </div>

                        <BookmarkTable rows={rows(current.list())} on_delete={on_delete} />
                    </>
                },
                Err(err) => html! {
                    <NoticeBanner notice={Notice::error("Failed to load bookmarks", err.to_string())} />
                },
            }}

            <p class="footer">
                {"Bookmarker v0.1.0"}
            </p>
        </div>
    }
}
