/// Reusable UI components

use patternfly_yew::prelude::*;
use yew::prelude::*;

use crate::presentation::{BookmarkRow, Notice, NoticeKind};

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Notice,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let alert_type = match props.notice.kind {
        NoticeKind::Success => AlertType::Success,
        NoticeKind::Error => AlertType::Danger,
    };

    html! {
        <div class="message-top-margin">
            <Alert r#type={alert_type} title={props.notice.title.clone()} inline={true}>
                {props.notice.text.clone()}
            </Alert>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BookmarkTableProps {
    pub rows: Vec<BookmarkRow>,
    pub on_delete: Callback<usize>,
}

#[function_component(BookmarkTable)]
pub fn bookmark_table(props: &BookmarkTableProps) -> Html {
    if props.rows.is_empty() {
        return html! {
            <div class="empty-state">
                <p>{"No bookmarks yet."}</p>
                <p class="empty-state-hint">{"Add a site name and URL above."}</p>
            </div>
        };
    }

    html! {
        <table class="pf-v5-c-table bookmark-table">
            <thead>
                <tr>
                    <th>{"#"}</th>
                    <th>{"Website Name"}</th>
                    <th>{"Visit"}</th>
                    <th>{"Delete"}</th>
                </tr>
            </thead>
            <tbody id="tableBody">
                {for props.rows.iter().map(|row| {
                    let index = row.index;

                    html! {
                        <tr key={row.index.to_string()}>
                            <td>{row.position}</td>
                            <td>{&row.name}</td>
                            <td>
                                <a
                                    class="pf-v5-c-button pf-m-warning"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    href={row.visit_url.clone()}
                                >
                                    {"Visit"}
                                </a>
                            </td>
                            <td>
                                <Button
                                    onclick={props.on_delete.reform(move |_| index)}
                                    variant={ButtonVariant::Danger}
                                    size={ButtonSize::Small}
                                >
                                    {"Delete"}
                                </Button>
                            </td>
                        </tr>
                    }
                })}
            </tbody>
        </table>
    }
}
