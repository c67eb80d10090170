//! 詳細パネルコンポーネント

use cutsheet_common::detail::{EXCERPT_TITLE, PARTS_TITLE};
use cutsheet_common::{Block, DetailBody, DetailPanelView, DocumentView, ExcerptView, LinkView, PartsView, SectionView};
use leptos::prelude::*;

#[component]
pub fn DetailPanel(panel: Memo<DetailPanelView>) -> impl IntoView {
    view! {
        <section class="panel panel--detail">
            <div class="panel__header">
                <h2>"Cut Sheet Metadata"</h2>
                <p id="detail-subtitle" class="panel__subtitle">
                    {move || panel.with(|p| p.subtitle.clone())}
                </p>
            </div>
            <div id="detail-view" class="panel__body">
                {move || match panel.with(|p| p.body.clone()) {
                    DetailBody::Placeholder(message) | DetailBody::Loading(message) => {
                        view! { <div class="panel__empty">{message}</div> }.into_any()
                    }
                    DetailBody::Failed(message) => {
                        view! { <div class="panel__empty panel__empty--error">{message}</div> }.into_any()
                    }
                    DetailBody::Document(doc) => render_document(doc),
                }}
            </div>
        </section>
    }
}

fn render_document(doc: DocumentView) -> AnyView {
    doc.blocks
        .into_iter()
        .map(|block| match block {
            Block::Section(section) => render_section(section),
            Block::Links(links) => render_links(links),
            Block::Parts(parts) => render_parts(parts),
            Block::Excerpt(excerpt) => render_excerpt(excerpt),
        })
        .collect_view()
        .into_any()
}

fn section_shell(title: String, body: AnyView) -> AnyView {
    view! {
        <section class="detail-section">
            <div class="detail-section__header">
                <h3>{title}</h3>
            </div>
            <div class="detail-section__body">{body}</div>
        </section>
    }
    .into_any()
}

fn render_section(section: SectionView) -> AnyView {
    let grid = view! {
        <div class="detail-grid">
            {section
                .fields
                .into_iter()
                .map(|field| {
                    view! {
                        <div class="detail-card">
                            <h3>{field.label}</h3>
                            <p>{field.value}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any();
    section_shell(section.title, grid)
}

fn render_links(links: Vec<LinkView>) -> AnyView {
    view! {
        <div class="detail-links">
            {links
                .into_iter()
                .map(|link| {
                    view! {
                        <a href=link.href title=link.title target="_blank" rel="noopener">
                            {link.label}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

fn render_parts(parts: PartsView) -> AnyView {
    let body = match parts {
        PartsView::Empty { message } => view! { <p>{message}</p> }.into_any(),
        PartsView::Table { columns, rows } => view! {
            <table class="parts-table">
                <thead>
                    <tr>
                        {columns.headers().iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|cells| {
                            view! {
                                <tr>
                                    {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    };
    section_shell(PARTS_TITLE.to_string(), body)
}

fn render_excerpt(excerpt: ExcerptView) -> AnyView {
    let body = match excerpt {
        ExcerptView::Text(text) => view! { <pre class="detail-excerpt">{text}</pre> }.into_any(),
        ExcerptView::Missing(message) => view! { <p>{message}</p> }.into_any(),
    };
    section_shell(EXCERPT_TITLE.to_string(), body)
}
