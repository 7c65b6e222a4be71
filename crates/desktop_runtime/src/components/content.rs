//! Window bodies and the ephemeral document viewer.

use leptos::ev::MouseEvent;
use leptos::*;
use system_ui::{
    Icon, IconName, IconSize, ListItemButton, ListSurface, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

use super::use_desktop_runtime;
use crate::{
    catalog::WindowContent,
    content::{
        self, ABOUT_PARAGRAPHS, CONTACT_INTRO, CONTACT_MAILTO, ESSAYS, ESSAY_PLACEHOLDER,
        LINKEDIN_URL, OWNER_NAME, OWNER_TAGLINE, PHOTOS, PROJECTS, TEXT_PAD_ENTRIES,
        WHY_PARAGRAPHS,
    },
    launch::{my_computer_entries, recycle_bin_entries, LaunchEntry, LaunchTarget, ListingRow},
    model::DocumentId,
    reducer::DesktopAction,
};

/// Renders the body for a catalog window.
pub(super) fn window_content(content: WindowContent) -> View {
    match content {
        WindowContent::MyComputer => view! { <MyComputerView /> }.into_view(),
        WindowContent::About => view! { <AboutView /> }.into_view(),
        WindowContent::Projects => view! { <ProjectsView /> }.into_view(),
        WindowContent::Why => view! { <WhyView /> }.into_view(),
        WindowContent::Contact => view! { <ContactView /> }.into_view(),
        WindowContent::Essays => view! { <EssaysView /> }.into_view(),
        WindowContent::TextPad => view! { <TextPadView /> }.into_view(),
        WindowContent::Photos => view! { <PhotosView /> }.into_view(),
        WindowContent::RecycleBin => view! { <RecycleBinView /> }.into_view(),
        WindowContent::Empty => view! { <div class="window-empty"></div> }.into_view(),
    }
}

fn launch_callback(target: LaunchTarget) -> Callback<MouseEvent> {
    let runtime = use_desktop_runtime();
    Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::Launch {
            target: target.clone(),
        });
    })
}

fn launch_row(entry: LaunchEntry, nested: bool) -> View {
    let on_click = launch_callback(entry.target);
    view! {
        <ListItemButton indent=nested on_click=on_click>
            <Icon icon=entry.icon size=IconSize::Sm />
            <span>{entry.label}</span>
        </ListItemButton>
    }
    .into_view()
}

#[component]
fn MyComputerView() -> impl IntoView {
    view! {
        <ListSurface caption="Select an item to open.">
            {my_computer_entries()
                .into_iter()
                .map(|row| match row {
                    ListingRow::Heading { label, icon } => view! {
                        <div class="listing-heading" role="presentation">
                            <Icon icon=icon size=IconSize::Sm />
                            {label}
                        </div>
                    }
                    .into_view(),
                    ListingRow::Entry { entry, nested } => launch_row(entry, nested),
                })
                .collect_view()}
        </ListSurface>
    }
}

#[component]
fn AboutView() -> impl IntoView {
    view! {
        <article class="content-about">
            <header class="content-about-header">
                <div class="content-avatar">
                    <Icon icon=IconName::User size=IconSize::Lg />
                </div>
                <div>
                    <h3>{OWNER_NAME}</h3>
                    <p class="content-tagline">{OWNER_TAGLINE}</p>
                </div>
            </header>
            <h4>"About"</h4>
            {ABOUT_PARAGRAPHS
                .iter()
                .map(|paragraph| view! { <p>{*paragraph}</p> })
                .collect_view()}
        </article>
    }
}

#[component]
fn ProjectsView() -> impl IntoView {
    view! {
        <div class="content-projects">
            {PROJECTS
                .iter()
                .map(|project| {
                    let external = !project.href.starts_with("mailto:");
                    view! {
                        <section class="content-project">
                            <h4>
                                <Icon icon=project.icon size=IconSize::Sm />
                                {project.name}
                            </h4>
                            <p>
                                {project.blurb} " "
                                <a
                                    href=project.href
                                    target=external.then_some("_blank")
                                    rel=external.then_some("noopener noreferrer")
                                >
                                    {project.link_label}
                                </a>
                                "."
                            </p>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn WhyView() -> impl IntoView {
    view! {
        <article class="content-why">
            {WHY_PARAGRAPHS
                .iter()
                .map(|paragraph| view! { <p>{*paragraph}</p> })
                .collect_view()}
        </article>
    }
}

#[component]
fn ContactView() -> impl IntoView {
    view! {
        <div class="content-contact">
            <p>{CONTACT_INTRO}</p>
            <div class="content-contact-links">
                <a class="content-button" href=CONTACT_MAILTO>
                    "Email Ryan"
                </a>
                <a
                    class="content-button"
                    href=LINKEDIN_URL
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "LinkedIn Profile"
                </a>
            </div>
        </div>
    }
}

#[component]
fn EssaysView() -> impl IntoView {
    let selected = create_rw_signal(None::<&'static str>);

    view! {
        <div class="content-essays">
            <ListSurface layout_class="content-essay-list">
                {ESSAYS
                    .iter()
                    .map(|essay| {
                        let id = essay.id;
                        view! {
                            <ListItemButton
                                selected=Signal::derive(move || selected.get() == Some(id))
                                on_click=Callback::new(move |_| selected.set(Some(id)))
                            >
                                <Icon icon=IconName::Document size=IconSize::Sm />
                                <span class="essay-title">{essay.title}</span>
                                <span class="essay-date">
                                    <Icon icon=IconName::Calendar size=IconSize::Xs />
                                    {essay.date}
                                </span>
                                <span class="essay-excerpt">{essay.excerpt}</span>
                            </ListItemButton>
                        }
                    })
                    .collect_view()}
            </ListSurface>
            <div class="content-essay-viewer">
                {move || match selected.get().and_then(content::essay) {
                    Some(essay) => view! { <pre class="content-essay-text">{essay.content}</pre> }
                        .into_view(),
                    None => view! { <p class="content-placeholder">{ESSAY_PLACEHOLDER}</p> }
                        .into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn TextPadView() -> impl IntoView {
    view! {
        <div class="content-textpad">
            {TEXT_PAD_ENTRIES
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    view! {
                        <div class="textpad-entry" data-entry=index>
                            <span class="textpad-date">{entry.date}</span>
                            <span class="textpad-text">{entry.text}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn PhotosView() -> impl IntoView {
    view! {
        <div class="content-photos">
            <div class="content-status">{format!("{} object(s)", PHOTOS.len())}</div>
            <div class="content-photo-grid">
                {PHOTOS
                    .iter()
                    .map(|photo| {
                        view! {
                            <figure class="content-photo" data-photo=photo.id>
                                <img src=photo.src alt=photo.name loading="lazy" />
                                <figcaption>{photo.name}</figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn RecycleBinView() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <ListSurface caption=format!("{} object(s)", content::RECYCLE_BIN.len())>
            {recycle_bin_entries()
                .into_iter()
                .map(|entry| {
                    let document_id = match &entry.target {
                        LaunchTarget::Document(document_id) => Some(document_id.clone()),
                        _ => None,
                    };
                    let selected = Signal::derive(move || {
                        runtime
                            .state
                            .with(|desktop| desktop.active_document.is_some()
                                && desktop.active_document == document_id)
                    });
                    let on_click = launch_callback(entry.target);
                    view! {
                        <ListItemButton selected=selected on_click=on_click>
                            <Icon icon=entry.icon size=IconSize::Sm />
                            <span>{entry.label}</span>
                        </ListItemButton>
                    }
                })
                .collect_view()}
        </ListSurface>
    }
}

#[component]
/// Single-instance viewer for the open recycle-bin document, stacked above every window.
pub(super) fn DocumentViewer() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let document = create_memo(move |_| {
        runtime.state.with(|desktop| {
            desktop
                .active_document
                .as_ref()
                .and_then(content::recycled_document)
                .map(|document| (document, desktop.top_z_index() + 1))
        })
    });
    let close = Callback::new(move |_: MouseEvent| runtime.dispatch_action(DesktopAction::CloseDocument));

    move || {
        document.get().map(|(document, z_index)| {
            let document_id = DocumentId::from(document.id);
            view! {
                <WindowFrame
                    id=format!("document-{}", document_id)
                    layout_class="document-viewer"
                    style=format!("z-index:{z_index};")
                    aria_label=document.name
                    focused=true
                >
                    <WindowTitleBar focused=true>
                        <WindowTitle>
                            <Icon icon=IconName::Document size=IconSize::Xs />
                            <span>{document.name}</span>
                        </WindowTitle>
                        <WindowControls>
                            <WindowControlButton aria_label="Close" on_click=close>
                                <Icon icon=IconName::Close size=IconSize::Xs />
                            </WindowControlButton>
                        </WindowControls>
                    </WindowTitleBar>
                    <WindowBody>
                        <p class="document-meta">{format!("Deleted {}", document.deleted_on)}</p>
                        <pre class="document-text">{document.body}</pre>
                    </WindowBody>
                </WindowFrame>
            }
        })
    }
}
