//! View rendering for the generation form.
//!
//! Left column: the multipart form with its two upload zones. Right column: a
//! tab bar switching between the result panel and the log console.

use common::model::log::LogEntry;
use common::model::media::MediaElement;
use common::requests::fields;
use web_sys::{FormData, HtmlFormElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::upload_zone::UploadZone;

use super::messages::{Msg, Tab};
use super::state::GeneratorComponent;

const PLATFORMS: [(&str, &str); 6] = [
    ("X", "X (Twitter)"),
    ("LINKEDIN", "LinkedIn"),
    ("INSTAGRAM", "Instagram"),
    ("TIKTOK", "TikTok"),
    ("FACEBOOK", "Facebook"),
    ("YOUTUBE", "YouTube"),
];

const INTENTS: [(&str, &str); 4] = [
    ("DEFAULT", "Default"),
    ("ORGANIC_PROMOTION", "Organic promotion"),
    ("PAID_AD", "Paid ad"),
    ("PHOTO_CAROUSEL", "Photo carousel"),
];

const MEDIA_CHOICES: [(&str, &str); 4] = [
    ("image", "Image"),
    ("video", "Video"),
    ("photo_carousel", "Photo carousel"),
    ("text_only", "Text only"),
];

pub fn view(component: &GeneratorComponent, ctx: &Context<GeneratorComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="studio-root">
            { build_form(component, link) }
            <section class="output-column">
                { build_tab_bar(component, link) }
                {
                    match component.active_tab {
                        Tab::Result => build_result_tab(component, link),
                        Tab::Logs => build_logs_tab(component),
                    }
                }
            </section>
        </div>
    }
}

/// The snapshot is taken synchronously in the submit handler, so files chosen
/// afterwards are not part of the request.
fn build_form(component: &GeneratorComponent, link: &Scope<GeneratorComponent>) -> Html {
    let form_ref = component.form_ref.clone();
    let onsubmit = link.batch_callback(move |e: SubmitEvent| {
        e.prevent_default();
        form_ref
            .cast::<HtmlFormElement>()
            .and_then(|form| FormData::new_with_form(&form).ok())
            .map(Msg::Submit)
    });
    let busy = component.panel.trigger_busy;

    html! {
        <form class="generator-form" ref={component.form_ref.clone()} {onsubmit}>
            { select_field(fields::PLATFORM, "Platform", &PLATFORMS) }
            { select_field(fields::INTENT, "Intent", &INTENTS) }
            { select_field(fields::USER_MEDIA_CHOICE, "Media type", &MEDIA_CHOICES) }
            { text_area(fields::CONTENT_IDEA, "Content idea", true) }
            { text_area(fields::DESCRIPTION, "Description", true) }
            { text_area(fields::REFERENCE_TEXT, "Reference text", false) }

            <div class="upload-row">
                <UploadZone name={fields::REFERENCE_IMAGE} label="Reference image" />
                <UploadZone name={fields::VIDEO_INIT_IMAGE} label="Video initial frame" />
            </div>

            <div class="form-actions">
                <button
                    type="submit"
                    class={classes!("generate-btn", busy.then_some("loading"))}
                    disabled={busy}
                    aria-busy={busy.to_string()}
                >
                    { if busy { "Generating..." } else { "Generate Content" } }
                </button>
                {
                    if busy {
                        html! {
                            <button type="button" class="cancel-btn" onclick={link.callback(|_| Msg::Cancel)}>
                                {"Cancel"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </form>
    }
}

fn select_field(name: &'static str, label: &'static str, options: &[(&'static str, &'static str)]) -> Html {
    html! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select {name}>
                { for options.iter().map(|(value, text)| html! { <option value={*value}>{*text}</option> }) }
            </select>
        </label>
    }
}

fn text_area(name: &'static str, label: &'static str, required: bool) -> Html {
    html! {
        <label class="field">
            <span class="field-label">{label}</span>
            <textarea {name} {required} rows={3} />
        </label>
    }
}

fn build_tab_bar(component: &GeneratorComponent, link: &Scope<GeneratorComponent>) -> Html {
    let tab_button = |tab: Tab, label: &'static str| {
        html! {
            <button
                type="button"
                class={classes!("tab-btn", (component.active_tab == tab).then_some("active"))}
                onclick={link.callback(move |_| Msg::SetTab(tab))}
            >
                {label}
            </button>
        }
    };

    html! {
        <div class="tab-bar">
            { tab_button(Tab::Result, "Result") }
            { tab_button(Tab::Logs, "Logs") }
        </div>
    }
}

fn build_result_tab(component: &GeneratorComponent, link: &Scope<GeneratorComponent>) -> Html {
    let panel = &component.panel;
    let result_style = if panel.result_visible { "" } else { "display: none;" };

    html! {
        <div class="tab-content result-tab">
            {
                if panel.empty_state_visible {
                    html! {
                        <div class="empty-state">
                            <i class="material-icons">{ if panel.trigger_busy { "hourglass_top" } else { "auto_awesome" } }</i>
                            <p>{ if panel.trigger_busy { "Generating your content..." } else { "Your generated content will appear here." } }</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="result-content" style={result_style}>
                <div class="result-text-header">
                    <h3>{"Generated Text"}</h3>
                    <button type="button" class="copy-btn" onclick={link.callback(|_| Msg::CopyResult)}>
                        { component.copy_label.text().to_string() }
                    </button>
                </div>
                <pre class="result-text">{ panel.text.clone().unwrap_or_default() }</pre>
                <h3>{"Generated Media"}</h3>
                <div class="media-container">
                    { for panel.media.iter().map(media_element) }
                </div>
            </div>
        </div>
    }
}

fn media_element(element: &MediaElement) -> Html {
    match element {
        MediaElement::Placeholder(text) => html! { <p class="media-placeholder">{*text}</p> },
        MediaElement::Image { src } => html! {
            <img class="generated-media" src={src.clone()} alt="Generated media" />
        },
        MediaElement::Video { src, playback } => html! {
            <video
                class="generated-media"
                src={src.clone()}
                controls={playback.controls}
                autoplay={playback.autoplay}
                loop={playback.looping}
            />
        },
    }
}

fn build_logs_tab(component: &GeneratorComponent) -> Html {
    html! {
        <div class="tab-content log-console">
            { for component.panel.logs.entries().iter().map(log_line) }
        </div>
    }
}

fn log_line(entry: &LogEntry) -> Html {
    html! {
        <div class={classes!("log-entry", format!("log-{}", entry.level.as_str()))}>
            <span class="log-time">{ format!("[{}]", entry.time_label()) }</span>
            <span class="log-message">{ entry.message.clone() }</span>
        </div>
    }
}
