//! Clickable file drop zone bound to one `<input type="file">` of the form.
//!
//! The input stays inside the surrounding `<form>` so the file is picked up by
//! `FormData` when the form is submitted. Once a file is chosen the zone shows
//! its name and switches to the `has-file` style.

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UploadZoneProps {
    /// Multipart field name of the file input.
    pub name: AttrValue,
    pub label: AttrValue,
    #[prop_or(AttrValue::from("image/*"))]
    pub accept: AttrValue,
}

pub enum Msg {
    OpenPicker,
    FileChosen(Option<String>),
}

pub struct UploadZone {
    input_ref: NodeRef,
    file_name: Option<String>,
}

impl Component for UploadZone {
    type Message = Msg;
    type Properties = UploadZoneProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            input_ref: NodeRef::default(),
            file_name: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OpenPicker => {
                if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
                    input.click();
                }
                false
            }
            Msg::FileChosen(name) => {
                self.file_name = name;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let class = classes!("upload-zone", self.file_name.is_some().then_some("has-file"));

        html! {
            <div class={class} onclick={link.callback(|_: MouseEvent| Msg::OpenPicker)}>
                <input
                    type="file"
                    name={props.name.clone()}
                    accept={props.accept.clone()}
                    ref={self.input_ref.clone()}
                    style="display: none;"
                    // The programmatic click bubbles back to the zone otherwise.
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                    onchange={link.callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        let name = input.files().and_then(|files| files.get(0)).map(|file| file.name());
                        Msg::FileChosen(name)
                    })}
                />
                <i class="material-icons">{"cloud_upload"}</i>
                <span class="upload-label">{ props.label.clone() }</span>
                {
                    match &self.file_name {
                        Some(name) => html! { <span class="upload-file-name">{ name.clone() }</span> },
                        None => html! { <span class="upload-hint">{"Click to choose a file"}</span> },
                    }
                }
            </div>
        }
    }
}
