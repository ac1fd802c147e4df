use crate::components::generator::GeneratorComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-shell">
                <header class="app-header">
                    <h1>{"Content Orchestration Studio"}</h1>
                </header>
                <GeneratorComponent />
            </div>
        }
    }
}
