use std::rc::Rc;

use investor_deck::app::{App, AppProps};
use investor_deck::state::store::BrowserStore;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("starting deck");
    yew::Renderer::<App>::with_props(AppProps {
        store: Rc::new(BrowserStore),
    })
    .render();
}
