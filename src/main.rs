use meridian_landing::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("mounting meridian landing page");
    yew::Renderer::<App>::new().render();
}
