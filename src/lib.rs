use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod config;
pub mod pages;

use components::parallax::ParallaxHandle;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! {
            <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; background: #020617; color: #dbeafe;">
                <h1>{"404"}</h1>
                <p>{"This page does not exist."}</p>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    // One controller for the whole page; components reach it through context.
    let parallax = use_memo(|_| ParallaxHandle::new(), ());

    html! {
        <BrowserRouter>
            <ContextProvider<ParallaxHandle> context={(*parallax).clone()}>
                <Switch<Route> render={switch} />
            </ContextProvider<ParallaxHandle>>
        </BrowserRouter>
    }
}
