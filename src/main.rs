use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{window, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod auth_components;
mod order {
    pub mod draft;
    pub mod pricing;
    pub mod validate;
    pub mod wizard;
}
mod components {
    pub mod order_history;
    pub mod order_wizard;
}
mod pages {
    pub mod dashboard;
    pub mod faq;
    pub mod home;
}

use pages::{
    dashboard::Dashboard,
    home::{is_logged_in, Home},
};

use auth_components::{login::Login, register::Register};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Login => {
            info!("Rendering Login page");
            html! { <Login /> }
        }
        Route::Register => {
            info!("Rendering Register page");
            html! { <Register /> }
        }
        Route::Dashboard => {
            info!("Rendering Dashboard page");
            html! { <Dashboard /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub logged_in: bool,
    pub on_logout: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { logged_in, on_logout } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 80);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let handle_logout = {
        let on_logout = on_logout.clone();
        Callback::from(move |_| {
            on_logout.emit(());
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Brilliant Essays"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Dashboard} classes="nav-link">
                            {"Place Order"}
                        </Link<Route>>
                    </div>
                    {
                        if *logged_in {
                            html! {
                                <button onclick={
                                    let close = close_menu.clone();
                                    let logout = handle_logout.clone();
                                    Callback::from(move |e: MouseEvent| {
                                        close.emit(e);
                                        logout.emit(());
                                    })
                                } class="nav-logout-button">
                                    {"Logout"}
                                </button>
                            }
                        } else {
                            html! {
                                <>
                                    <div onclick={close_menu.clone()}>
                                        <Link<Route> to={Route::Login} classes="nav-link">
                                            {"Login"}
                                        </Link<Route>>
                                    </div>
                                    <div onclick={close_menu.clone()}>
                                        <Link<Route> to={Route::Register} classes="nav-login-button">
                                            {"Get Started"}
                                        </Link<Route>>
                                    </div>
                                </>
                            }
                        }
                    }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 10;
                    padding: 16px 8%;
                    transition: background 0.2s ease;
                }
                .top-nav.scrolled {
                    background: #0f3460;
                    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.3);
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    color: #ffa500;
                    font-size: 1.3rem;
                    font-weight: 700;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 24px;
                }
                .nav-link { color: #eeeeee; text-decoration: none; }
                .nav-link:hover { color: #ffa500; }
                .nav-login-button {
                    padding: 8px 20px;
                    background: #ffa500;
                    color: #fff;
                    border-radius: 4px;
                    text-decoration: none;
                }
                .nav-logout-button {
                    background: none;
                    border: 1px solid #ffa500;
                    color: #ffa500;
                    padding: 8px 20px;
                    border-radius: 4px;
                    cursor: pointer;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #eeeeee;
                }
                @media (max-width: 600px) {
                    .burger-menu { display: flex; }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 56px;
                        right: 8%;
                        flex-direction: column;
                        background: #0f3460;
                        padding: 16px;
                        border-radius: 4px;
                    }
                    .nav-right.mobile-menu-open { display: flex; }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let logged_in = use_state(is_logged_in);
    let handle_logout = {
        Callback::from(move |_| {
            if let Some(window) = window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item("token");
                    // Reload the page to reflect the logged out state
                    let _ = window.location().reload();
                }
            }
        })
    };

    html! {
        <BrowserRouter>
            <Nav logged_in={*logged_in} on_logout={handle_logout} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
