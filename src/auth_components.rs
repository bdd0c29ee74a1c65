const AUTH_STYLES: &str = r#"
.auth-page {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    background: linear-gradient(135deg, #16213e 0%, #0f3460 100%);
    padding: 100px 20px 40px;
}
.auth-container {
    width: 100%;
    max-width: 420px;
    background: rgba(255, 255, 255, 0.06);
    border-radius: 8px;
    padding: 32px;
    color: #eeeeee;
}
.auth-container h1 {
    color: #ffa500;
    text-align: center;
    margin-bottom: 24px;
}
.auth-container form {
    display: flex;
    flex-direction: column;
    gap: 12px;
}
.auth-container .name-row {
    display: flex;
    gap: 12px;
}
.auth-container .name-row input { flex: 1; width: 100%; }
.auth-container input {
    padding: 10px 12px;
    border: 1px solid rgba(255, 255, 255, 0.3);
    border-radius: 4px;
    background: rgba(255, 255, 255, 0.06);
    color: #eeeeee;
}
.auth-container button[type="submit"] {
    margin-top: 12px;
    padding: 12px;
    background: #ffa500;
    color: #fff;
    border: none;
    border-radius: 4px;
    font-size: 1rem;
    cursor: pointer;
}
.auth-redirect { margin-top: 16px; text-align: center; }
.auth-redirect a { color: #ffa500; }
"#;

pub mod login {
    use yew::prelude::*;
    use web_sys::HtmlInputElement;
    use gloo_net::http::Request;
    use serde::{Deserialize, Serialize};
    use yew_router::prelude::*;
    use crate::Route;
    use crate::config;
    use gloo_console::log;

    #[derive(Serialize)]
    pub struct LoginRequest {
        email: String,
        password: String,
    }
    #[derive(Deserialize)]
    pub struct LoginResponse {
        token: String,
    }
    #[derive(Deserialize)]
    struct ErrorResponse {
        error: String,
    }

    #[function_component]
    pub fn Login() -> Html {
        let email = use_state(String::new);
        let password = use_state(String::new);
        let error = use_state(|| None::<String>);
        let success = use_state(|| None::<String>);

        let onsubmit = {
            let email = email.clone();
            let password = password.clone();
            let error_setter = error.clone();
            let success_setter = success.clone();

            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                let email = (*email).clone();
                let password = (*password).clone();
                let error_setter = error_setter.clone();
                let success_setter = success_setter.clone();

                wasm_bindgen_futures::spawn_local(async move {
                    match Request::post(&format!("{}/api/login", config::get_backend_url()))
                        .json(&LoginRequest { email, password })
                        .unwrap()
                        .send()
                        .await
                    {
                        Ok(response) => {
                            if response.ok() {
                                log!("Login request successful, parsing response...");
                                match response.json::<LoginResponse>().await {
                                    Ok(resp) => {
                                        let window = web_sys::window().unwrap();
                                        if let Ok(Some(storage)) = window.local_storage() {
                                            if storage.set_item("token", &resp.token).is_ok() {
                                                error_setter.set(None);
                                                success_setter.set(Some("Login successful! Redirecting...".to_string()));

                                                let window_clone = window.clone();
                                                wasm_bindgen_futures::spawn_local(async move {
                                                    gloo_timers::future::TimeoutFuture::new(1_000).await;
                                                    let _ = window_clone.location().set_href("/");
                                                });
                                            }
                                        }
                                    }
                                    Err(e) => {
                                        log!("Error parsing login response:", e.to_string());
                                        error_setter.set(Some("Failed to parse server response".to_string()));
                                    }
                                }
                            } else {
                                log!("Login request failed with status:", response.status());
                                match response.json::<ErrorResponse>().await {
                                    Ok(error_response) => {
                                        error_setter.set(Some(error_response.error));
                                    }
                                    Err(_) => {
                                        error_setter.set(Some("Login failed".to_string()));
                                    }
                                }
                            }
                        }
                        Err(e) => {
                            log!("Network request failed:", e.to_string());
                            error_setter.set(Some(format!("Request failed: {}", e)));
                        }
                    }
                });
            })
        };

        html! {
        <div class="auth-page">
            <div class="auth-container">
                <h1>{"Welcome back!"}</h1>
                {
                    if let Some(error_message) = (*error).as_ref() {
                        html! {
                            <div class="error-message" style="color: red; margin-bottom: 10px;">
                                {error_message}
                            </div>
                        }
                    } else if let Some(success_message) = (*success).as_ref() {
                        html! {
                            <div class="success-message" style="color: green; margin-bottom: 10px;">
                                {success_message}
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <form onsubmit={onsubmit}>
                    <input
                        type="email"
                        placeholder="Email Address"
                        onchange={let email = email.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        }}
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        onchange={let password = password.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            password.set(input.value());
                        }}
                    />
                    <button type="submit">{"Login"}</button>
                </form>
                <div class="auth-redirect">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::Register}>
                        {"Create account"}
                    </Link<Route>>
                </div>
                <style>{super::AUTH_STYLES}</style>
            </div>
        </div>
        }
    }
}

pub mod register {
    use yew::prelude::*;
    use web_sys::HtmlInputElement;
    use gloo_net::http::Request;
    use serde::{Deserialize, Serialize};
    use yew_router::prelude::*;
    use crate::Route;
    use crate::config;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RegisterRequest {
        first_name: String,
        last_name: String,
        email: String,
        password: String,
        confirm_password: String,
    }

    #[derive(Deserialize)]
    pub struct RegisterResponse {
        message: String,
    }

    #[derive(Deserialize)]
    pub struct ErrorResponse {
        error: String,
    }

    #[function_component]
    pub fn Register() -> Html {
        let first_name = use_state(String::new);
        let last_name = use_state(String::new);
        let email = use_state(String::new);
        let password = use_state(String::new);
        let confirm_password = use_state(String::new);
        let error = use_state(|| None::<String>);
        let success = use_state(|| None::<String>);

        let onsubmit = {
            let first_name = first_name.clone();
            let last_name = last_name.clone();
            let email = email.clone();
            let password = password.clone();
            let confirm_password = confirm_password.clone();
            let error_setter = error.clone();
            let success_setter = success.clone();

            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                let first_name = (*first_name).clone();
                let last_name = (*last_name).clone();
                let email = (*email).clone();
                let password = (*password).clone();
                let confirm_password = (*confirm_password).clone();
                let error_setter = error_setter.clone();
                let success_setter = success_setter.clone();

                // The backend re-checks both of these; failing early just
                // saves a round trip.
                if password.len() < 8 {
                    error_setter.set(Some("Password must be at least 8 characters".to_string()));
                    return;
                }
                if password != confirm_password {
                    error_setter.set(Some("Passwords do not match".to_string()));
                    return;
                }

                wasm_bindgen_futures::spawn_local(async move {
                    match Request::post(&format!("{}/api/register", config::get_backend_url()))
                        .json(&RegisterRequest {
                            first_name,
                            last_name,
                            email,
                            password,
                            confirm_password,
                        })
                        .unwrap()
                        .send()
                        .await
                    {
                        Ok(resp) => {
                            if resp.ok() {
                                match resp.json::<RegisterResponse>().await {
                                    Ok(success_response) => {
                                        error_setter.set(None);
                                        success_setter.set(Some(success_response.message));

                                        let window = web_sys::window().unwrap();
                                        let window_clone = window.clone();
                                        wasm_bindgen_futures::spawn_local(async move {
                                            gloo_timers::future::TimeoutFuture::new(2_000).await;
                                            let _ = window_clone.location().set_href("/login");
                                        });
                                    }
                                    Err(_) => {
                                        error_setter.set(Some("Failed to parse server response".to_string()));
                                    }
                                }
                            } else {
                                match resp.json::<ErrorResponse>().await {
                                    Ok(error_response) => {
                                        error_setter.set(Some(error_response.error));
                                    }
                                    Err(_) => {
                                        error_setter.set(Some("An unknown error occurred".to_string()));
                                    }
                                }
                            }
                        }
                        Err(e) => {
                            error_setter.set(Some(format!("Request failed: {}", e)));
                        }
                    }
                });
            })
        };

        html! {
        <div class="auth-page">
            <div class="auth-container">
                <h1>{"Sign up!"}</h1>
                {
                    if let Some(error_message) = (*error).as_ref() {
                        html! {
                            <div class="error-message" style="color: red; margin-bottom: 10px;">
                                {error_message}
                            </div>
                        }
                    } else if let Some(success_message) = (*success).as_ref() {
                        html! {
                            <div class="success-message" style="color: green; margin-bottom: 10px;">
                                {success_message}
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <form onsubmit={onsubmit}>
                    <div class="name-row">
                        <input
                            type="text"
                            placeholder="First name"
                            onchange={let first_name = first_name.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                first_name.set(input.value());
                            }}
                        />
                        <input
                            type="text"
                            placeholder="Last name"
                            onchange={let last_name = last_name.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                last_name.set(input.value());
                            }}
                        />
                    </div>
                    <input
                        type="email"
                        placeholder="Enter your email"
                        onchange={let email = email.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        }}
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        onchange={let password = password.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            password.set(input.value());
                        }}
                    />
                    <input
                        type="password"
                        placeholder="Confirm password"
                        onchange={let confirm_password = confirm_password.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            confirm_password.set(input.value());
                        }}
                    />
                    <button type="submit">{"Register"}</button>
                </form>
                <div class="auth-redirect">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login}>
                        {"Login here"}
                    </Link<Route>>
                </div>
                <style>{super::AUTH_STYLES}</style>
            </div>
        </div>
        }
    }
}
