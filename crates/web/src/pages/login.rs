// =============================================================================
// SkillBridge Web - Sign In / Register Pages
// =============================================================================

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::{ErrorDisplay, Logo, LogoSize, SiteNav, TextInput};
use crate::state::AppState;
use crate::utils::{is_valid_email, is_valid_password, MIN_PASSWORD_LEN};

const AFTER_AUTH_ROUTE: &str = "/jobs";

/// Sign-in page.
#[component]
pub fn SignInPage() -> impl IntoView {
    view! { <AuthForm register=false /> }
}

/// Account creation page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! { <AuthForm register=true /> }
}

/// Email/password form shared by sign-in and sign-up.
#[component]
fn AuthForm(register: bool) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<String>::None);

    let (title, heading, submit_label) = if register {
        ("Create Account | SkillBridge", "Create your account", "Create Account")
    } else {
        ("Sign In | SkillBridge", "Welcome back", "Sign In")
    };

    view! {
        <Title text=title />
        <div class="page page-login">
            <SiteNav />

            <div class="login-container">
                <div class="login-card">
                    <div class="login-header">
                        <Logo size=LogoSize::Lg show_text=false />
                        <h1 class="login-title">{heading}</h1>
                    </div>

                    <form class="login-form" on:submit=|e| e.prevent_default()>
                        {move || error.get().map(|message| view! {
                            <ErrorDisplay
                                message=message
                                on_dismiss=Callback::new(move |_| error.set(None))
                            />
                        })}
                        {move || notice.get().map(|message| view! {
                            <div class="form-notice">{message}</div>
                        })}

                        <TextInput
                            value=email
                            label="Email"
                            input_type="email"
                            placeholder="you@example.com"
                            required=true
                        />
                        <TextInput
                            value=password
                            label="Password"
                            input_type="password"
                            placeholder="••••••••"
                            required=true
                        />

                        <button
                            type="button"
                            class="btn btn-primary btn-block"
                            disabled=move || loading.get()
                            on:click=move |_| {
                                let email_val = email.get().trim().to_string();
                                let password_val = password.get();

                                if !is_valid_email(&email_val) {
                                    error.set(Some("Please enter a valid email address".to_string()));
                                    return;
                                }
                                if !is_valid_password(&password_val) {
                                    error.set(Some(format!(
                                        "Password must be at least {} characters",
                                        MIN_PASSWORD_LEN
                                    )));
                                    return;
                                }

                                loading.set(true);
                                error.set(None);
                                notice.set(None);

                                let app_state = app_state.clone();
                                let nav = navigate.clone();
                                spawn_local(async move {
                                    let client = app_state.client_for(None);
                                    let result = if register {
                                        api::sign_up(&client, &email_val, &password_val).await
                                    } else {
                                        api::sign_in(&client, &email_val, &password_val).await.map(Some)
                                    };

                                    loading.set(false);

                                    match result {
                                        Ok(Some(session)) => {
                                            log::info!("Signed in as {}", session.user_id());
                                            app_state.login(session);
                                            nav(AFTER_AUTH_ROUTE, Default::default());
                                        }
                                        Ok(None) => {
                                            notice.set(Some(
                                                "Check your email to confirm your account, then sign in.".to_string(),
                                            ));
                                        }
                                        Err(e) => {
                                            log::warn!("Authentication failed: {}", e);
                                            error.set(Some(e.to_string()));
                                        }
                                    }
                                });
                            }
                        >
                            {move || if loading.get() { "Please wait..." } else { submit_label }}
                        </button>
                    </form>

                    <p class="login-switch">
                        {if register {
                            view! { <span>"Already have an account? " <a href="/login">"Sign in"</a></span> }.into_any()
                        } else {
                            view! { <span>"New to SkillBridge? " <a href="/register">"Create an account"</a></span> }.into_any()
                        }}
                    </p>
                </div>
            </div>
        </div>
    }
}
