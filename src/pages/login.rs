//! Login page
//!
//! Sign in / sign up with a one-time code step. There is no account
//! backend in this build: credentials are checked for shape only, the
//! code is delivered to the application log, and any complete code
//! verifies. Sign in lands on the buyer dashboard; sign up continues
//! into onboarding.

use std::time::Duration;

use dioxus::prelude::*;
use procura_core::{code_complete, CredentialCheck, OtpChallenge, OTP_LEN};
use procura_ui::{Button, ButtonVariant, CodeBox, Input, SuccessDialog};

use crate::app::Route;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    SignIn,
    SignUp,
}

#[derive(Clone, Copy, PartialEq)]
enum Phase {
    Credentials,
    Code,
    Done,
}

#[component]
pub fn Login() -> Element {
    let navigator = use_navigator();

    let mut tab = use_signal(|| Tab::SignIn);
    let mut phase = use_signal(|| Phase::Credentials);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut cred_error = use_signal(|| None::<&'static str>);
    let mut challenge = use_signal(|| None::<OtpChallenge>);
    let mut digits = use_signal(|| vec![String::new(); OTP_LEN]);
    let mut code_error = use_signal(|| None::<&'static str>);
    let mut now = use_signal(|| chrono::Utc::now().timestamp());

    // Tick the clock while the code screen is up so the resend
    // countdown moves without user input.
    use_effect(move || {
        if phase() == Phase::Code {
            spawn(async move {
                loop {
                    tokio::time::sleep(Duration::from_secs(1)).await;
                    if phase() != Phase::Code {
                        break;
                    }
                    now.set(chrono::Utc::now().timestamp());
                }
            });
        }
    });

    let submit_credentials = move |_| {
        // the login path has no confirm field, so the password stands in
        let confirm_value = match tab() {
            Tab::SignIn => password(),
            Tab::SignUp => confirm(),
        };
        let check = CredentialCheck::evaluate(&email(), &password(), &confirm_value);
        match check.first_issue() {
            Some(issue) => cred_error.set(Some(issue)),
            None => {
                cred_error.set(None);
                challenge.set(Some(OtpChallenge::issue(&email())));
                digits.set(vec![String::new(); OTP_LEN]);
                code_error.set(None);
                now.set(chrono::Utc::now().timestamp());
                phase.set(Phase::Code);
            }
        }
    };

    let verify = move |_| {
        if code_complete(&digits()) {
            code_error.set(None);
            phase.set(Phase::Done);
        } else {
            code_error.set(Some("Enter all six digits"));
        }
    };

    let resend = move |_| {
        let now_ts = chrono::Utc::now().timestamp();
        if let Some(ch) = challenge() {
            if ch.resend_available(now_ts) {
                challenge.set(Some(OtpChallenge::issue(&ch.destination)));
                digits.set(vec![String::new(); OTP_LEN]);
                code_error.set(None);
                now.set(now_ts);
            }
        }
    };

    let change_email = move |_| {
        challenge.set(None);
        digits.set(vec![String::new(); OTP_LEN]);
        code_error.set(None);
        phase.set(Phase::Credentials);
    };

    let signing_in = tab() == Tab::SignIn;
    let headline = if signing_in { "Welcome back" } else { "Join Procura" };
    let continue_label = if signing_in { "Continue" } else { "Create account" };
    let done_title = if signing_in { "Signed in" } else { "Account created" };
    let seconds_left = challenge()
        .map(|ch| ch.seconds_until_resend(now()))
        .unwrap_or(0);
    let destination = challenge()
        .map(|ch| ch.destination)
        .unwrap_or_default();

    let body = match phase() {
        Phase::Credentials => rsx! {
            div { class: "login-tabs",
                button {
                    class: if signing_in { "login-tab active" } else { "login-tab" },
                    onclick: move |_| {
                        tab.set(Tab::SignIn);
                        cred_error.set(None);
                    },
                    "Sign in"
                }
                button {
                    class: if signing_in { "login-tab" } else { "login-tab active" },
                    onclick: move |_| {
                        tab.set(Tab::SignUp);
                        cred_error.set(None);
                    },
                    "Create account"
                }
            }

            h1 { class: "wizard-title", "{headline}" }

            Input {
                label: Some("Work email".to_string()),
                input_type: "email",
                placeholder: Some("ana@hotelmar.com".to_string()),
                value: email(),
                oninput: move |v: String| email.set(v),
            }
            Input {
                label: Some("Password".to_string()),
                input_type: "password",
                placeholder: Some("At least 8 characters".to_string()),
                value: password(),
                oninput: move |v: String| password.set(v),
            }
            if !signing_in {
                Input {
                    label: Some("Confirm password".to_string()),
                    input_type: "password",
                    value: confirm(),
                    oninput: move |v: String| confirm.set(v),
                }
            }

            if let Some(err) = cred_error() {
                span { class: "input-error-text", "{err}" }
            }

            div { class: "form-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: submit_credentials,
                    "{continue_label}"
                }
            }

            p { class: "login-footer muted",
                "Demo build: the verification code is written to the application log."
            }
        },
        Phase::Code => rsx! {
            h1 { class: "wizard-title", "Check your inbox" }
            p { class: "wizard-sub", "We sent a 6-digit code to {destination}." }

            div { class: "code-row",
                for i in 0..OTP_LEN {
                    CodeBox {
                        value: digits()[i].clone(),
                        index: i,
                        oninput: move |v: String| {
                            digits.write()[i] = v;
                            code_error.set(None);
                        },
                    }
                }
            }

            if let Some(err) = code_error() {
                span { class: "input-error-text", "{err}" }
            }

            div { class: "form-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: verify,
                    "Verify"
                }
            }

            div { class: "resend-row",
                if seconds_left > 0 {
                    span { class: "muted", "Resend code in {seconds_left}s" }
                } else {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: resend,
                        "Resend code"
                    }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: change_email,
                    "Use a different email"
                }
            }
        },
        Phase::Done => rsx! {
            SuccessDialog {
                show: true,
                title: "{done_title}",
                message: "You're verified. This demo drops you straight into the product preview.",
                action_label: "Take me there",
                on_action: move |_| {
                    match tab() {
                        Tab::SignIn => navigator.push(Route::BuyerDashboard {}),
                        Tab::SignUp => navigator.push(Route::BecomeABuyer {}),
                    };
                },
            }
        },
    };

    rsx! {
        div { class: "login-page",
            div { class: "login-card", {body} }
        }
    }
}
