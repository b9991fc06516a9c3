//! The ActivityBoard component: renders the directory into cards plus a
//! signup form, and funnels every mutation back through a full reload.

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::captcha;
use crate::model::ActivityDirectory;

/// Public test site key paired with the service's demo verification secret.
const RECAPTCHA_SITE_KEY: &str = "6LeIxAcTAAAAAJcZVRqyHh71UMIEGNQ_MXjiZKhI";

/// Every notice disappears on its own after this long.
pub const NOTICE_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// A transient user-facing message above the signup form.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Notice {
        Notice {
            text: text.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Notice {
        Notice {
            text: text.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Confirmation wording for the destructive removal action.
pub fn removal_prompt(activity: &str, email: &str) -> String {
    format!("Remove {email} from {activity}?")
}

enum DirectoryView {
    Loading,
    Ready(ActivityDirectory),
    Failed,
}

fn show_notice(slot: &UseStateHandle<Option<Notice>>, notice: Notice) {
    slot.set(Some(notice));
    let slot = slot.clone();
    Timeout::new(NOTICE_DISMISS_MS, move || slot.set(None)).forget();
}

#[function_component(ActivityBoard)]
pub fn activity_board() -> Html {
    let directory = use_state(|| DirectoryView::Loading);
    let notice = use_state(|| None::<Notice>);
    let email = use_state(String::new);
    let selected = use_state(String::new);

    // One guard per mutating action type; a second trigger while the first
    // request is in flight is dropped.
    let signup_inflight = use_mut_ref(|| false);
    let removal_inflight = use_mut_ref(|| false);

    let load_directory = {
        let directory = directory.clone();
        Callback::from(move |_: ()| {
            let directory = directory.clone();
            spawn_local(async move {
                match api::fetch_directory().await {
                    Ok(dir) => directory.set(DirectoryView::Ready(dir)),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Error fetching activities: {e}").into(),
                        );
                        directory.set(DirectoryView::Failed);
                    }
                }
            });
        })
    };

    // Initial load.
    {
        let load_directory = load_directory.clone();
        use_effect_with((), move |_| {
            load_directory.emit(());
            || ()
        });
    }

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_activity_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            selected.set(sel.value());
        })
    };

    let on_signup = {
        let email = email.clone();
        let selected = selected.clone();
        let notice = notice.clone();
        let signup_inflight = signup_inflight.clone();
        let load_directory = load_directory.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Checked before anything goes on the wire.
            let token = captcha::response_token();
            if token.is_empty() {
                show_notice(&notice, Notice::error("Please complete the CAPTCHA."));
                return;
            }
            if *signup_inflight.borrow() {
                return;
            }
            *signup_inflight.borrow_mut() = true;

            let activity = (*selected).clone();
            let address = (*email).clone();
            let email = email.clone();
            let selected = selected.clone();
            let notice = notice.clone();
            let signup_inflight = signup_inflight.clone();
            let load_directory = load_directory.clone();
            spawn_local(async move {
                match api::signup(&activity, &address, &token).await {
                    Ok(message) => {
                        show_notice(&notice, Notice::success(message));
                        email.set(String::new());
                        selected.set(String::new());
                        captcha::reset_widget();
                        load_directory.emit(());
                    }
                    Err(ApiError::Rejected(detail)) => {
                        show_notice(&notice, Notice::error(detail));
                    }
                    Err(ApiError::Transport(reason)) => {
                        web_sys::console::error_1(&format!("Error signing up: {reason}").into());
                        show_notice(&notice, Notice::error("Failed to sign up. Please try again."));
                    }
                }
                *signup_inflight.borrow_mut() = false;
            });
        })
    };

    // Single dispatcher for every removal control; each rendered entry
    // stamps its (activity, email) pair and emits it here.
    let on_remove = {
        let removal_inflight = removal_inflight.clone();
        let load_directory = load_directory.clone();
        Callback::from(move |(activity, email): (String, String)| {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message(&removal_prompt(&activity, &email))
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            if *removal_inflight.borrow() {
                return;
            }
            *removal_inflight.borrow_mut() = true;

            let removal_inflight = removal_inflight.clone();
            let load_directory = load_directory.clone();
            spawn_local(async move {
                match api::remove_participant(&activity, &email).await {
                    Ok(()) => load_directory.emit(()),
                    Err(e) => {
                        // Console-only; removals have no user-facing notice.
                        web_sys::console::error_1(
                            &format!("Failed to remove participant: {e}").into(),
                        );
                    }
                }
                *removal_inflight.borrow_mut() = false;
            });
        })
    };

    let activity_names: Vec<String> = match &*directory {
        DirectoryView::Ready(dir) => dir.keys().cloned().collect(),
        // Load failure degrades the select to its placeholder, same as the
        // list surface.
        _ => Vec::new(),
    };

    let list = match &*directory {
        DirectoryView::Loading => html! { <p>{ "Loading activities..." }</p> },
        DirectoryView::Failed => {
            html! { <p>{ "Failed to load activities. Please try again later." }</p> }
        }
        DirectoryView::Ready(dir) => html! {
            { for dir.iter().map(|(name, details)| {
                let participants = if details.participants.is_empty() {
                    html! { <p class="no-participants">{ "No participants yet" }</p> }
                } else {
                    html! {
                        <ul class="participants-list">
                            { for details.participants.iter().map(|p| {
                                let on_remove = on_remove.clone();
                                let pair = (name.clone(), p.clone());
                                html! {
                                    <li>
                                        { p.clone() }
                                        <span
                                            class="remove-participant"
                                            data-activity={name.clone()}
                                            data-email={p.clone()}
                                            onclick={Callback::from(move |_: MouseEvent| {
                                                on_remove.emit(pair.clone());
                                            })}
                                        >{ "\u{00d7}" }</span>
                                    </li>
                                }
                            }) }
                        </ul>
                    }
                };

                html! {
                    <div class="activity-card" key={name.clone()}>
                        <h4>{ name.clone() }</h4>
                        <p>{ details.description.clone() }</p>
                        <p><strong>{ "Schedule: " }</strong>{ details.schedule.clone() }</p>
                        <p>
                            <strong>{ "Availability: " }</strong>
                            { format!("{} spots left", details.spots_left()) }
                        </p>
                        <p><strong>{ "Participants:" }</strong></p>
                        { participants }
                    </div>
                }
            }) }
        },
    };

    let notice_block = if let Some(n) = &*notice {
        html! { <div id="message" class={n.kind.css_class()}>{ n.text.clone() }</div> }
    } else {
        html! {}
    };

    html! {
        <div class="wrap">
            <header>
                <h1>{ "Mergington High School" }</h1>
                <p>{ "Extracurricular Activities" }</p>
            </header>

            <section id="signup-container">
                <h3>{ "Sign Up for an Activity" }</h3>
                { notice_block }
                <form id="signup-form" onsubmit={on_signup}>
                    <label for="email">{ "Student Email" }</label>
                    <input
                        id="email"
                        type="email"
                        required={true}
                        placeholder="your-email@mergington.edu"
                        value={(*email).clone()}
                        oninput={on_email_input}
                    />
                    <label for="activity">{ "Activity" }</label>
                    <select id="activity" required={true} onchange={on_activity_change}>
                        <option value="" selected={selected.is_empty()}>
                            { "-- Select an activity --" }
                        </option>
                        { for activity_names.iter().map(|name| html! {
                            <option value={name.clone()} selected={*selected == *name}>
                                { name.clone() }
                            </option>
                        }) }
                    </select>
                    <div class="g-recaptcha" data-sitekey={RECAPTCHA_SITE_KEY}></div>
                    <button type="submit">{ "Sign Up" }</button>
                </form>
            </section>

            <section id="activities-container">
                <h3>{ "Current Activities" }</h3>
                <div id="activities-list">
                    { list }
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_kinds_map_to_their_css_classes() {
        assert_eq!(Notice::success("Signed up!").kind.css_class(), "success");
        assert_eq!(Notice::error("nope").kind.css_class(), "error");
    }

    #[test]
    fn removal_prompt_names_both_parties() {
        assert_eq!(
            removal_prompt("Chess Club", "daniel@mergington.edu"),
            "Remove daniel@mergington.edu from Chess Club?"
        );
    }
}
