//! Transient notice shown in the corner of a page

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const TOAST_DURATION_MS: u32 = 3000;

/// Show `message` and hide it again after [`TOAST_DURATION_MS`],
/// unless it was replaced in the meantime.
pub fn show_toast(toast: RwSignal<Option<String>>, message: impl Into<String>) {
    let message = message.into();
    toast.set(Some(message.clone()));
    spawn_local(async move {
        TimeoutFuture::new(TOAST_DURATION_MS).await;
        let still_shown = toast
            .try_with_untracked(|current| current.as_deref() == Some(message.as_str()))
            .unwrap_or(false);
        if still_shown {
            let _ = toast.try_set(None);
        }
    });
}

#[component]
pub fn Toast(toast: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || toast.get().map(|message| view! {
            <div class="toast" role="alert">
                <span class="toast__text">{message}</span>
                <button class="toast__close" on:click=move |_| toast.set(None)>"×"</button>
            </div>
        })}
    }
}
