use dioxus::prelude::*;

use crate::model::flash::FlashMessage;

/// Flash messages drained for this render, oldest first.
#[component]
pub fn Messages(messages: Vec<FlashMessage>) -> Element {
    rsx!(
        if !messages.is_empty() {
            div { class: "flex flex-col gap-2 w-full max-w-3xl",
                for message in messages.iter() {
                    div {
                        role: "alert",
                        class: format!("alert alert-{}", message.level.as_str()),
                        span { "{message.text}" }
                    }
                }
            }
        }
    )
}
