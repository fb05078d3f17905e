use dioxus::prelude::*;

#[component]
pub fn FieldErrors(messages: Vec<String>) -> Element {
    rsx!(
        for message in messages.iter() {
            p { class: "text-error text-sm", "{message}" }
        }
    )
}
