//! Modal dialog with optional cancel and confirm actions.

use leptos::prelude::*;

#[component]
pub fn Modal(
    /// Heading of the dialog.
    #[prop(into)]
    title: String,
    /// Label of the confirm button.
    #[prop(into)]
    confirm_text: String,
    #[prop(default = true)] can_cancel: bool,
    #[prop(default = true)] can_confirm: bool,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_confirm: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal">
            <header class="modal__header">
                <h1>{title}</h1>
            </header>
            <section class="modal__content">{children()}</section>
            <section class="modal__actions">
                {can_cancel
                    .then(|| {
                        view! {
                            <button class="btn" on:click=move |_| on_cancel.run(())>
                                "Cancel"
                            </button>
                        }
                    })}
                {can_confirm
                    .then(|| {
                        view! {
                            <button class="btn" on:click=move |_| on_confirm.run(())>
                                {confirm_text}
                            </button>
                        }
                    })}
            </section>
        </div>
    }
}
