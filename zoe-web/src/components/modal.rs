use leptos::prelude::*;
use shared::content::Glyph;

use super::Icon;

/// Overlay dialog. Clicking the backdrop or the close button calls `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let class = StoredValue::new(format!("modal-content {}", class));
    let children = StoredValue::new(children);

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class=class.get_value() on:click=|ev| ev.stop_propagation()>
                    <button
                        class="modal-close"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        <Icon glyph=Glyph::X/>
                    </button>
                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}
