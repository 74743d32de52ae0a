use hmsync::reveal::RevealLatch;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::browser::viewport_height;

/// Wrapper that fades and slides its children in the first time they scroll
/// into view.
#[component]
pub fn Reveal(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let latch = RwSignal::new(RevealLatch::default());

    let check = move || {
        if latch.with_untracked(RevealLatch::is_revealed) {
            return;
        }
        let (Some(el), Some(vh)) = (node.get_untracked(), viewport_height()) else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let mut next = latch.get_untracked();
        if next.observe(rect.top(), rect.bottom(), vh) {
            latch.set(next);
        }
    };

    // sections already on screen at load reveal without a scroll
    Effect::new(move |_| {
        if node.get().is_some() {
            check();
        }
    });

    let on_scroll = window_event_listener(ev::scroll, move |_| check());
    let on_resize = window_event_listener(ev::resize, move |_| check());
    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
    });

    view! {
        <div node_ref=node class=class style=move || latch.with(RevealLatch::css)>
            {children()}
        </div>
    }
}
