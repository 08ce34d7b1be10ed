//! Profile icon with its dropdown.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, MouseEvent, Node};
use yew::prelude::*;

/// Document-level click listener that lives only as long as the menu is open.
struct OutsideClick {
    target: EventTarget,
    callback: Closure<dyn Fn(MouseEvent)>,
}

impl OutsideClick {
    fn attach(
        container: impl Fn() -> Option<Node> + 'static,
        on_outside: Callback<()>,
    ) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let callback = Closure::wrap(Box::new(move |event: MouseEvent| {
            let inside = match (container(), event.target()) {
                (Some(node), Some(target)) => node.contains(target.dyn_ref::<Node>()),
                _ => false,
            };
            if !inside {
                on_outside.emit(());
            }
        }) as Box<dyn Fn(MouseEvent)>);

        let target: EventTarget = document.into();
        target
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { target, callback })
    }
}

impl Drop for OutsideClick {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("click", self.callback.as_ref().unchecked_ref());
    }
}

#[derive(Properties, PartialEq)]
pub struct ProfileMenuProps {
    pub on_logout: Callback<()>,
}

#[function_component(ProfileMenu)]
pub fn profile_menu(props: &ProfileMenuProps) -> Html {
    let open = use_state(|| false);
    let container = use_node_ref();

    let is_open = *open;
    {
        let open = open.clone();
        let container = container.clone();
        use_effect_with_deps(
            move |is_open: &bool| {
                let listener = if *is_open {
                    OutsideClick::attach(
                        move || container.get(),
                        Callback::from(move |_| open.set(false)),
                    )
                } else {
                    None
                };
                move || drop(listener)
            },
            is_open,
        );
    }

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <div class="profile-container" ref={container}>
            <div class="profile-icon" onclick={toggle}>
                <img src="/profile.jpg" alt="Profile" />
            </div>

            if is_open {
                <div class="dropdown-menu">
                    <button class="dropdown-item">{"Profile"}</button>
                    <button class="dropdown-item">{"Settings"}</button>
                    <button class="dropdown-item logout" onclick={on_logout}>{"Logout"}</button>
                </div>
            }
        </div>
    }
}
