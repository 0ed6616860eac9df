use yew::prelude::*;
use gloo_timers::callback::Timeout;
use web_sys::window;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Fades its children up once mounted.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let visible = use_state(prefers_reduced_motion);

    {
        let visible = visible.clone();
        let delay_ms = props.delay_ms;
        use_effect_with_deps(
            move |_| {
                let timeout = (!*visible).then(|| Timeout::new(delay_ms, move || visible.set(true)));
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <div class={classes!("reveal", visible.then(|| "revealed"), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
