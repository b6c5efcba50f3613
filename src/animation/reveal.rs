use crate::viewport::use_in_view;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
    Right,
    /// Scale up in place.
    Zoom,
    /// Plain fade.
    None,
}

impl RevealFrom {
    fn class(self) -> &'static str {
        match self {
            RevealFrom::Below => "reveal-up",
            RevealFrom::Left => "reveal-left",
            RevealFrom::Right => "reveal-right",
            RevealFrom::Zoom => "reveal-zoom",
            RevealFrom::None => "reveal-fade",
        }
    }
}

/// Stagger used by grids: item `i` waits `i * STAGGER_MS`.
pub const STAGGER_MS: u32 = 100;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub from: RevealFrom,
    #[prop_or_default]
    pub delay_ms: u32,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    let class = classes!(
        "reveal",
        props.from.class(),
        in_view.then_some("visible"),
        props.class.clone()
    );
    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div ref={node} {class} {style}>
            { for props.children.iter() }
        </div>
    }
}
