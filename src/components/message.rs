use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MessageProps {
    /// "success", "danger" or "info" - mapped onto a message-<variant> class.
    #[prop_or(AttrValue::Static("info"))]
    pub variant: AttrValue,
    pub children: Children,
}

/// Alert banner used for success and failure notices on both pages.
#[function_component(Message)]
pub fn message(props: &MessageProps) -> Html {
    html! {
        <div class={classes!("message", format!("message-{}", props.variant))}>
            { props.children.clone() }
        </div>
    }
}
