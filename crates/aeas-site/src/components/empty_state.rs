use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EmptyTone {
    Loading,
    Neutral,
    Error,
}

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub message: AttrValue,
    #[prop_or(EmptyTone::Neutral)]
    pub tone: EmptyTone,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    let (class, role) = match props.tone {
        EmptyTone::Loading => ("loading", "status"),
        EmptyTone::Neutral => ("neutral", "note"),
        EmptyTone::Error => ("error", "alert"),
    };
    html! {
        <div class={classes!("empty-state", class)} role={role} aria-busy={(props.tone == EmptyTone::Loading).to_string()}>
            if props.tone == EmptyTone::Loading {
                <span class="spinner" aria-hidden="true"></span>
            }
            <p>{props.message.clone()}</p>
            { for props.children.iter() }
        </div>
    }
}
