use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    /// Renders a textarea instead of an input.
    #[prop_or_default]
    pub multiline: bool,
    /// Validation message shown under the field.
    #[prop_or_default]
    pub error: Option<String>,
}

/// Labelled input with an inline validation message.
#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let input_class = classes!(
        if props.multiline { "textarea" } else { "input" },
        "w-full",
        props.error.is_some().then_some(if props.multiline {
            "textarea-error"
        } else {
            "input-error"
        })
    );

    let control = if props.multiline {
        let on_change = props.on_change.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                on_change.emit(area.value());
            }
        });
        html! {
            <textarea
                id={props.id.clone()}
                class={input_class}
                rows="4"
                value={props.value.clone()}
                {oninput}
            />
        }
    } else {
        let on_change = props.on_change.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(input.value());
            }
        });
        html! {
            <input
                id={props.id.clone()}
                class={input_class}
                type={props.input_type.clone()}
                value={props.value.clone()}
                {oninput}
            />
        }
    };

    html! {
        <fieldset class="fieldset">
            <label class="fieldset-legend" for={props.id.clone()}>{ props.label.clone() }</label>
            { control }
            if let Some(message) = props.error.clone() {
                <p class="label text-error">{ message }</p>
            }
        </fieldset>
    }
}
