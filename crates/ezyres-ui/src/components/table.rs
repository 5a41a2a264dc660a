//! Plain data table with a header row.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TableProps {
    #[prop_or_default]
    pub(crate) headers: Vec<AttrValue>,
    #[prop_or_default]
    pub(crate) rows: Vec<Html>,
    #[prop_or_default]
    pub(crate) cell_class: Classes,
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(Table)]
pub(crate) fn table(props: &TableProps) -> Html {
    let head_class = classes!(
        "text-left",
        "font-medium",
        "uppercase",
        "tracking-wider",
        "text-gray-500",
        props.cell_class.clone()
    );
    html! {
        <div class="overflow-x-auto">
            <table class={classes!("min-w-full", "divide-y", "divide-gray-200", props.class.clone())}>
                {if props.headers.is_empty() {
                    html! {}
                } else {
                    html! {
                        <thead class="bg-gray-50">
                            <tr>
                                {for props.headers.iter().map(|head| html! { <th class={head_class.clone()}>{head.clone()}</th> })}
                            </tr>
                        </thead>
                    }
                }}
                <tbody class="bg-white divide-y divide-gray-100">
                    {for props.rows.iter().cloned()}
                </tbody>
            </table>
        </div>
    }
}
