//! Minimal React component stubs appended after a generated module.

use crate::template::naming::uncapitalize;

/// How a query component gets at its data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QueryComponentShape {
    Lazy,
    Preloaded,
}

pub fn fragment_component(module_name: &str, on_type: &str) -> String {
    let prop = uncapitalize(on_type);
    format!(
        "\n\n\n@react.component\n\
        let make = (~{prop}) => {{\n  \
        let {prop} = {module_name}.use({prop})\n\
        \n  \
        React.null\n\
        }}"
    )
}

pub fn query_component(module_name: &str, shape: QueryComponentShape) -> String {
    let (params, data_binding) = match shape {
        QueryComponentShape::Lazy => (
            "",
            format!("let data = {module_name}.use(~variables=(), ())"),
        ),
        QueryComponentShape::Preloaded => (
            "~queryRef",
            format!("let data = {module_name}.usePreloaded(~queryRef, ())"),
        ),
    };
    format!(
        "\n\n\n@react.component\n\
        let make = ({params}) => {{\n  \
        {data_binding}\n\
        \n  \
        React.null\n\
        }}"
    )
}

pub fn mutation_component(module_name: &str) -> String {
    format!(
        "\n\n\n@react.component\n\
        let make = () => {{\n  \
        let (mutate, isMutating) = {module_name}.use()\n\
        \n  \
        React.null\n\
        }}"
    )
}

pub fn subscription_component(module_name: &str) -> String {
    format!(
        "\n\n\n@react.component\n\
        let make = () => {{\n  \
        let environment = ReasonRelay.useEnvironmentFromContext()\n\
        \n  \
        React.useEffect0(() => {{\n    \
        let subscription = {module_name}.subscribe(\n      \
        ~environment,\n      \
        ~variables=(),\n      \
        (),\n    \
        )\n\
        \n    \
        Some(() => ReasonRelay.Disposable.dispose(subscription))\n  \
        }})\n\
        \n  \
        React.null\n\
        }}"
    )
}
