pub mod actor_files;
pub mod example;
pub mod types;

use actorgen_core::error::GeneratorError;
use minijinja::{Environment, Value};

pub const TYPES_TEMPLATE: &str = "types.go.j2";
pub const API_TEMPLATE: &str = "api.go.j2";
pub const FACTORY_TEMPLATE: &str = "factory.go.j2";
pub const IMPL_TEMPLATE: &str = "impl.go.j2";
pub const MAIN_TEMPLATE: &str = "main.go.j2";
pub const GO_MOD_TEMPLATE: &str = "go.mod.j2";

/// Build the template environment with every Go template registered.
pub fn environment() -> Result<Environment<'static>, GeneratorError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_filter("go_doc", go_doc);

    let templates = [
        (TYPES_TEMPLATE, include_str!("../../templates/types.go.j2")),
        (API_TEMPLATE, include_str!("../../templates/api.go.j2")),
        (FACTORY_TEMPLATE, include_str!("../../templates/factory.go.j2")),
        (IMPL_TEMPLATE, include_str!("../../templates/impl.go.j2")),
        (MAIN_TEMPLATE, include_str!("../../templates/main.go.j2")),
        (GO_MOD_TEMPLATE, include_str!("../../templates/go.mod.j2")),
    ];
    for (name, source) in templates {
        env.add_template(name, source).map_err(template_error)?;
    }
    Ok(env)
}

/// Render a registered template with the given context.
pub fn render(env: &Environment<'_>, name: &str, ctx: Value) -> Result<String, GeneratorError> {
    env.get_template(name)
        .and_then(|tmpl| tmpl.render(ctx))
        .map_err(template_error)
}

fn template_error(err: minijinja::Error) -> GeneratorError {
    GeneratorError::Template(err.to_string())
}

/// Turn text into `//` comment lines, indented by `indent` tabs.
fn go_doc(value: String, indent: Option<usize>) -> String {
    let prefix = "\t".repeat(indent.unwrap_or(0));
    value
        .lines()
        .map(str::trim_end)
        .map(|line| {
            if line.is_empty() {
                format!("{prefix}//")
            } else {
                format!("{prefix}// {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_doc() {
        assert_eq!(go_doc("Pet A pet".into(), None), "// Pet A pet");
        assert_eq!(
            go_doc("First\n\nThird".into(), Some(1)),
            "\t// First\n\t//\n\t// Third"
        );
    }

    #[test]
    fn test_environment_loads_all_templates() {
        let env = environment().unwrap();
        for name in [
            TYPES_TEMPLATE,
            API_TEMPLATE,
            FACTORY_TEMPLATE,
            IMPL_TEMPLATE,
            MAIN_TEMPLATE,
            GO_MOD_TEMPLATE,
        ] {
            assert!(env.get_template(name).is_ok(), "{name}");
        }
    }
}
