//! `sysconf command` command
//!
//! Binds placeholders in one resolved template and prints the final
//! argument list.

use anyhow::{Context, Result};

use crate::cli::{CommandArgs, TemplateArg};
use sysconf::{CommandTemplate, Placeholder, TemplateKind};

pub fn execute(args: CommandArgs) -> Result<()> {
    let config = super::resolve(&args.select)?;

    let kind = match args.template {
        TemplateArg::Compile => TemplateKind::Compile,
        TemplateArg::Link => TemplateKind::LinkExe,
        TemplateArg::LinkLib => TemplateKind::LinkLib,
        TemplateArg::Resource => TemplateKind::Resource,
    };
    let template = config.template(kind).map_err(super::with_help)?;

    let bindings = parse_bindings(&args.bindings)?;
    let rendered = bind_all(template, &bindings)
        .render()
        .map_err(super::with_help)?;

    if args.json {
        let json = serde_json::to_string(&rendered).context("failed to serialize arguments")?;
        println!("{}", json);
    } else {
        println!("{}", rendered.join(" "));
    }

    Ok(())
}

/// Parse `name=value` pairs, grouping repeated names in order.
fn parse_bindings(raw: &[String]) -> Result<Vec<(Placeholder, Vec<String>)>> {
    let mut bindings: Vec<(Placeholder, Vec<String>)> = Vec::new();

    for entry in raw {
        let (name, value) = entry.split_once('=').ok_or_else(|| {
            anyhow::anyhow!(
                "invalid binding `{}`\n\
                 help: use `--set name=value`",
                entry
            )
        })?;

        let placeholder = Placeholder::from_name(name.trim()).ok_or_else(|| {
            super::with_help(sysconf::ConfigError::UnknownPlaceholder {
                token: name.to_string(),
            })
        })?;

        let index = match bindings.iter().position(|(p, _)| *p == placeholder) {
            Some(i) => i,
            None => {
                bindings.push((placeholder, Vec::new()));
                bindings.len() - 1
            }
        };
        if !value.is_empty() {
            bindings[index].1.push(value.to_string());
        }
    }

    Ok(bindings)
}

fn bind_all(
    template: &CommandTemplate,
    bindings: &[(Placeholder, Vec<String>)],
) -> CommandTemplate {
    bindings
        .iter()
        .fold(template.clone(), |tpl, (placeholder, values)| {
            tpl.bind(*placeholder, values.as_slice())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bindings_groups_values() {
        let raw = vec![
            "obj=a.o".to_string(),
            "bin=mrinfo".to_string(),
            "obj=b.o".to_string(),
            "gtk=".to_string(),
        ];
        let bindings = parse_bindings(&raw).unwrap();
        assert_eq!(
            bindings,
            vec![
                (Placeholder::Obj, vec!["a.o".to_string(), "b.o".to_string()]),
                (Placeholder::Bin, vec!["mrinfo".to_string()]),
                (Placeholder::Gtk, vec![]),
            ]
        );
    }

    #[test]
    fn test_parse_bindings_rejects_unknown() {
        let err = parse_bindings(&["nope=1".to_string()]).unwrap_err();
        assert!(err.to_string().contains("unknown placeholder `nope`"));
    }

    #[test]
    fn test_parse_bindings_requires_equals() {
        assert!(parse_bindings(&["src".to_string()]).is_err());
    }
}
