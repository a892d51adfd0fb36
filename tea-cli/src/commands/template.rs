//! Template command handler
//!
//! Decodes a template descriptor and shows it.

use anyhow::Result;
use colored::*;
use tea_core::domain::template::{Classification, TemplateEntity};
use tea_yaml::decode_template;

use super::{SourceArgs, format_params, print_json};
use crate::config::{Config, OutputFormat};
use crate::input;

pub fn handle_template_command(args: &SourceArgs, config: &Config) -> Result<()> {
    let reader = input::open(&args.path)?;
    let template = decode_template(reader).inspect_err(|e| {
        tracing::debug!("Template decode failed ({}): {}", e.category(), e);
    })?;

    tracing::info!(
        "Decoded template {} with {} classification(s)",
        template.name,
        template.classification.len()
    );

    show_template(&template, config)
}

pub(super) fn show_template(template: &TemplateEntity, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Text => {
            println!("{}", render_template(template));
            Ok(())
        }
        OutputFormat::Json => print_json(template),
    }
}

/// Render detailed template information
pub(super) fn render_template(template: &TemplateEntity) -> String {
    let mut lines = vec![
        "Template Details:".bold().to_string(),
        format!("  Name:  {}", template.name.bold()),
        format!(
            "  Roles: {}",
            template
                .roles()
                .map(|role| role.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    ];

    for classification in &template.classification {
        lines.push(String::new());
        render_classification(classification, &mut lines);
    }

    lines.join("\n")
}

fn render_classification(classification: &Classification, lines: &mut Vec<String>) {
    lines.push(format!("  {} {}", "▸".cyan(), classification.role.as_str().bold()));

    let task = &classification.task;
    if !task.cmd.is_empty() {
        lines.push("    Task:".to_string());
        for cmd in &task.cmd {
            lines.push(format!("      $ {}", cmd));
        }
    }
    if !task.args.is_empty() {
        lines.push(format!("    Args:    {}", format_params(&task.args).dimmed()));
    }

    let service = &classification.service;
    if !service.is_empty() {
        lines.push("    Service:".to_string());
        for entry in &service.entry {
            lines.push(format!("      $ {}", entry));
        }
        for api in &service.api {
            lines.push(format!(
                "      {} {} ({}) -> ({})",
                api.name.cyan(),
                api.url.dimmed(),
                format_params(&api.args),
                format_params(&api.returns)
            ));
        }
    }

    if !classification.nodes.is_empty() {
        let nodes = classification
            .nodes
            .iter()
            .map(|node| format!("{} ({})", node.name, node.socket))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("    Nodes:   {}", nodes));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tea_yaml::decode_template_str;

    const TEMPLATE_YAML: &str = r#"
name: evaluate
kind: template
classification:
  - type: client
    task:
      args:
        - name: EmployeeInfoPath
          type: string
      cmd:
        - python getEmployeeInfo.py EmployeeInfoPath
    service:
      entry:
        - java -jar evaluation.jar
      api:
        - name: getQualifiedEmployee
          url: /api/getQualifiedEmployee
          args:
            - name: database
              type: string
          return:
            - name: employeeId
              type: list[int]
    nodes:
      - name: XingYe
        socket: 121.192.123.66:8083
  - type: server
    task:
      cmd:
        - python getEvaluateModel.py ModelPath TargetPath
"#;

    #[test]
    fn test_render_template() {
        colored::control::set_override(false);
        let template = decode_template_str(TEMPLATE_YAML).unwrap();

        let text = render_template(&template);
        assert!(text.contains("  Name:  evaluate"));
        assert!(text.contains("  Roles: client, server"));
        assert!(text.contains("      $ python getEmployeeInfo.py EmployeeInfoPath"));
        assert!(text.contains("    Args:    EmployeeInfoPath: string"));
        assert!(text.contains(
            "      getQualifiedEmployee /api/getQualifiedEmployee (database: string) -> (employeeId: list[int])"
        ));
        assert!(text.contains("    Nodes:   XingYe (121.192.123.66:8083)"));
    }

    #[test]
    fn test_render_keeps_role_order() {
        colored::control::set_override(false);
        let template = decode_template_str(TEMPLATE_YAML).unwrap();

        let text = render_template(&template);
        let client = text.find("▸ client").unwrap();
        let server = text.find("▸ server").unwrap();
        assert!(client < server);
        assert_eq!(text.matches("Service:").count(), 1);
    }
}
