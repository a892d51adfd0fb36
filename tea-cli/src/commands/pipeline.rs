//! Pipeline command handler
//!
//! Decodes a pipeline descriptor and shows its steps and works in order.

use anyhow::Result;
use colored::*;
use tea_core::domain::pipeline::{PipelineEntity, Work};
use tea_yaml::decode_pipeline;

use super::{SourceArgs, format_params, print_json};
use crate::config::{Config, OutputFormat};
use crate::input;

pub fn handle_pipeline_command(args: &SourceArgs, config: &Config) -> Result<()> {
    let reader = input::open(&args.path)?;
    let pipeline = decode_pipeline(reader).inspect_err(|e| {
        tracing::debug!("Pipeline decode failed ({}): {}", e.category(), e);
    })?;

    tracing::info!(
        "Decoded pipeline {} with {} step(s) and {} work(s)",
        pipeline.name,
        pipeline.steps.len(),
        pipeline.works().count()
    );

    show_pipeline(&pipeline, config)
}

pub(super) fn show_pipeline(pipeline: &PipelineEntity, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Text => {
            println!("{}", render_pipeline(pipeline));
            Ok(())
        }
        OutputFormat::Json => print_json(pipeline),
    }
}

/// Render detailed pipeline information
pub(super) fn render_pipeline(pipeline: &PipelineEntity) -> String {
    let mut lines = vec![
        "Pipeline Details:".bold().to_string(),
        format!("  Name:  {}", pipeline.name.bold()),
    ];

    if !pipeline.nodes.is_empty() {
        let nodes = pipeline
            .nodes
            .iter()
            .map(|node| format!("{} ({})", node.name, node.socket))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("  Nodes: {}", nodes));
    }

    for step in &pipeline.steps {
        lines.push(String::new());
        lines.push(format!("  {} {}", "▸".cyan(), step.name.bold()));
        if step.works.is_empty() {
            lines.push(format!("    {}", "(no works)".dimmed()));
        }
        for work in &step.works {
            render_work(work, &mut lines);
        }
    }

    lines.join("\n")
}

fn render_work(work: &Work, lines: &mut Vec<String>) {
    let state = if work.is_serving() {
        "serving".green()
    } else {
        "done".dimmed()
    };
    lines.push(format!(
        "    - {} [{}] {}",
        work.name.cyan(),
        work.template,
        state
    ));

    if !work.description.is_empty() {
        lines.push(format!("        {}", work.description.dimmed()));
    }
    if !work.parameters.is_empty() {
        lines.push(format!("        Params:  {}", format_params(&work.parameters)));
    }

    let deployment = &work.deployment;
    if !deployment.client.is_empty() || !deployment.server.is_empty() {
        lines.push(format!(
            "        Deploy:  client={} server={}",
            deployment.client, deployment.server
        ));
    }

    let dependencies = work.dependency_names().collect::<Vec<_>>();
    if !dependencies.is_empty() {
        lines.push(format!("        Depends: {}", dependencies.join(", ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tea_yaml::decode_pipeline_str;

    const PIPELINE_YAML: &str = r#"
name: default
kind: pipeline
nodes:
  - name: xingye bank
    socket: 1.2.3.4:7788
steps:
  - name: step1
    works:
      - template: tmp1 name1
        name: task1/1
        description: a simple task
        parameters:
          - name: v1
            type: int
        deployment:
          client: electricity company
          server: xingye bank
        serving: true
  - name: step2
    works:
      - template: tmp1 name4
        name: task2/2
        dependencies:
          - dependency: task1/1
  - name: step3
"#;

    #[test]
    fn test_render_pipeline() {
        colored::control::set_override(false);
        let pipeline = decode_pipeline_str(PIPELINE_YAML).unwrap();

        let text = render_pipeline(&pipeline);
        assert!(text.contains("  Name:  default"));
        assert!(text.contains("  Nodes: xingye bank (1.2.3.4:7788)"));
        assert!(text.contains("    - task1/1 [tmp1 name1] serving"));
        assert!(text.contains("        Params:  v1: int"));
        assert!(text.contains("        Deploy:  client=electricity company server=xingye bank"));
        assert!(text.contains("    - task2/2 [tmp1 name4] done"));
        assert!(text.contains("        Depends: task1/1"));
        assert!(text.contains("(no works)"));
    }

    #[test]
    fn test_render_keeps_step_order() {
        colored::control::set_override(false);
        let pipeline = decode_pipeline_str(PIPELINE_YAML).unwrap();

        let text = render_pipeline(&pipeline);
        let positions: Vec<_> = ["▸ step1", "▸ step2", "▸ step3"]
            .iter()
            .map(|step| text.find(step).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
