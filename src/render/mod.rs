//! HTML rendering of the final graph snapshot
//!
//! Produces a standalone vis-network page from an embedded template: nodes
//! and edges are serialized to JSON and spliced into the template together
//! with the canvas size, menu toggles, and render-engine options.

use crate::config::Config;
use crate::graph::DisplayGraph;
use rust_embed::RustEmbed;
use serde_json::json;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(RustEmbed)]
#[folder = "src/render/static/"]
struct Assets;

/// Render errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Broken embedded template
    #[error("Template error: {0}")]
    Template(String),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Canvas size, menu toggles, and engine options for the rendered page
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Canvas height (CSS size)
    pub height: String,
    /// Canvas width (CSS size)
    pub width: String,
    /// Show the label-filter input
    pub filter_menu: bool,
    /// Show the node-select dropdown
    pub select_menu: bool,
    /// Show the engine configuration panel
    pub show_buttons: bool,
    /// Engine options as a JSON string, replacing the defaults entirely
    pub options_json: Option<String>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            height: "1000px".to_string(),
            width: "1500px".to_string(),
            filter_menu: true,
            select_menu: true,
            show_buttons: true,
            options_json: None,
        }
    }
}

impl RenderSettings {
    /// Derive render settings from the loaded configuration
    pub fn from_config(config: &Config) -> RenderResult<Self> {
        Ok(RenderSettings {
            height: config.height_px.clone(),
            width: config.width_px.clone(),
            filter_menu: config.filter_menu,
            select_menu: config.select_menu,
            show_buttons: config.show_buttons,
            options_json: config.render_options_json()?,
        })
    }

    /// Engine options JSON for the page: the configured options verbatim,
    /// or the defaults (continuous edge smoothing, configure panel per
    /// `show_buttons`)
    fn options(&self) -> RenderResult<String> {
        if let Some(raw) = &self.options_json {
            return Ok(raw.clone());
        }
        let options = json!({
            "edges": { "smooth": { "enabled": true, "type": "continuous" } },
            "configure": { "enabled": self.show_buttons },
        });
        Ok(serde_json::to_string(&options)?)
    }
}

/// Render the graph snapshot into a standalone HTML page
pub fn render_html(graph: &DisplayGraph, settings: &RenderSettings) -> RenderResult<String> {
    let template = Assets::get("template.html")
        .ok_or_else(|| RenderError::Template("template.html missing".to_string()))?;
    let template = std::str::from_utf8(template.data.as_ref())
        .map_err(|e| RenderError::Template(e.to_string()))?;

    let page = template
        .replace("__WIDTH__", &settings.width)
        .replace("__HEIGHT__", &settings.height)
        .replace("__NODES__", &serde_json::to_string(graph.nodes())?)
        .replace("__EDGES__", &serde_json::to_string(graph.edges())?)
        .replace("__OPTIONS__", &settings.options()?)
        .replace("__SELECT_MENU__", if settings.select_menu { "true" } else { "false" })
        .replace("__FILTER_MENU__", if settings.filter_menu { "true" } else { "false" });

    Ok(page)
}

/// Render the graph and write the artifact to disk
pub fn write_artifact(
    path: &Path,
    graph: &DisplayGraph,
    settings: &RenderSettings,
) -> RenderResult<()> {
    let page = render_html(graph, settings)?;
    std::fs::write(path, page)?;
    info!(path = %path.display(), "wrote rendered graph");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{LabelContext, PrefixTable};
    use crate::rdf::{NamedNode, RdfPredicate, Triple};

    fn sample_graph() -> DisplayGraph {
        let triples = vec![Triple::new(
            NamedNode::new("http://e.org/a").unwrap().into(),
            RdfPredicate::new("http://e.org/p").unwrap(),
            NamedNode::new("http://e.org/b").unwrap().into(),
        )];
        let prefixes = PrefixTable::new();
        let mut ctx = LabelContext::new();
        DisplayGraph::from_triples(&triples, &[], &prefixes, &mut ctx)
    }

    #[test]
    fn test_render_injects_nodes_and_edges() {
        let graph = sample_graph();
        let page = render_html(&graph, &RenderSettings::default()).unwrap();

        assert!(page.contains(r#""label":"http://e.org/a""#));
        assert!(page.contains(r#""from":0"#));
        assert!(page.contains(r#""to":1"#));
        assert!(!page.contains("__NODES__"));
        assert!(!page.contains("__OPTIONS__"));
    }

    #[test]
    fn test_render_applies_canvas_size() {
        let graph = sample_graph();
        let settings = RenderSettings {
            height: "600px".to_string(),
            width: "800px".to_string(),
            ..RenderSettings::default()
        };
        let page = render_html(&graph, &settings).unwrap();

        assert!(page.contains("height: 600px"));
        assert!(page.contains("width: 800px"));
    }

    #[test]
    fn test_default_options_include_continuous_smoothing() {
        let graph = sample_graph();
        let page = render_html(&graph, &RenderSettings::default()).unwrap();
        assert!(page.contains(r#""type":"continuous""#));
    }

    #[test]
    fn test_custom_options_replace_defaults() {
        let graph = sample_graph();
        let settings = RenderSettings {
            options_json: Some(r#"{"physics":{"enabled":false}}"#.to_string()),
            ..RenderSettings::default()
        };
        let page = render_html(&graph, &settings).unwrap();

        assert!(page.contains(r#"{"physics":{"enabled":false}}"#));
        assert!(!page.contains("continuous"));
    }

    #[test]
    fn test_menu_toggles() {
        let graph = sample_graph();
        let settings = RenderSettings {
            select_menu: false,
            filter_menu: true,
            ..RenderSettings::default()
        };
        let page = render_html(&graph, &settings).unwrap();

        assert!(page.contains("const showSelectMenu = false;"));
        assert!(page.contains("const showFilterMenu = true;"));
    }
}
