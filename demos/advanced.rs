//! Builds three small networks of the same six nodes, configures the
//! display, and opens the result in the browser.
//!
//! Run with `cargo run --example advanced`.

use anyhow::Result;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use webloom::{Document, Label, LabelKind, LabelSet, LayerOptions};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("handlebars=off,debug"))
        .without_time()
        .init();

    // number of nodes
    let n = 6usize;

    let mut web = Document::new("webloom");

    // canvas size, link length, charge and gravity for the layout
    web.display.width = Some(200);
    web.display.height = Some(200);
    web.display.link_length = Some(20.0);
    web.display.charge = Some(200.0);
    web.display.gravity = Some(0.3);

    web.display.name = Some("Advanced".to_string());

    // show the snake network first
    web.display.network_name = Some("snake".to_string());

    // color nodes by the hunger label, size them by isHead
    web.display.color_by = Some("hunger".to_string());
    web.display.size_by = Some("isHead".to_string());

    // default palette for non-scalar labels
    web.display.color_palette = Some("Set2".to_string());

    // invert the sizing of isHead: false is big, true is small
    web.display.size_invert_binary = Some(true);

    // a snake: a path over nodes 1..=6
    let snake_edges: Vec<[usize; 2]> = (0..n - 1).map(|i| [i + 1, i + 2]).collect();
    let mut snake_labels = LabelSet::new();
    // one entry per node; bools read as a binary label by the client
    snake_labels.insert(
        "isHead",
        Label::new(vec![false, false, false, false, false, true]),
    );
    snake_labels.insert(
        "slithering",
        Label::new(vec![1, 2, 2, 3, 1, 2]).with_kind(LabelKind::Categorical),
    );
    web.networks.get_or_create("snake").add_layer_with(
        snake_edges,
        LayerOptions {
            labels: Some(snake_labels),
            ..Default::default()
        },
    )?;

    // a starfish: node 0 connected to everyone else
    let starfish_edges: Vec<[usize; 2]> = (0..n - 1).map(|i| [0, i + 1]).collect();
    let mut starfish_labels = LabelSet::new();
    // string values read as categorical, numbers as scalar
    starfish_labels.insert(
        "texture",
        Label::new(vec!["gooey", "fishy", "chewy", "crunchy", "chewy", "gooey"]),
    );
    starfish_labels.insert("power", Label::new(vec![1.0, 3.0, 3.8, 0.2, 1.0, 3.1415]));
    web.networks.get_or_create("starfish").add_layer_with(
        starfish_edges,
        LayerOptions {
            labels: Some(starfish_labels),
            ..Default::default()
        },
    )?;

    // name the nodes
    web.display.node_names = Some(
        ["dane", "sebastian", "manny", "brock", "ted", "donnie"]
            .into_iter()
            .map(String::from)
            .collect(),
    );

    // a top-level label, shared by every network: nodes in the snake and
    // in the starfish both carry a hunger value
    let hunger = web.display.labels.get_or_create("hunger");
    hunger.kind = Some(LabelKind::Scalar);
    hunger.values = Some(vec![
        json!(4),
        json!(9),
        json!(2),
        json!(4),
        json!(12.1),
        json!(5),
    ]);

    // this snake has only 4 nodes, and the edges alone cannot show that
    let small_snake_edges: Vec<[usize; 2]> = (0..n - 3).map(|i| [i, i + 1]).collect();
    web.networks.get_or_create("small_snake").add_layer_with(
        small_snake_edges,
        LayerOptions {
            nodes: Some(4),
            ..Default::default()
        },
    )?;

    web.draw()?;
    Ok(())
}
